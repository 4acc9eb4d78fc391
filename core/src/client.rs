//! Stateless HTTP request builder and response parser for the booking API.
//!
//! # Design
//! `BookingApi` holds a `base_url` and, once authentication has happened, the
//! session token. Each wire operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`; the round-trip happens elsewhere (see `transport`), which
//! keeps this layer deterministic and unit-testable.
//!
//! Every request except `/auth` carries `Content-Type: application/json` and
//! `Cookie: token=<token>`. Building such a request before a token exists is
//! an `AuthenticationFailed` error — there is no anonymous access path.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{AuthResponse, Booking, BookingSummary, CreatedBooking, Credentials};

/// Substituted when the caller leaves `firstname` empty on create.
pub const DEFAULT_FIRSTNAME: &str = "Test";
/// Substituted when the caller leaves `lastname` empty on create.
pub const DEFAULT_LASTNAME: &str = "User";

/// Request builder / response parser for the booking service.
///
/// Carries no connection state; the token set via [`set_token`] is the only
/// thing that changes after construction, and it changes exactly once.
///
/// [`set_token`]: BookingApi::set_token
#[derive(Debug, Clone)]
pub struct BookingApi {
    base_url: String,
    token: Option<String>,
}

impl BookingApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Pre-seeded token, for tests and callers that already authenticated.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Install the session token obtained from [`parse_auth`].
    ///
    /// [`parse_auth`]: BookingApi::parse_auth
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn build_auth(&self, credentials: &Credentials) -> Result<HttpRequest, ApiError> {
        let body = encode(credentials)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/auth", self.base_url),
            headers: vec![json_content_type()],
            body: Some(body),
        })
    }

    /// Extract the session token from the auth response.
    ///
    /// The live service signals bad credentials with a 2xx body that carries
    /// `reason` instead of `token`, so a missing token is an authentication
    /// failure even on HTTP 200.
    pub fn parse_auth(&self, response: HttpResponse) -> Result<String, ApiError> {
        if !is_success(response.status) {
            return Err(ApiError::AuthenticationFailed(format!(
                "HTTP {}: {}",
                response.status, response.body
            )));
        }
        let auth: AuthResponse =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;
        match auth.token {
            Some(token) => Ok(token),
            None => Err(ApiError::AuthenticationFailed(
                auth.reason.unwrap_or_else(|| "no token in response".to_string()),
            )),
        }
    }

    pub fn build_create_booking(&self, booking: &Booking) -> Result<HttpRequest, ApiError> {
        let mut payload = booking.clone();
        if payload.firstname.is_empty() {
            payload.firstname = DEFAULT_FIRSTNAME.to_string();
        }
        if payload.lastname.is_empty() {
            payload.lastname = DEFAULT_LASTNAME.to_string();
        }
        let body = encode(&payload)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/booking", self.base_url),
            headers: self.session_headers()?,
            body: Some(body),
        })
    }

    pub fn parse_create_booking(&self, response: HttpResponse) -> Result<CreatedBooking, ApiError> {
        // The live service answers 200, not 201, on create.
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn build_list_bookings(&self) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/booking", self.base_url),
            headers: self.session_headers()?,
            body: None,
        })
    }

    pub fn parse_list_bookings(&self, response: HttpResponse) -> Result<Vec<BookingSummary>, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn build_get_booking(&self, id: u32) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/booking/{id}", self.base_url),
            headers: self.session_headers()?,
            body: None,
        })
    }

    pub fn parse_get_booking(&self, response: HttpResponse) -> Result<Booking, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    /// Full replacement of the booking's fields (PUT, not PATCH).
    pub fn build_update_booking(&self, id: u32, booking: &Booking) -> Result<HttpRequest, ApiError> {
        let body = encode(booking)?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}/booking/{id}", self.base_url),
            headers: self.session_headers()?,
            body: Some(body),
        })
    }

    pub fn parse_update_booking(&self, response: HttpResponse) -> Result<Booking, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn build_delete_booking(&self, id: u32) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/booking/{id}", self.base_url),
            headers: self.session_headers()?,
            body: None,
        })
    }

    /// Delete has no meaningful body; the contract is the status code alone.
    /// The live service answers 201 on success.
    pub fn parse_delete_booking(&self, response: HttpResponse) -> Result<u16, ApiError> {
        if is_success(response.status) {
            return Ok(response.status);
        }
        if response.status == 404 {
            return Err(ApiError::NotFound);
        }
        Err(ApiError::RequestFailed {
            status: response.status,
            body: response.body,
        })
    }

    /// Headers attached to every booking operation. Fails when no session
    /// token has been established yet.
    fn session_headers(&self) -> Result<Vec<(String, String)>, ApiError> {
        let token = self.token.as_deref().ok_or_else(|| {
            ApiError::AuthenticationFailed("no session token established".to_string())
        })?;
        Ok(vec![
            json_content_type(),
            ("cookie".to_string(), format!("token={token}")),
        ])
    }
}

fn json_content_type() -> (String, String) {
    ("content-type".to_string(), "application/json".to_string())
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn encode<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<T: serde::de::DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::RequestFailed {
        status: response.status,
        body: response.body.clone(),
    })
}
