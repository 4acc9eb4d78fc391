//! Authenticated blocking session against the booking service.
//!
//! # Design
//! `BookingSession::open` performs the single `POST /auth` of the session's
//! lifetime and stores the token inside the `BookingApi`; after that the
//! session is read-only and every method is one synchronous round-trip. A
//! 401/403 later in the session is a hard `RequestFailed` — there is no
//! re-authentication.
//!
//! Logging goes through `tracing`; installing a subscriber is the harness's
//! job, never this crate's.

use tracing::{debug, info};

use crate::client::BookingApi;
use crate::config::Config;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport;
use crate::types::{Booking, CreatedBooking};

/// A live, authenticated client for the booking service.
#[derive(Debug)]
pub struct BookingSession {
    api: BookingApi,
    agent: ureq::Agent,
}

impl BookingSession {
    /// Authenticate once and return a ready session.
    ///
    /// Fails with `AuthenticationFailed` when the credentials are rejected or
    /// the auth body carries no token.
    pub fn open(config: &Config) -> Result<Self, ApiError> {
        let agent = transport::agent();
        let mut api = BookingApi::new(&config.base_url);
        let request = api.build_auth(&config.credentials())?;
        let token = api.parse_auth(transport::send(&agent, &request)?)?;
        info!(base_url = %config.base_url, "authentication successful, token received");
        api.set_token(token);
        Ok(Self { api, agent })
    }

    /// Create a booking and return the server-assigned id plus the stored
    /// record. Empty guest names are substituted with fixed defaults before
    /// the request goes out.
    pub fn create(&self, booking: &Booking) -> Result<CreatedBooking, ApiError> {
        let request = self.api.build_create_booking(booking)?;
        let created = self.api.parse_create_booking(self.send(&request)?)?;
        info!(bookingid = created.bookingid, "created booking");
        Ok(created)
    }

    /// The id-only listing of every booking the service currently holds.
    pub fn booking_ids(&self) -> Result<Vec<u32>, ApiError> {
        let request = self.api.build_list_bookings()?;
        let summaries = self.api.parse_list_bookings(self.send(&request)?)?;
        debug!(count = summaries.len(), "listed booking ids");
        Ok(summaries.into_iter().map(|s| s.bookingid).collect())
    }

    /// Fetch one booking; `NotFound` when the id does not exist.
    pub fn get(&self, id: u32) -> Result<Booking, ApiError> {
        let request = self.api.build_get_booking(id)?;
        let booking = self.api.parse_get_booking(self.send(&request)?)?;
        debug!(bookingid = id, "fetched booking");
        Ok(booking)
    }

    /// Replace every field of the booking (PUT) and return the stored result.
    pub fn update(&self, id: u32, booking: &Booking) -> Result<Booking, ApiError> {
        let request = self.api.build_update_booking(id, booking)?;
        let updated = self.api.parse_update_booking(self.send(&request)?)?;
        info!(bookingid = id, totalprice = updated.totalprice, "updated booking");
        Ok(updated)
    }

    /// Remove the booking and return the raw status code (201 on the live
    /// service); `NotFound` when the id does not exist.
    pub fn delete(&self, id: u32) -> Result<u16, ApiError> {
        let request = self.api.build_delete_booking(id)?;
        let status = self.api.parse_delete_booking(self.send(&request)?)?;
        info!(bookingid = id, status, "deleted booking");
        Ok(status)
    }

    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        transport::send(&self.agent, request)
    }
}
