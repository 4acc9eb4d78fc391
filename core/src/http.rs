//! HTTP requests and responses described as plain data.
//!
//! # Design
//! `BookingApi` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network; the `transport` module (or a test) executes
//! the round-trip in between. Keeping the wire traffic as plain data makes
//! every request shape assertable in unit tests, including the auth cookie.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A single request against the booking service.
///
/// `url` is absolute (base URL already joined). Headers carry the JSON
/// content type and, on authenticated calls, the `Cookie: token=...` pair.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// The raw outcome of executing an `HttpRequest`.
///
/// Non-2xx statuses are data here, not errors; `BookingApi::parse_*` decides
/// what each status means for the operation at hand.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
