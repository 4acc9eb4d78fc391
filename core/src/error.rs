//! Error types for the booking client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the suite frequently asserts
//! "this booking no longer exists" after a delete. Authentication problems
//! (rejected credentials, a token-less body, calls before a session token
//! exists) all land in `AuthenticationFailed` — there is no re-auth or
//! recovery path, so the caller only needs to know the session is unusable.

use thiserror::Error;

/// Errors surfaced by `BookingApi` and `BookingSession`.
///
/// The client never retries: every variant propagates straight to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The auth endpoint answered non-2xx, answered without a token, or an
    /// authenticated request was built before a token was obtained.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The server returned 404 — the requested booking does not exist.
    #[error("booking not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// The response body could not be decoded into the expected type.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The HTTP round-trip itself failed (connection refused, DNS, timeout).
    #[error("transport failed: {0}")]
    Transport(String),
}
