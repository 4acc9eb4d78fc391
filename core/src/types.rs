//! Domain DTOs for the booking service wire protocol.
//!
//! # Design
//! Field names match the wire exactly (`firstname`, `totalprice`, ...), so no
//! serde renames are needed. Dates are `chrono::NaiveDate`, which serializes
//! to the `YYYY-MM-DD` strings the service expects. The mock-booker crate
//! defines its own mirror of this schema; the integration suite catches any
//! drift between the two.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Check-in and check-out dates of a stay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingDates {
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
}

/// A booking record as the service stores it.
///
/// The server-assigned id is not part of this struct; it only appears in
/// [`CreatedBooking`] and [`BookingSummary`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Booking {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: i64,
    pub depositpaid: bool,
    pub bookingdates: BookingDates,
    pub additionalneeds: String,
}

/// Response to a successful create: the assigned id plus an echo of the
/// stored record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedBooking {
    pub bookingid: u32,
    pub booking: Booking,
}

/// Element of the id-only listing returned by `GET /booking`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingSummary {
    pub bookingid: u32,
}

/// Payload for `POST /auth`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of the auth response. The live service answers bad credentials with
/// `200 {"reason":"Bad credentials"}` rather than a 4xx, so both fields are
/// optional and the parse layer decides which case it is looking at.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}
