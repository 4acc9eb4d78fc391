//! Blocking client core for the Restful-Booker API.
//!
//! # Overview
//! Authentication plus booking CRUD against a fixed base URL. The crate is
//! layered so the wire logic stays testable without a network:
//!
//! - `BookingApi` builds `HttpRequest` values and parses `HttpResponse`
//!   values as plain data (no I/O).
//! - `transport` executes one request at a time through a blocking ureq
//!   agent, handing non-2xx statuses back as data.
//! - `BookingSession` ties the two together: it authenticates once on open,
//!   then exposes create / get / list / update / delete, each a single
//!   synchronous round-trip with no retry or re-auth.
//!
//! The integration suite in `tests/` runs against the in-process
//! `mock-booker` service, so nothing here depends on the live deployment.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod transport;
pub mod types;

pub use client::BookingApi;
pub use config::Config;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use session::BookingSession;
pub use types::{Booking, BookingDates, BookingSummary, CreatedBooking, Credentials};
