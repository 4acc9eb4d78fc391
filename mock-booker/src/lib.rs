//! In-process re-implementation of the Restful-Booker service.
//!
//! Faithful to the live deployment's quirks so the client suite exercises
//! real behavior: create answers 200 (not 201), delete answers 201, bad
//! credentials come back as `200 {"reason":"Bad credentials"}`, and mutating
//! requests without a valid `token` cookie are 403.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Credentials the auth endpoint accepts, matching the live service.
pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "password123";

/// Schema mirror of the client's booking record. Dates stay plain strings
/// here; the mock only stores and echoes them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Booking {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: i64,
    pub depositpaid: bool,
    pub bookingdates: BookingDates,
    pub additionalneeds: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BookingDates {
    pub checkin: String,
    pub checkout: String,
}

#[derive(Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct CreatedBooking {
    pub bookingid: u32,
    pub booking: Booking,
}

#[derive(Serialize)]
pub struct BookingSummary {
    pub bookingid: u32,
}

#[derive(Default)]
pub struct BookerState {
    bookings: HashMap<u32, Booking>,
    tokens: HashSet<String>,
    next_id: u32,
}

pub type Db = Arc<RwLock<BookerState>>;

pub fn app() -> Router {
    let db = Db::default();
    Router::new()
        .route("/auth", post(create_token))
        .route("/booking", get(list_bookings).post(create_booking))
        .route(
            "/booking/{id}",
            get(get_booking).put(update_booking).delete(delete_booking),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn create_token(
    State(db): State<Db>,
    Json(input): Json<AuthRequest>,
) -> Json<serde_json::Value> {
    if input.username == USERNAME && input.password == PASSWORD {
        let token = Uuid::new_v4().simple().to_string();
        db.write().await.tokens.insert(token.clone());
        Json(serde_json::json!({ "token": token }))
    } else {
        // The live service answers 200 with a reason, not a 4xx.
        tracing::warn!(username = %input.username, "rejected credentials");
        Json(serde_json::json!({ "reason": "Bad credentials" }))
    }
}

async fn list_bookings(State(db): State<Db>) -> Json<Vec<BookingSummary>> {
    let state = db.read().await;
    let mut summaries: Vec<BookingSummary> = state
        .bookings
        .keys()
        .map(|&bookingid| BookingSummary { bookingid })
        .collect();
    summaries.sort_by_key(|s| s.bookingid);
    Json(summaries)
}

async fn create_booking(
    State(db): State<Db>,
    Json(input): Json<Booking>,
) -> Json<CreatedBooking> {
    let mut state = db.write().await;
    state.next_id += 1;
    let bookingid = state.next_id;
    state.bookings.insert(bookingid, input.clone());
    Json(CreatedBooking {
        bookingid,
        booking: input,
    })
}

async fn get_booking(
    State(db): State<Db>,
    Path(id): Path<u32>,
) -> Result<Json<Booking>, StatusCode> {
    let state = db.read().await;
    state.bookings.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Full replacement, matching PUT semantics on the live service.
async fn update_booking(
    State(db): State<Db>,
    Path(id): Path<u32>,
    headers: HeaderMap,
    Json(input): Json<Booking>,
) -> Result<Json<Booking>, StatusCode> {
    let mut state = db.write().await;
    if !authorized(&state, &headers) {
        return Err(StatusCode::FORBIDDEN);
    }
    let stored = state.bookings.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    *stored = input.clone();
    Ok(Json(input))
}

async fn delete_booking(
    State(db): State<Db>,
    Path(id): Path<u32>,
    headers: HeaderMap,
) -> Result<StatusCode, StatusCode> {
    let mut state = db.write().await;
    if !authorized(&state, &headers) {
        return Err(StatusCode::FORBIDDEN);
    }
    // The live service answers 201 Created on a successful delete.
    state
        .bookings
        .remove(&id)
        .map(|_| StatusCode::CREATED)
        .ok_or(StatusCode::NOT_FOUND)
}

fn authorized(state: &BookerState, headers: &HeaderMap) -> bool {
    cookie_token(headers).is_some_and(|token| state.tokens.contains(&token))
}

/// Pull `token=<value>` out of the `Cookie` header, if present.
fn cookie_token(headers: &HeaderMap) -> Option<String> {
    let cookie = headers.get(header::COOKIE)?.to_str().ok()?;
    cookie
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix("token=").map(str::to_string))
}
