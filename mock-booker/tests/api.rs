use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_booker::{app, Booking, USERNAME};
use tower::ServiceExt;

const SAMPLE_BOOKING: &str = r#"{
    "firstname": "Test_1",
    "lastname": "User_1",
    "totalprice": 500,
    "depositpaid": true,
    "bookingdates": {"checkin": "2024-01-02", "checkout": "2024-01-12"},
    "additionalneeds": ""
}"#;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn json_request_with_token(method: &str, uri: &str, body: &str, token: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .header(http::header::COOKIE, format!("token={token}"))
        .body(body.to_string())
        .unwrap()
}

// --- auth ---

#[tokio::test]
async fn auth_with_valid_credentials_returns_token() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/auth",
            r#"{"username":"admin","password":"password123"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn auth_with_bad_credentials_answers_200_with_reason() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/auth",
            &format!(r#"{{"username":"{USERNAME}","password":"wrong"}}"#),
        ))
        .await
        .unwrap();

    // Live-service quirk: rejection is a 200 body, not a 4xx.
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["reason"], "Bad credentials");
    assert!(body.get("token").is_none());
}

// --- list ---

#[tokio::test]
async fn list_bookings_empty() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/booking").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let ids: Vec<serde_json::Value> = body_json(resp).await;
    assert!(ids.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_booking_answers_200_with_assigned_id() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/booking", SAMPLE_BOOKING))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["bookingid"], 1);
    assert_eq!(body["booking"]["firstname"], "Test_1");
    assert_eq!(body["booking"]["bookingdates"]["checkin"], "2024-01-02");
}

#[tokio::test]
async fn create_booking_malformed_json_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/booking", r#"{"firstname":"only"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_booking_not_found() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/booking/99").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_booking_bad_id_returns_400() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/booking/not-a-number")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- token enforcement ---

#[tokio::test]
async fn update_without_token_is_forbidden() {
    let app = app();
    let resp = app
        .oneshot(json_request("PUT", "/booking/1", SAMPLE_BOOKING))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn delete_with_unknown_token_is_forbidden() {
    let app = app();
    let resp = app
        .oneshot(json_request_with_token(
            "DELETE",
            "/booking/1",
            "",
            "never-issued",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

// --- full lifecycle ---

#[tokio::test]
async fn booking_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // authenticate
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/auth",
            r#"{"username":"admin","password":"password123"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let auth: serde_json::Value = body_json(resp).await;
    let token = auth["token"].as_str().unwrap().to_string();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/booking", SAMPLE_BOOKING))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let created: serde_json::Value = body_json(resp).await;
    let id = created["bookingid"].as_u64().unwrap();

    // list — contains the new id
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(Request::builder().uri("/booking").body(String::new()).unwrap())
        .await
        .unwrap();
    let ids: Vec<serde_json::Value> = body_json(resp).await;
    assert!(ids.iter().any(|s| s["bookingid"].as_u64() == Some(id)));

    // get
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .uri(&format!("/booking/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Booking = body_json(resp).await;
    assert_eq!(fetched.firstname, "Test_1");
    assert_eq!(fetched.totalprice, 500);

    // update — full replacement with a new price
    let updated_payload = SAMPLE_BOOKING.replace("500", "1000");
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request_with_token(
            "PUT",
            &format!("/booking/{id}"),
            &updated_payload,
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Booking = body_json(resp).await;
    assert_eq!(updated.totalprice, 1000);

    // delete — live-service quirk: 201, empty body
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request_with_token(
            "DELETE",
            &format!("/booking/{id}"),
            "",
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());

    // get after delete — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .uri(&format!("/booking/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // delete again — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request_with_token(
            "DELETE",
            &format!("/booking/{id}"),
            "",
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
