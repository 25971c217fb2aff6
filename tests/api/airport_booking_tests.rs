//! Airport Booking API Tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{json_body, TestApp};

fn one_way_payload() -> String {
    json!({
        "name": "Ben Jones",
        "email": "ben@example.com",
        "phone_number": "+44 7700 900123",
        "pickup_location": "4 Park Lane",
        "airport_name": "Heathrow",
        "pickup_date": "2025-07-10",
        "pickup_time": "05:45",
        "is_return_trip": false
    })
    .to_string()
}

fn return_payload() -> String {
    json!({
        "name": "Ben Jones",
        "email": "ben@example.com",
        "phone_number": "+44 7700 900123",
        "pickup_location": "4 Park Lane",
        "airport_name": "Heathrow",
        "pickup_date": "2025-07-10",
        "pickup_time": "05:45",
        "is_return_trip": true,
        "return_date": "2025-07-20",
        "return_time": "22:30"
    })
    .to_string()
}

#[tokio::test]
async fn test_return_trip_roundtrips_both_legs() {
    let app = TestApp::new();

    let response = app.post_json("/api/v1/airport-bookings", &return_payload()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    let id = created["booking"]["id"].as_str().unwrap().to_string();

    let response = app.get(&format!("/api/v1/airport-bookings/{}", id)).await;
    let fetched = json_body(response).await;
    assert_eq!(fetched["is_return_trip"], true);
    assert_eq!(fetched["return_time"], "22:30");
    assert_eq!(fetched["return_date"], "2025-07-20T00:00:00+00:00");
}

#[tokio::test]
async fn test_return_leg_without_flag_is_rejected() {
    let app = TestApp::new();
    let payload = json!({
        "name": "Ben Jones",
        "email": "ben@example.com",
        "phone_number": "+44 7700 900123",
        "pickup_location": "4 Park Lane",
        "airport_name": "Heathrow",
        "pickup_date": "2025-07-10",
        "pickup_time": "05:45",
        "is_return_trip": false,
        "return_date": "2025-07-20",
        "return_time": "22:30"
    })
    .to_string();

    let response = app.post_json("/api/v1/airport-bookings", &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_decision_updates_notify_but_pending_updates_do_not() {
    let app = TestApp::new();

    let response = app.post_json("/api/v1/airport-bookings", &one_way_payload()).await;
    let id = json_body(response).await["booking"]["id"]
        .as_str()
        .unwrap()
        .to_string();
    let uri = format!("/api/v1/airport-bookings/{}", id);
    assert_eq!(app.mailer.count(), 2);

    // Pending update: stored, but silent.
    let response = app.put_json(&uri, &one_way_payload()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.mailer.count(), 2);

    // Decline: both parties are notified.
    let mut declined: serde_json::Value = serde_json::from_str(&one_way_payload()).unwrap();
    declined["status"] = json!("declined");
    let response = app.put_json(&uri, &declined.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.mailer.count(), 4);

    let response = app.get(&uri).await;
    assert_eq!(json_body(response).await["status"], "declined");
}

#[tokio::test]
async fn test_unknown_airport_booking_returns_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/v1/airport-bookings/999999999999999999999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.delete("/api/v1/airport-bookings/not-an-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
