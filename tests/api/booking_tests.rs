//! Standard Booking API Tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{json_body, TestApp};

fn payload() -> String {
    json!({
        "date": "2025-06-01",
        "time": "14:30",
        "pickup_location": "12 High Street",
        "drop_off_location": "Central Station",
        "name": "Ann Smith",
        "email": "ann@example.com",
        "phone_number": "+44 1234 567890",
        "special_requests": "child seat"
    })
    .to_string()
}

#[tokio::test]
async fn test_full_booking_lifecycle() {
    let app = TestApp::new();

    // Create
    let response = app.post_json("/api/v1/bookings", &payload()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["message"], "Booking created successfully.");
    let id = created["booking"]["id"].as_str().unwrap().to_string();
    assert_eq!(created["booking"]["status"], "pending");

    // Read back
    let response = app.get(&format!("/api/v1/bookings/{}", id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = json_body(response).await;
    assert_eq!(fetched["name"], "Ann Smith");
    assert_eq!(fetched["special_requests"], "child seat");

    // Accept
    let update = json!({
        "date": "2025-06-01",
        "time": "14:30",
        "pickup_location": "12 High Street",
        "drop_off_location": "Central Station",
        "name": "Ann Smith",
        "email": "ann@example.com",
        "phone_number": "+44 1234 567890",
        "status": "accepted"
    })
    .to_string();
    let response = app.put_json(&format!("/api/v1/bookings/{}", id), &update).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.get(&format!("/api/v1/bookings/{}", id)).await;
    assert_eq!(json_body(response).await["status"], "accepted");

    // Delete
    let response = app.delete(&format!("/api/v1/bookings/{}", id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.get(&format!("/api/v1/bookings/{}", id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Confirmation pair + status-update pair for the accept decision.
    assert_eq!(app.mailer.count(), 4);
}

#[tokio::test]
async fn test_listing_returns_bookings_in_creation_order() {
    let app = TestApp::new();

    for _ in 0..3 {
        let response = app.post_json("/api/v1/bookings", &payload()).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.get("/api/v1/bookings").await;
    let list = json_body(response).await;
    let ids: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap())
        .collect();

    assert_eq!(ids.len(), 3);
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn test_missing_required_field_is_rejected() {
    let app = TestApp::new();
    let incomplete = json!({
        "date": "2025-06-01",
        "time": "14:30"
    })
    .to_string();

    let response = app.post_json("/api/v1/bookings", &incomplete).await;
    // Serde rejects the body before validation runs.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(app.mailer.count(), 0);
}

#[tokio::test]
async fn test_confirmation_goes_to_customer_and_business() {
    let app = TestApp::new();
    app.post_json("/api/v1/bookings", &payload()).await;

    assert_eq!(
        app.mailer.recipients(),
        vec!["ann@example.com", "office@jajtaxi.co.uk"]
    );
}
