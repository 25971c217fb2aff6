//! Contact-Us API Tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{json_body, TestApp};

#[tokio::test]
async fn test_contact_submission_sends_receipt_and_alert() {
    let app = TestApp::new();
    let payload = json!({
        "name": "Cara",
        "email": "cara@example.com",
        "message": "Do you take card payments?"
    })
    .to_string();

    let response = app.post_json("/api/v1/contact-us", &payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["message"], "Your message has been sent successfully.");
    assert_eq!(body["contact"]["name"], "Cara");

    assert_eq!(
        app.mailer.recipients(),
        vec!["cara@example.com", "office@jajtaxi.co.uk"]
    );
}

#[tokio::test]
async fn test_short_name_is_rejected() {
    let app = TestApp::new();
    let payload = json!({
        "name": "Al",
        "email": "al@example.com",
        "message": "Hi"
    })
    .to_string();

    let response = app.post_json("/api/v1/contact-us", &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.mailer.count(), 0);
}

#[tokio::test]
async fn test_empty_message_is_rejected() {
    let app = TestApp::new();
    let payload = json!({
        "name": "Cara",
        "email": "cara@example.com",
        "message": ""
    })
    .to_string();

    let response = app.post_json("/api/v1/contact-us", &payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.mailer.count(), 0);
}
