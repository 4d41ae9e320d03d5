use axum::http::StatusCode;
use folio_shared::TransportError;
use serde_json::json;
use tower::ServiceExt;

mod common;

use common::{FailingTransport, body_json, create_test_app, create_test_app_with, post_json};

#[tokio::test]
async fn test_api_submit_success() {
    let app = create_test_app().await;

    let response = app
        .router
        .oneshot(post_json(
            "/api/contact",
            json!({
                "name": "  Ada Lovelace ",
                "email": "ada@example.com",
                "subject": "Engines",
                "message": "Let us compute <everything>."
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["name"], "Ada Lovelace");
    assert_eq!(json["data"]["message"], "Let us compute &lt;everything&gt;.");
    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn test_api_submit_invalid() {
    let app = create_test_app().await;

    let response = app
        .router
        .oneshot(post_json("/api/contact", json!({ "email": "nope" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Please fix the errors in the form");
    assert_eq!(json["errors"]["email"], "Please enter a valid email address");
    assert_eq!(json["errors"]["name"], "Name is required");
}

#[tokio::test]
async fn test_api_submit_transport_failure() {
    let app = create_test_app_with(FailingTransport(TransportError::Status(503))).await;

    let response = app
        .router
        .oneshot(post_json(
            "/api/contact",
            json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "subject": "Engines",
                "message": "Let us compute everything."
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        body_json(response).await["message"],
        "Something went wrong. Please try again."
    );
}
