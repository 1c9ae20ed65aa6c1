mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{app, create_conf, send};

#[tokio::test]
async fn test_ticket_lifecycle() {
    let app = app();
    let event_id = create_conf(&app).await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/tickets",
        Some(json!({ "event_id": event_id, "user_id": 42, "purchase_date": "2025-01-02T09:00:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ticket_id = json["data"]["id"].as_i64().unwrap();
    assert!(ticket_id > 0);
    assert_eq!(json["data"]["event_id"], event_id);
    assert_eq!(json["data"]["user_id"], 42);

    let (status, json) = send(
        &app,
        Method::PUT,
        &format!("/tickets/{ticket_id}"),
        Some(json!({ "user_id": 43 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["user_id"], 43);
    assert_eq!(json["data"]["purchase_date"], "2025-01-02T09:00:00Z");

    let (status, json) = send(&app, Method::DELETE, &format!("/tickets/{ticket_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Ticket deleted successfully");

    let (status, _) = send(&app, Method::GET, &format!("/tickets/{ticket_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ticket_for_unknown_event_is_rejected() {
    let app = app();
    let (status, json) = send(
        &app,
        Method::POST,
        "/tickets",
        Some(json!({ "event_id": 9999, "user_id": 1, "purchase_date": "2025-01-02T09:00:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["code"], "REFERENTIAL_INTEGRITY_ERROR");
}

#[tokio::test]
async fn test_update_missing_ticket_is_404() {
    let app = app();
    let (status, _) = send(&app, Method::PUT, "/tickets/3", Some(json!({ "user_id": 2 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_patch_field_is_rejected() {
    let app = app();
    let event_id = create_conf(&app).await;
    let (_, json) = send(
        &app,
        Method::POST,
        "/tickets",
        Some(json!({ "event_id": event_id, "user_id": 1, "purchase_date": "2025-01-02T09:00:00Z" })),
    )
    .await;
    let ticket_id = json["data"]["id"].as_i64().unwrap();

    let (status, json) = send(
        &app,
        Method::PUT,
        &format!("/tickets/{ticket_id}"),
        Some(json!({ "id": 500 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_non_numeric_id_is_client_error() {
    let app = app();
    let (status, json) = send(&app, Method::GET, "/tickets/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_opaque_user_id_accepts_any_integer() {
    let app = app();
    let event_id = create_conf(&app).await;
    let (status, json) = send(
        &app,
        Method::POST,
        "/tickets",
        Some(json!({ "event_id": event_id, "user_id": -7, "purchase_date": "2025-01-02T09:00:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["user_id"], -7);
}
