#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use events_api::config::Config;
use events_api::routes::create_routes;
use events_api::state::AppState;

pub fn app() -> Router {
    app_with(AppState::in_memory())
}

pub fn app_with(state: AppState) -> Router {
    create_routes(state, &Config::default())
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Creates the reference "Conf" event and returns its id.
pub async fn create_conf(app: &Router) -> i64 {
    let (status, json) = send(
        app,
        Method::POST,
        "/events",
        Some(serde_json::json!({
            "name": "Conf",
            "date": "2025-01-01T10:00:00Z",
            "location": "Hall A"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json["data"]["id"].as_i64().unwrap()
}
