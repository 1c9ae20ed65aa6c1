use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer, Config};
use crate::handlers::{event, health_check, ticket};
use crate::state::AppState;

pub fn create_routes(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/events", post(event::create_event))
        .route(
            "/events/:id",
            get(event::get_event)
                .put(event::update_event)
                .delete(event::delete_event),
        )
        .route("/tickets", post(ticket::create_ticket))
        .route(
            "/tickets/:id",
            get(ticket::get_ticket)
                .put(ticket::update_ticket)
                .delete(ticket::delete_ticket),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer(config.production))
        .layer(create_cors_layer(&config.cors_allowed_origins))
}
