use axum::extract::State;
use axum::response::Response;

use crate::extractors::{JsonBody, PathId};
use crate::models::{EventPatch, NewEvent};
use crate::services::event_service;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{empty_success, success};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Event with id '{id}' was not found"))
}

pub async fn create_event(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewEvent>,
) -> Result<Response, AppError> {
    let event = event_service::create_event(state.events.as_ref(), payload).await?;
    Ok(success(event, "Event created successfully"))
}

pub async fn get_event(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
) -> Result<Response, AppError> {
    let event = event_service::get_event_by_id(state.events.as_ref(), id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(success(event, "Event retrieved successfully"))
}

pub async fn update_event(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
    JsonBody(patch): JsonBody<EventPatch>,
) -> Result<Response, AppError> {
    let event = event_service::update_event(state.events.as_ref(), id, patch)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(success(event, "Event updated successfully"))
}

pub async fn delete_event(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
) -> Result<Response, AppError> {
    if event_service::delete_event(state.events.as_ref(), id).await? {
        Ok(empty_success("Event deleted successfully"))
    } else {
        Err(not_found(id))
    }
}
