use axum::extract::State;
use axum::response::Response;

use crate::extractors::{JsonBody, PathId};
use crate::models::{NewTicket, TicketPatch};
use crate::services::ticket_service;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{empty_success, success};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Ticket with id '{id}' was not found"))
}

pub async fn create_ticket(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewTicket>,
) -> Result<Response, AppError> {
    let ticket = ticket_service::create_ticket(state.tickets.as_ref(), payload).await?;
    Ok(success(ticket, "Ticket created successfully"))
}

pub async fn get_ticket(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
) -> Result<Response, AppError> {
    let ticket = ticket_service::get_ticket_by_id(state.tickets.as_ref(), id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(success(ticket, "Ticket retrieved successfully"))
}

pub async fn update_ticket(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
    JsonBody(patch): JsonBody<TicketPatch>,
) -> Result<Response, AppError> {
    let ticket = ticket_service::update_ticket(state.tickets.as_ref(), id, patch)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(success(ticket, "Ticket updated successfully"))
}

pub async fn delete_ticket(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
) -> Result<Response, AppError> {
    if ticket_service::delete_ticket(state.tickets.as_ref(), id).await? {
        Ok(empty_success("Ticket deleted successfully"))
    } else {
        Err(not_found(id))
    }
}
