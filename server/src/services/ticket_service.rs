use tracing::info;

use crate::models::{NewTicket, Ticket, TicketPatch};
use crate::repositories::TicketRepository;
use crate::utils::error::AppError;

/// Fails with [`AppError::ReferentialIntegrityError`] when `event_id` is unknown.
#[tracing::instrument(skip(repo))]
pub async fn create_ticket(repo: &dyn TicketRepository, new: NewTicket) -> Result<Ticket, AppError> {
    new.validate()?;
    let ticket = repo.create(&new).await?;
    info!(ticket_id = ticket.id, event_id = ticket.event_id, "Ticket created");
    Ok(ticket)
}

#[tracing::instrument(skip(repo))]
pub async fn get_ticket_by_id(
    repo: &dyn TicketRepository,
    id: i64,
) -> Result<Option<Ticket>, AppError> {
    Ok(repo.find_by_id(id).await?)
}

#[tracing::instrument(skip(repo))]
pub async fn update_ticket(
    repo: &dyn TicketRepository,
    id: i64,
    patch: TicketPatch,
) -> Result<Option<Ticket>, AppError> {
    patch.validate()?;
    let ticket = repo.update(id, &patch).await?;
    if ticket.is_some() {
        info!(ticket_id = id, "Ticket updated");
    }
    Ok(ticket)
}

#[tracing::instrument(skip(repo))]
pub async fn delete_ticket(repo: &dyn TicketRepository, id: i64) -> Result<bool, AppError> {
    Ok(repo.delete(id).await?)
}
