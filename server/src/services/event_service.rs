use tracing::{debug, info};

use crate::models::{Event, EventPatch, NewEvent};
use crate::repositories::{EventRepository, RepositoryError};
use crate::utils::error::AppError;

#[tracing::instrument(skip(repo))]
pub async fn create_event(repo: &dyn EventRepository, new: NewEvent) -> Result<Event, AppError> {
    new.validate()?;
    let event = repo.create(&new).await?;
    info!(event_id = event.id, "Event created");
    Ok(event)
}

#[tracing::instrument(skip(repo))]
pub async fn get_event_by_id(repo: &dyn EventRepository, id: i64) -> Result<Option<Event>, AppError> {
    Ok(repo.find_by_id(id).await?)
}

#[tracing::instrument(skip(repo))]
pub async fn update_event(
    repo: &dyn EventRepository,
    id: i64,
    patch: EventPatch,
) -> Result<Option<Event>, AppError> {
    patch.validate()?;
    let event = repo.update(id, &patch).await?;
    if event.is_some() {
        info!(event_id = id, "Event updated");
    }
    Ok(event)
}

/// Refuses with [`AppError::Conflict`] while tickets still reference the event.
#[tracing::instrument(skip(repo))]
pub async fn delete_event(repo: &dyn EventRepository, id: i64) -> Result<bool, AppError> {
    match repo.delete(id).await {
        Ok(deleted) => {
            debug!(event_id = id, deleted, "Event delete finished");
            Ok(deleted)
        }
        Err(RepositoryError::ForeignKeyViolation(_)) => Err(AppError::Conflict(format!(
            "Event {id} still has tickets and cannot be deleted"
        ))),
        Err(e) => Err(e.into()),
    }
}
