//! Persistence contracts for events and tickets.
//!
//! Handlers never see SQL; they go through these traits so the router can be
//! backed by PostgreSQL in production and by [`memory::InMemoryStore`] in tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Event, EventPatch, NewEvent, NewTicket, Ticket, TicketPatch};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
pub use postgres::{PgEventRepository, PgTicketRepository};

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A write referenced a missing row, or a delete would orphan one.
    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error(transparent)]
    Storage(sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_foreign_key_violation() {
                return RepositoryError::ForeignKeyViolation(db.message().to_string());
            }
        }
        RepositoryError::Storage(err)
    }
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, new: &NewEvent) -> Result<Event, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, RepositoryError>;

    /// Returns `None` when no event has this id.
    async fn update(&self, id: i64, patch: &EventPatch) -> Result<Option<Event>, RepositoryError>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn create(&self, new: &NewTicket) -> Result<Ticket, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Ticket>, RepositoryError>;

    async fn update(&self, id: i64, patch: &TicketPatch)
        -> Result<Option<Ticket>, RepositoryError>;

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}
