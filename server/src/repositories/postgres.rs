use async_trait::async_trait;
use sqlx::PgPool;

use super::{EventRepository, RepositoryError, TicketRepository};
use crate::models::{Event, EventPatch, NewEvent, NewTicket, Ticket, TicketPatch};

#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn create(&self, new: &NewEvent) -> Result<Event, RepositoryError> {
        let event = sqlx::query_as::<_, Event>(
            "INSERT INTO events (name, date, location)
             VALUES ($1, $2, $3)
             RETURNING id, name, date, location",
        )
        .bind(&new.name)
        .bind(new.date)
        .bind(&new.location)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, RepositoryError> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, name, date, location FROM events WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn update(&self, id: i64, patch: &EventPatch) -> Result<Option<Event>, RepositoryError> {
        // NULL parameters leave the column untouched
        let event = sqlx::query_as::<_, Event>(
            "UPDATE events SET
                name = COALESCE($2, name),
                date = COALESCE($3, date),
                location = COALESCE($4, location)
             WHERE id = $1
             RETURNING id, name, date, location",
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.date)
        .bind(patch.location.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(Clone)]
pub struct PgTicketRepository {
    pool: PgPool,
}

impl PgTicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketRepository for PgTicketRepository {
    async fn create(&self, new: &NewTicket) -> Result<Ticket, RepositoryError> {
        let ticket = sqlx::query_as::<_, Ticket>(
            "INSERT INTO tickets (event_id, user_id, purchase_date)
             VALUES ($1, $2, $3)
             RETURNING id, event_id, user_id, purchase_date",
        )
        .bind(new.event_id)
        .bind(new.user_id)
        .bind(new.purchase_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(ticket)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Ticket>, RepositoryError> {
        let ticket = sqlx::query_as::<_, Ticket>(
            "SELECT id, event_id, user_id, purchase_date FROM tickets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(ticket)
    }

    async fn update(
        &self,
        id: i64,
        patch: &TicketPatch,
    ) -> Result<Option<Ticket>, RepositoryError> {
        let ticket = sqlx::query_as::<_, Ticket>(
            "UPDATE tickets SET
                event_id = COALESCE($2, event_id),
                user_id = COALESCE($3, user_id),
                purchase_date = COALESCE($4, purchase_date)
             WHERE id = $1
             RETURNING id, event_id, user_id, purchase_date",
        )
        .bind(id)
        .bind(patch.event_id)
        .bind(patch.user_id)
        .bind(patch.purchase_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(ticket)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
