//! In-process store with the same referential rules as the SQL schema.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{EventRepository, RepositoryError, TicketRepository};
use crate::models::{Event, EventPatch, NewEvent, NewTicket, Ticket, TicketPatch};

#[derive(Default)]
struct Tables {
    events: BTreeMap<i64, Event>,
    tickets: BTreeMap<i64, Ticket>,
    last_event_id: i64,
    last_ticket_id: i64,
}

impl Tables {
    fn require_event(&self, event_id: i64) -> Result<(), RepositoryError> {
        if self.events.contains_key(&event_id) {
            Ok(())
        } else {
            Err(RepositoryError::ForeignKeyViolation(format!(
                "event {event_id} does not exist"
            )))
        }
    }
}

/// Both repositories over one shared table set, so foreign keys hold across them.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn create(&self, new: &NewEvent) -> Result<Event, RepositoryError> {
        let mut tables = self.tables.write().await;
        tables.last_event_id += 1;
        let event = Event {
            id: tables.last_event_id,
            name: new.name.clone(),
            date: new.date,
            location: new.location.clone(),
        };
        tables.events.insert(event.id, event.clone());
        Ok(event)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, RepositoryError> {
        Ok(self.tables.read().await.events.get(&id).cloned())
    }

    async fn update(&self, id: i64, patch: &EventPatch) -> Result<Option<Event>, RepositoryError> {
        let mut tables = self.tables.write().await;
        Ok(tables.events.get_mut(&id).map(|event| {
            patch.apply_to(event);
            event.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut tables = self.tables.write().await;
        if tables.tickets.values().any(|t| t.event_id == id) {
            return Err(RepositoryError::ForeignKeyViolation(format!(
                "event {id} is still referenced by tickets"
            )));
        }
        Ok(tables.events.remove(&id).is_some())
    }
}

#[async_trait]
impl TicketRepository for InMemoryStore {
    async fn create(&self, new: &NewTicket) -> Result<Ticket, RepositoryError> {
        let mut tables = self.tables.write().await;
        tables.require_event(new.event_id)?;
        tables.last_ticket_id += 1;
        let ticket = Ticket {
            id: tables.last_ticket_id,
            event_id: new.event_id,
            user_id: new.user_id,
            purchase_date: new.purchase_date,
        };
        tables.tickets.insert(ticket.id, ticket.clone());
        Ok(ticket)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Ticket>, RepositoryError> {
        Ok(self.tables.read().await.tickets.get(&id).cloned())
    }

    async fn update(
        &self,
        id: i64,
        patch: &TicketPatch,
    ) -> Result<Option<Ticket>, RepositoryError> {
        let mut tables = self.tables.write().await;
        if !tables.tickets.contains_key(&id) {
            return Ok(None);
        }
        if let Some(event_id) = patch.event_id {
            tables.require_event(event_id)?;
        }
        Ok(tables.tickets.get_mut(&id).map(|ticket| {
            patch.apply_to(ticket);
            ticket.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.tables.write().await.tickets.remove(&id).is_some())
    }
}
