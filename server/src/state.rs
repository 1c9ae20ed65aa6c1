use std::sync::Arc;

use sqlx::PgPool;

use crate::repositories::{
    EventRepository, InMemoryStore, PgEventRepository, PgTicketRepository, TicketRepository,
};

/// Shared by every handler; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventRepository>,
    pub tickets: Arc<dyn TicketRepository>,
}

impl AppState {
    /// Each query checks a connection out of `pool` and returns it when done.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            events: Arc::new(PgEventRepository::new(pool.clone())),
            tickets: Arc::new(PgTicketRepository::new(pool)),
        }
    }

    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();
        Self {
            events: Arc::new(store.clone()),
            tickets: Arc::new(store),
        }
    }
}
