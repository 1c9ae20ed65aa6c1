use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::check_id;
use crate::utils::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    pub id: i64,
    pub event_id: i64,
    /// Opaque reference into the external user system.
    pub user_id: i64,
    pub purchase_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewTicket {
    pub event_id: i64,
    pub user_id: i64,
    pub purchase_date: DateTime<Utc>,
}

impl NewTicket {
    pub fn validate(&self) -> Result<(), AppError> {
        check_id("event_id", self.event_id)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TicketPatch {
    pub event_id: Option<i64>,
    pub user_id: Option<i64>,
    pub purchase_date: Option<DateTime<Utc>>,
}

impl TicketPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(event_id) = self.event_id {
            check_id("event_id", event_id)?;
        }
        Ok(())
    }

    pub fn apply_to(&self, ticket: &mut Ticket) {
        if let Some(event_id) = self.event_id {
            ticket.event_id = event_id;
        }
        if let Some(user_id) = self.user_id {
            ticket.user_id = user_id;
        }
        if let Some(purchase_date) = self.purchase_date {
            ticket.purchase_date = purchase_date;
        }
    }
}
