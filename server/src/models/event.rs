use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::check_text;
use crate::utils::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
    pub location: String,
}

/// Body of `POST /events`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewEvent {
    pub name: String,
    pub date: DateTime<Utc>,
    pub location: String,
}

impl NewEvent {
    pub fn validate(&self) -> Result<(), AppError> {
        check_text("name", &self.name)?;
        check_text("location", &self.location)
    }
}

/// Body of `PUT /events/{id}`. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventPatch {
    pub name: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

impl EventPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            check_text("name", name)?;
        }
        if let Some(location) = &self.location {
            check_text("location", location)?;
        }
        Ok(())
    }

    pub fn apply_to(&self, event: &mut Event) {
        if let Some(name) = &self.name {
            event.name.clone_from(name);
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(location) = &self.location {
            event.location.clone_from(location);
        }
    }
}
