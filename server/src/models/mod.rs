pub mod event;
pub mod ticket;

pub use event::{Event, EventPatch, NewEvent};
pub use ticket::{NewTicket, Ticket, TicketPatch};

use crate::utils::error::AppError;

/// Upper bound for `VARCHAR(50)` columns, counted in characters.
pub const MAX_TEXT_LEN: usize = 50;

pub(crate) fn check_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::ValidationError(format!("{field} must not be empty")));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(AppError::ValidationError(format!(
            "{field} must be at most {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

pub(crate) fn check_id(field: &str, value: i64) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::ValidationError(format!(
            "{field} must be a positive integer"
        )));
    }
    Ok(())
}
