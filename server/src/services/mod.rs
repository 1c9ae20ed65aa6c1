//! CRUD operations shared by the HTTP handlers.
//!
//! Services validate input, call the repositories and translate store
//! failures into [`AppError`](crate::utils::error::AppError). Absence is
//! reported as `None`/`false`; mapping it to 404 is the handler's job.

pub mod event_service;
pub mod ticket_service;
