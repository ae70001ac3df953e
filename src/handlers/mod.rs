//! HTTP handlers for airlines, airports and their links.

pub mod airline;
pub mod airline_airport;
pub mod airport;

use crate::error::AppError;
use uuid::Uuid;

/// Path ids are UUIDs; anything else is rejected before reaching a service.
pub(crate) fn parse_id(id_str: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id_str).map_err(|_| AppError::Validation("invalid uuid".into()))
}
