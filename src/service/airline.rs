//! Airline records: founding date must lie in the past.

use crate::error::AppError;
use crate::models::{Airline, CreateAirline, UpdateAirline};
use crate::store::Store;
use crate::validation::RequestValidator;
use chrono::Utc;
use uuid::Uuid;

pub const AIRLINE_NOT_FOUND: &str = "Airline not found";

pub struct AirlineService;

impl AirlineService {
    pub async fn create(store: &dyn Store, body: CreateAirline) -> Result<Airline, AppError> {
        let new = RequestValidator::airline(body, Utc::now())?;
        let airline = store.insert_airline(&new).await?;
        tracing::info!(airline_id = %airline.id, name = %airline.name, "airline created");
        Ok(airline)
    }

    pub async fn find_all(store: &dyn Store) -> Result<Vec<Airline>, AppError> {
        store.list_airlines().await
    }

    pub async fn find_one(store: &dyn Store, id: Uuid) -> Result<Airline, AppError> {
        store
            .find_airline(id)
            .await?
            .ok_or_else(|| AppError::NotFound(AIRLINE_NOT_FOUND.into()))
    }

    /// Partial update. Supplied fields are validated before the existence check.
    pub async fn update(store: &dyn Store, id: Uuid, body: UpdateAirline) -> Result<Airline, AppError> {
        let changes = RequestValidator::airline_partial(body, Utc::now())?;
        Self::find_one(store, id).await?;
        let airline = store
            .update_airline(id, &changes)
            .await?
            .ok_or_else(|| AppError::NotFound(AIRLINE_NOT_FOUND.into()))?;
        tracing::info!(airline_id = %id, "airline updated");
        Ok(airline)
    }

    pub async fn delete(store: &dyn Store, id: Uuid) -> Result<Airline, AppError> {
        Self::find_one(store, id).await?;
        let airline = store
            .delete_airline(id)
            .await?
            .ok_or_else(|| AppError::NotFound(AIRLINE_NOT_FOUND.into()))?;
        tracing::info!(airline_id = %id, "airline deleted");
        Ok(airline)
    }
}
