use crate::error::AppError;
use crate::models::{Airport, CreateAirport, UpdateAirport};
use crate::store::Store;
use crate::validation::RequestValidator;
use uuid::Uuid;

pub struct AirportService;

impl AirportService {
    pub async fn find_all(store: &dyn Store) -> Result<Vec<Airport>, AppError> {
        store.list_airports().await
    }

    pub async fn find_one(store: &dyn Store, id: Uuid) -> Result<Airport, AppError> {
        store
            .find_airport(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Airport with id {} not found", id)))
    }

    /// Code length is checked before the store is touched; uniqueness is pre-checked by lookup.
    pub async fn create(store: &dyn Store, body: CreateAirport) -> Result<Airport, AppError> {
        RequestValidator::airport(&body)?;
        if store.find_airport_by_code(&body.code).await?.is_some() {
            tracing::debug!(code = %body.code, "airport code already taken");
            return Err(AppError::Conflict(format!(
                "Airport with code {} already exists",
                body.code
            )));
        }
        let airport = store.insert_airport(&body).await?;
        tracing::info!(airport_id = %airport.id, code = %airport.code, "airport created");
        Ok(airport)
    }

    /// Code uniqueness is not pre-checked here; the store rejects a taken code with `Conflict`.
    pub async fn update(store: &dyn Store, id: Uuid, body: UpdateAirport) -> Result<Airport, AppError> {
        RequestValidator::airport_partial(&body)?;
        Self::find_one(store, id).await?;
        let airport = store
            .update_airport(id, &body)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Airport with id {} not found", id)))?;
        tracing::info!(airport_id = %id, "airport updated");
        Ok(airport)
    }

    pub async fn delete(store: &dyn Store, id: Uuid) -> Result<Airport, AppError> {
        Self::find_one(store, id).await?;
        let airport = store
            .delete_airport(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Airport with id {} not found", id)))?;
        tracing::info!(airport_id = %id, "airport deleted");
        Ok(airport)
    }
}
