//! Data-store client: typed per-entity reads and writes plus link composition.
//!
//! Implementations:
//! - `postgres`: PostgreSQL via sqlx
//! - `memory`: in-process tables for tests and local development

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::AppError;
use crate::models::{
    Airline, AirlineAirport, AirlineChanges, Airport, CreateAirport, LinkedAirport, NewAirline, UpdateAirport,
};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait Store: Send + Sync {
    /// Cheap round trip used by `/ready`.
    async fn ping(&self) -> Result<(), AppError>;
    /// Release connections. Called once at shutdown.
    async fn close(&self);

    async fn list_airlines(&self) -> Result<Vec<Airline>, AppError>;
    async fn find_airline(&self, id: Uuid) -> Result<Option<Airline>, AppError>;
    async fn insert_airline(&self, new: &NewAirline) -> Result<Airline, AppError>;
    async fn update_airline(&self, id: Uuid, changes: &AirlineChanges) -> Result<Option<Airline>, AppError>;
    async fn delete_airline(&self, id: Uuid) -> Result<Option<Airline>, AppError>;

    async fn list_airports(&self) -> Result<Vec<Airport>, AppError>;
    async fn find_airport(&self, id: Uuid) -> Result<Option<Airport>, AppError>;
    async fn find_airport_by_code(&self, code: &str) -> Result<Option<Airport>, AppError>;
    /// Fails with `Conflict` when the code is already taken.
    async fn insert_airport(&self, new: &CreateAirport) -> Result<Airport, AppError>;
    async fn update_airport(&self, id: Uuid, changes: &UpdateAirport) -> Result<Option<Airport>, AppError>;
    async fn delete_airport(&self, id: Uuid) -> Result<Option<Airport>, AppError>;

    async fn find_link(&self, airline_id: Uuid, airport_id: Uuid) -> Result<Option<AirlineAirport>, AppError>;
    /// Links of one airline joined with their airports, in join order.
    async fn linked_airports(&self, airline_id: Uuid) -> Result<Vec<LinkedAirport>, AppError>;
    /// Fails with `Conflict` if the pair is already linked, `NotFound` if either side is missing.
    async fn insert_link(&self, airline_id: Uuid, airport_id: Uuid) -> Result<AirlineAirport, AppError>;
    async fn delete_link(&self, airline_id: Uuid, airport_id: Uuid) -> Result<Option<AirlineAirport>, AppError>;
    /// Drop every link of the airline and create one per id, atomically.
    async fn replace_links(&self, airline_id: Uuid, airport_ids: &[Uuid]) -> Result<Vec<LinkedAirport>, AppError>;
}
