//! Airline ↔ airport links: attach, list, fetch, replace-all and detach.

use crate::error::AppError;
use crate::models::{AirlineAirport, AirlineWithAirports, Airport};
use crate::service::airline::{AirlineService, AIRLINE_NOT_FOUND};
use crate::store::Store;
use uuid::Uuid;

pub const AIRPORT_NOT_FOUND: &str = "Airport not found";
pub const NOT_ASSOCIATED: &str = "Airport not associated with airline";
pub const ALREADY_ASSOCIATED: &str = "Airport already associated with airline";

pub struct AirlineAirportService;

impl AirlineAirportService {
    /// Attach one airport. A second attach of the same pair is a `Conflict`.
    pub async fn add_airport_to_airline(
        store: &dyn Store,
        airline_id: Uuid,
        airport_id: Uuid,
    ) -> Result<AirlineWithAirports, AppError> {
        let airline = AirlineService::find_one(store, airline_id).await?;
        Self::require_airport(store, airport_id).await?;
        if store.find_link(airline_id, airport_id).await?.is_some() {
            return Err(AppError::Conflict(ALREADY_ASSOCIATED.into()));
        }
        store.insert_link(airline_id, airport_id).await?;
        tracing::info!(%airline_id, %airport_id, "airport attached to airline");
        let airports = store.linked_airports(airline_id).await?;
        Ok(AirlineWithAirports { airline, airports })
    }

    pub async fn find_airports_from_airline(store: &dyn Store, airline_id: Uuid) -> Result<Vec<Airport>, AppError> {
        AirlineService::find_one(store, airline_id).await?;
        let linked = store.linked_airports(airline_id).await?;
        Ok(linked.into_iter().map(|l| l.airport).collect())
    }

    pub async fn find_airport_from_airline(
        store: &dyn Store,
        airline_id: Uuid,
        airport_id: Uuid,
    ) -> Result<Airport, AppError> {
        if store.find_link(airline_id, airport_id).await?.is_none() {
            return Err(AppError::NotFound(NOT_ASSOCIATED.into()));
        }
        // The link row cascades with its airport, so a present link implies a present airport.
        store
            .find_airport(airport_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_ASSOCIATED.into()))
    }

    /// Replace the airline's whole link set with `airport_ids`.
    ///
    /// Every id is verified before anything is written, and the store swaps the
    /// set atomically, so a failure leaves the previous links in place.
    /// Repeated ids are collapsed, keeping the first occurrence.
    pub async fn update_airports_from_airline(
        store: &dyn Store,
        airline_id: Uuid,
        airport_ids: &[Uuid],
    ) -> Result<AirlineWithAirports, AppError> {
        let airline = store
            .find_airline(airline_id)
            .await?
            .ok_or_else(|| AppError::NotFound(AIRLINE_NOT_FOUND.into()))?;

        let mut ids: Vec<Uuid> = Vec::with_capacity(airport_ids.len());
        for id in airport_ids {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }
        for id in &ids {
            Self::require_airport(store, *id).await?;
        }

        let airports = store.replace_links(airline_id, &ids).await?;
        tracing::info!(%airline_id, count = airports.len(), "airline airports replaced");
        Ok(AirlineWithAirports { airline, airports })
    }

    pub async fn delete_airport_from_airline(
        store: &dyn Store,
        airline_id: Uuid,
        airport_id: Uuid,
    ) -> Result<AirlineAirport, AppError> {
        if store.find_link(airline_id, airport_id).await?.is_none() {
            return Err(AppError::NotFound(NOT_ASSOCIATED.into()));
        }
        let link = store
            .delete_link(airline_id, airport_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_ASSOCIATED.into()))?;
        tracing::info!(%airline_id, %airport_id, "airport detached from airline");
        Ok(link)
    }

    async fn require_airport(store: &dyn Store, airport_id: Uuid) -> Result<Airport, AppError> {
        match store.find_airport(airport_id).await? {
            Some(a) => Ok(a),
            None => {
                tracing::debug!(%airport_id, "airport missing");
                Err(AppError::NotFound(AIRPORT_NOT_FOUND.into()))
            }
        }
    }
}
