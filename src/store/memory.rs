//! In-memory store with the same constraints as the PostgreSQL tables:
//! unique airport codes, one link per pair, links cascade with their parents.

use super::Store;
use crate::error::AppError;
use crate::models::{
    Airline, AirlineAirport, AirlineChanges, Airport, CreateAirport, LinkedAirport, NewAirline, UpdateAirport,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    airlines: Vec<Airline>,
    airports: Vec<Airport>,
    links: Vec<AirlineAirport>,
}

impl Tables {
    fn linked_airports(&self, airline_id: Uuid) -> Vec<LinkedAirport> {
        self.links
            .iter()
            .filter(|l| l.airline_id == airline_id)
            .filter_map(|l| {
                self.airports
                    .iter()
                    .find(|a| a.id == l.airport_id)
                    .map(|a| LinkedAirport {
                        link: l.clone(),
                        airport: a.clone(),
                    })
            })
            .collect()
    }

    fn new_link(airline_id: Uuid, airport_id: Uuid) -> AirlineAirport {
        let now = Utc::now();
        AirlineAirport {
            airline_id,
            airport_id,
            start_date: now,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, AppError> {
        self.tables
            .read()
            .map_err(|_| AppError::Internal("store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, AppError> {
        self.tables
            .write()
            .map_err(|_| AppError::Internal("store lock poisoned".into()))
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }

    async fn close(&self) {}

    async fn list_airlines(&self) -> Result<Vec<Airline>, AppError> {
        Ok(self.read()?.airlines.clone())
    }

    async fn find_airline(&self, id: Uuid) -> Result<Option<Airline>, AppError> {
        Ok(self.read()?.airlines.iter().find(|a| a.id == id).cloned())
    }

    async fn insert_airline(&self, new: &NewAirline) -> Result<Airline, AppError> {
        let now = Utc::now();
        let airline = Airline {
            id: Uuid::new_v4(),
            name: new.name.clone(),
            description: new.description.clone(),
            founding_date: new.founding_date,
            website: new.website.clone(),
            created_at: now,
            updated_at: now,
        };
        self.write()?.airlines.push(airline.clone());
        Ok(airline)
    }

    async fn update_airline(&self, id: Uuid, changes: &AirlineChanges) -> Result<Option<Airline>, AppError> {
        let mut tables = self.write()?;
        let Some(airline) = tables.airlines.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        if let Some(ref name) = changes.name {
            airline.name = name.clone();
        }
        if let Some(ref description) = changes.description {
            airline.description = description.clone();
        }
        if let Some(founding_date) = changes.founding_date {
            airline.founding_date = founding_date;
        }
        if let Some(ref website) = changes.website {
            airline.website = website.clone();
        }
        airline.updated_at = Utc::now();
        Ok(Some(airline.clone()))
    }

    async fn delete_airline(&self, id: Uuid) -> Result<Option<Airline>, AppError> {
        let mut tables = self.write()?;
        let Some(pos) = tables.airlines.iter().position(|a| a.id == id) else {
            return Ok(None);
        };
        tables.links.retain(|l| l.airline_id != id);
        Ok(Some(tables.airlines.remove(pos)))
    }

    async fn list_airports(&self) -> Result<Vec<Airport>, AppError> {
        Ok(self.read()?.airports.clone())
    }

    async fn find_airport(&self, id: Uuid) -> Result<Option<Airport>, AppError> {
        Ok(self.read()?.airports.iter().find(|a| a.id == id).cloned())
    }

    async fn find_airport_by_code(&self, code: &str) -> Result<Option<Airport>, AppError> {
        Ok(self.read()?.airports.iter().find(|a| a.code == code).cloned())
    }

    async fn insert_airport(&self, new: &CreateAirport) -> Result<Airport, AppError> {
        let mut tables = self.write()?;
        if tables.airports.iter().any(|a| a.code == new.code) {
            return Err(AppError::Conflict(format!("Airport with code {} already exists", new.code)));
        }
        let now = Utc::now();
        let airport = Airport {
            id: Uuid::new_v4(),
            name: new.name.clone(),
            code: new.code.clone(),
            country: new.country.clone(),
            city: new.city.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.airports.push(airport.clone());
        Ok(airport)
    }

    async fn update_airport(&self, id: Uuid, changes: &UpdateAirport) -> Result<Option<Airport>, AppError> {
        let mut tables = self.write()?;
        if let Some(ref code) = changes.code {
            if tables.airports.iter().any(|a| a.code == *code && a.id != id) {
                return Err(AppError::Conflict(format!("Airport with code {} already exists", code)));
            }
        }
        let Some(airport) = tables.airports.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        if let Some(ref name) = changes.name {
            airport.name = name.clone();
        }
        if let Some(ref code) = changes.code {
            airport.code = code.clone();
        }
        if let Some(ref country) = changes.country {
            airport.country = country.clone();
        }
        if let Some(ref city) = changes.city {
            airport.city = city.clone();
        }
        airport.updated_at = Utc::now();
        Ok(Some(airport.clone()))
    }

    async fn delete_airport(&self, id: Uuid) -> Result<Option<Airport>, AppError> {
        let mut tables = self.write()?;
        let Some(pos) = tables.airports.iter().position(|a| a.id == id) else {
            return Ok(None);
        };
        tables.links.retain(|l| l.airport_id != id);
        Ok(Some(tables.airports.remove(pos)))
    }

    async fn find_link(&self, airline_id: Uuid, airport_id: Uuid) -> Result<Option<AirlineAirport>, AppError> {
        Ok(self
            .read()?
            .links
            .iter()
            .find(|l| l.airline_id == airline_id && l.airport_id == airport_id)
            .cloned())
    }

    async fn linked_airports(&self, airline_id: Uuid) -> Result<Vec<LinkedAirport>, AppError> {
        Ok(self.read()?.linked_airports(airline_id))
    }

    async fn insert_link(&self, airline_id: Uuid, airport_id: Uuid) -> Result<AirlineAirport, AppError> {
        let mut tables = self.write()?;
        if !tables.airlines.iter().any(|a| a.id == airline_id)
            || !tables.airports.iter().any(|a| a.id == airport_id)
        {
            return Err(AppError::NotFound("referenced record not found".into()));
        }
        if tables
            .links
            .iter()
            .any(|l| l.airline_id == airline_id && l.airport_id == airport_id)
        {
            return Err(AppError::Conflict("Airport already associated with airline".into()));
        }
        let link = Tables::new_link(airline_id, airport_id);
        tables.links.push(link.clone());
        Ok(link)
    }

    async fn delete_link(&self, airline_id: Uuid, airport_id: Uuid) -> Result<Option<AirlineAirport>, AppError> {
        let mut tables = self.write()?;
        let pos = tables
            .links
            .iter()
            .position(|l| l.airline_id == airline_id && l.airport_id == airport_id);
        Ok(pos.map(|p| tables.links.remove(p)))
    }

    async fn replace_links(&self, airline_id: Uuid, airport_ids: &[Uuid]) -> Result<Vec<LinkedAirport>, AppError> {
        let mut tables = self.write()?;
        if !tables.airlines.iter().any(|a| a.id == airline_id)
            || !airport_ids.iter().all(|id| tables.airports.iter().any(|a| a.id == *id))
        {
            return Err(AppError::NotFound("referenced record not found".into()));
        }
        for (i, id) in airport_ids.iter().enumerate() {
            if airport_ids[..i].contains(id) {
                return Err(AppError::Conflict("Airport already associated with airline".into()));
            }
        }
        tables.links.retain(|l| l.airline_id != airline_id);
        for airport_id in airport_ids {
            tables.links.push(Tables::new_link(airline_id, *airport_id));
        }
        Ok(tables.linked_airports(airline_id))
    }
}
