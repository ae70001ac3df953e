#![allow(dead_code)]

use airline_registry::models::{Airline, Airport, CreateAirline, CreateAirport};
use airline_registry::{AirlineService, AirportService, Store};

pub fn airline_body(name: &str, founding_date: &str) -> CreateAirline {
    CreateAirline {
        name: name.to_string(),
        description: format!("{} description", name),
        founding_date: founding_date.to_string(),
        website: "https://www.example-air.com".to_string(),
    }
}

pub fn airport_body(code: &str) -> CreateAirport {
    CreateAirport {
        name: format!("{} International", code),
        code: code.to_string(),
        country: "Colombia".to_string(),
        city: "Bogotá".to_string(),
    }
}

pub async fn seed_airline(store: &dyn Store, name: &str) -> Airline {
    AirlineService::create(store, airline_body(name, "1990-01-01"))
        .await
        .expect("seed airline")
}

pub async fn seed_airport(store: &dyn Store, code: &str) -> Airport {
    AirportService::create(store, airport_body(code))
        .await
        .expect("seed airport")
}
