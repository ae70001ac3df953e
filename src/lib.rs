//! Airline registry: REST backend for airlines, airports and the links between them.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod validation;

pub use config::{ServerConfig, StoreBackend};
pub use error::{AppError, ConfigError};
pub use migration::{ensure_database_exists, ensure_tables};
pub use routes::{api_routes, app, common_routes};
pub use service::{AirlineAirportService, AirlineService, AirportService};
pub use state::AppState;
pub use store::{MemoryStore, PgStore, Store};
