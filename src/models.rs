//! Records, request bodies and composite responses.
//! JSON uses camelCase keys; table columns are snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Airline {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub founding_date: DateTime<Utc>,
    pub website: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    pub id: Uuid,
    pub name: String,
    /// IATA-style three character code, unique across airports.
    pub code: String,
    pub country: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Join row keyed by `(airline_id, airport_id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AirlineAirport {
    pub airline_id: Uuid,
    pub airport_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A link together with the airport it points to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LinkedAirport {
    #[serde(flatten)]
    pub link: AirlineAirport,
    pub airport: Airport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AirlineWithAirports {
    #[serde(flatten)]
    pub airline: Airline,
    pub airports: Vec<LinkedAirport>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAirline {
    pub name: String,
    pub description: String,
    /// ISO 8601 date or date-time; must be in the past.
    pub founding_date: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAirline {
    pub name: Option<String>,
    pub description: Option<String>,
    pub founding_date: Option<String>,
    pub website: Option<String>,
}

/// Validated airline ready for insert.
#[derive(Debug, Clone)]
pub struct NewAirline {
    pub name: String,
    pub description: String,
    pub founding_date: DateTime<Utc>,
    pub website: String,
}

/// Validated partial airline update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct AirlineChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub founding_date: Option<DateTime<Utc>>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAirport {
    pub name: String,
    pub code: String,
    pub country: String,
    pub city: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateAirport {
    pub name: Option<String>,
    pub code: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceAirlineAirports {
    pub airport_ids: Vec<Uuid>,
}
