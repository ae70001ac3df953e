//! Handlers for `/airlines/{airline_id}/airports`.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::{AirlineWithAirports, Airport, ReplaceAirlineAirports};
use crate::response::{success_many, success_one, success_one_ok};
use crate::service::AirlineAirportService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

#[utoipa::path(
    post,
    path = "/airlines/{airline_id}/airports/{airport_id}",
    tag = "airline-airports",
    params(
        ("airline_id" = Uuid, Path, description = "Airline id"),
        ("airport_id" = Uuid, Path, description = "Airport id")
    ),
    responses(
        (status = 201, description = "Airline with its linked airports", body = AirlineWithAirports),
        (status = 404, description = "Airline or airport not found"),
        (status = 409, description = "Airport already associated with airline")
    )
)]
pub async fn add_airport_to_airline(
    State(state): State<AppState>,
    Path((airline_id, airport_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let airline_id = parse_id(&airline_id)?;
    let airport_id = parse_id(&airport_id)?;
    let airline = AirlineAirportService::add_airport_to_airline(state.store.as_ref(), airline_id, airport_id).await?;
    Ok(success_one(airline))
}

#[utoipa::path(
    get,
    path = "/airlines/{airline_id}/airports",
    tag = "airline-airports",
    params(("airline_id" = Uuid, Path, description = "Airline id")),
    responses(
        (status = 200, description = "Airports linked to the airline", body = [Airport]),
        (status = 404, description = "Airline not found")
    )
)]
pub async fn find_airports_from_airline(
    State(state): State<AppState>,
    Path(airline_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let airline_id = parse_id(&airline_id)?;
    let airports = AirlineAirportService::find_airports_from_airline(state.store.as_ref(), airline_id).await?;
    Ok(success_many(airports))
}

#[utoipa::path(
    get,
    path = "/airlines/{airline_id}/airports/{airport_id}",
    tag = "airline-airports",
    params(
        ("airline_id" = Uuid, Path, description = "Airline id"),
        ("airport_id" = Uuid, Path, description = "Airport id")
    ),
    responses(
        (status = 200, description = "The linked airport", body = Airport),
        (status = 404, description = "Airport not associated with airline")
    )
)]
pub async fn find_airport_from_airline(
    State(state): State<AppState>,
    Path((airline_id, airport_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let airline_id = parse_id(&airline_id)?;
    let airport_id = parse_id(&airport_id)?;
    let airport = AirlineAirportService::find_airport_from_airline(state.store.as_ref(), airline_id, airport_id).await?;
    Ok(success_one_ok(airport))
}

#[utoipa::path(
    put,
    path = "/airlines/{airline_id}/airports",
    tag = "airline-airports",
    params(("airline_id" = Uuid, Path, description = "Airline id")),
    request_body = ReplaceAirlineAirports,
    responses(
        (status = 200, description = "Airline with its new link set", body = AirlineWithAirports),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "Airline or one of the airports not found")
    )
)]
pub async fn update_airports_from_airline(
    State(state): State<AppState>,
    Path(airline_id): Path<String>,
    JsonBody(body): JsonBody<ReplaceAirlineAirports>,
) -> Result<impl IntoResponse, AppError> {
    let airline_id = parse_id(&airline_id)?;
    let airline =
        AirlineAirportService::update_airports_from_airline(state.store.as_ref(), airline_id, &body.airport_ids)
            .await?;
    Ok(success_one_ok(airline))
}

#[utoipa::path(
    delete,
    path = "/airlines/{airline_id}/airports/{airport_id}",
    tag = "airline-airports",
    params(
        ("airline_id" = Uuid, Path, description = "Airline id"),
        ("airport_id" = Uuid, Path, description = "Airport id")
    ),
    responses(
        (status = 204, description = "Link removed"),
        (status = 404, description = "Airport not associated with airline")
    )
)]
pub async fn delete_airport_from_airline(
    State(state): State<AppState>,
    Path((airline_id, airport_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let airline_id = parse_id(&airline_id)?;
    let airport_id = parse_id(&airport_id)?;
    AirlineAirportService::delete_airport_from_airline(state.store.as_ref(), airline_id, airport_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
