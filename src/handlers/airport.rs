//! Airport CRUD handlers.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::{Airport, CreateAirport, UpdateAirport};
use crate::response::{success_many, success_one, success_one_ok};
use crate::service::AirportService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

#[utoipa::path(
    get,
    path = "/airports",
    tag = "airports",
    responses((status = 200, description = "All airports", body = [Airport]))
)]
pub async fn list_airports(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let airports = AirportService::find_all(state.store.as_ref()).await?;
    Ok(success_many(airports))
}

#[utoipa::path(
    get,
    path = "/airports/{airport_id}",
    tag = "airports",
    params(("airport_id" = Uuid, Path, description = "Airport id")),
    responses(
        (status = 200, description = "The airport", body = Airport),
        (status = 404, description = "Airport not found")
    )
)]
pub async fn get_airport(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let airport = AirportService::find_one(state.store.as_ref(), id).await?;
    Ok(success_one_ok(airport))
}

#[utoipa::path(
    post,
    path = "/airports",
    tag = "airports",
    request_body = CreateAirport,
    responses(
        (status = 201, description = "Airport created", body = Airport),
        (status = 400, description = "Code is not exactly 3 characters"),
        (status = 409, description = "Code already in use")
    )
)]
pub async fn create_airport(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateAirport>,
) -> Result<impl IntoResponse, AppError> {
    let airport = AirportService::create(state.store.as_ref(), body).await?;
    Ok(success_one(airport))
}

#[utoipa::path(
    put,
    path = "/airports/{airport_id}",
    tag = "airports",
    params(("airport_id" = Uuid, Path, description = "Airport id")),
    request_body = UpdateAirport,
    responses(
        (status = 200, description = "Updated airport", body = Airport),
        (status = 400, description = "Invalid field value"),
        (status = 404, description = "Airport not found"),
        (status = 409, description = "Code already in use")
    )
)]
pub async fn update_airport(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<UpdateAirport>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let airport = AirportService::update(state.store.as_ref(), id, body).await?;
    Ok(success_one_ok(airport))
}

#[utoipa::path(
    delete,
    path = "/airports/{airport_id}",
    tag = "airports",
    params(("airport_id" = Uuid, Path, description = "Airport id")),
    responses(
        (status = 204, description = "Airport deleted"),
        (status = 404, description = "Airport not found")
    )
)]
pub async fn delete_airport(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    AirportService::delete(state.store.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
