//! Airline CRUD handlers.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::{Airline, CreateAirline, UpdateAirline};
use crate::response::{success_many, success_one, success_one_ok};
use crate::service::AirlineService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

#[utoipa::path(
    post,
    path = "/airlines",
    tag = "airlines",
    request_body = CreateAirline,
    responses(
        (status = 201, description = "Airline created", body = Airline),
        (status = 400, description = "Founding date not in the past or malformed body")
    )
)]
pub async fn create_airline(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateAirline>,
) -> Result<impl IntoResponse, AppError> {
    let airline = AirlineService::create(state.store.as_ref(), body).await?;
    Ok(success_one(airline))
}

#[utoipa::path(
    get,
    path = "/airlines",
    tag = "airlines",
    responses((status = 200, description = "All airlines", body = [Airline]))
)]
pub async fn list_airlines(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let airlines = AirlineService::find_all(state.store.as_ref()).await?;
    Ok(success_many(airlines))
}

#[utoipa::path(
    get,
    path = "/airlines/{airline_id}",
    tag = "airlines",
    params(("airline_id" = Uuid, Path, description = "Airline id")),
    responses(
        (status = 200, description = "The airline", body = Airline),
        (status = 404, description = "Airline not found")
    )
)]
pub async fn get_airline(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let airline = AirlineService::find_one(state.store.as_ref(), id).await?;
    Ok(success_one_ok(airline))
}

#[utoipa::path(
    put,
    path = "/airlines/{airline_id}",
    tag = "airlines",
    params(("airline_id" = Uuid, Path, description = "Airline id")),
    request_body = UpdateAirline,
    responses(
        (status = 200, description = "Updated airline", body = Airline),
        (status = 400, description = "Invalid field value"),
        (status = 404, description = "Airline not found")
    )
)]
pub async fn update_airline(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<UpdateAirline>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let airline = AirlineService::update(state.store.as_ref(), id, body).await?;
    Ok(success_one_ok(airline))
}

#[utoipa::path(
    delete,
    path = "/airlines/{airline_id}",
    tag = "airlines",
    params(("airline_id" = Uuid, Path, description = "Airline id")),
    responses(
        (status = 204, description = "Airline deleted"),
        (status = 404, description = "Airline not found")
    )
)]
pub async fn delete_airline(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    AirlineService::delete(state.store.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
