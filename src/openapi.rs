//! OpenAPI document for the REST surface, served at `GET /openapi.json`.

use crate::handlers::{airline, airline_airport, airport};
use crate::models::{
    Airline, AirlineAirport, AirlineWithAirports, Airport, CreateAirline, CreateAirport, LinkedAirport,
    ReplaceAirlineAirports, UpdateAirline, UpdateAirport,
};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        airline::create_airline,
        airline::list_airlines,
        airline::get_airline,
        airline::update_airline,
        airline::delete_airline,
        airport::list_airports,
        airport::get_airport,
        airport::create_airport,
        airport::update_airport,
        airport::delete_airport,
        airline_airport::add_airport_to_airline,
        airline_airport::find_airports_from_airline,
        airline_airport::find_airport_from_airline,
        airline_airport::update_airports_from_airline,
        airline_airport::delete_airport_from_airline,
    ),
    components(schemas(
        Airline,
        Airport,
        AirlineAirport,
        LinkedAirport,
        AirlineWithAirports,
        CreateAirline,
        UpdateAirline,
        CreateAirport,
        UpdateAirport,
        ReplaceAirlineAirports,
    )),
    tags(
        (name = "airlines", description = "Airline records"),
        (name = "airports", description = "Airport records"),
        (name = "airline-airports", description = "Links between airlines and airports")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn openapi_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}
