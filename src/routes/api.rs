//! Airline, airport and airline-airport routes.
//! Every path segment under `/airlines/` uses the same parameter name so the routes can share one tree.

use crate::handlers::airline::{create_airline, delete_airline, get_airline, list_airlines, update_airline};
use crate::handlers::airline_airport::{
    add_airport_to_airline, delete_airport_from_airline, find_airport_from_airline, find_airports_from_airline,
    update_airports_from_airline,
};
use crate::handlers::airport::{create_airport, delete_airport, get_airport, list_airports, update_airport};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/airlines", get(list_airlines).post(create_airline))
        .route(
            "/airlines/:airline_id",
            get(get_airline).put(update_airline).delete(delete_airline),
        )
        .route(
            "/airlines/:airline_id/airports",
            get(find_airports_from_airline).put(update_airports_from_airline),
        )
        .route(
            "/airlines/:airline_id/airports/:airport_id",
            get(find_airport_from_airline)
                .post(add_airport_to_airline)
                .delete(delete_airport_from_airline),
        )
        .route("/airports", get(list_airports).post(create_airport))
        .route(
            "/airports/:airport_id",
            get(get_airport).put(update_airport).delete(delete_airport),
        )
        .with_state(state)
}
