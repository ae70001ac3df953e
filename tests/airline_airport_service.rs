mod common;

use airline_registry::service::airline_airport::{AIRPORT_NOT_FOUND, NOT_ASSOCIATED};
use airline_registry::{AirlineAirportService, AirlineService, AirportService, AppError, MemoryStore, Store};
use common::{seed_airline, seed_airport};
use std::collections::HashSet;
use uuid::Uuid;

async fn linked_ids(store: &MemoryStore, airline_id: Uuid) -> HashSet<Uuid> {
    AirlineAirportService::find_airports_from_airline(store, airline_id)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect()
}

#[tokio::test]
async fn attach_then_fetch_returns_the_airport() {
    let store = MemoryStore::new();
    let airline = seed_airline(&store, "Avianca").await;
    let airport = seed_airport(&store, "BOG").await;

    let result = AirlineAirportService::add_airport_to_airline(&store, airline.id, airport.id)
        .await
        .unwrap();
    assert_eq!(result.airline, airline);
    assert_eq!(result.airports.len(), 1);
    assert_eq!(result.airports[0].airport, airport);
    assert!(result.airports[0].link.active);

    let fetched = AirlineAirportService::find_airport_from_airline(&store, airline.id, airport.id)
        .await
        .unwrap();
    assert_eq!(fetched, airport);
}

#[tokio::test]
async fn attach_requires_both_sides() {
    let store = MemoryStore::new();
    let airline = seed_airline(&store, "Avianca").await;
    let airport = seed_airport(&store, "BOG").await;

    let err = AirlineAirportService::add_airport_to_airline(&store, Uuid::new_v4(), airport.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref m) if m == "Airline not found"));

    let err = AirlineAirportService::add_airport_to_airline(&store, airline.id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref m) if m == AIRPORT_NOT_FOUND));
}

#[tokio::test]
async fn attaching_the_same_pair_twice_is_a_conflict() {
    let store = MemoryStore::new();
    let airline = seed_airline(&store, "Avianca").await;
    let airport = seed_airport(&store, "BOG").await;
    AirlineAirportService::add_airport_to_airline(&store, airline.id, airport.id)
        .await
        .unwrap();
    let err = AirlineAirportService::add_airport_to_airline(&store, airline.id, airport.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(store.linked_airports(airline.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn listing_airports_of_missing_airline_is_not_found() {
    let store = MemoryStore::new();
    let err = AirlineAirportService::find_airports_from_airline(&store, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn fetching_an_unlinked_airport_is_not_found() {
    let store = MemoryStore::new();
    let airline = seed_airline(&store, "Avianca").await;
    let airport = seed_airport(&store, "BOG").await;
    let err = AirlineAirportService::find_airport_from_airline(&store, airline.id, airport.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref m) if m == NOT_ASSOCIATED));
}

#[tokio::test]
async fn detach_removes_only_the_targeted_pair() {
    let store = MemoryStore::new();
    let airline = seed_airline(&store, "Avianca").await;
    let bog = seed_airport(&store, "BOG").await;
    let mde = seed_airport(&store, "MDE").await;
    AirlineAirportService::add_airport_to_airline(&store, airline.id, bog.id).await.unwrap();
    AirlineAirportService::add_airport_to_airline(&store, airline.id, mde.id).await.unwrap();

    let removed = AirlineAirportService::delete_airport_from_airline(&store, airline.id, bog.id)
        .await
        .unwrap();
    assert_eq!((removed.airline_id, removed.airport_id), (airline.id, bog.id));

    assert!(matches!(
        AirlineAirportService::find_airport_from_airline(&store, airline.id, bog.id).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(
        AirlineAirportService::find_airport_from_airline(&store, airline.id, mde.id)
            .await
            .unwrap(),
        mde
    );
}

#[tokio::test]
async fn detaching_an_absent_link_is_not_found() {
    let store = MemoryStore::new();
    let airline = seed_airline(&store, "Avianca").await;
    let airport = seed_airport(&store, "BOG").await;
    let err = AirlineAirportService::delete_airport_from_airline(&store, airline.id, airport.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref m) if m == NOT_ASSOCIATED));
}

#[tokio::test]
async fn replace_all_sets_exactly_the_given_airports() {
    let store = MemoryStore::new();
    let airline = seed_airline(&store, "Avianca").await;
    let old = seed_airport(&store, "CLO").await;
    let a = seed_airport(&store, "BOG").await;
    let b = seed_airport(&store, "MDE").await;
    AirlineAirportService::add_airport_to_airline(&store, airline.id, old.id).await.unwrap();

    let result = AirlineAirportService::update_airports_from_airline(&store, airline.id, &[a.id, b.id])
        .await
        .unwrap();
    assert_eq!(result.airports.len(), 2);
    assert!(result.airports.iter().all(|l| l.link.airline_id == airline.id));

    assert_eq!(linked_ids(&store, airline.id).await, HashSet::from([a.id, b.id]));
}

#[tokio::test]
async fn replace_all_with_empty_list_clears_links() {
    let store = MemoryStore::new();
    let airline = seed_airline(&store, "Avianca").await;
    let airport = seed_airport(&store, "BOG").await;
    AirlineAirportService::add_airport_to_airline(&store, airline.id, airport.id).await.unwrap();

    let result = AirlineAirportService::update_airports_from_airline(&store, airline.id, &[])
        .await
        .unwrap();
    assert!(result.airports.is_empty());
    assert!(linked_ids(&store, airline.id).await.is_empty());
}

#[tokio::test]
async fn replace_all_collapses_repeated_ids() {
    let store = MemoryStore::new();
    let airline = seed_airline(&store, "Avianca").await;
    let airport = seed_airport(&store, "BOG").await;
    let result = AirlineAirportService::update_airports_from_airline(&store, airline.id, &[airport.id, airport.id])
        .await
        .unwrap();
    assert_eq!(result.airports.len(), 1);
}

#[tokio::test]
async fn replace_all_with_unknown_airport_keeps_previous_links() {
    let store = MemoryStore::new();
    let airline = seed_airline(&store, "Avianca").await;
    let kept = seed_airport(&store, "BOG").await;
    let other = seed_airport(&store, "MDE").await;
    AirlineAirportService::add_airport_to_airline(&store, airline.id, kept.id).await.unwrap();

    let err = AirlineAirportService::update_airports_from_airline(&store, airline.id, &[other.id, Uuid::new_v4()])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref m) if m == AIRPORT_NOT_FOUND));
    assert_eq!(linked_ids(&store, airline.id).await, HashSet::from([kept.id]));
}

#[tokio::test]
async fn replace_all_on_missing_airline_is_not_found() {
    let store = MemoryStore::new();
    let airport = seed_airport(&store, "BOG").await;
    let err = AirlineAirportService::update_airports_from_airline(&store, Uuid::new_v4(), &[airport.id])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref m) if m == "Airline not found"));
}

#[tokio::test]
async fn deleting_a_parent_drops_its_links() {
    let store = MemoryStore::new();
    let airline = seed_airline(&store, "Avianca").await;
    let airport = seed_airport(&store, "BOG").await;
    AirlineAirportService::add_airport_to_airline(&store, airline.id, airport.id).await.unwrap();

    AirportService::delete(&store, airport.id).await.unwrap();
    assert!(linked_ids(&store, airline.id).await.is_empty());

    AirlineService::delete(&store, airline.id).await.unwrap();
    assert!(store.find_link(airline.id, airport.id).await.unwrap().is_none());
}

/// L1 founded 1990-01-01; A1 ("AAA") and A2 ("BBB"); attach A1, then replace with [A2].
#[tokio::test]
async fn attach_then_replace_scenario() {
    let store = MemoryStore::new();
    let l1 = seed_airline(&store, "L1").await;
    let a1 = seed_airport(&store, "AAA").await;
    let a2 = seed_airport(&store, "BBB").await;

    AirlineAirportService::add_airport_to_airline(&store, l1.id, a1.id).await.unwrap();
    let airports = AirlineAirportService::find_airports_from_airline(&store, l1.id).await.unwrap();
    assert_eq!(airports, vec![a1.clone()]);

    AirlineAirportService::update_airports_from_airline(&store, l1.id, &[a2.id])
        .await
        .unwrap();
    let airports = AirlineAirportService::find_airports_from_airline(&store, l1.id).await.unwrap();
    assert_eq!(airports, vec![a2]);

    assert!(matches!(
        AirlineAirportService::find_airport_from_airline(&store, l1.id, a1.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn replace_all_keeps_request_order() {
    let store = MemoryStore::new();
    let airline = seed_airline(&store, "Viva").await;
    let aaa = seed_airport(&store, "AAA").await;
    let bbb = seed_airport(&store, "BBB").await;
    let ccc = seed_airport(&store, "CCC").await;

    let result = AirlineAirportService::update_airports_from_airline(&store, airline.id, &[ccc.id, bbb.id, aaa.id])
        .await
        .unwrap();
    let codes: Vec<&str> = result.airports.iter().map(|l| l.airport.code.as_str()).collect();
    assert_eq!(codes, vec!["CCC", "BBB", "AAA"]);
}
