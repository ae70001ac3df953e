mod common;

use airline_registry::models::UpdateAirport;
use airline_registry::{AirportService, AppError, MemoryStore};
use common::{airport_body, seed_airport};
use uuid::Uuid;

#[tokio::test]
async fn create_with_unique_code_succeeds() {
    let store = MemoryStore::new();
    let airport = AirportService::create(&store, airport_body("BOG")).await.unwrap();
    assert_eq!(airport.code, "BOG");
    assert_eq!(AirportService::find_one(&store, airport.id).await.unwrap(), airport);
}

#[tokio::test]
async fn create_with_taken_code_is_a_conflict() {
    let store = MemoryStore::new();
    seed_airport(&store, "MDE").await;
    let mut body = airport_body("MDE");
    body.name = "Another".into();
    let err = AirportService::create(&store, body).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(ref m) if m.contains("MDE")));
    assert_eq!(AirportService::find_all(&store).await.unwrap().len(), 1);
}

#[tokio::test]
async fn code_length_is_checked_before_persisting() {
    let store = MemoryStore::new();
    for code in ["", "BO", "BOGO", "ABCDE"] {
        let err = AirportService::create(&store, airport_body(code)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "code {:?}", code);
    }
    assert!(AirportService::find_all(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_airport_is_not_found_everywhere() {
    let store = MemoryStore::new();
    let id = Uuid::new_v4();
    assert!(matches!(AirportService::find_one(&store, id).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        AirportService::update(&store, id, UpdateAirport::default()).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(AirportService::delete(&store, id).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn update_applies_partial_changes() {
    let store = MemoryStore::new();
    let airport = seed_airport(&store, "CLO").await;
    let updated = AirportService::update(
        &store,
        airport.id,
        UpdateAirport {
            city: Some("Palmira".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.city, "Palmira");
    assert_eq!(updated.code, "CLO");
}

#[tokio::test]
async fn update_validates_code_length() {
    let store = MemoryStore::new();
    let airport = seed_airport(&store, "CLO").await;
    let err = AirportService::update(
        &store,
        airport.id,
        UpdateAirport {
            code: Some("CLOX".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn update_to_taken_code_is_rejected_by_the_store() {
    let store = MemoryStore::new();
    seed_airport(&store, "CTG").await;
    let other = seed_airport(&store, "SMR").await;
    let err = AirportService::update(
        &store,
        other.id,
        UpdateAirport {
            code: Some("CTG".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn delete_removes_airport() {
    let store = MemoryStore::new();
    let airport = seed_airport(&store, "ADZ").await;
    let deleted = AirportService::delete(&store, airport.id).await.unwrap();
    assert_eq!(deleted.code, "ADZ");
    assert!(AirportService::find_all(&store).await.unwrap().is_empty());
}
