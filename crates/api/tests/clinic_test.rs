mod test_utils;

use axum::http::StatusCode;
use carebook_core::models::clinic::{Professional, SpecialtiesResponse, Specialty};
use carebook_db::{mock::repositories::MockSlotStore, models::DbSpecialty};
use chrono::Utc;
use mockall::predicate::{eq, ne};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use uuid::Uuid;

use test_utils::{BUFFER_MINUTES, professional, server, specialty};

#[tokio::test]
async fn test_create_specialty() {
    let mut store = MockSlotStore::new();
    store
        .expect_create_specialty()
        .with(eq("Cardiology".to_string()), eq(40))
        .times(1)
        .returning(|name, duration_minutes| {
            Ok(DbSpecialty {
                id: Uuid::new_v4(),
                name,
                duration_minutes,
                created_at: Utc::now(),
            })
        });

    let server = server(store, BUFFER_MINUTES);
    let response = server
        .post("/api/specialties")
        .json(&json!({ "name": "  Cardiology ", "duration_minutes": 40 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json::<Specialty>();
    assert_eq!(body.name, "Cardiology");
    assert_eq!(body.duration_minutes, 40);
}

#[rstest]
#[case::zero_duration(json!({ "name": "Cardiology", "duration_minutes": 0 }))]
#[case::negative_duration(json!({ "name": "Cardiology", "duration_minutes": -10 }))]
#[case::blank_name(json!({ "name": "   ", "duration_minutes": 30 }))]
#[tokio::test]
async fn test_create_specialty_validation(#[case] payload: serde_json::Value) {
    let mut store = MockSlotStore::new();
    store.expect_create_specialty().never();

    let server = server(store, BUFFER_MINUTES);
    let response = server.post("/api/specialties").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_and_get_specialties() {
    let dermatology = specialty(15);
    let dermatology_id = dermatology.id;
    let listed = vec![dermatology.clone()];

    let mut store = MockSlotStore::new();
    store
        .expect_list_specialties()
        .returning(move || Ok(listed.clone()));
    store
        .expect_get_specialty()
        .with(eq(dermatology_id))
        .returning(move |_| Ok(Some(dermatology.clone())));
    store
        .expect_get_specialty()
        .with(ne(dermatology_id))
        .returning(|_| Ok(None));

    let server = server(store, BUFFER_MINUTES);

    let response = server.get("/api/specialties").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<SpecialtiesResponse>().specialties.len(), 1);

    let response = server.get(&format!("/api/specialties/{}", dermatology_id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Specialty>().duration_minutes, 15);

    let response = server.get(&format!("/api/specialties/{}", Uuid::new_v4())).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_professional_with_unknown_specialty() {
    let mut store = MockSlotStore::new();
    store.expect_get_specialty().returning(|_| Ok(None));
    store.expect_create_professional().never();

    let server = server(store, BUFFER_MINUTES);
    let response = server
        .post("/api/professionals")
        .json(&json!({ "name": "Dr. Lee", "specialty_id": Uuid::new_v4() }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_and_get_professional() {
    let created = professional(None);
    let created_id = created.id;
    let fetched = created.clone();

    let mut store = MockSlotStore::new();
    store
        .expect_create_professional()
        .with(eq("Dr. Ana Souza".to_string()), eq(None))
        .returning(move |_, _| Ok(created.clone()));
    store
        .expect_get_professional()
        .with(eq(created_id))
        .returning(move |_| Ok(Some(fetched.clone())));

    let server = server(store, BUFFER_MINUTES);

    let response = server
        .post("/api/professionals")
        .json(&json!({ "name": "Dr. Ana Souza" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Professional>().id, created_id);

    let response = server.get(&format!("/api/professionals/{}", created_id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Professional>().name, "Dr. Ana Souza");
}

#[tokio::test]
async fn test_health_reports_buffer() {
    let server = server(MockSlotStore::new(), 25);
    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["buffer_minutes"], 25);
}
