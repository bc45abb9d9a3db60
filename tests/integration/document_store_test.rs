// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_store;
use interior_quotes::domain::models::collection::Collection;
use interior_quotes::domain::models::document::{Document, Filter};
use interior_quotes::domain::models::record_id::RecordId;
use interior_quotes::domain::repositories::document_store::{DocumentStore, RepositoryError};
use serde_json::{json, Value};

fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        _ => panic!("not an object"),
    }
}

#[tokio::test]
async fn test_create_assigns_unique_ids() {
    let store = create_test_store().await;

    let first = store
        .create(Collection::HouseCategory, doc(json!({ "name": "Apartment" })))
        .await
        .unwrap();
    let second = store
        .create(Collection::HouseCategory, doc(json!({ "name": "Villa" })))
        .await
        .unwrap();

    assert_ne!(first, second);
    assert!(RecordId::parse(&first).is_ok());
}

#[tokio::test]
async fn test_find_returns_insertion_order_with_id() {
    let store = create_test_store().await;

    let mut ids = Vec::new();
    for name in ["A", "B", "C"] {
        ids.push(
            store
                .create(Collection::HouseCategory, doc(json!({ "name": name })))
                .await
                .unwrap(),
        );
    }

    let found = store
        .find(Collection::HouseCategory, &Filter::new())
        .await
        .unwrap();

    let names: Vec<&str> = found.iter().map(|d| d["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    let found_ids: Vec<&str> = found.iter().map(|d| d["id"].as_str().unwrap()).collect();
    assert_eq!(found_ids, ids.iter().map(String::as_str).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_collections_are_isolated() {
    let store = create_test_store().await;

    store
        .create(Collection::HouseCategory, doc(json!({ "name": "Apartment" })))
        .await
        .unwrap();

    let packages = store.find(Collection::Package, &Filter::new()).await.unwrap();
    assert!(packages.is_empty());
}

#[tokio::test]
async fn test_find_by_id_and_fields() {
    let store = create_test_store().await;

    let admin = store
        .create(
            Collection::User,
            doc(json!({ "name": "A1", "email": "a1@x.com", "role": "admin" })),
        )
        .await
        .unwrap();
    store
        .create(
            Collection::User,
            doc(json!({ "name": "E1", "email": "e1@x.com", "role": "employee" })),
        )
        .await
        .unwrap();

    let admin_id = RecordId::parse(&admin).unwrap();
    let by_id = store
        .find(Collection::User, &Filter::by_id(admin_id))
        .await
        .unwrap();
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0]["name"], "A1");

    // Id and field conditions combine
    let none = store
        .find(
            Collection::User,
            &Filter::by_id(admin_id).eq("role", "employee"),
        )
        .await
        .unwrap();
    assert!(none.is_empty());

    // Any accepted spelling of the id finds the record
    let upper = store
        .find(
            Collection::User,
            &Filter::new().eq("id", admin.to_uppercase()),
        )
        .await
        .unwrap();
    assert_eq!(upper.len(), 1);
    assert_eq!(upper[0]["id"], admin.as_str());

    let employees = store
        .find(Collection::User, &Filter::new().eq("role", "employee"))
        .await
        .unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0]["name"], "E1");
}

#[tokio::test]
async fn test_find_one_absent() {
    let store = create_test_store().await;

    let found = store
        .find_one(Collection::Package, &Filter::by_id(RecordId::new()))
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_malformed_id_filter_is_rejected() {
    let store = create_test_store().await;

    let err = store
        .find(Collection::User, &Filter::new().eq("id", "not-an-id"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::InvalidIdentifier(_)));
}

#[tokio::test]
async fn test_client_supplied_id_is_ignored() {
    let store = create_test_store().await;

    let supplied = RecordId::new().to_string();
    let id = store
        .create(
            Collection::HouseCategory,
            doc(json!({ "id": supplied, "name": "Loft" })),
        )
        .await
        .unwrap();

    assert_ne!(id, supplied);
    let found = store
        .find(Collection::HouseCategory, &Filter::new())
        .await
        .unwrap();
    assert_eq!(found[0]["id"], Value::String(id));
}

#[tokio::test]
async fn test_collection_counts() {
    let store = create_test_store().await;

    for name in ["Apartment", "Villa"] {
        store
            .create(Collection::HouseCategory, doc(json!({ "name": name })))
            .await
            .unwrap();
    }

    let counts = store.collection_counts().await.unwrap();
    assert_eq!(counts.len(), Collection::ALL.len());
    assert_eq!(counts[&Collection::HouseCategory], 2);
    assert_eq!(counts[&Collection::Quotation], 0);
}
