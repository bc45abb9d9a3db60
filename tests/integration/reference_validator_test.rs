// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_store;
use interior_quotes::domain::models::collection::Collection;
use interior_quotes::domain::models::document::Document;
use interior_quotes::domain::models::record_id::RecordId;
use interior_quotes::domain::repositories::document_store::DocumentStore;
use interior_quotes::domain::services::reference_validator::{
    ReferenceError, ReferenceKind, ReferenceValidator,
};
use interior_quotes::infrastructure::repositories::document_store_impl::SeaOrmDocumentStore;
use serde_json::{json, Value};

async fn insert(store: &SeaOrmDocumentStore, collection: Collection, value: Value) -> String {
    let document: Document = match value {
        Value::Object(map) => map,
        _ => panic!("not an object"),
    };
    store.create(collection, document).await.unwrap()
}

#[tokio::test]
async fn test_existing_reference_is_canonicalised() {
    let store = create_test_store().await;
    let validator = ReferenceValidator::new(store.clone());

    let id = insert(&store, Collection::HouseCategory, json!({ "name": "Villa" })).await;

    // Uppercase and padded forms refer to the same record
    let raw = format!("  {}  ", id.to_uppercase());
    let checked = validator
        .ensure_exists(ReferenceKind::HouseCategory, &raw)
        .await
        .unwrap();
    assert_eq!(checked.to_string(), id);
}

#[tokio::test]
async fn test_missing_reference() {
    let store = create_test_store().await;
    let validator = ReferenceValidator::new(store);

    let err = validator
        .ensure_exists(ReferenceKind::Subcategory, &RecordId::new().to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, ReferenceError::NotFound(ReferenceKind::Subcategory)));
    assert_eq!(err.to_string(), "Subcategory not found");
}

#[tokio::test]
async fn test_malformed_reference() {
    let store = create_test_store().await;
    let validator = ReferenceValidator::new(store);

    let err = validator
        .ensure_exists(ReferenceKind::Package, "xyz")
        .await
        .unwrap_err();
    assert!(matches!(err, ReferenceError::InvalidIdentifier(_)));
}

#[tokio::test]
async fn test_admin_is_not_an_employee() {
    let store = create_test_store().await;
    let validator = ReferenceValidator::new(store.clone());

    let admin = insert(
        &store,
        Collection::User,
        json!({ "name": "A1", "email": "a1@x.com", "role": "admin" }),
    )
    .await;

    let err = validator
        .ensure_exists(ReferenceKind::Employee, &admin)
        .await
        .unwrap_err();
    assert!(matches!(err, ReferenceError::NotFound(ReferenceKind::Employee)));
}

#[tokio::test]
async fn test_reference_kind_selects_collection() {
    let store = create_test_store().await;
    let validator = ReferenceValidator::new(store.clone());

    // A house category id is not a subcategory
    let category = insert(&store, Collection::HouseCategory, json!({ "name": "Villa" })).await;
    let err = validator
        .ensure_exists(ReferenceKind::Subcategory, &category)
        .await
        .unwrap_err();
    assert!(matches!(err, ReferenceError::NotFound(ReferenceKind::Subcategory)));
}

#[tokio::test]
async fn test_quotation_references_check_in_order() {
    let store = create_test_store().await;
    let validator = ReferenceValidator::new(store.clone());

    let employee = insert(
        &store,
        Collection::User,
        json!({ "name": "E1", "email": "e1@x.com", "role": "employee" }),
    )
    .await;
    let category = insert(&store, Collection::HouseCategory, json!({ "name": "Villa" })).await;
    let subcategory = insert(
        &store,
        Collection::Subcategory,
        json!({ "name": "Kitchen", "house_category_id": category }),
    )
    .await;
    let package = insert(
        &store,
        Collection::Package,
        json!({ "name": "Basic", "subcategory_id": subcategory, "price": 500.0 }),
    )
    .await;

    let references = validator
        .ensure_quotation_references(&employee, &category, &subcategory, &[&package, &package])
        .await
        .unwrap();
    assert_eq!(references.employee_id.to_string(), employee);
    assert_eq!(references.package_ids.len(), 2);

    // Both the employee and a package are missing; the employee is reported first
    let missing = RecordId::new().to_string();
    let err = validator
        .ensure_quotation_references(&missing, &category, &subcategory, &[&missing])
        .await
        .unwrap_err();
    assert!(matches!(err, ReferenceError::NotFound(ReferenceKind::Employee)));

    let err = validator
        .ensure_quotation_references(&employee, &category, &subcategory, &[&package, &missing])
        .await
        .unwrap_err();
    assert!(matches!(err, ReferenceError::NotFound(ReferenceKind::Package)));
}
