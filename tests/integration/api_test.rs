// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::helpers::{create, create_test_app, send};
use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

/// 健康检查测试
#[tokio::test]
async fn health_check_works() {
    let (app, _) = create_test_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("OK"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (app, _) = create_test_app().await;

    let (status, _) = send(&app, "GET", "/version", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_root_banner() {
    let (app, _) = create_test_app().await;

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Interior Quotation System API running");
}

#[tokio::test]
async fn test_diagnostics_reports_counts() {
    let (app, _) = create_test_app().await;
    create(&app, "/house-categories", json!({ "name": "Villa" })).await;

    let (status, body) = send(&app, "GET", "/test", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "Running");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["database_url"], "Set");
    assert_eq!(body["database_name"], "Not Set");
    assert_eq!(body["collections"]["housecategory"], 1);
    assert_eq!(body["collections"]["quotation"], 0);
}

/// 完整报价流程
///
/// 创建员工、房屋类别、子类别、套餐和报价单，然后按员工列出报价单
#[tokio::test]
async fn test_quotation_workflow() {
    let (app, _) = create_test_app().await;

    let employee = create(
        &app,
        "/users",
        json!({ "name": "E1", "email": "e1@x.com", "role": "employee" }),
    )
    .await;
    let category = create(&app, "/house-categories", json!({ "name": "Villa" })).await;
    let subcategory = create(
        &app,
        "/subcategories",
        json!({ "name": "Kitchen", "house_category_id": category }),
    )
    .await;
    let package = create(
        &app,
        "/packages",
        json!({ "name": "Basic", "subcategory_id": subcategory, "price": 500 }),
    )
    .await;
    let quotation = create(
        &app,
        "/quotations",
        json!({
            "employee_id": employee,
            "client_name": "C1",
            "house_category_id": category,
            "subcategory_id": subcategory,
            "items": [{ "package_id": package, "quantity": 2, "unit_price": 500 }],
            "discount_percent": 10
        }),
    )
    .await;

    let (status, body) = send(
        &app,
        "GET",
        &format!("/quotations?employee_id={}", employee),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], quotation.as_str());
    assert_eq!(listed[0]["client_name"], "C1");
    assert_eq!(listed[0]["subtotal"].as_f64(), Some(1000.0));
    assert_eq!(listed[0]["discount_amount"].as_f64(), Some(100.0));
    assert_eq!(listed[0]["total"].as_f64(), Some(900.0));
    assert_eq!(listed[0]["items"][0]["package_id"], package.as_str());

    let (_, packages) = send(
        &app,
        "GET",
        &format!("/packages?subcategory_id={}", subcategory),
        None,
    )
    .await;
    assert_eq!(packages[0]["price"].as_f64(), Some(500.0));
    assert_eq!(packages[0]["features"], json!([]));
}

#[tokio::test]
async fn test_users_role_filter_and_lookup() {
    let (app, _) = create_test_app().await;

    let admin = create(
        &app,
        "/users",
        json!({ "name": "A1", "email": "a1@x.com", "role": "admin" }),
    )
    .await;
    create(
        &app,
        "/users",
        json!({ "name": "E1", "email": "e1@x.com", "role": "employee" }),
    )
    .await;

    let (status, body) = send(&app, "GET", "/users?role=employee", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "E1");

    let (_, body) = send(&app, "GET", "/users", None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send(&app, "GET", &format!("/users/{}", admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "admin");
    assert_eq!(body["is_active"], true);
}

#[tokio::test]
async fn test_get_user_errors() {
    let (app, _) = create_test_app().await;

    let (status, body) = send(&app, "GET", "/users/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid id"));

    let (status, _) = send(&app, "GET", &format!("/users/{}", Uuid::new_v4()), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_reference_is_not_found() {
    let (app, _) = create_test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/subcategories",
        Some(json!({ "name": "Kitchen", "house_category_id": Uuid::new_v4().to_string() })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "House category not found");
    assert_eq!(body["kind"], "house_category");

    let (_, listed) = send(&app, "GET", "/subcategories", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_invalid_requests_are_bad_requests() {
    let (app, _) = create_test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/subcategories",
        Some(json!({ "name": "Kitchen", "house_category_id": "not-an-id" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/users",
        Some(json!({ "name": "E1", "email": "not-an-email", "role": "employee" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/quotations?employee_id=xyz", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_role_is_rejected_by_extractor() {
    let (app, _) = create_test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/users",
        Some(json!({ "name": "X", "email": "x@x.com", "role": "owner" })),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_unpriceable_quotation_is_bad_request() {
    let (app, _) = create_test_app().await;

    let employee = create(
        &app,
        "/users",
        json!({ "name": "E1", "email": "e1@x.com", "role": "employee" }),
    )
    .await;
    let category = create(&app, "/house-categories", json!({ "name": "Villa" })).await;
    let subcategory = create(
        &app,
        "/subcategories",
        json!({ "name": "Kitchen", "house_category_id": category }),
    )
    .await;
    let package = create(
        &app,
        "/packages",
        json!({ "name": "Basic", "subcategory_id": subcategory, "price": 500 }),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        "/quotations",
        Some(json!({
            "employee_id": employee,
            "client_name": "C1",
            "house_category_id": category,
            "subcategory_id": subcategory,
            "items": [{ "package_id": package, "quantity": 1000, "unit_price": 1e27 }],
            "discount_percent": 100
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("out of range"));

    let (status, listed) = send(&app, "GET", "/quotations", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}
