// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use interior_quotes::config::settings::{DatabaseSettings, Settings};
use interior_quotes::infrastructure::database::connection;
use interior_quotes::infrastructure::repositories::document_store_impl::SeaOrmDocumentStore;
use interior_quotes::presentation::routes;
use migration::{Migrator, MigratorTrait};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

/// 创建迁移完成的内存存储
pub async fn create_test_store() -> Arc<SeaOrmDocumentStore> {
    let settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        name: None,
        max_connections: Some(1),
        min_connections: Some(1),
        connect_timeout: Some(5),
        idle_timeout: None,
    };

    let db = connection::create_pool(&settings).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Arc::new(SeaOrmDocumentStore::new(Arc::new(db)))
}

pub fn test_settings() -> Arc<Settings> {
    Arc::new(Settings::defaults().unwrap())
}

pub async fn create_test_app() -> (Router, Arc<SeaOrmDocumentStore>) {
    let store = create_test_store().await;
    let app = routes::routes(store.clone(), test_settings());
    (app, store)
}

/// 发送请求并解析 JSON 响应体
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, json)
}

/// 创建记录并返回新标识符
pub async fn create(app: &Router, uri: &str, body: Value) -> String {
    let (status, json) = send(app, "POST", uri, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected response: {}", json);
    json["id"].as_str().unwrap().to_string()
}
