// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::models::collection::Collection;
use crate::domain::repositories::document_store::DocumentStore;
use axum::{Extension, Json};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

/// 诊断信息中错误消息的最大长度
const ERROR_PREVIEW_CHARS: usize = 50;

/// 存储诊断响应
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    /// 各集合的记录数
    pub collections: BTreeMap<Collection, u64>,
}

/// 根路径横幅
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Interior Quotation System API running" }))
}

/// 存储诊断
///
/// 查询失败时不返回错误状态码，而是把截断后的错误信息写入 `database` 字段
pub async fn diagnostics<S: DocumentStore + 'static>(
    Extension(store): Extension<Arc<S>>,
    Extension(settings): Extension<Arc<Settings>>,
) -> Json<DiagnosticsResponse> {
    let configured = |set: bool| if set { "Set" } else { "Not Set" }.to_string();

    let mut response = DiagnosticsResponse {
        backend: "Running".to_string(),
        database: "Available".to_string(),
        database_url: configured(!settings.database.url.is_empty()),
        database_name: configured(
            settings
                .database
                .name
                .as_deref()
                .is_some_and(|n| !n.is_empty()),
        ),
        connection_status: "Not Connected".to_string(),
        collections: BTreeMap::new(),
    };

    match store.collection_counts().await {
        Ok(counts) => {
            response.database = "Connected & Working".to_string();
            response.connection_status = "Connected".to_string();
            response.collections = counts;
        }
        Err(e) => {
            tracing::warn!("Store diagnostics failed: {}", e);
            let preview: String = e.to_string().chars().take(ERROR_PREVIEW_CHARS).collect();
            response.database = format!("Connected but Error: {}", preview);
        }
    }

    Json(response)
}
