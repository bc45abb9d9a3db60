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

use crate::application::use_cases::record_service::RecordService;
use crate::presentation::errors::AppError;
use axum::{extract::Query, http::StatusCode, Extension, Json};
use serde::Serialize;
use std::sync::Arc;

/// 创建成功响应
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    /// 新记录的标识符
    pub id: String,
}

/// 创建记录处理器
///
/// 每个实体服务各自实例化一次，路由在编译期绑定具体服务类型
pub async fn create_record<R: RecordService + 'static>(
    Extension(service): Extension<Arc<R>>,
    Json(payload): Json<R::Payload>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// 列出记录处理器
pub async fn list_records<R: RecordService + 'static>(
    Extension(service): Extension<Arc<R>>,
    Query(query): Query<R::Query>,
) -> Result<Json<Vec<R::Record>>, AppError> {
    let records = service.list(query).await?;
    tracing::debug!("Listed {} {} records", records.len(), service.collection());
    Ok(Json(records))
}
