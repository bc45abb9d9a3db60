// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::use_cases::record_service::RecordServiceError;
use crate::domain::repositories::document_store::RepositoryError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    /// 错误对应的 HTTP 状态码
    pub fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<RecordServiceError>() {
            Some(RecordServiceError::Validation(_))
            | Some(RecordServiceError::InvalidIdentifier(_)) => StatusCode::BAD_REQUEST,
            Some(RecordServiceError::ReferenceNotFound(_)) | Some(RecordServiceError::NotFound) => {
                StatusCode::NOT_FOUND
            }
            Some(RecordServiceError::Amount(_)) | Some(RecordServiceError::Repository(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            None => match self.0.downcast_ref::<RepositoryError>() {
                Some(RepositoryError::InvalidIdentifier(_)) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = self.0.to_string();

        if status.is_server_error() {
            tracing::error!("Request failed: {:#}", self.0);
        }

        let body = match self.0.downcast_ref::<RecordServiceError>() {
            Some(RecordServiceError::ReferenceNotFound(kind)) => {
                json!({ "error": error_message, "kind": kind.as_str() })
            }
            _ => json!({ "error": error_message }),
        };

        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
