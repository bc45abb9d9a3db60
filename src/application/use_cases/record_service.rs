// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::collection::Collection;
use crate::domain::models::document::{from_document, to_document, Document};
use crate::domain::models::record_id::{InvalidIdentifier, RecordId};
use crate::domain::repositories::document_store::{DocumentStore, RepositoryError};
use crate::domain::services::quotation_aggregator::AmountOverflow;
use crate::domain::services::reference_validator::{ReferenceError, ReferenceKind};
use crate::infrastructure::metrics;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use validator::Validate;

/// 记录服务错误类型
#[derive(Error, Debug)]
pub enum RecordServiceError {
    /// 请求字段校验失败
    #[error("Validation failed: {0}")]
    Validation(String),
    /// 标识符无法解析为存储键
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),
    /// 被引用实体不存在
    #[error("{} not found", .0.label())]
    ReferenceNotFound(ReferenceKind),
    /// 按标识符查询未找到记录
    #[error("Record not found")]
    NotFound,
    /// 已存储记录的金额无法计算
    #[error(transparent)]
    Amount(#[from] AmountOverflow),
    /// 存储层错误
    #[error("Repository error: {0}")]
    Repository(#[source] RepositoryError),
}

impl From<RepositoryError> for RecordServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::InvalidIdentifier(e) => Self::InvalidIdentifier(e),
            other => Self::Repository(other),
        }
    }
}

impl From<ReferenceError> for RecordServiceError {
    fn from(err: ReferenceError) -> Self {
        match err {
            ReferenceError::InvalidIdentifier(e) => Self::InvalidIdentifier(e),
            ReferenceError::NotFound(kind) => {
                metrics::reference_rejected(kind);
                Self::ReferenceNotFound(kind)
            }
            ReferenceError::Repository(e) => e.into(),
        }
    }
}

/// 记录服务特质
///
/// 每个实体一个实现，构成编译期确定的封闭集合。
/// 创建返回新记录的标识符，列表按可选过滤条件返回记录。
#[async_trait]
pub trait RecordService: Send + Sync {
    /// 创建请求
    type Payload: DeserializeOwned + Send + 'static;
    /// 列表查询参数
    type Query: DeserializeOwned + Send + 'static;
    /// 返回给调用方的记录
    type Record: Serialize + Send + 'static;

    /// 集合
    fn collection(&self) -> Collection;

    /// 校验并创建记录
    async fn create(&self, payload: Self::Payload) -> Result<String, RecordServiceError>;

    /// 列出记录
    async fn list(&self, query: Self::Query) -> Result<Vec<Self::Record>, RecordServiceError>;
}

/// 运行请求DTO上的字段校验
pub(crate) fn validate_payload<T: Validate>(payload: &T) -> Result<(), RecordServiceError> {
    payload
        .validate()
        .map_err(|e| RecordServiceError::Validation(e.to_string()))
}

/// 解析列表过滤中的可选标识符，空字符串视为未提供
pub(crate) fn parse_filter_id(value: Option<String>) -> Result<Option<RecordId>, InvalidIdentifier> {
    match value {
        Some(raw) if !raw.trim().is_empty() => RecordId::parse(&raw).map(Some),
        _ => Ok(None),
    }
}

/// 将文档解码为类型化记录
pub(crate) fn decode_all<T: DeserializeOwned>(
    documents: Vec<Document>,
) -> Result<Vec<T>, RecordServiceError> {
    documents
        .into_iter()
        .map(|document| {
            from_document(document)
                .map_err(|e| RecordServiceError::from(RepositoryError::from(e)))
        })
        .collect()
}

/// 持久化已通过校验的请求
pub(crate) async fn persist<S, T>(
    store: &S,
    collection: Collection,
    payload: &T,
) -> Result<String, RecordServiceError>
where
    S: DocumentStore + ?Sized,
    T: Serialize + Sync,
{
    let document = to_document(payload).map_err(RepositoryError::from)?;
    let id = store.create(collection, document).await?;

    metrics::record_created(collection);
    tracing::info!("Created {} record {}", collection, id);
    Ok(id)
}
