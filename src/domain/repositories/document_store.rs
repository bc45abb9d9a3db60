// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::collection::Collection;
use crate::domain::models::document::{Document, Filter};
use crate::domain::models::record_id::InvalidIdentifier;
use async_trait::async_trait;
use sea_orm::DbErr;
use std::collections::BTreeMap;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 文档序列化错误
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// 过滤器中的标识符无法解析
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),
}

/// 文档存储网关特质
///
/// 定义对命名集合的通用创建与查询接口。返回的文档中，
/// 存储层的内部键统一以字符串 `id` 字段暴露。
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// 创建文档
    ///
    /// # 参数
    ///
    /// * `collection` - 目标集合
    /// * `record` - 文档内容，其中的 `id` 字段会被忽略
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 新分配的标识符
    /// * `Err(RepositoryError)` - 写入失败
    async fn create(&self, collection: Collection, record: Document)
        -> Result<String, RepositoryError>;

    /// 按过滤器查询文档，结果保持插入顺序
    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Vec<Document>, RepositoryError>;

    /// 查询第一个匹配的文档
    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Document>, RepositoryError> {
        Ok(self.find(collection, filter).await?.into_iter().next())
    }

    /// 统计每个集合的文档数量，空集合计为 0
    async fn collection_counts(&self) -> Result<BTreeMap<Collection, u64>, RepositoryError>;
}
