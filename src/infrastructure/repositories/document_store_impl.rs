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

use crate::domain::models::collection::Collection;
use crate::domain::models::document::{Document, Filter, ID_FIELD};
use crate::domain::models::record_id::RecordId;
use crate::domain::repositories::document_store::{DocumentStore, RepositoryError};
use crate::infrastructure::database::entities::document;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use serde::ser::Error as _;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// 文档存储网关实现
///
/// 基于 SeaORM 的 `documents` 表。集合与标识符条件下推到 SQL，
/// 其余精确匹配条件在读取后对 JSON 文档求值。
#[derive(Clone)]
pub struct SeaOrmDocumentStore {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl SeaOrmDocumentStore {
    /// 创建新的文档存储实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 把行转换为对外文档，内部键以字符串 `id` 暴露
    fn normalise(model: document::Model) -> Result<Document, RepositoryError> {
        let mut body = match model.body {
            Value::Object(map) => map,
            other => {
                return Err(serde_json::Error::custom(format!(
                    "document {} is not an object: {}",
                    model.id, other
                ))
                .into())
            }
        };
        body.insert(
            ID_FIELD.to_string(),
            Value::String(RecordId::from(model.id).to_string()),
        );
        Ok(body)
    }
}

#[async_trait]
impl DocumentStore for SeaOrmDocumentStore {
    async fn create(
        &self,
        collection: Collection,
        mut record: Document,
    ) -> Result<String, RepositoryError> {
        // The store owns identifiers
        record.remove(ID_FIELD);

        let id = RecordId::new();
        let model = document::ActiveModel {
            seq: NotSet,
            id: Set(id.as_uuid()),
            collection: Set(collection.name().to_string()),
            body: Set(Value::Object(record)),
            created_at: Set(Utc::now().into()),
        };

        document::Entity::insert(model)
            .exec(self.db.as_ref())
            .await?;

        tracing::debug!("Inserted document {} into {}", id, collection);
        Ok(id.to_string())
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Vec<Document>, RepositoryError> {
        let mut query = document::Entity::find()
            .filter(document::Column::Collection.eq(collection.name()));

        if let Some(id) = filter.id() {
            let id = match id.as_str() {
                Some(raw) => RecordId::parse(raw)?,
                // Store ids are always strings, nothing else can match
                None => return Ok(Vec::new()),
            };
            query = query.filter(document::Column::Id.eq(id.as_uuid()));
        }

        let models = query
            .order_by_asc(document::Column::Seq)
            .all(self.db.as_ref())
            .await?;

        let mut documents = Vec::with_capacity(models.len());
        for model in models {
            let document = Self::normalise(model)?;
            if filter.matches(&document) {
                documents.push(document);
            }
        }

        Ok(documents)
    }

    async fn collection_counts(&self) -> Result<BTreeMap<Collection, u64>, RepositoryError> {
        let rows: Vec<(String, i64)> = document::Entity::find()
            .select_only()
            .column(document::Column::Collection)
            .column_as(Expr::col(document::Column::Seq).count(), "count")
            .group_by(document::Column::Collection)
            .into_tuple()
            .all(self.db.as_ref())
            .await?;

        let mut counts: BTreeMap<Collection, u64> =
            Collection::ALL.into_iter().map(|c| (c, 0)).collect();
        for (name, count) in rows {
            match Collection::from_name(&name) {
                Some(collection) => {
                    counts.insert(collection, u64::try_from(count).unwrap_or(0));
                }
                None => tracing::warn!("Ignoring documents in unknown collection {}", name),
            }
        }

        Ok(counts)
    }
}
