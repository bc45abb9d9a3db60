// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::record_service::{
    decode_all, persist, validate_payload, RecordService, RecordServiceError,
};
use crate::application::dto::user_request::{CreateUserRequestDto, UserQueryDto};
use crate::domain::models::collection::Collection;
use crate::domain::models::document::{from_document, Filter};
use crate::domain::models::record_id::RecordId;
use crate::domain::models::user::User;
use crate::domain::repositories::document_store::{DocumentStore, RepositoryError};
use async_trait::async_trait;
use std::sync::Arc;

/// 用户服务
///
/// 创建用户不涉及跨实体校验；列表可按角色过滤；支持按ID查询单个用户
pub struct UserService<S> {
    store: Arc<S>,
}

impl<S: DocumentStore> UserService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// 根据ID获取用户
    ///
    /// # 返回值
    ///
    /// * `Ok(User)` - 找到的用户
    /// * `Err(RecordServiceError::InvalidIdentifier)` - ID格式错误
    /// * `Err(RecordServiceError::NotFound)` - 用户不存在
    pub async fn get_by_id(&self, id: &str) -> Result<User, RecordServiceError> {
        let id = RecordId::parse(id)?;
        let document = self
            .store
            .find_one(Collection::User, &Filter::by_id(id))
            .await?
            .ok_or(RecordServiceError::NotFound)?;

        from_document(document).map_err(|e| RepositoryError::from(e).into())
    }
}

#[async_trait]
impl<S: DocumentStore + 'static> RecordService for UserService<S> {
    type Payload = CreateUserRequestDto;
    type Query = UserQueryDto;
    type Record = User;

    fn collection(&self) -> Collection {
        Collection::User
    }

    async fn create(&self, payload: CreateUserRequestDto) -> Result<String, RecordServiceError> {
        validate_payload(&payload)?;
        persist(self.store.as_ref(), Collection::User, &payload).await
    }

    async fn list(&self, query: UserQueryDto) -> Result<Vec<User>, RecordServiceError> {
        let filter = Filter::new().eq_opt("role", query.role.map(|role| role.as_str()));
        let documents = self.store.find(Collection::User, &filter).await?;
        decode_all(documents)
    }
}
