// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::record_service::{
    decode_all, parse_filter_id, persist, validate_payload, RecordService, RecordServiceError,
};
use crate::application::dto::catalogue_request::{
    CreateSubcategoryRequestDto, SubcategoryQueryDto,
};
use crate::domain::models::catalogue::Subcategory;
use crate::domain::models::collection::Collection;
use crate::domain::models::document::Filter;
use crate::domain::repositories::document_store::DocumentStore;
use crate::domain::services::reference_validator::{ReferenceKind, ReferenceValidator};
use async_trait::async_trait;
use std::sync::Arc;

/// 子类别服务
///
/// 创建前确认所属房屋类别存在
pub struct SubcategoryService<S> {
    store: Arc<S>,
    validator: ReferenceValidator<S>,
}

impl<S: DocumentStore> SubcategoryService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            validator: ReferenceValidator::new(store.clone()),
            store,
        }
    }
}

#[async_trait]
impl<S: DocumentStore + 'static> RecordService for SubcategoryService<S> {
    type Payload = CreateSubcategoryRequestDto;
    type Query = SubcategoryQueryDto;
    type Record = Subcategory;

    fn collection(&self) -> Collection {
        Collection::Subcategory
    }

    async fn create(
        &self,
        mut payload: CreateSubcategoryRequestDto,
    ) -> Result<String, RecordServiceError> {
        validate_payload(&payload)?;

        let house_category_id = self
            .validator
            .ensure_exists(ReferenceKind::HouseCategory, &payload.house_category_id)
            .await?;
        payload.house_category_id = house_category_id.to_string();

        persist(self.store.as_ref(), Collection::Subcategory, &payload).await
    }

    async fn list(&self, query: SubcategoryQueryDto) -> Result<Vec<Subcategory>, RecordServiceError> {
        let house_category_id = parse_filter_id(query.house_category_id)?;
        let filter = Filter::new().eq_opt(
            "house_category_id",
            house_category_id.map(|id| id.to_string()),
        );
        let documents = self.store.find(Collection::Subcategory, &filter).await?;
        decode_all(documents)
    }
}
