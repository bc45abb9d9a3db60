// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::record_service::{
    decode_all, persist, validate_payload, RecordService, RecordServiceError,
};
use crate::application::dto::catalogue_request::{
    CreateHouseCategoryRequestDto, HouseCategoryQueryDto,
};
use crate::domain::models::catalogue::HouseCategory;
use crate::domain::models::collection::Collection;
use crate::domain::models::document::Filter;
use crate::domain::repositories::document_store::DocumentStore;
use async_trait::async_trait;
use std::sync::Arc;

/// 房屋类别服务
pub struct HouseCategoryService<S> {
    store: Arc<S>,
}

impl<S: DocumentStore> HouseCategoryService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: DocumentStore + 'static> RecordService for HouseCategoryService<S> {
    type Payload = CreateHouseCategoryRequestDto;
    type Query = HouseCategoryQueryDto;
    type Record = HouseCategory;

    fn collection(&self) -> Collection {
        Collection::HouseCategory
    }

    async fn create(
        &self,
        payload: CreateHouseCategoryRequestDto,
    ) -> Result<String, RecordServiceError> {
        validate_payload(&payload)?;
        persist(self.store.as_ref(), Collection::HouseCategory, &payload).await
    }

    async fn list(
        &self,
        _query: HouseCategoryQueryDto,
    ) -> Result<Vec<HouseCategory>, RecordServiceError> {
        let documents = self
            .store
            .find(Collection::HouseCategory, &Filter::new())
            .await?;
        decode_all(documents)
    }
}
