// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::record_service::{
    decode_all, parse_filter_id, persist, validate_payload, RecordService, RecordServiceError,
};
use crate::application::dto::catalogue_request::{CreatePackageRequestDto, PackageQueryDto};
use crate::domain::models::catalogue::Package;
use crate::domain::models::collection::Collection;
use crate::domain::models::document::Filter;
use crate::domain::repositories::document_store::DocumentStore;
use crate::domain::services::reference_validator::{ReferenceKind, ReferenceValidator};
use async_trait::async_trait;
use std::sync::Arc;

/// 装修套餐服务
///
/// 创建前确认所属子类别存在
pub struct PackageService<S> {
    store: Arc<S>,
    validator: ReferenceValidator<S>,
}

impl<S: DocumentStore> PackageService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            validator: ReferenceValidator::new(store.clone()),
            store,
        }
    }
}

#[async_trait]
impl<S: DocumentStore + 'static> RecordService for PackageService<S> {
    type Payload = CreatePackageRequestDto;
    type Query = PackageQueryDto;
    type Record = Package;

    fn collection(&self) -> Collection {
        Collection::Package
    }

    async fn create(&self, mut payload: CreatePackageRequestDto) -> Result<String, RecordServiceError> {
        validate_payload(&payload)?;

        let subcategory_id = self
            .validator
            .ensure_exists(ReferenceKind::Subcategory, &payload.subcategory_id)
            .await?;
        payload.subcategory_id = subcategory_id.to_string();

        persist(self.store.as_ref(), Collection::Package, &payload).await
    }

    async fn list(&self, query: PackageQueryDto) -> Result<Vec<Package>, RecordServiceError> {
        let subcategory_id = parse_filter_id(query.subcategory_id)?;
        let filter =
            Filter::new().eq_opt("subcategory_id", subcategory_id.map(|id| id.to_string()));
        let documents = self.store.find(Collection::Package, &filter).await?;
        decode_all(documents)
    }
}
