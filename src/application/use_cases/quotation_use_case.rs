// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::record_service::{
    decode_all, parse_filter_id, persist, validate_payload, RecordService, RecordServiceError,
};
use crate::application::dto::quotation_request::{CreateQuotationRequestDto, QuotationQueryDto};
use crate::domain::models::collection::Collection;
use crate::domain::models::document::Filter;
use crate::domain::models::quotation::{PricedQuotation, Quotation, QuotationItem};
use crate::domain::repositories::document_store::DocumentStore;
use crate::domain::services::quotation_aggregator;
use crate::domain::services::reference_validator::ReferenceValidator;
use async_trait::async_trait;
use std::sync::Arc;

/// 报价单服务
///
/// 创建时按顺序校验员工、房屋类别、子类别以及每条明细的套餐，
/// 任一失败则不写入。列表中的每条记录都附带计算金额。
pub struct QuotationService<S> {
    store: Arc<S>,
    validator: ReferenceValidator<S>,
}

impl<S: DocumentStore> QuotationService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            validator: ReferenceValidator::new(store.clone()),
            store,
        }
    }
}

#[async_trait]
impl<S: DocumentStore + 'static> RecordService for QuotationService<S> {
    type Payload = CreateQuotationRequestDto;
    type Query = QuotationQueryDto;
    type Record = PricedQuotation;

    fn collection(&self) -> Collection {
        Collection::Quotation
    }

    async fn create(
        &self,
        mut payload: CreateQuotationRequestDto,
    ) -> Result<String, RecordServiceError> {
        validate_payload(&payload)?;

        // Reject amounts that could not be priced when listed
        let items: Vec<QuotationItem> = payload
            .items
            .iter()
            .map(|item| QuotationItem {
                package_id: item.package_id.clone(),
                quantity: Some(item.quantity),
                unit_price: Some(item.unit_price),
                note: None,
            })
            .collect();
        quotation_aggregator::compute_totals(&items, Some(payload.discount_percent))
            .map_err(|e| RecordServiceError::Validation(e.to_string()))?;

        let references = {
            let package_ids: Vec<&str> = payload
                .items
                .iter()
                .map(|item| item.package_id.as_str())
                .collect();
            self.validator
                .ensure_quotation_references(
                    &payload.employee_id,
                    &payload.house_category_id,
                    &payload.subcategory_id,
                    &package_ids,
                )
                .await?
        };

        payload.employee_id = references.employee_id.to_string();
        payload.house_category_id = references.house_category_id.to_string();
        payload.subcategory_id = references.subcategory_id.to_string();
        for (item, package_id) in payload.items.iter_mut().zip(references.package_ids) {
            item.package_id = package_id.to_string();
        }

        persist(self.store.as_ref(), Collection::Quotation, &payload).await
    }

    async fn list(&self, query: QuotationQueryDto) -> Result<Vec<PricedQuotation>, RecordServiceError> {
        let employee_id = parse_filter_id(query.employee_id)?;
        let filter = Filter::new().eq_opt("employee_id", employee_id.map(|id| id.to_string()));
        let documents = self.store.find(Collection::Quotation, &filter).await?;

        let quotations: Vec<Quotation> = decode_all(documents)?;
        quotations
            .into_iter()
            .map(|quotation| {
                let id = quotation.id.clone();
                quotation_aggregator::price(quotation).map_err(|e| {
                    tracing::error!("Cannot price stored quotation {}: {}", id, e);
                    RecordServiceError::from(e)
                })
            })
            .collect()
    }
}
