// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::validation;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_quantity() -> u32 {
    1
}

/// 报价明细请求DTO
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct QuotationItemRequestDto {
    pub package_id: String,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
    /// 报价时的单价，与套餐价格解耦
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = validation::non_negative))]
    pub unit_price: Decimal,
    #[serde(default)]
    pub note: Option<String>,
}

/// 创建报价单请求DTO
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateQuotationRequestDto {
    pub employee_id: String,
    #[validate(length(min = 1, message = "Client name cannot be empty"))]
    pub client_name: String,
    #[serde(default)]
    #[validate(email(message = "Client email is invalid"))]
    pub client_email: Option<String>,
    pub house_category_id: String,
    pub subcategory_id: String,
    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<QuotationItemRequestDto>,
    #[serde(default, with = "rust_decimal::serde::float")]
    #[validate(custom(function = validation::percent))]
    pub discount_percent: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
}

/// 报价单列表查询参数
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuotationQueryDto {
    pub employee_id: Option<String>,
}
