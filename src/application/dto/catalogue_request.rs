// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::validation;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 创建房屋类别请求DTO
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateHouseCategoryRequestDto {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// 房屋类别列表查询参数（无过滤条件）
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HouseCategoryQueryDto {}

/// 创建子类别请求DTO
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateSubcategoryRequestDto {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    pub house_category_id: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// 子类别列表查询参数
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SubcategoryQueryDto {
    pub house_category_id: Option<String>,
}

/// 创建装修套餐请求DTO
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreatePackageRequestDto {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    pub subcategory_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = validation::non_negative))]
    pub price: Decimal,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// 套餐列表查询参数
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PackageQueryDto {
    pub subcategory_id: Option<String>,
}
