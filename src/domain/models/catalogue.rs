// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 房屋类别实体
///
/// 类别层级的根，例如公寓、别墅
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// 子类别实体
///
/// 房屋类别下的细分（户型或房间类型），必须引用已存在的房屋类别
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    /// 所属房屋类别ID
    pub house_category_id: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// 装修套餐实体
///
/// 挂在子类别下的定价功能包
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub name: String,
    /// 所属子类别ID
    pub subcategory_id: String,
    /// 基础价格
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// 功能列表，保持顺序
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}
