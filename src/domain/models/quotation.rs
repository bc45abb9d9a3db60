// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 报价单明细（值对象）
///
/// 读取时字段可能缺失（历史数据），因此数量和单价均为可选。
/// 单价在报价时确定，与套餐当前价格无关。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationItem {
    /// 选中的套餐ID
    pub package_id: String,
    /// 数量
    #[serde(default)]
    pub quantity: Option<u32>,
    /// 报价时的单价
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub unit_price: Option<Decimal>,
    #[serde(default)]
    pub note: Option<String>,
}

/// 报价单实体
///
/// 员工为客户生成的报价，小计/折扣/总额在读取时计算，不落库
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub id: String,
    /// 负责员工的用户ID
    pub employee_id: String,
    pub client_name: String,
    #[serde(default)]
    pub client_email: Option<String>,
    pub house_category_id: String,
    pub subcategory_id: String,
    /// 明细，保持顺序
    #[serde(default)]
    pub items: Vec<QuotationItem>,
    /// 折扣百分比（0-100）
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub discount_percent: Option<Decimal>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// 附带计算金额的报价单
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedQuotation {
    #[serde(flatten)]
    pub quotation: Quotation,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}
