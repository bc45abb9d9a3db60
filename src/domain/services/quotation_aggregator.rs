// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::quotation::{PricedQuotation, Quotation, QuotationItem};
use rust_decimal::Decimal;
use thiserror::Error;

/// 金额超出十进制可表示范围
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Quotation amount is out of range")]
pub struct AmountOverflow;

/// 报价单金额
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotationTotals {
    /// 小计：单价 × 数量 之和
    pub subtotal: Decimal,
    /// 折扣金额：小计 × (折扣百分比 / 100)
    pub discount_amount: Decimal,
    /// 总额：小计 - 折扣金额
    pub total: Decimal,
}

/// 计算单条明细金额
///
/// 历史数据可能缺少字段：缺失的数量按 1 计算，缺失的单价按 0 计算
pub fn line_amount(item: &QuotationItem) -> Result<Decimal, AmountOverflow> {
    let quantity = Decimal::from(item.quantity.unwrap_or(1));
    let unit_price = item.unit_price.unwrap_or(Decimal::ZERO);
    unit_price.checked_mul(quantity).ok_or(AmountOverflow)
}

/// 计算报价单金额
///
/// # 参数
///
/// * `items` - 报价明细
/// * `discount_percent` - 折扣百分比，缺失时按 0 计算
///
/// # 返回值
///
/// * `Ok(QuotationTotals)` - 小计、折扣金额与总额，总额始终等于小计减去折扣金额
/// * `Err(AmountOverflow)` - 任一中间结果超出可表示范围
pub fn compute_totals(
    items: &[QuotationItem],
    discount_percent: Option<Decimal>,
) -> Result<QuotationTotals, AmountOverflow> {
    let subtotal = items.iter().try_fold(Decimal::ZERO, |acc, item| {
        acc.checked_add(line_amount(item)?).ok_or(AmountOverflow)
    })?;

    // Scale the percentage down first so a full discount never exceeds the subtotal's range
    let rate = discount_percent
        .unwrap_or(Decimal::ZERO)
        .checked_div(Decimal::ONE_HUNDRED)
        .ok_or(AmountOverflow)?;
    let discount_amount = subtotal.checked_mul(rate).ok_or(AmountOverflow)?;
    let total = subtotal.checked_sub(discount_amount).ok_or(AmountOverflow)?;

    Ok(QuotationTotals {
        subtotal,
        discount_amount,
        total,
    })
}

/// 为报价单附加计算金额
pub fn price(quotation: Quotation) -> Result<PricedQuotation, AmountOverflow> {
    let totals = compute_totals(&quotation.items, quotation.discount_percent)?;
    Ok(PricedQuotation {
        quotation,
        subtotal: totals.subtotal,
        discount_amount: totals.discount_amount,
        total: totals.total,
    })
}
