// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 文档集合
///
/// 系统中固定的五个集合，集合名沿用存储层的小写命名。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// 用户（管理员/员工）
    User,
    /// 房屋类别
    HouseCategory,
    /// 子类别
    Subcategory,
    /// 装修套餐
    Package,
    /// 报价单
    Quotation,
}

impl Collection {
    /// 所有集合，按依赖顺序排列
    pub const ALL: [Collection; 5] = [
        Collection::User,
        Collection::HouseCategory,
        Collection::Subcategory,
        Collection::Package,
        Collection::Quotation,
    ];

    /// 存储层使用的集合名
    pub fn name(&self) -> &'static str {
        match self {
            Collection::User => "user",
            Collection::HouseCategory => "housecategory",
            Collection::Subcategory => "subcategory",
            Collection::Package => "package",
            Collection::Quotation => "quotation",
        }
    }

    /// 根据集合名查找集合
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
