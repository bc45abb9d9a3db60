// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::collection::Collection;
use crate::domain::models::document::Filter;
use crate::domain::models::record_id::{InvalidIdentifier, RecordId};
use crate::domain::models::user::UserRole;
use crate::domain::repositories::document_store::{DocumentStore, RepositoryError};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// 被引用实体的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// 房屋类别
    HouseCategory,
    /// 子类别
    Subcategory,
    /// 装修套餐
    Package,
    /// 角色为员工的用户
    Employee,
}

impl ReferenceKind {
    /// 机器可读的类型名
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::HouseCategory => "house_category",
            ReferenceKind::Subcategory => "subcategory",
            ReferenceKind::Package => "package",
            ReferenceKind::Employee => "employee",
        }
    }

    /// 面向用户的名称
    pub fn label(&self) -> &'static str {
        match self {
            ReferenceKind::HouseCategory => "House category",
            ReferenceKind::Subcategory => "Subcategory",
            ReferenceKind::Package => "Package",
            ReferenceKind::Employee => "Employee",
        }
    }

    /// 被引用实体所在的集合
    pub fn collection(&self) -> Collection {
        match self {
            ReferenceKind::HouseCategory => Collection::HouseCategory,
            ReferenceKind::Subcategory => Collection::Subcategory,
            ReferenceKind::Package => Collection::Package,
            ReferenceKind::Employee => Collection::User,
        }
    }

    fn lookup_filter(&self, id: RecordId) -> Filter {
        let filter = Filter::by_id(id);
        match self {
            ReferenceKind::Employee => filter.eq("role", UserRole::Employee.as_str()),
            _ => filter,
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 引用校验错误
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),
    #[error("{} not found", .0.label())]
    NotFound(ReferenceKind),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 报价单校验通过后的规范化引用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotationReferences {
    pub employee_id: RecordId,
    pub house_category_id: RecordId,
    pub subcategory_id: RecordId,
    /// 与明细顺序一致
    pub package_ids: Vec<RecordId>,
}

/// 引用完整性校验器
///
/// 存储层没有外键约束，引用完整性在创建时由应用层检查。
/// 每次校验都通过文档存储网关按标识符查询被引用实体。
pub struct ReferenceValidator<S> {
    store: Arc<S>,
}

impl<S: DocumentStore> ReferenceValidator<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// 确认被引用实体存在
    ///
    /// # 参数
    ///
    /// * `kind` - 被引用实体的类型
    /// * `id` - 引用的标识符字符串
    ///
    /// # 返回值
    ///
    /// * `Ok(RecordId)` - 规范化后的标识符
    /// * `Err(ReferenceError::InvalidIdentifier)` - 标识符格式错误
    /// * `Err(ReferenceError::NotFound)` - 实体不存在（员工还要求角色为 employee）
    pub async fn ensure_exists(
        &self,
        kind: ReferenceKind,
        id: &str,
    ) -> Result<RecordId, ReferenceError> {
        let record_id = RecordId::parse(id)?;
        let found = self
            .store
            .find_one(kind.collection(), &kind.lookup_filter(record_id))
            .await?;

        if found.is_none() {
            tracing::debug!("Reference {} {} does not exist", kind, record_id);
            return Err(ReferenceError::NotFound(kind));
        }

        Ok(record_id)
    }

    /// 校验报价单的全部引用
    ///
    /// 顺序：员工、房屋类别、子类别，然后按顺序校验每条明细的套餐。
    /// 遇到第一个失败立即返回。
    pub async fn ensure_quotation_references(
        &self,
        employee_id: &str,
        house_category_id: &str,
        subcategory_id: &str,
        package_ids: &[&str],
    ) -> Result<QuotationReferences, ReferenceError> {
        let employee_id = self
            .ensure_exists(ReferenceKind::Employee, employee_id)
            .await?;
        let house_category_id = self
            .ensure_exists(ReferenceKind::HouseCategory, house_category_id)
            .await?;
        let subcategory_id = self
            .ensure_exists(ReferenceKind::Subcategory, subcategory_id)
            .await?;

        let mut checked = Vec::with_capacity(package_ids.len());
        for package_id in package_ids {
            checked.push(self.ensure_exists(ReferenceKind::Package, package_id).await?);
        }

        Ok(QuotationReferences {
            employee_id,
            house_category_id,
            subcategory_id,
            package_ids: checked,
        })
    }
}
