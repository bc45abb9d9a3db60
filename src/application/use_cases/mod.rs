// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 每个实体一个记录服务，统一实现 `RecordService` 的创建/列表约定，
/// 负责编排字段校验、引用校验、持久化与读取时的金额计算。
pub mod house_category_use_case;
pub mod package_use_case;
pub mod quotation_use_case;
pub mod record_service;
pub mod subcategory_use_case;
pub mod user_use_case;
