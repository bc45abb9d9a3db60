// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 集合（collection）：存储层固定的五个集合
/// - 文档（document）：原始键值记录与精确匹配过滤器
/// - 记录标识符（record_id）：存储层分配的键
/// - 用户（user）：管理员与员工
/// - 目录（catalogue）：房屋类别、子类别、装修套餐
/// - 报价单（quotation）：报价单及其明细
pub mod catalogue;
pub mod collection;
pub mod document;
pub mod quotation;
pub mod record_id;
pub mod user;
