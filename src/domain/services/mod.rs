// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 报价汇总（quotation_aggregator）：读取时计算小计、折扣与总额
/// - 引用校验（reference_validator）：创建时检查被引用实体是否存在
///
/// 领域服务只包含业务规则，编排由应用层的记录服务完成。
pub mod quotation_aggregator;
pub mod reference_validator;
