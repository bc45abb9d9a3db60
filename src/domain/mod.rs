// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：类型化记录、集合、文档与过滤器
/// - 仓库接口（repositories）：文档存储网关抽象
/// - 服务（services）：引用完整性校验与报价汇总
///
/// 领域层不依赖于任何外部实现。
pub mod models;
pub mod repositories;
pub mod services;
