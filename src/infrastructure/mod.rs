// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，提供对具体技术的抽象和封装。
///
/// 包含的子模块：
/// - 数据库（database）：提供数据库连接和实体映射
/// - 指标（metrics）：提供计数指标与 Prometheus 导出
/// - 仓库实现（repositories）：提供文档存储网关的具体实现
///
/// 基础设施层依赖于领域层的抽象接口，领域层不感知具体存储技术。
pub mod database;
pub mod metrics;
pub mod repositories;
