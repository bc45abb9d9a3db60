// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 文档存储网关（document_store）是所有实体共用的持久化抽象，
/// 具体实现由基础设施层提供。
pub mod document_store;
