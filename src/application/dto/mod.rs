// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义应用程序层的数据传输对象
/// 用于在API请求和领域模型之间传输数据，并在边界处完成字段校验
pub mod catalogue_request;
pub mod quotation_request;
pub mod user_request;
pub mod validation;
