// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::{default_active, UserRole};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 创建用户请求DTO
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateUserRequestDto {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// 用户列表查询参数
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserQueryDto {
    /// 按角色精确过滤
    pub role: Option<UserRole>,
}
