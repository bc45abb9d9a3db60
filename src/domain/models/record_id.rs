// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// 无效标识符错误
///
/// 提供的字符串无法解析为存储键
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid id: {0}")]
pub struct InvalidIdentifier(pub String);

/// 记录标识符
///
/// 存储层分配的键。对外始终以字符串形式暴露在 `id` 字段中。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    /// 生成新的记录标识符
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// 解析外部传入的标识符字符串
    pub fn parse(value: &str) -> Result<Self, InvalidIdentifier> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| InvalidIdentifier(value.to_string()))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RecordId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for RecordId {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
