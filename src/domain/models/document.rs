// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::record_id::RecordId;
use serde::de::DeserializeOwned;
use serde::ser::Error as _;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// 标识符字段名
///
/// 存储层的内部键统一以该字段名对外暴露
pub const ID_FIELD: &str = "id";

/// 文档
///
/// 存储层保存的原始键值记录
pub type Document = Map<String, Value>;

/// 将类型化记录序列化为文档
///
/// 记录必须序列化为 JSON 对象
pub fn to_document<T: Serialize>(value: &T) -> Result<Document, serde_json::Error> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(serde_json::Error::custom(format!(
            "record must serialize to an object, got {}",
            other
        ))),
    }
}

/// 将文档反序列化为类型化记录
pub fn from_document<T: DeserializeOwned>(document: Document) -> Result<T, serde_json::Error> {
    serde_json::from_value(Value::Object(document))
}

/// 查询过滤器
///
/// 由精确匹配的键值对组成，空过滤器匹配所有记录。
/// 键 `id` 匹配存储层分配的标识符。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: BTreeMap<String, Value>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按标识符查询
    pub fn by_id(id: RecordId) -> Self {
        Self::new().eq(ID_FIELD, id.to_string())
    }

    /// 添加精确匹配条件
    ///
    /// `id` 条件若可解析为标识符，则保存其规范形式
    pub fn eq(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let mut value = value.into();
        if key == ID_FIELD {
            if let Some(id) = value.as_str().and_then(|raw| RecordId::parse(raw).ok()) {
                value = Value::String(id.to_string());
            }
        }
        self.conditions.insert(key, value);
        self
    }

    /// 仅在值存在时添加精确匹配条件
    pub fn eq_opt<V: Into<Value>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.eq(key, value),
            None => self,
        }
    }

    /// 标识符条件
    pub fn id(&self) -> Option<&Value> {
        self.conditions.get(ID_FIELD)
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.conditions.iter()
    }

    /// 判断文档是否满足所有条件
    ///
    /// 文档需已包含规范化后的 `id` 字段
    pub fn matches(&self, document: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(key, expected)| document.get(key) == Some(expected))
    }
}
