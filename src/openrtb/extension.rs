use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// 交易所/厂商自定义扩展（ext）。
/// 内容不做解析，克隆时只增加引用计数，原样透传。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Extension(Arc<Value>);

impl Extension {
    pub fn new(value: Value) -> Self {
        Self(Arc::new(value))
    }

    /// 原始 JSON 值（只读）
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// 两个 Extension 是否指向同一份数据
    pub fn ptr_eq(&self, other: &Extension) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Value> for Extension {
    fn from(value: Value) -> Self {
        Extension::new(value)
    }
}
