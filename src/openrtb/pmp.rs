use serde::{Deserialize, Serialize};

use super::extension::Extension;

/// Pmp 私有交易市场信息。
/// 请求级的 pmp 已废弃，只为兼容旧版本数据保留；impression 级的 pmp 仍然有效。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Pmp {
    /// 1 = 仅限 deals 中的买方参与
    #[serde(default, skip_serializing_if = "super::is_zero")]
    pub private_auction: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deals: Vec<Deal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Extension>,
}

/// Deal 表示 pmp 中的交易信息
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Deal {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "super::is_zero_f64")]
    pub bidfloor: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidfloorcur: Option<String>,
    /// 覆盖请求级的竞价类型
    #[serde(default, skip_serializing_if = "super::is_zero")]
    pub at: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wseat: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wadomain: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Extension>,
}
