use serde::{Deserialize, Deserializer, Serialize};

use super::context::{Device, Regulations, Source, User};
use super::error::ValidationError;
use super::extension::Extension;
use super::impression::Impression;
use super::inventory::{App, Site};
use super::{is_zero, null_as_default};
use super::pmp::Pmp;

/// 一价
pub const AUCTION_FIRST_PRICE: i32 = 1;
/// 二价加（OpenRTB 默认值）
pub const AUCTION_SECOND_PRICE_PLUS: i32 = 2;
/// 大于该值的竞价类型由交易所自行定义
pub const AUCTION_EXCHANGE_SPECIFIC_MIN: i32 = 500;

fn default_auction_type() -> i32 {
    AUCTION_SECOND_PRICE_PLUS
}

// "at": null 与缺省相同
fn auction_type_or_default<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(AUCTION_SECOND_PRICE_PLUS))
}

/// OpenRTB BidRequest 顶层结构体。
/// id 与至少一个 imp 是必填的，其余字段交易所可以给出默认值。
/// 可选对象缺失时解码为 None，不会生成零值对象。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BidRequest {
    /// 竞价请求唯一 ID
    #[serde(default)]
    pub id: String,

    /// 广告展示请求列表
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub imp: Vec<Impression>,

    /// 网站信息，与 app 互斥
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,
    /// 应用信息，与 site 互斥
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<App>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// 0 = 正式, 1 = 测试（不计费）
    #[serde(default, skip_serializing_if = "is_zero")]
    pub test: i32,
    /// 1 = 一价, 2 = 二价加, >500 为交易所自定义
    #[serde(
        default = "default_auction_type",
        deserialize_with = "auction_type_or_default"
    )]
    pub at: i32,
    /// 出价响应的最长等待时间（毫秒），不校验取值
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmax: Option<i64>,

    // 以下列表语义上是集合，但保持原有顺序
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wseat: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bseat: Option<Vec<String>>,
    /// ISO-639-1-alpha-2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wlang: Option<Vec<String>>,
    /// 交易所能否确认 imp 覆盖了当前上下文的全部展示机会
    #[serde(default, skip_serializing_if = "is_zero")]
    pub allimps: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cur: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcat: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badv: Option<Vec<String>>,
    /// Android 包名 / iOS 数字 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bapp: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regs: Option<Regulations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Extension>,

    /// 已废弃，仅用于兼容旧数据
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmp: Option<Pmp>,
}

impl Default for BidRequest {
    fn default() -> Self {
        Self {
            id: String::new(),
            imp: Vec::new(),
            site: None,
            app: None,
            device: None,
            user: None,
            test: 0,
            at: AUCTION_SECOND_PRICE_PLUS,
            tmax: None,
            wseat: None,
            bseat: None,
            wlang: None,
            allimps: 0,
            cur: None,
            bcat: None,
            badv: None,
            bapp: None,
            source: None,
            regs: None,
            ext: None,
            pmp: None,
        }
    }
}

/// 竞价类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionType {
    FirstPrice,
    SecondPricePlus,
    ExchangeSpecific(i32),
    Unknown(i32),
}

impl From<i32> for AuctionType {
    fn from(at: i32) -> Self {
        match at {
            AUCTION_FIRST_PRICE => AuctionType::FirstPrice,
            AUCTION_SECOND_PRICE_PLUS => AuctionType::SecondPricePlus,
            v if v > AUCTION_EXCHANGE_SPECIFIC_MIN => AuctionType::ExchangeSpecific(v),
            v => AuctionType::Unknown(v),
        }
    }
}

/// 请求描述的流量来源
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inventory<'a> {
    Site(&'a Site),
    App(&'a App),
    /// site 与 app 同时存在
    Conflicting,
    None,
}

impl Inventory<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Inventory::Site(_) => "site",
            Inventory::App(_) => "app",
            Inventory::Conflicting => "conflicting",
            Inventory::None => "none",
        }
    }
}

impl BidRequest {
    /// 生成一个独立副本。
    ///
    /// 列表与子对象都会重新分配，修改副本不会影响原请求；
    /// ext 只增加引用计数，原样共享。
    /// 原本缺失（None）的列表在副本中仍是 None，不会变成空列表。
    pub fn copy(&self) -> BidRequest {
        BidRequest {
            id: self.id.clone(),
            imp: self.imp.to_vec(),
            site: self.site.clone(),
            app: self.app.clone(),
            device: self.device.clone(),
            user: self.user.clone(),
            test: self.test,
            at: self.at,
            tmax: self.tmax,
            wseat: self.wseat.clone(),
            bseat: self.bseat.clone(),
            wlang: self.wlang.clone(),
            allimps: self.allimps,
            cur: self.cur.clone(),
            bcat: self.bcat.clone(),
            badv: self.badv.clone(),
            bapp: self.bapp.clone(),
            source: self.source.clone(),
            regs: self.regs.clone(),
            ext: self.ext.clone(),
            pmp: self.pmp.as_ref().map(|pmp| Pmp {
                private_auction: pmp.private_auction,
                deals: pmp.deals.to_vec(),
                ext: pmp.ext.clone(),
            }),
        }
    }

    /// 校验请求，遇到第一个错误即返回。
    /// impression 的错误原样返回，后续 impression 不再检查。
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingRequestId);
        } else if self.imp.is_empty() {
            return Err(ValidationError::NoImpressions);
        } else if self.site.is_some() && self.app.is_some() {
            return Err(ValidationError::ConflictingInventorySource);
        }

        for imp in &self.imp {
            imp.validate()?;
        }

        Ok(())
    }

    pub fn auction_type(&self) -> AuctionType {
        AuctionType::from(self.at)
    }

    pub fn inventory(&self) -> Inventory<'_> {
        match (&self.site, &self.app) {
            (Some(_), Some(_)) => Inventory::Conflicting,
            (Some(site), None) => Inventory::Site(site),
            (None, Some(app)) => Inventory::App(app),
            (None, None) => Inventory::None,
        }
    }

    pub fn is_test(&self) -> bool {
        self.test == 1
    }
}
