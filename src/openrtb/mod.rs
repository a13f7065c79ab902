use serde::{Deserialize, Deserializer};

pub mod context;
pub mod error;
pub mod extension;
pub mod impression;
pub mod inventory;
pub mod pmp;
pub mod request;

pub use context::{Device, Geo, Regulations, Source, User};
pub use error::ValidationError;
pub use extension::Extension;
pub use impression::{Audio, Banner, Format, Impression, Native, Video};
pub use inventory::{App, Content, Publisher, Site};
pub use pmp::{Deal, Pmp};
pub use request::{AuctionType, BidRequest, Inventory};

// 显式的 null 按缺省值处理
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// serde skip_serializing_if 辅助函数
pub(crate) fn is_zero(v: &i32) -> bool {
    *v == 0
}

pub(crate) fn is_zero_f64(v: &f64) -> bool {
    *v == 0.0
}
