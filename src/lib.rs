//! OpenRTB BidRequest：数据模型、独立副本、结构校验，以及 JSON 编解码。

pub mod codec;
pub mod config;
pub mod inspect;
pub mod logging;
pub mod openrtb;

pub use codec::CodecError;
pub use openrtb::{BidRequest, ValidationError};
