// src/codec.rs

use thiserror::Error;

use crate::openrtb::request::BidRequest;

#[derive(Error, Debug)]
pub enum CodecError {
    /// simd-json 解析失败
    #[error("decode bid request: {0}")]
    Decode(#[from] simd_json::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// 使用 simd-json 解码 BidRequest。
/// simd-json 会就地改写输入缓冲区，所以需要 `&mut [u8]`。
pub fn decode(payload: &mut [u8]) -> Result<BidRequest, CodecError> {
    let request = simd_json::serde::from_slice::<BidRequest>(payload)?;
    Ok(request)
}

/// 已经是字符串的场景（测试、配置文件等）走 serde_json
pub fn decode_str(payload: &str) -> Result<BidRequest, CodecError> {
    Ok(serde_json::from_str(payload)?)
}

pub fn encode(request: &BidRequest) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(request)?)
}

pub fn encode_pretty(request: &BidRequest) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec_pretty(request)?)
}
