use thiserror::Error;

/// OpenRTB 校验错误。
/// 请求级与 impression 级错误放在同一个枚举里，
/// impression 的错误由 `BidRequest::validate` 原样返回，不做包装。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("openrtb: request ID missing")]
    MissingRequestId,
    #[error("openrtb: request has no impressions")]
    NoImpressions,
    /// 同时存在 site 和 app
    #[error("openrtb: request has multiple inventory sources")]
    ConflictingInventorySource,

    #[error("openrtb: impression ID missing")]
    MissingImpressionId,
    /// banner / video / audio / native 多于一个
    #[error("openrtb: impression has multiple assets")]
    MultipleImpressionAssets,
    #[error("openrtb: video has no mimes")]
    VideoMissingMimes,
    #[error("openrtb: audio has no mimes")]
    AudioMissingMimes,
    #[error("openrtb: native has no request")]
    NativeMissingRequest,
}

impl ValidationError {
    /// 是否为 impression 级别的错误
    pub fn is_impression_level(&self) -> bool {
        !matches!(
            self,
            ValidationError::MissingRequestId
                | ValidationError::NoImpressions
                | ValidationError::ConflictingInventorySource
        )
    }
}
