use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::extension::Extension;
use super::pmp::Pmp;
use super::{is_zero, is_zero_f64};

/// Impression 表示一个广告位展示机会。
/// banner / video / audio / native 至多出现一个。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Impression {
    #[serde(default)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Banner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native: Option<Native>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmp: Option<Pmp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displaymanager: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displaymanagerver: Option<String>,
    /// 1 = 插屏或全屏
    #[serde(default, skip_serializing_if = "is_zero")]
    pub instl: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagid: Option<String>,
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    pub bidfloor: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidfloorcur: Option<String>,
    /// 0 = 非安全, 1 = 要求 HTTPS；缺省表示未知
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iframebuster: Option<Vec<String>>,
    /// 竞价到实际展示之间的预估秒数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Extension>,
}

/// Format 表示 banner 允许的尺寸
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Format {
    pub w: i32,
    pub h: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Banner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Vec<Format>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 屏蔽的 banner 类型
    #[serde(skip_serializing_if = "Option::is_none")]
    pub btype: Option<Vec<i32>>,
    /// 屏蔽的创意属性
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battr: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mimes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Extension>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Video {
    #[serde(default)]
    pub mimes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minduration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxduration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocols: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startdelay: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linearity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Extension>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Audio {
    #[serde(default)]
    pub mimes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minduration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxduration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocols: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Extension>,
}

/// Native 的 request 是 Native Ads 规范的 JSON 字符串，这里不解析
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Native {
    #[serde(default)]
    pub request: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battr: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Extension>,
}

impl Impression {
    /// 媒体对象的数量（banner / video / audio / native）
    pub fn asset_count(&self) -> usize {
        [
            self.banner.is_some(),
            self.video.is_some(),
            self.audio.is_some(),
            self.native.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    /// 校验 impression，遇到第一个错误即返回
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingImpressionId);
        }
        if self.asset_count() > 1 {
            return Err(ValidationError::MultipleImpressionAssets);
        }
        if let Some(video) = &self.video {
            video.validate()?;
        }
        if let Some(audio) = &self.audio {
            audio.validate()?;
        }
        if let Some(native) = &self.native {
            native.validate()?;
        }
        Ok(())
    }
}

impl Video {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.mimes.is_empty() {
            return Err(ValidationError::VideoMissingMimes);
        }
        Ok(())
    }
}

impl Audio {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.mimes.is_empty() {
            return Err(ValidationError::AudioMissingMimes);
        }
        Ok(())
    }
}

impl Native {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.request.is_empty() {
            return Err(ValidationError::NativeMissingRequest);
        }
        Ok(())
    }
}
