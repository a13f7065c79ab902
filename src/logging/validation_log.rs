use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::codec::CodecError;
use crate::openrtb::{BidRequest, ValidationError};

/// **请求校验日志**，每个 payload 一条
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ValidationLog {
    pub timestamp: String,              // 记录时间
    pub log_type: String,               // 日志类型，固定为 "bid_request_validation"
    pub source: String,                 // payload 来源（文件路径等）
    pub request_id: Option<String>,     // `BidRequest.id`，解码失败时为空
    pub imp_count: usize,               // impression 数量
    pub inventory: String,              // "site" / "app" / "none" / "conflicting"
    pub test: bool,                     // 是否测试流量
    pub status: String,                 // "success" or "failure"
    pub failure_reason: Option<String>, // 失败原因
}

impl ValidationLog {
    /// **创建校验日志**，默认失败，后续更新
    pub fn new(source: &str) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            log_type: "bid_request_validation".to_string(),
            source: source.to_string(),
            request_id: None,
            imp_count: 0,
            inventory: "none".to_string(),
            test: false,
            status: "failure".to_string(),
            failure_reason: None,
        }
    }

    /// **记录请求概要**
    pub fn with_request(mut self, request: &BidRequest) -> Self {
        self.request_id = Some(request.id.clone());
        self.imp_count = request.imp.len();
        self.inventory = request.inventory().kind().to_string();
        self.test = request.is_test();
        self
    }

    /// **记录校验结果**
    pub fn set_result(&mut self, result: &Result<(), ValidationError>) {
        match result {
            Ok(()) => {
                self.status = "success".to_string();
                self.failure_reason = None;
            }
            Err(e) => {
                self.status = "failure".to_string();
                self.failure_reason = Some(e.to_string());
            }
        }
    }

    /// **记录解码失败**
    pub fn set_decode_error(&mut self, err: &CodecError) {
        self.status = "failure".to_string();
        self.failure_reason = Some(err.to_string());
    }

    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// 以 JSON 字符串写入 tracing
    pub fn emit(&self) {
        let line = serde_json::to_string(self).unwrap_or_default();
        if self.is_success() {
            info!(validation_log = %line, "bid request valid");
        } else {
            warn!(validation_log = %line, "bid request rejected");
        }
    }
}
