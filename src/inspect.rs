// src/inspect.rs

use crate::codec;
use crate::logging::ValidationLog;
use crate::openrtb::BidRequest;

/// 单个 payload 的检查结果
#[derive(Debug)]
pub struct Inspection {
    pub log: ValidationLog,
    /// 解码成功时的请求（无论校验是否通过）
    pub request: Option<BidRequest>,
}

impl Inspection {
    pub fn is_valid(&self) -> bool {
        self.log.is_success()
    }
}

/// 解码并校验一个 payload，结果写入 ValidationLog
pub fn inspect(source: &str, mut payload: Vec<u8>) -> Inspection {
    match codec::decode(&mut payload) {
        Ok(request) => {
            let mut log = ValidationLog::new(source).with_request(&request);
            log.set_result(&request.validate());
            Inspection {
                log,
                request: Some(request),
            }
        }
        Err(e) => {
            let mut log = ValidationLog::new(source);
            log.set_decode_error(&e);
            Inspection { log, request: None }
        }
    }
}

/// 生成去除用户标识后的副本，原请求不变
pub fn redact(request: &BidRequest) -> BidRequest {
    let mut cp = request.copy();
    cp.user = None;
    if let Some(device) = cp.device.as_mut() {
        device.ifa = None;
        device.ip = None;
        device.ipv6 = None;
        if let Some(geo) = device.geo.as_mut() {
            geo.lat = None;
            geo.lon = None;
        }
    }
    cp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openrtb::{Device, Geo, User};

    #[test]
    fn valid_payload() {
        let ins = inspect("a.json", br#"{"id":"r1","imp":[{"id":"1"}]}"#.to_vec());
        assert!(ins.is_valid());
        assert_eq!(ins.request.unwrap().id, "r1");
    }

    #[test]
    fn invalid_payload_keeps_request() {
        let ins = inspect(
            "b.json",
            br#"{"id":"r1","imp":[{"id":"1"}],"site":{},"app":{}}"#.to_vec(),
        );
        assert!(!ins.is_valid());
        assert_eq!(ins.log.inventory, "conflicting");
        assert_eq!(
            ins.log.failure_reason.as_deref(),
            Some("openrtb: request has multiple inventory sources")
        );
        assert!(ins.request.is_some());
    }

    #[test]
    fn undecodable_payload() {
        let ins = inspect("c.json", b"{".to_vec());
        assert!(!ins.is_valid());
        assert!(ins.request.is_none());
        assert!(ins.log.failure_reason.is_some());
    }

    #[test]
    fn redact_leaves_original_untouched() {
        let req = BidRequest {
            id: "r1".to_string(),
            user: Some(User {
                id: Some("u1".to_string()),
                ..Default::default()
            }),
            device: Some(Device {
                ifa: Some("ifa-1".to_string()),
                ip: Some("10.0.0.1".to_string()),
                ua: Some("Mozilla/5.0".to_string()),
                geo: Some(Geo {
                    lat: Some(1.0),
                    country: Some("CHN".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let cp = redact(&req);
        assert!(cp.user.is_none());
        let device = cp.device.as_ref().unwrap();
        assert!(device.ifa.is_none());
        assert!(device.ip.is_none());
        assert_eq!(device.ua.as_deref(), Some("Mozilla/5.0"));
        assert_eq!(device.geo.as_ref().unwrap().lat, None);
        assert_eq!(device.geo.as_ref().unwrap().country.as_deref(), Some("CHN"));

        assert_eq!(req.user.as_ref().unwrap().id.as_deref(), Some("u1"));
        assert_eq!(req.device.as_ref().unwrap().ifa.as_deref(), Some("ifa-1"));
        assert_eq!(req.device.as_ref().unwrap().geo.as_ref().unwrap().lat, Some(1.0));
    }
}
