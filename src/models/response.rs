//! 页面内 fetch 响应定义
//!
//! 参考 https://developer.mozilla.org/en-US/docs/Web/API/Response

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{FetchError, Result};

/// 响应类型（`Response.type`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Basic,
    Cors,
    Default,
    Error,
    Opaque,
    Opaqueredirect,
    /// 浏览器返回了未识别的类型
    #[serde(other)]
    Unknown,
}

/// 页面内 fetch 的响应
///
/// 只能由页面返回值解码得到。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,

    /// 重定向之后的最终 URL
    pub url: String,

    pub status: u16,

    /// 按 `Headers.entries()` 迭代顺序收集，同名响应头的每个值都保留
    pub headers: BTreeMap<String, Vec<String>>,

    /// 以文本读取的响应体，二进制内容不做特殊处理
    pub body: String,
}

impl FetchResponse {
    /// 状态码是否为 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 获取响应头的第一个值（名称不区分大小写）
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_values(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// 获取响应头的全部值（名称不区分大小写）
    pub fn header_values(&self, name: &str) -> Option<&[String]> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, values)| values.as_slice())
    }

    /// 将响应体按 JSON 解析
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| FetchError::decode(&self.url, e))
    }

    pub fn into_body(self) -> String {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> FetchResponse {
        serde_json::from_value(json!({
            "type": "cors",
            "url": "https://api.example.com/v1/items",
            "status": 201,
            "headers": {
                "content-type": ["application/json"],
                "set-cookie": ["a=1", "b=2"]
            },
            "body": "{\"id\":7}"
        }))
        .unwrap()
    }

    #[test]
    fn test_decode_response() {
        let resp = sample();
        assert_eq!(resp.response_type, ResponseType::Cors);
        assert_eq!(resp.status, 201);
        assert!(resp.is_success());
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let resp = sample();
        assert_eq!(resp.header("Content-Type"), Some("application/json"));
        assert_eq!(
            resp.header_values("SET-COOKIE").unwrap(),
            &["a=1".to_string(), "b=2".to_string()]
        );
        assert_eq!(resp.header("x-missing"), None);
    }

    #[test]
    fn test_json_body() {
        #[derive(Deserialize)]
        struct Item {
            id: u32,
        }
        let item: Item = sample().json().unwrap();
        assert_eq!(item.id, 7);
    }

    #[test]
    fn test_json_body_failure_is_decode_error() {
        let mut resp = sample();
        resp.body = "<html>".to_string();
        let err = resp.json::<serde_json::Value>().unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_unknown_type_is_kept() {
        let resp: FetchResponse = serde_json::from_value(json!({
            "type": "teleport",
            "url": "",
            "status": 0,
            "headers": {},
            "body": ""
        }))
        .unwrap();
        assert_eq!(resp.response_type, ResponseType::Unknown);
    }

    #[test]
    fn test_non_numeric_status_is_rejected() {
        let result = serde_json::from_value::<FetchResponse>(json!({
            "type": "basic",
            "url": "http://x/y",
            "status": "200",
            "headers": {},
            "body": ""
        }));
        assert!(result.is_err());
    }
}
