//! 页面内 fetch 请求定义
//!
//! 字段与浏览器 `fetch(url, init)` 的 init 对象一一对应，
//! 参考 https://developer.mozilla.org/en-US/docs/Web/API/Request/Request

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// 请求模式，浏览器默认 `cors`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestMode {
    Cors,
    NoCors,
    SameOrigin,
    Navigate,
}

/// 凭据策略，浏览器默认 `same-origin`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestCredentials {
    Omit,
    SameOrigin,
    Include,
}

/// 缓存策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestCache {
    Default,
    NoStore,
    Reload,
    NoCache,
    ForceCache,
    OnlyIfCached,
}

/// 重定向策略，浏览器默认 `follow`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestRedirect {
    Follow,
    Error,
    Manual,
}

/// Referrer 策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferrerPolicy {
    NoReferrer,
    NoReferrerWhenDowngrade,
    SameOrigin,
    Origin,
    StrictOrigin,
    OriginWhenCrossOrigin,
    StrictOriginWhenCrossOrigin,
    UnsafeUrl,
}

/// 页面内 fetch 请求
///
/// 空字符串、空 map 与 `None` 都不会出现在序列化结果中，
/// 由浏览器套用自己的默认值。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FetchRequest {
    /// 请求方法，为空时浏览器使用 GET
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub method: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<RequestMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<RequestCredentials>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<RequestCache>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<RequestRedirect>,

    /// `no-referrer`、`client` 或一个 URL，浏览器默认 `client`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub referrer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer_policy: Option<ReferrerPolicy>,

    /// 子资源完整性校验值，例如 `sha256-BpfBw7ivV8q2jLiT13fxDYAe2tJllusRSZ273h2nFSE=`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub integrity: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub keepalive: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl FetchRequest {
    /// 创建空请求，所有选项都交给浏览器默认
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get() -> Self {
        Self::new().method("GET")
    }

    pub fn post(body: impl Into<String>) -> Self {
        Self::new().method("POST").body(body)
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// 添加请求头，同名请求头后写覆盖先写
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// 将任意可序列化的值作为 JSON 请求体，并设置 `content-type`
    pub fn json_body<T: Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        let body = serde_json::to_string(value)?;
        Ok(self.header("content-type", "application/json").body(body))
    }

    pub fn mode(mut self, mode: RequestMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn credentials(mut self, credentials: RequestCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn cache(mut self, cache: RequestCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn redirect(mut self, redirect: RequestRedirect) -> Self {
        self.redirect = Some(redirect);
        self
    }

    pub fn referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = referrer.into();
        self
    }

    pub fn referrer_policy(mut self, policy: ReferrerPolicy) -> Self {
        self.referrer_policy = Some(policy);
        self
    }

    pub fn integrity(mut self, integrity: impl Into<String>) -> Self {
        self.integrity = integrity.into();
        self
    }

    pub fn keepalive(mut self, keepalive: bool) -> Self {
        self.keepalive = keepalive;
        self
    }

    /// 序列化为 fetch init 对象的 JSON 文本
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
