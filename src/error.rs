//! 错误类型
//!
//! 一次页面内 fetch 只有三种失败出口：
//! 请求序列化失败、远程执行失败、返回值解码失败

use thiserror::Error;

/// 装箱的错误源
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 页面内 fetch 错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 请求无法序列化为脚本内嵌的字面量
    #[error("请求序列化失败: {source}")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// 页面执行脚本失败（脚本异常、Promise 被拒绝、连接断开等）
    #[error("页面脚本执行失败 ({url}): {source}")]
    Evaluation {
        url: String,
        #[source]
        source: BoxError,
    },

    /// 页面返回值无法解码为响应结构
    #[error("响应解码失败 ({url}): {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// 创建执行错误
    pub fn evaluation(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        FetchError::Evaluation {
            url: url.into(),
            source: source.into(),
        }
    }

    /// 创建解码错误
    pub fn decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        FetchError::Decode {
            url: url.into(),
            source,
        }
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, FetchError::Serialization { .. })
    }

    pub fn is_evaluation(&self) -> bool {
        matches!(self, FetchError::Evaluation { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode { .. })
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(source: serde_json::Error) -> Self {
        FetchError::Serialization { source }
    }
}

/// 页面内 fetch 结果类型
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_error_display() {
        let err = FetchError::evaluation("http://x/y", "TypeError: Failed to fetch");
        assert!(err.is_evaluation());
        assert_eq!(
            err.to_string(),
            "页面脚本执行失败 (http://x/y): TypeError: Failed to fetch"
        );
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<u16>("\"abc\"").unwrap_err();
        let err = FetchError::decode("http://x/y", source);
        assert!(err.is_decode());
        assert!(std::error::Error::source(&err).is_some());
    }
}
