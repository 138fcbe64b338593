//! 页面内 fetch
//!
//! 一次调用对应一次远程执行：生成脚本 → 页面执行并等待 Promise → 解码响应。
//! 不做重试、超时与并发控制，这些由调用方负责。

use tracing::{debug, error, info};

use crate::error::{FetchError, Result};
use crate::infrastructure::ScriptEvaluator;
use crate::models::request::FetchRequest;
use crate::models::response::FetchResponse;
use crate::script::build_fetch_script;
use crate::utils::logging::truncate_text;

/// 在远程页面内发起 fetch 请求
pub struct PageFetch<E> {
    evaluator: E,
}

impl<E: ScriptEvaluator> PageFetch<E> {
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// 发起一次请求
    ///
    /// # 参数
    /// - `url`: 请求地址，相对地址按页面当前 URL 解析
    /// - `req`: 请求选项
    ///
    /// # 返回
    /// 页面观察到的响应；序列化、执行、解码任一步失败都返回对应的 [`FetchError`]
    pub async fn fetch(&self, url: &str, req: &FetchRequest) -> Result<FetchResponse> {
        let script = build_fetch_script(url, req)?;
        debug!(
            "页面 fetch: {} {}，脚本长度: {} 字符",
            if req.method.is_empty() { "GET" } else { req.method.as_str() },
            url,
            script.len()
        );

        let value = self.evaluator.eval_function(&script).await.map_err(|e| {
            error!("页面 fetch 执行失败 ({}): {}", url, e);
            FetchError::evaluation(url, e)
        })?;

        debug!("页面返回: {}", truncate_text(&value.to_string(), 200));

        let response: FetchResponse = serde_json::from_value(value).map_err(|e| {
            error!("页面 fetch 响应解码失败 ({}): {}", url, e);
            FetchError::decode(url, e)
        })?;

        info!("✓ {} -> {}", url, response.status);
        Ok(response)
    }

    /// 使用默认选项发起 GET 请求
    pub async fn get(&self, url: &str) -> Result<FetchResponse> {
        self.fetch(url, &FetchRequest::new()).await
    }
}
