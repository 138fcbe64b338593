//! JS 执行器 - 基础设施层
//!
//! 持有唯一的 page 资源，只暴露"执行 JS"的能力

use anyhow::Result;
use async_trait::async_trait;
use chromiumoxide::cdp::js_protocol::runtime::CallFunctionOnParams;
use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::BoxError;

/// 远程页面的脚本执行能力
///
/// 执行一个函数表达式，等待其返回的 Promise 结束，
/// 返回结构化的值或失败原因。
#[async_trait]
pub trait ScriptEvaluator: Send + Sync {
    async fn eval_function(&self, function: &str) -> std::result::Result<JsonValue, BoxError>;
}

#[async_trait]
impl<'a, E: ScriptEvaluator + ?Sized> ScriptEvaluator for &'a E {
    async fn eval_function(&self, function: &str) -> std::result::Result<JsonValue, BoxError> {
        (**self).eval_function(function).await
    }
}

/// JS 执行器
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 暴露 eval() / eval_function() 能力
/// - 不打开、关闭或导航页面
pub struct JsExecutor {
    page: Page,
}

impl JsExecutor {
    /// 创建新的 JS 执行器
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 获取 page 的引用（用于其他操作）
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 执行 JS 表达式并返回 JSON 结果
    pub async fn eval(&self, js_code: impl Into<String>) -> Result<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let json_value = result.into_value()?;
        Ok(json_value)
    }

    /// 执行 JS 表达式并反序列化为指定类型
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> Result<T> {
        let json_value = self.eval(js_code).await?;
        let typed_value = serde_json::from_value(json_value)?;
        Ok(typed_value)
    }
}

#[async_trait]
impl ScriptEvaluator for JsExecutor {
    /// 通过 `Runtime.callFunctionOn` 执行，等待 Promise 并按值返回
    async fn eval_function(&self, function: &str) -> std::result::Result<JsonValue, BoxError> {
        let mut params = CallFunctionOnParams::new(function);
        params.await_promise = Some(true);
        params.return_by_value = Some(true);

        debug!("执行页面函数，脚本长度: {} 字符", function.len());
        let result = self.page.evaluate_function(params).await?;
        let json_value: JsonValue = result.into_value()?;
        Ok(json_value)
    }
}
