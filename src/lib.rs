//! # Page Fetch
//!
//! 在远程浏览器页面的 JS 上下文中发起 fetch 请求，并把状态码、响应头、响应体取回到本进程
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `ScriptEvaluator` - "执行函数并等待 Promise"这一项能力
//! - `JsExecutor` - 基于 chromiumoxide 的实现
//!
//! ### ② 数据模型（Models）
//! - `FetchRequest` - fetch init 选项，空值不参与序列化
//! - `FetchResponse` - 页面返回值的类型化解码结果
//!
//! ### ③ 脚本与调用（Script / Fetch）
//! - `script` - 以 JSON 字面量嵌入请求，生成自包含的 async 函数
//! - `PageFetch` - 一次调用 = 一次远程执行
//!
//! ## 模块结构

pub mod browser;
pub mod config;
pub mod error;
pub mod fetch;
pub mod infrastructure;
pub mod models;
pub mod script;
pub mod utils;

// 重新导出常用类型
pub use browser::{connect_to_browser_and_page, launch_headless_browser};
pub use config::Config;
pub use error::{BoxError, FetchError, Result};
pub use fetch::PageFetch;
pub use infrastructure::{JsExecutor, ScriptEvaluator};
pub use models::{
    FetchRequest, FetchResponse, ReferrerPolicy, RequestCache, RequestCredentials, RequestMode,
    RequestRedirect, ResponseType,
};
pub use script::build_fetch_script;
