use crate::models::request::FetchRequest;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载请求定义
///
/// 键名与 fetch init 对象一致，例如：
///
/// ```toml
/// method = "POST"
/// body = '{"stage":"3"}'
/// credentials = "include"
///
/// [headers]
/// content-type = "application/json"
/// ```
pub async fn load_toml_to_request(toml_file_path: &Path) -> Result<FetchRequest> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    parse_request_toml(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))
}

/// 从 TOML 文本解析请求定义
pub fn parse_request_toml(content: &str) -> Result<FetchRequest> {
    let request: FetchRequest = toml::from_str(content)?;
    Ok(request)
}
