//! fetch 脚本生成
//!
//! 把 URL 与请求选项以 JSON 字面量的形式嵌入一个自包含的 async 箭头函数，
//! 页面执行该函数即可完成一次完整的请求/响应往返。

use crate::error::Result;
use crate::models::request::FetchRequest;

/// 收集响应头：同名响应头的每个值按迭代顺序追加
const COLLECT_HEADERS: &str =
    "const headers = {}; for (const [name, ...values] of resp.headers.entries()) { (headers[name] = headers[name] || []).push(...values); }";

const READ_BODY: &str = "const body = await resp.text();";

const RETURN_RESULT: &str =
    "return { type: resp.type, url: resp.url, status: resp.status, headers, body };";

/// 生成在页面内执行 fetch 的脚本
///
/// # 参数
/// - `url`: 请求地址，原样交给浏览器解析
/// - `req`: 请求选项
///
/// # 返回
/// 形如 `async _ => { ... }` 的函数表达式
pub fn build_fetch_script(url: &str, req: &FetchRequest) -> Result<String> {
    let url_literal = js_literal(serde_json::to_string(url)?);
    let init_literal = js_literal(req.to_json()?);

    Ok(format!(
        "async _ => {{ const resp = await fetch({}, {}); {} {} {} }}",
        url_literal, init_literal, COLLECT_HEADERS, READ_BODY, RETURN_RESULT
    ))
}

/// JSON 允许 U+2028/U+2029 裸出现在字符串中，旧版 JS 引擎不允许
fn js_literal(json: String) -> String {
    if json.contains(['\u{2028}', '\u{2029}']) {
        json.replace('\u{2028}', "\\u2028")
            .replace('\u{2029}', "\\u2029")
    } else {
        json
    }
}
