/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 浏览器调试端口
    pub browser_debug_port: u16,
    /// 执行 fetch 前页面所在的 URL（决定同源与 cookie）
    pub target_url: String,
    /// 按标题查找已打开的页面
    pub target_title: Option<String>,
    /// 是否启动无头浏览器，而不是连接已有浏览器
    pub headless: bool,
    /// 无头模式下的浏览器可执行文件，为空时自动查找
    pub chrome_executable: Option<String>,
    /// 在页面内请求的地址
    pub fetch_url: String,
    /// 请求定义 TOML 文件，为空时发送默认 GET
    pub request_file: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser_debug_port: 9222,
            target_url: "https://example.com/".to_string(),
            target_title: None,
            headless: false,
            chrome_executable: None,
            fetch_url: "https://example.com/".to_string(),
            request_file: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取配置，缺失或无法解析的值使用默认值
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            browser_debug_port: lookup("BROWSER_DEBUG_PORT").and_then(|v| v.parse().ok()).unwrap_or(default.browser_debug_port),
            target_url: lookup("TARGET_URL").unwrap_or(default.target_url),
            target_title: lookup("TARGET_TITLE").or(default.target_title),
            headless: lookup("HEADLESS").and_then(|v| v.parse().ok()).unwrap_or(default.headless),
            chrome_executable: lookup("CHROME_EXECUTABLE").or(default.chrome_executable),
            fetch_url: lookup("FETCH_URL").unwrap_or(default.fetch_url),
            request_file: lookup("REQUEST_FILE").or(default.request_file),
            verbose_logging: lookup("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("BROWSER_DEBUG_PORT", "2001"),
            ("HEADLESS", "true"),
            ("FETCH_URL", "https://example.com/api"),
            ("REQUEST_FILE", "demos/post_json.toml"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.browser_debug_port, 2001);
        assert!(config.headless);
        assert_eq!(config.fetch_url, "https://example.com/api");
        assert_eq!(config.request_file.as_deref(), Some("demos/post_json.toml"));
        assert_eq!(config.target_url, Config::default().target_url);
    }

    #[test]
    fn test_invalid_values_fall_back_to_default() {
        let config = Config::from_lookup(|key| match key {
            "BROWSER_DEBUG_PORT" => Some("not-a-port".to_string()),
            "VERBOSE_LOGGING" => Some("yes".to_string()),
            _ => None,
        });
        assert_eq!(config.browser_debug_port, 9222);
        assert!(!config.verbose_logging);
    }
}
