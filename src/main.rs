use std::path::Path;

use anyhow::Result;
use page_fetch::browser::{connect_to_browser_and_page, launch_headless_browser};
use page_fetch::models::load_toml_to_request;
use page_fetch::utils::logging;
use page_fetch::{Config, FetchRequest, JsExecutor, PageFetch};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);
    logging::log_startup(&config.fetch_url, config.headless);

    let (_browser, page) = if config.headless {
        launch_headless_browser(&config.target_url, config.chrome_executable.as_deref()).await?
    } else {
        connect_to_browser_and_page(
            config.browser_debug_port,
            Some(&config.target_url),
            config.target_title.as_deref(),
        )
        .await?
    };

    let request = match &config.request_file {
        Some(path) => load_toml_to_request(Path::new(path)).await?,
        None => FetchRequest::get(),
    };

    let executor = JsExecutor::new(page);
    let origin: String = executor.eval_as("location.origin").await?;
    info!("📍 页面来源: {}", origin);

    let fetcher = PageFetch::new(executor);
    let response = fetcher.fetch(&config.fetch_url, &request).await?;

    info!("📄 {} {:?} {}", response.status, response.response_type, response.url);
    for (name, values) in &response.headers {
        info!("  {}: {}", name, values.join(", "));
    }
    println!("{}", response.body);

    Ok(())
}
