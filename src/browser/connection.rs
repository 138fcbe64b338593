use anyhow::{Context, Result};
use chromiumoxide::{Browser, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// 连接到已开启调试端口的浏览器并获取页面
///
/// 优先返回标题包含 `target_title` 的已打开页面，
/// 否则新建页面并导航到 `target_url`。
pub async fn connect_to_browser_and_page(
    port: u16,
    target_url: Option<&str>,
    target_title: Option<&str>,
) -> Result<(Browser, Page)> {
    let browser_url = format!("http://localhost:{}", port);
    info!("正在连接到浏览器: {}", browser_url);

    let (browser, mut handler) = Browser::connect(&browser_url)
        .await
        .inspect_err(|e| error!("连接浏览器失败: {}", e))
        .with_context(|| format!("无法连接到浏览器 (端口: {})", port))?;

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    if let Some(title) = target_title {
        if let Some(page) = find_page_by_title(&browser, title).await? {
            return Ok((browser, page));
        }
        debug!("未找到标题包含 '{}' 的页面，将创建新页面", title);
    }

    let page = browser
        .new_page("about:blank")
        .await
        .context("创建新页面失败")?;

    if let Some(url) = target_url {
        page.goto(url)
            .await
            .with_context(|| format!("导航到 {} 失败", url))?;
        info!("已导航到: {}", url);
    }

    Ok((browser, page))
}

async fn find_page_by_title(browser: &Browser, title: &str) -> Result<Option<Page>> {
    let pages = browser.pages().await?;
    debug!("获取到 {} 个页面", pages.len());

    for page in pages {
        if let Ok(Some(page_title)) = page.get_title().await {
            if page_title.contains(title) {
                info!("✓ 找到目标页面: {}", page_title);
                return Ok(Some(page));
            }
        }
    }
    Ok(None)
}
