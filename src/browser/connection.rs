//! 浏览器连接
//!
//! 通过调试端口附加到已运行的浏览器。优先复用已经打开文章页的标签，
//! 否则新开页面并导航过去。

use chromiumoxide::{Browser, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// 连接到浏览器并获取文章页面
pub async fn connect_to_browser_and_page(port: u16, target_url: &str) -> AppResult<(Browser, Page)> {
    let browser_url = format!("http://localhost:{}", port);
    info!("正在连接到浏览器: {}", browser_url);

    let (browser, mut handler) = Browser::connect(&browser_url)
        .await
        .map_err(|e| AppError::connection_failed(port, e))?;

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

    let pages = browser.pages().await?;
    debug!("获取到 {} 个页面", pages.len());

    // 复用已经在文章页的标签
    for page in pages.iter() {
        if let Ok(Some(url)) = page.url().await {
            if url.starts_with(target_url) {
                info!("✓ 复用已打开的页面: {}", url);
                return Ok((browser, page.clone()));
            }
        }
    }

    debug!("未找到已打开的文章页，创建新页面");
    let page = browser
        .new_page("about:blank")
        .await
        .map_err(|e| AppError::navigation_failed(target_url, e))?;
    page.goto(target_url)
        .await
        .map_err(|e| AppError::navigation_failed(target_url, e))?;
    info!("已导航到: {}", target_url);

    Ok((browser, page))
}
