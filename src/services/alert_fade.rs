//! 提示框自动淡出 - 业务能力层
//!
//! 与测验无关的独立工具：页面加载后等待固定延迟，
//! 给当时存在的所有提示框打上淡出 class。一次性，无重试。

use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use crate::error::AppResult;
use crate::page::PageContext;

const ALERT_SELECTOR: &str = ".alert";
const FADE_CLASS: &str = "fade";

/// 延迟后淡出所有提示框
pub async fn fade_alerts<P: PageContext>(page: &P, delay: Duration) -> AppResult<()> {
    sleep(delay).await;
    page.add_class_to_all(ALERT_SELECTOR, FADE_CLASS).await?;
    debug!("提示框已淡出");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::FakePage;

    #[tokio::test]
    async fn adds_fade_class_to_alerts_after_delay() {
        let page = FakePage::new();

        fade_alerts(&page, Duration::from_millis(0)).await.unwrap();

        assert_eq!(
            page.classes_added(),
            vec![(".alert".to_string(), "fade".to_string())]
        );
    }

    #[tokio::test]
    async fn waits_for_the_configured_delay() {
        tokio::time::pause();
        let page = FakePage::new();

        let fade = fade_alerts(&page, Duration::from_secs(5));
        tokio::pin!(fade);

        // 延迟未到时不应触发
        assert!(futures::poll!(fade.as_mut()).is_pending());
        assert!(page.classes_added().is_empty());

        tokio::time::advance(Duration::from_secs(5)).await;
        fade.await.unwrap();
        assert_eq!(page.classes_added().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn spawned_fade_still_lands_when_main_work_finishes_first() {
        use std::sync::Arc;

        let page = Arc::new(FakePage::new());
        let fade_page = Arc::clone(&page);
        let fade_task = tokio::spawn(async move {
            fade_alerts(fade_page.as_ref(), Duration::from_secs(5)).await
        });

        // 主流程瞬间结束（如页面没有测验数据），此时延迟还没到
        assert!(page.classes_added().is_empty());

        // 退出前等淡出任务收尾
        fade_task.await.unwrap().unwrap();
        assert_eq!(
            page.classes_added(),
            vec![(".alert".to_string(), "fade".to_string())]
        );
    }
}
