//! 应用编排
//!
//! 页面生命周期：连接页面 → 启动提示框淡出 → 读取预加载测验 →
//! 渲染题目 → 安装提交探针 → 轮询提交事件并驱动提交流程 →
//! 表单锁定后退出。

use std::time::Duration;

use chromiumoxide::Browser;
use tracing::{info, warn};

use crate::browser;
use crate::clients::QuizClient;
use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::JsExecutor;
use crate::models::QuizDefinition;
use crate::page::{BrowserPage, PageContext};
use crate::services::alert_fade::fade_alerts;
use crate::services::QuizRenderer;
use crate::workflow::{SubmissionFlow, SubmitOutcome};

/// 应用主结构
pub struct App {
    config: Config,
    // 保持浏览器连接存活
    _browser: Browser,
    page: BrowserPage,
}

impl App {
    /// 初始化应用：连接浏览器并定位文章页面
    pub async fn initialize(config: Config) -> AppResult<Self> {
        log_startup(&config);

        let (browser, page) =
            browser::connect_to_browser_and_page(config.browser_debug_port, &config.target_url)
                .await?;

        Ok(Self {
            config,
            _browser: browser,
            page: BrowserPage::new(JsExecutor::new(page)),
        })
    }

    /// 运行应用主逻辑
    ///
    /// 提示框淡出与测验无关，页面加载后即计时；
    /// 测验流程无论怎样收场（无数据、无表单、锁定、出错），
    /// 都要等淡出完成后再退出。
    pub async fn run(&self) -> AppResult<()> {
        let fade_page = self.page.clone();
        let fade_delay = Duration::from_millis(self.config.alert_fade_delay_ms);
        let fade_task = tokio::spawn(async move {
            if let Err(e) = fade_alerts(&fade_page, fade_delay).await {
                warn!("提示框淡出失败: {}", e);
            }
        });

        let result = self.run_quiz().await;

        if let Err(e) = fade_task.await {
            warn!("提示框淡出任务异常: {}", e);
        }

        result
    }

    /// 测验主流程：读取定义 → 渲染 → 安装探针 → 驱动提交
    async fn run_quiz(&self) -> AppResult<()> {
        // 预加载数据缺失或为空：不渲染，不装提交处理
        let quiz = match self.page.quiz_data().await? {
            Some(quiz) if !quiz.is_empty() => quiz,
            _ => {
                warn!("页面没有预加载的测验数据，跳过渲染");
                return Ok(());
            }
        };
        info!("✓ 读取到 {} 道题目", quiz.len());

        let renderer = QuizRenderer::new(self.config.questions_container_id.clone());
        renderer.render(&self.page, &quiz).await?;
        info!("✓ 题目已渲染");

        if !self
            .page
            .install_submit_probe(&self.config.quiz_form_id)
            .await?
        {
            warn!("页面没有测验表单 #{}，结束", self.config.quiz_form_id);
            return Ok(());
        }

        self.drive_submissions(&quiz).await
    }

    /// 轮询提交事件并驱动提交流程，直到表单锁定
    async fn drive_submissions(&self, quiz: &QuizDefinition) -> AppResult<()> {
        let client = QuizClient::new(&self.config);
        let mut flow = SubmissionFlow::new(
            client,
            self.config.quiz_form_id.clone(),
            self.config.results_container_id.clone(),
            self.config.csrf_cookie_name.clone(),
        );

        let poll_interval = Duration::from_millis(self.config.submit_poll_interval_ms);
        let mut seen = self.page.submit_count().await?;

        loop {
            tokio::time::sleep(poll_interval).await;
            let count = self.page.submit_count().await?;
            if count == seen {
                continue;
            }
            seen = count;

            match flow.handle_submit(&self.page, quiz).await? {
                SubmitOutcome::Graded { score, total } => {
                    info!("🎉 测验完成: {}/{}", score, total);
                    return Ok(());
                }
                outcome => {
                    if self.config.verbose_logging {
                        info!("提交结局: {:?}", outcome);
                    }
                }
            }
        }
    }
}

/// 记录程序启动信息
fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 文章测验页面驱动");
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📄 文章页面: {}", config.target_url);
    info!("📤 提交接口: {}", config.submit_endpoint);
    info!("{}", "=".repeat(60));
}
