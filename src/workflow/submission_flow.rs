//! 提交流程 - 流程层
//!
//! 状态机：Idle → Validating → Submitting → Rendered(success|error) → Locked。
//! Locked 为终态，只有评分成功才会到达；错误路径回到 Idle，用户可重试。
//!
//! 重入处理：请求在途期间禁用提交按钮，在途或已锁定时收到的提交事件
//! 直接忽略。
//!
//! 流程编排：采集作答 → 本地校验 → 发请求 → 渲染反馈 → 锁定表单。
//! 不持有页面资源，依赖注入的页面能力与提交能力。

use tracing::{error, info, warn};

use crate::clients::SubmitQuiz;
use crate::error::{AppError, AppResult, QuizError};
use crate::models::{QuizDefinition, ResponseSet, SubmissionResult};
use crate::page::PageContext;
use crate::services::cookie_value;
use crate::services::feedback::{self, INCOMPLETE_MESSAGE, TRANSPORT_FAILURE_MESSAGE};

/// 流程状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// 等待提交
    Idle,
    /// 请求在途
    Submitting,
    /// 评分成功后的终态
    Locked,
}

/// 单次提交尝试的结局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 在途或已锁定，事件被忽略
    Ignored,
    /// 有题未答，已弹窗提示，未发请求
    Incomplete,
    /// 评分成功，表单已锁定
    Graded { score: u32, total: u32 },
    /// 服务端拒绝，消息已展示，可重试
    Rejected,
    /// 传输/解析失败，已展示通用提示，可重试
    Failed,
}

/// 提交流程
pub struct SubmissionFlow<S> {
    submitter: S,
    form_id: String,
    results_container_id: String,
    csrf_cookie_name: String,
    state: FlowState,
}

impl<S: SubmitQuiz> SubmissionFlow<S> {
    pub fn new(
        submitter: S,
        form_id: impl Into<String>,
        results_container_id: impl Into<String>,
        csrf_cookie_name: impl Into<String>,
    ) -> Self {
        Self {
            submitter,
            form_id: form_id.into(),
            results_container_id: results_container_id.into(),
            csrf_cookie_name: csrf_cookie_name.into(),
            state: FlowState::Idle,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// 处理一次提交事件
    ///
    /// 返回 Err 仅表示页面本身不可操作（容器丢失、脚本失败）；
    /// 业务与传输层面的失败都已折叠进 [`SubmitOutcome`]。
    pub async fn handle_submit<P: PageContext>(
        &mut self,
        page: &P,
        quiz: &QuizDefinition,
    ) -> AppResult<SubmitOutcome> {
        match self.state {
            FlowState::Locked => {
                info!("表单已锁定，忽略提交事件");
                return Ok(SubmitOutcome::Ignored);
            }
            FlowState::Submitting => {
                info!("请求在途，忽略提交事件");
                return Ok(SubmitOutcome::Ignored);
            }
            FlowState::Idle => {}
        }

        // ---------- 校验 ----------
        let responses = ResponseSet::from_form_values(page.form_values(&self.form_id).await?);
        let total = quiz.len();
        let answered = responses.answered_count(total);

        if answered < total {
            info!("作答不完整 ({}/{})，不发请求", answered, total);
            page.alert(INCOMPLETE_MESSAGE).await?;
            return Ok(SubmitOutcome::Incomplete);
        }

        // ---------- 提交 ----------
        self.state = FlowState::Submitting;
        page.set_submit_disabled(&self.form_id, true).await?;

        let result = self.submit_responses(page, &responses).await;

        // ---------- 渲染反馈 ----------
        match result {
            Ok(SubmissionResult::Graded {
                score,
                total,
                feedback,
            }) => {
                page.set_inner_html(
                    &self.results_container_id,
                    &feedback::success_html(score, total, &feedback),
                )
                .await?;
                // 成功后锁定：所有输入与提交按钮禁用，不再接受变更
                page.set_form_disabled(&self.form_id, true).await?;
                self.state = FlowState::Locked;
                info!("✓ 评分完成: {}/{}，表单已锁定", score, total);
                Ok(SubmitOutcome::Graded { score, total })
            }
            Ok(SubmissionResult::Rejected { message }) => {
                warn!("服务端拒绝提交: {}", message);
                page.set_inner_html(&self.results_container_id, &feedback::error_html(&message))
                    .await?;
                page.set_submit_disabled(&self.form_id, false).await?;
                self.state = FlowState::Idle;
                Ok(SubmitOutcome::Rejected)
            }
            Err(e) => {
                error!("提交失败: {}", e);
                page.set_inner_html(
                    &self.results_container_id,
                    &feedback::error_html(TRANSPORT_FAILURE_MESSAGE),
                )
                .await?;
                page.set_submit_disabled(&self.form_id, false).await?;
                self.state = FlowState::Idle;
                Ok(SubmitOutcome::Failed)
            }
        }
    }

    /// 读取文章标识与防伪令牌并发起请求
    async fn submit_responses<P: PageContext>(
        &self,
        page: &P,
        responses: &ResponseSet,
    ) -> AppResult<SubmissionResult> {
        let article_id = page
            .form_data_attr(&self.form_id, "data-article-id")
            .await?
            .ok_or_else(|| {
                AppError::Quiz(QuizError::MissingArticleId {
                    form_id: self.form_id.clone(),
                })
            })?;

        let cookies = page.cookies().await?;
        let csrf_token = cookie_value(&cookies, &self.csrf_cookie_name);
        if csrf_token.is_none() {
            warn!("未找到防伪令牌 cookie: {}", self.csrf_cookie_name);
        }

        self.submitter
            .submit(&article_id, responses, csrf_token.as_deref())
            .await
    }
}
