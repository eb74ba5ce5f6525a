//! 测验提交客户端
//!
//! 封装对评分接口的一次性 POST：JSON 负载带文章标识与作答集合，
//! 防伪令牌放在请求头。不做重试，不设置显式超时，
//! 由传输层默认行为兜底。

use serde_json::json;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{RawReply, ResponseSet, SubmissionResult};

/// 提交能力
///
/// 流程层依赖此 trait 而非具体客户端，分支逻辑可脱离网络测试
pub trait SubmitQuiz {
    /// 提交作答并返回显式结果
    ///
    /// 网络失败与应答解析失败走 Err 分支，
    /// 服务端的 success/error 应答都归入 Ok 的两个变体
    fn submit(
        &self,
        article_id: &str,
        responses: &ResponseSet,
        csrf_token: Option<&str>,
    ) -> impl std::future::Future<Output = AppResult<SubmissionResult>> + Send;
}

/// 评分接口客户端
#[derive(Clone)]
pub struct QuizClient {
    http: reqwest::Client,
    endpoint: String,
    csrf_header_name: String,
}

impl QuizClient {
    /// 创建新的提交客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.submit_endpoint.clone(),
            csrf_header_name: config.csrf_header_name.clone(),
        }
    }

    /// 指定接口地址创建（测试用）
    pub fn with_endpoint(endpoint: impl Into<String>, csrf_header_name: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            csrf_header_name: csrf_header_name.into(),
        }
    }
}

impl SubmitQuiz for QuizClient {
    async fn submit(
        &self,
        article_id: &str,
        responses: &ResponseSet,
        csrf_token: Option<&str>,
    ) -> AppResult<SubmissionResult> {
        let payload = json!({
            "article_id": article_id,
            "responses": responses,
        });

        debug!("提交测验 Payload: {}", payload);

        let mut request = self.http.post(&self.endpoint).json(&payload);
        if let Some(token) = csrf_token {
            request = request.header(&self.csrf_header_name, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&self.endpoint, e))?;

        let reply: RawReply = response
            .json()
            .await
            .map_err(|e| AppError::api_request_failed(&self.endpoint, e))?;

        debug!("评分应答: status={}", reply.status);

        SubmissionResult::classify(reply)
    }
}
