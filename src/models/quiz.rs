//! 测验数据模型
//!
//! 页面预加载的题目定义、用户作答集合以及评分接口的应答结构

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, AppError, AppResult};

/// 单道选择题
///
/// 正确答案只存在于服务端，页面侧只知道题干和选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 题干
    pub question: String,
    /// 选项（有序）
    pub options: Vec<String>,
}

/// 测验定义
///
/// 页面预加载的有序题目列表，渲染后不再变化
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizDefinition(pub Vec<Question>);

impl QuizDefinition {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.0
    }
}

/// 用户作答集合
///
/// 每次提交尝试时从表单重新采集，键为 `question_<i>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResponseSet(BTreeMap<String, String>);

impl ResponseSet {
    /// 第 i 题对应的表单字段名
    pub fn field_name(index: usize) -> String {
        format!("question_{}", index)
    }

    /// 从表单字段值构建作答集合，忽略空值
    pub fn from_form_values(values: BTreeMap<String, String>) -> Self {
        Self(
            values
                .into_iter()
                .filter(|(_, v)| !v.is_empty())
                .collect(),
        )
    }

    pub fn insert(&mut self, field: impl Into<String>, answer: impl Into<String>) {
        self.0.insert(field.into(), answer.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 统计前 total 题中已作答的数量
    pub fn answered_count(&self, total: usize) -> usize {
        (0..total)
            .filter(|i| {
                self.0
                    .get(&Self::field_name(*i))
                    .map(|v| !v.is_empty())
                    .unwrap_or(false)
            })
            .count()
    }
}

/// 单题评分反馈
///
/// 由服务端计算，顺序与题目定义一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub question: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// 评分接口的原始应答
///
/// status 为 "success" 时携带分数与反馈，否则携带错误消息
#[derive(Debug, Clone, Deserialize)]
pub struct RawReply {
    pub status: String,
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub feedback: Option<Vec<FeedbackItem>>,
    #[serde(default)]
    pub message: Option<String>,
}

/// 提交结果
///
/// 显式的成功/失败变体，调用方以穷尽匹配处理；
/// 传输层失败走 `AppResult` 的 Err 分支
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// 评分成功
    Graded {
        score: u32,
        total: u32,
        feedback: Vec<FeedbackItem>,
    },
    /// 服务端拒绝，消息原样展示给用户
    Rejected { message: String },
}

impl SubmissionResult {
    /// 将原始应答归类为显式结果
    ///
    /// success 应答缺少分数字段视为结构不完整
    pub fn classify(reply: RawReply) -> AppResult<Self> {
        if reply.status == "success" {
            match (reply.score, reply.total) {
                (Some(score), Some(total)) => Ok(SubmissionResult::Graded {
                    score,
                    total,
                    feedback: reply.feedback.unwrap_or_default(),
                }),
                _ => Err(AppError::Api(ApiError::MalformedReply {
                    detail: "success 应答缺少 score/total".to_string(),
                })),
            }
        } else {
            Ok(SubmissionResult::Rejected {
                message: reply
                    .message
                    .unwrap_or_else(|| format!("status: {}", reply.status)),
            })
        }
    }
}
