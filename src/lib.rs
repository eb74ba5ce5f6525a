//! # Article Quiz
//!
//! 驱动文章测验页面的 Rust 应用程序：渲染选择题、采集作答、
//! 提交评分并就地展示反馈。
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `JsExecutor` - 唯一的 page owner，提供 eval() 能力
//!
//! ### ② 页面能力层（Page）
//! - `page/` - 注入式页面能力对象（PageContext）
//! - `BrowserPage` - CDP 驱动的真实页面实现
//! - `FakePage` - 内存实现，测试无需浏览器
//!
//! ### ③ 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `QuizRenderer` - 题目渲染能力
//! - `feedback` - 反馈标记构建能力
//! - `cookie` - Cookie 读取能力
//! - `alert_fade` - 提示框淡出能力
//!
//! ### ④ 流程层（Workflow）
//! - `workflow/` - 定义一次提交的完整状态机
//! - `SubmissionFlow` - Idle → Submitting → Rendered → Locked
//!
//! ### ⑤ 编排层（App）
//! - `app` - 页面生命周期：渲染 → 轮询提交事件 → 驱动流程

pub mod app;
pub mod browser;
pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod page;
pub mod services;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{QuizClient, SubmitQuiz};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::JsExecutor;
pub use models::{FeedbackItem, Question, QuizDefinition, ResponseSet, SubmissionResult};
pub use page::{BrowserPage, FakePage, PageContext};
pub use services::{cookie_value, QuizRenderer};
pub use workflow::{FlowState, SubmissionFlow, SubmitOutcome};
