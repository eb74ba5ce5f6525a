//! 页面能力层
//!
//! 渲染与提交逻辑不直接触碰 `document`，而是依赖注入的页面能力对象。
//! 生产实现 [`BrowserPage`] 通过 CDP 驱动真实页面；
//! [`fake::FakePage`] 是内存实现，测试无需浏览器。

pub mod browser_page;
pub mod fake;

use std::collections::BTreeMap;

use crate::error::AppResult;
use crate::models::QuizDefinition;

/// 页面能力对象
///
/// 覆盖测验流程所需的全部 DOM 交互：写容器、读表单、读 cookie、
/// 弹窗提示、禁用控件。实现方保证所有操作都发生在页面主线程语义下。
pub trait PageContext {
    /// 读取页面预加载的测验定义（`quizData` 全局），不存在时返回 None
    fn quiz_data(&self) -> impl std::future::Future<Output = AppResult<Option<QuizDefinition>>> + Send;

    /// 整体替换指定容器的内容
    fn set_inner_html(
        &self,
        element_id: &str,
        html: &str,
    ) -> impl std::future::Future<Output = AppResult<()>> + Send;

    /// 采集表单当前已选字段（字段名 → 选项文本）
    fn form_values(
        &self,
        form_id: &str,
    ) -> impl std::future::Future<Output = AppResult<BTreeMap<String, String>>> + Send;

    /// 读取表单上的 data 属性
    fn form_data_attr(
        &self,
        form_id: &str,
        attr: &str,
    ) -> impl std::future::Future<Output = AppResult<Option<String>>> + Send;

    /// 页面当前的原始 cookie 串
    fn cookies(&self) -> impl std::future::Future<Output = AppResult<String>> + Send;

    /// 同步弹窗提示
    fn alert(&self, message: &str) -> impl std::future::Future<Output = AppResult<()>> + Send;

    /// 禁用/启用表单全部输入控件与提交按钮
    fn set_form_disabled(
        &self,
        form_id: &str,
        disabled: bool,
    ) -> impl std::future::Future<Output = AppResult<()>> + Send;

    /// 仅禁用/启用提交按钮（请求在途期间的防重入）
    fn set_submit_disabled(
        &self,
        form_id: &str,
        disabled: bool,
    ) -> impl std::future::Future<Output = AppResult<()>> + Send;

    /// 为所有匹配选择器的元素追加 class
    fn add_class_to_all(
        &self,
        selector: &str,
        class: &str,
    ) -> impl std::future::Future<Output = AppResult<()>> + Send;
}

pub use browser_page::BrowserPage;
pub use fake::FakePage;
