//! 真实页面实现
//!
//! 每个能力都表达为一段注入页面的 JS 片段，经 [`JsExecutor`] 执行。
//! 片段统一返回 JSON 可序列化的值：找不到目标元素时返回 null/false，
//! 由 Rust 侧转成显式错误。

use std::collections::BTreeMap;

use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::infrastructure::JsExecutor;
use crate::models::QuizDefinition;
use crate::page::PageContext;

/// 浏览器页面能力实现
#[derive(Clone)]
pub struct BrowserPage {
    executor: JsExecutor,
}

impl BrowserPage {
    pub fn new(executor: JsExecutor) -> Self {
        Self { executor }
    }

    /// 在表单上安装提交探针
    ///
    /// 拦截 submit 事件（阻止默认跳转）并累加页面全局计数器，
    /// 宿主程序轮询计数器得知用户点击了提交。
    /// 表单不存在时返回 false，调用方不再轮询。
    pub async fn install_submit_probe(&self, form_id: &str) -> AppResult<bool> {
        let script = format!(
            r#"
            (() => {{
                const form = document.getElementById({form});
                if (!form) {{
                    return false;
                }}
                if (window.__quizSubmitCount === undefined) {{
                    window.__quizSubmitCount = 0;
                    form.addEventListener('submit', (event) => {{
                        event.preventDefault();
                        window.__quizSubmitCount += 1;
                    }});
                }}
                return true;
            }})()
            "#,
            form = json!(form_id)
        );
        self.executor.eval_as(script).await
    }

    /// 读取提交探针计数器
    pub async fn submit_count(&self) -> AppResult<u64> {
        self.executor
            .eval_as("window.__quizSubmitCount || 0")
            .await
    }
}

impl PageContext for BrowserPage {
    async fn quiz_data(&self) -> AppResult<Option<QuizDefinition>> {
        self.executor
            .eval_as("typeof quizData !== 'undefined' ? quizData : null")
            .await
    }

    async fn set_inner_html(&self, element_id: &str, html: &str) -> AppResult<()> {
        let script = format!(
            r#"
            (() => {{
                const el = document.getElementById({id});
                if (!el) {{
                    return false;
                }}
                el.innerHTML = {html};
                return true;
            }})()
            "#,
            id = json!(element_id),
            html = json!(html)
        );
        let found: bool = self.executor.eval_as(script).await?;
        if found {
            Ok(())
        } else {
            Err(AppError::element_not_found(element_id))
        }
    }

    async fn form_values(&self, form_id: &str) -> AppResult<BTreeMap<String, String>> {
        let script = format!(
            r#"
            (() => {{
                const form = document.getElementById({form});
                if (!form) {{
                    return null;
                }}
                const entries = {{}};
                for (const [name, value] of new FormData(form).entries()) {{
                    entries[name] = value;
                }}
                return entries;
            }})()
            "#,
            form = json!(form_id)
        );
        let values: Option<BTreeMap<String, String>> = self.executor.eval_as(script).await?;
        values.ok_or_else(|| AppError::form_not_found(form_id))
    }

    async fn form_data_attr(&self, form_id: &str, attr: &str) -> AppResult<Option<String>> {
        let script = format!(
            r#"
            (() => {{
                const form = document.getElementById({form});
                if (!form) {{
                    return null;
                }}
                return form.getAttribute({attr});
            }})()
            "#,
            form = json!(form_id),
            attr = json!(attr)
        );
        self.executor.eval_as(script).await
    }

    async fn cookies(&self) -> AppResult<String> {
        self.executor.eval_as("document.cookie").await
    }

    async fn alert(&self, message: &str) -> AppResult<()> {
        let script = format!(
            r#"
            (() => {{
                window.alert({msg});
                return true;
            }})()
            "#,
            msg = json!(message)
        );
        let _: bool = self.executor.eval_as(script).await?;
        Ok(())
    }

    async fn set_form_disabled(&self, form_id: &str, disabled: bool) -> AppResult<()> {
        let script = format!(
            r#"
            (() => {{
                const form = document.getElementById({form});
                if (!form) {{
                    return false;
                }}
                form.querySelectorAll('input').forEach((input) => {{
                    input.disabled = {disabled};
                }});
                form.querySelectorAll('button[type="submit"]').forEach((button) => {{
                    button.disabled = {disabled};
                }});
                return true;
            }})()
            "#,
            form = json!(form_id),
            disabled = disabled
        );
        let found: bool = self.executor.eval_as(script).await?;
        if found {
            Ok(())
        } else {
            Err(AppError::form_not_found(form_id))
        }
    }

    async fn set_submit_disabled(&self, form_id: &str, disabled: bool) -> AppResult<()> {
        let script = format!(
            r#"
            (() => {{
                const form = document.getElementById({form});
                if (!form) {{
                    return false;
                }}
                form.querySelectorAll('button[type="submit"]').forEach((button) => {{
                    button.disabled = {disabled};
                }});
                return true;
            }})()
            "#,
            form = json!(form_id),
            disabled = disabled
        );
        let found: bool = self.executor.eval_as(script).await?;
        if found {
            Ok(())
        } else {
            Err(AppError::form_not_found(form_id))
        }
    }

    async fn add_class_to_all(&self, selector: &str, class: &str) -> AppResult<()> {
        let script = format!(
            r#"
            (() => {{
                document.querySelectorAll({selector}).forEach((el) => {{
                    el.classList.add({cls});
                }});
                return true;
            }})()
            "#,
            selector = json!(selector),
            cls = json!(class)
        );
        let _: bool = self.executor.eval_as(script).await?;
        Ok(())
    }
}
