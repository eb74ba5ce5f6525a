//! 内存页面实现（测试用）
//!
//! 记录每次 DOM 操作的结果，便于断言：容器内容、弹窗消息、
//! 控件禁用状态、表单选择等。

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::models::QuizDefinition;
use crate::page::PageContext;

#[derive(Debug, Default)]
struct FakePageState {
    quiz: Option<QuizDefinition>,
    containers: BTreeMap<String, String>,
    selections: BTreeMap<String, String>,
    data_attrs: BTreeMap<String, String>,
    cookie_string: String,
    alerts: Vec<String>,
    form_disabled: bool,
    submit_disabled: bool,
    classes_added: Vec<(String, String)>,
    form_id: String,
}

/// 内存页面
///
/// 默认带有测验表单与两个容器（`quiz-form` / `quiz-questions` / `quiz-results`）
#[derive(Debug)]
pub struct FakePage {
    state: Mutex<FakePageState>,
}

impl Default for FakePage {
    fn default() -> Self {
        Self::new()
    }
}

impl FakePage {
    pub fn new() -> Self {
        let mut state = FakePageState {
            form_id: "quiz-form".to_string(),
            ..FakePageState::default()
        };
        state.containers.insert("quiz-questions".to_string(), String::new());
        state.containers.insert("quiz-results".to_string(), String::new());
        Self {
            state: Mutex::new(state),
        }
    }

    pub fn with_quiz(self, quiz: QuizDefinition) -> Self {
        self.state.lock().unwrap().quiz = Some(quiz);
        self
    }

    pub fn with_data_attr(self, attr: &str, value: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .data_attrs
            .insert(attr.to_string(), value.to_string());
        self
    }

    pub fn with_cookie_string(self, cookies: &str) -> Self {
        self.state.lock().unwrap().cookie_string = cookies.to_string();
        self
    }

    /// 模拟用户选中某个选项
    pub fn select(&self, field: &str, value: &str) {
        self.state
            .lock()
            .unwrap()
            .selections
            .insert(field.to_string(), value.to_string());
    }

    // ---------- 断言辅助 ----------

    pub fn html(&self, element_id: &str) -> Option<String> {
        self.state.lock().unwrap().containers.get(element_id).cloned()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.state.lock().unwrap().alerts.clone()
    }

    pub fn form_disabled(&self) -> bool {
        self.state.lock().unwrap().form_disabled
    }

    pub fn submit_disabled(&self) -> bool {
        self.state.lock().unwrap().submit_disabled
    }

    pub fn classes_added(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().classes_added.clone()
    }
}

impl PageContext for FakePage {
    async fn quiz_data(&self) -> AppResult<Option<QuizDefinition>> {
        Ok(self.state.lock().unwrap().quiz.clone())
    }

    async fn set_inner_html(&self, element_id: &str, html: &str) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        match state.containers.get_mut(element_id) {
            Some(content) => {
                *content = html.to_string();
                Ok(())
            }
            None => Err(AppError::element_not_found(element_id)),
        }
    }

    async fn form_values(&self, form_id: &str) -> AppResult<BTreeMap<String, String>> {
        let state = self.state.lock().unwrap();
        if state.form_id != form_id {
            return Err(AppError::form_not_found(form_id));
        }
        Ok(state.selections.clone())
    }

    async fn form_data_attr(&self, form_id: &str, attr: &str) -> AppResult<Option<String>> {
        let state = self.state.lock().unwrap();
        if state.form_id != form_id {
            return Err(AppError::form_not_found(form_id));
        }
        Ok(state.data_attrs.get(attr).cloned())
    }

    async fn cookies(&self) -> AppResult<String> {
        Ok(self.state.lock().unwrap().cookie_string.clone())
    }

    async fn alert(&self, message: &str) -> AppResult<()> {
        self.state.lock().unwrap().alerts.push(message.to_string());
        Ok(())
    }

    async fn set_form_disabled(&self, form_id: &str, disabled: bool) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.form_id != form_id {
            return Err(AppError::form_not_found(form_id));
        }
        state.form_disabled = disabled;
        state.submit_disabled = disabled;
        Ok(())
    }

    async fn set_submit_disabled(&self, form_id: &str, disabled: bool) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.form_id != form_id {
            return Err(AppError::form_not_found(form_id));
        }
        state.submit_disabled = disabled;
        Ok(())
    }

    async fn add_class_to_all(&self, selector: &str, class: &str) -> AppResult<()> {
        self.state
            .lock()
            .unwrap()
            .classes_added
            .push((selector.to_string(), class.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;

    #[tokio::test]
    async fn quiz_data_reflects_preloaded_definition() {
        let quiz = QuizDefinition(vec![Question {
            question: "Q".to_string(),
            options: vec!["A".to_string()],
        }]);
        let page = FakePage::new().with_quiz(quiz.clone());
        assert_eq!(page.quiz_data().await.unwrap(), Some(quiz));

        let empty = FakePage::new();
        assert_eq!(empty.quiz_data().await.unwrap(), None);
    }

    #[tokio::test]
    async fn unknown_container_is_an_error() {
        let page = FakePage::new();
        assert!(page.set_inner_html("missing", "<p></p>").await.is_err());
    }
}
