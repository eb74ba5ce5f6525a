//! 测验渲染 - 业务能力层
//!
//! 把测验定义转成题目容器里的标记：每题一个带编号的区块，
//! 每个选项一个单选控件加绑定的标签。幂等：重复渲染整体替换，
//! 不产生重复区块。不做校验，不发网络请求。

use crate::error::AppResult;
use crate::models::{QuizDefinition, ResponseSet};
use crate::page::PageContext;

/// 测验渲染器
pub struct QuizRenderer {
    questions_container_id: String,
}

impl QuizRenderer {
    pub fn new(questions_container_id: impl Into<String>) -> Self {
        Self {
            questions_container_id: questions_container_id.into(),
        }
    }

    /// 渲染测验到题目容器
    ///
    /// 空定义渲染为空内容（同样会清掉上一次的输出）
    pub async fn render<P: PageContext>(&self, page: &P, quiz: &QuizDefinition) -> AppResult<()> {
        let html = build_quiz_html(quiz);
        page.set_inner_html(&self.questions_container_id, &html)
            .await
    }
}

/// 构建题目区块标记
///
/// 单选控件的分组名编码题目位置（`question_<i>`），保证每题只能选一项，
/// 提交时也靠它把字段对回题目。选项 id 形如 `q<i>_option<j>`，
/// 标签通过 for 绑定到控件，点击文字即可选中。
pub fn build_quiz_html(quiz: &QuizDefinition) -> String {
    let mut html = String::new();
    for (index, question) in quiz.questions().iter().enumerate() {
        html.push_str("<div class=\"mb-4\">");
        html.push_str(&format!(
            "<p><strong>Question {}:</strong> {}</p>",
            index + 1,
            escape_html(&question.question)
        ));
        for (option_index, option) in question.options.iter().enumerate() {
            let option_id = format!("q{}_option{}", index, option_index);
            html.push_str(&format!(
                concat!(
                    "<div class=\"form-check\">",
                    "<input class=\"form-check-input\" type=\"radio\" ",
                    "name=\"{name}\" id=\"{id}\" value=\"{value}\">",
                    "<label class=\"form-check-label\" for=\"{id}\">{label}</label>",
                    "</div>"
                ),
                name = ResponseSet::field_name(index),
                id = option_id,
                value = escape_html(option),
                label = escape_html(option)
            ));
        }
        html.push_str("</div>");
    }
    html
}

/// 转义插入到标记中的文本
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;
    use crate::page::FakePage;

    fn sample_quiz() -> QuizDefinition {
        QuizDefinition(vec![
            Question {
                question: "Capital of France?".to_string(),
                options: vec!["Paris".to_string(), "Rome".to_string(), "Berlin".to_string()],
            },
            Question {
                question: "2 + 2 = ?".to_string(),
                options: vec!["3".to_string(), "4".to_string()],
            },
        ])
    }

    #[tokio::test]
    async fn renders_one_block_per_question() {
        let page = FakePage::new();
        let renderer = QuizRenderer::new("quiz-questions");

        renderer.render(&page, &sample_quiz()).await.unwrap();

        let html = page.html("quiz-questions").unwrap();
        assert_eq!(html.matches("<div class=\"mb-4\">").count(), 2);
        assert_eq!(html.matches("type=\"radio\"").count(), 5);
        assert!(html.contains("<strong>Question 1:</strong> Capital of France?"));
        assert!(html.contains("<strong>Question 2:</strong> 2 + 2 = ?"));
    }

    #[tokio::test]
    async fn groups_options_by_question_position() {
        let page = FakePage::new();
        let renderer = QuizRenderer::new("quiz-questions");

        renderer.render(&page, &sample_quiz()).await.unwrap();

        let html = page.html("quiz-questions").unwrap();
        assert_eq!(html.matches("name=\"question_0\"").count(), 3);
        assert_eq!(html.matches("name=\"question_1\"").count(), 2);
        // 标签绑定到控件
        assert!(html.contains("id=\"q0_option0\""));
        assert!(html.contains("for=\"q0_option0\""));
    }

    #[tokio::test]
    async fn rerender_replaces_previous_output() {
        let page = FakePage::new();
        let renderer = QuizRenderer::new("quiz-questions");

        renderer.render(&page, &sample_quiz()).await.unwrap();
        renderer.render(&page, &sample_quiz()).await.unwrap();

        let html = page.html("quiz-questions").unwrap();
        assert_eq!(html.matches("<div class=\"mb-4\">").count(), 2);
    }

    #[tokio::test]
    async fn empty_definition_clears_container() {
        let page = FakePage::new();
        let renderer = QuizRenderer::new("quiz-questions");

        renderer.render(&page, &sample_quiz()).await.unwrap();
        renderer.render(&page, &QuizDefinition::default()).await.unwrap();

        assert_eq!(page.html("quiz-questions").unwrap(), "");
    }

    #[test]
    fn escapes_markup_in_question_text() {
        let quiz = QuizDefinition(vec![Question {
            question: "<b>bold?</b>".to_string(),
            options: vec!["a & b".to_string()],
        }]);
        let html = build_quiz_html(&quiz);
        assert!(html.contains("&lt;b&gt;bold?&lt;/b&gt;"));
        assert!(html.contains("value=\"a &amp; b\""));
    }
}
