//! 反馈标记构建 - 业务能力层
//!
//! 纯函数：把评分结果转成反馈容器的标记。成功时是分数摘要加逐题列表，
//! 失败时是一个错误提示框。

use crate::models::FeedbackItem;
use crate::services::quiz_renderer::escape_html;

/// 传输失败时展示的通用提示
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "An error occurred while submitting your quiz. Please try again later.";

/// 未答完全部题目时的弹窗提示
pub const INCOMPLETE_MESSAGE: &str = "Please answer all questions before submitting the quiz.";

/// 构建评分成功的反馈标记
///
/// 分数摘要在前，随后每题一个列表项：题干、用户答案、正确答案、
/// 对错标记。列表顺序与题目定义一致。
pub fn success_html(score: u32, total: u32, feedback: &[FeedbackItem]) -> String {
    let mut html = format!(
        "<div class=\"alert alert-success\">You scored {} out of {}.</div>",
        score, total
    );
    html.push_str("<ul class=\"list-group\">");
    for (index, item) in feedback.iter().enumerate() {
        let marker = if item.is_correct {
            "<span class=\"text-success\">Correct</span>"
        } else {
            "<span class=\"text-danger\">Incorrect</span>"
        };
        html.push_str(&format!(
            concat!(
                "<li class=\"list-group-item\">",
                "<strong>Question {n}:</strong> {question}<br>",
                "<strong>Your Answer:</strong> {your_answer}<br>",
                "<strong>Correct Answer:</strong> {correct_answer}<br>",
                "{marker}",
                "</li>"
            ),
            n = index + 1,
            question = escape_html(&item.question),
            your_answer = escape_html(&item.your_answer),
            correct_answer = escape_html(&item.correct_answer),
            marker = marker
        ));
    }
    html.push_str("</ul>");
    html
}

/// 构建错误提示标记
pub fn error_html(message: &str) -> String {
    format!(
        "<div class=\"alert alert-danger\">{}</div>",
        escape_html(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(question: &str, yours: &str, correct: &str, is_correct: bool) -> FeedbackItem {
        FeedbackItem {
            question: question.to_string(),
            your_answer: yours.to_string(),
            correct_answer: correct.to_string(),
            is_correct,
        }
    }

    #[test]
    fn success_html_contains_score_summary() {
        let html = success_html(1, 2, &[]);
        assert!(html.contains("You scored 1 out of 2."));
    }

    #[test]
    fn success_html_marks_each_item() {
        let html = success_html(
            1,
            2,
            &[
                item("Q1", "A", "A", true),
                item("Q2", "B", "C", false),
            ],
        );
        assert_eq!(html.matches("list-group-item").count(), 2);
        assert_eq!(html.matches(">Correct</span>").count(), 1);
        assert_eq!(html.matches(">Incorrect</span>").count(), 1);
        assert!(html.contains("<strong>Question 1:</strong> Q1"));
        assert!(html.contains("<strong>Question 2:</strong> Q2"));
    }

    #[test]
    fn error_html_carries_server_message() {
        assert_eq!(
            error_html("Quiz not found."),
            "<div class=\"alert alert-danger\">Quiz not found.</div>"
        );
    }

    #[test]
    fn feedback_text_is_escaped() {
        let html = success_html(0, 1, &[item("<i>q</i>", "a<b>", "c&d", false)]);
        assert!(html.contains("&lt;i&gt;q&lt;/i&gt;"));
        assert!(html.contains("a&lt;b&gt;"));
        assert!(html.contains("c&amp;d"));
    }
}
