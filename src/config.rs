/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 浏览器调试端口
    pub browser_debug_port: u16,
    /// 文章页面URL
    pub target_url: String,
    /// 测验提交接口
    pub submit_endpoint: String,
    /// CSRF Cookie 名称
    pub csrf_cookie_name: String,
    /// CSRF 请求头名称
    pub csrf_header_name: String,
    /// 测验表单元素 id
    pub quiz_form_id: String,
    /// 题目容器元素 id
    pub questions_container_id: String,
    /// 反馈容器元素 id
    pub results_container_id: String,
    /// 提示框淡出延迟（毫秒）
    pub alert_fade_delay_ms: u64,
    /// 提交事件轮询间隔（毫秒）
    pub submit_poll_interval_ms: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser_debug_port: 9222,
            target_url: "http://localhost:5000/".to_string(),
            submit_endpoint: "http://localhost:5000/submit_quiz".to_string(),
            csrf_cookie_name: "csrf_token".to_string(),
            csrf_header_name: "X-CSRFToken".to_string(),
            quiz_form_id: "quiz-form".to_string(),
            questions_container_id: "quiz-questions".to_string(),
            results_container_id: "quiz-results".to_string(),
            alert_fade_delay_ms: 5000,
            submit_poll_interval_ms: 200,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            browser_debug_port: std::env::var("BROWSER_DEBUG_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.browser_debug_port),
            target_url: std::env::var("TARGET_URL").unwrap_or(default.target_url),
            submit_endpoint: std::env::var("SUBMIT_ENDPOINT").unwrap_or(default.submit_endpoint),
            csrf_cookie_name: std::env::var("CSRF_COOKIE_NAME").unwrap_or(default.csrf_cookie_name),
            csrf_header_name: std::env::var("CSRF_HEADER_NAME").unwrap_or(default.csrf_header_name),
            quiz_form_id: std::env::var("QUIZ_FORM_ID").unwrap_or(default.quiz_form_id),
            questions_container_id: std::env::var("QUESTIONS_CONTAINER_ID").unwrap_or(default.questions_container_id),
            results_container_id: std::env::var("RESULTS_CONTAINER_ID").unwrap_or(default.results_container_id),
            alert_fade_delay_ms: std::env::var("ALERT_FADE_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.alert_fade_delay_ms),
            submit_poll_interval_ms: std::env::var("SUBMIT_POLL_INTERVAL_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.submit_poll_interval_ms),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
