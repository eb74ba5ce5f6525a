use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 页面相关错误
    Page(PageError),
    /// 提交接口调用错误
    Api(ApiError),
    /// 测验业务错误
    Quiz(QuizError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Page(e) => write!(f, "页面错误: {}", e),
            AppError::Api(e) => write!(f, "API错误: {}", e),
            AppError::Quiz(e) => write!(f, "测验错误: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Page(e) => Some(e),
            AppError::Api(e) => Some(e),
            AppError::Quiz(e) => Some(e),
        }
    }
}

/// 页面相关错误
#[derive(Debug)]
pub enum PageError {
    /// 连接浏览器失败
    ConnectionFailed {
        port: u16,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 创建或导航页面失败
    NavigationFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 执行页面脚本失败
    ScriptFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 页面元素不存在
    ElementNotFound { element_id: String },
    /// 测验表单不存在
    FormNotFound { form_id: String },
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::ConnectionFailed { port, source } => {
                write!(f, "无法连接到浏览器 (端口: {}): {}", port, source)
            }
            PageError::NavigationFailed { url, source } => {
                write!(f, "导航到 {} 失败: {}", url, source)
            }
            PageError::ScriptFailed { source } => {
                write!(f, "执行页面脚本失败: {}", source)
            }
            PageError::ElementNotFound { element_id } => {
                write!(f, "页面元素不存在: #{}", element_id)
            }
            PageError::FormNotFound { form_id } => {
                write!(f, "测验表单不存在: #{}", form_id)
            }
        }
    }
}

impl std::error::Error for PageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PageError::ConnectionFailed { source, .. }
            | PageError::NavigationFailed { source, .. }
            | PageError::ScriptFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 提交接口调用错误
#[derive(Debug)]
pub enum ApiError {
    /// 网络请求失败
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// JSON 解析失败
    JsonParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 响应结构不完整
    MalformedReply { detail: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed { endpoint, source } => {
                write!(f, "API请求失败 ({}): {}", endpoint, source)
            }
            ApiError::JsonParseFailed { source } => {
                write!(f, "JSON解析失败: {}", source)
            }
            ApiError::MalformedReply { detail } => {
                write!(f, "响应结构不完整: {}", detail)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::RequestFailed { source, .. } | ApiError::JsonParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 测验业务错误
#[derive(Debug)]
pub enum QuizError {
    /// 表单缺少文章标识
    MissingArticleId { form_id: String },
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::MissingArticleId { form_id } => {
                write!(f, "表单 #{} 缺少 data-article-id 属性", form_id)
            }
        }
    }
}

impl std::error::Error for QuizError {}

// ========== 从常见错误类型转换 ==========

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Page(PageError::ScriptFailed {
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(ApiError::JsonParseFailed {
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建浏览器连接错误
    pub fn connection_failed(
        port: u16,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Page(PageError::ConnectionFailed {
            port,
            source: Box::new(source),
        })
    }

    /// 创建页面导航错误
    pub fn navigation_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Page(PageError::NavigationFailed {
            url: url.into(),
            source: Box::new(source),
        })
    }

    /// 创建API请求失败错误
    pub fn api_request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建元素不存在错误
    pub fn element_not_found(element_id: impl Into<String>) -> Self {
        AppError::Page(PageError::ElementNotFound {
            element_id: element_id.into(),
        })
    }

    /// 创建表单不存在错误
    pub fn form_not_found(form_id: impl Into<String>) -> Self {
        AppError::Page(PageError::FormNotFound {
            form_id: form_id.into(),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
