pub mod alert_fade;
pub mod cookie;
pub mod feedback;
pub mod quiz_renderer;

pub use cookie::cookie_value;
pub use quiz_renderer::QuizRenderer;
