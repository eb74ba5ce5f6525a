pub mod quiz_client;

pub use quiz_client::{QuizClient, SubmitQuiz};
