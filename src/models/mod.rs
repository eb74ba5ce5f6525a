pub mod quiz;

pub use quiz::{FeedbackItem, Question, QuizDefinition, RawReply, ResponseSet, SubmissionResult};
