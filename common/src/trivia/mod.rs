mod offline;
mod round;
mod service;

use std::future::Future;

pub use offline::OfflineTriviaProvider;
pub use round::{TriviaPhase, TriviaRound};
pub use service::{TriviaCommand, serve};

pub const TOPICS: [&str; 5] = ["React", "JavaScript", "CSS", "AI History", "Video Games"];

pub const QUESTION_FAILED: &str = "Unable to generate question";
pub const ANSWER_FAILED: &str = "Unable to check answer";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriviaVerdict {
    pub correct: bool,
    pub feedback: String,
}

/// Source of questions and judge of answers. Implementations may be remote and slow.
pub trait TriviaProvider: Send + Sync {
    fn generate_question(&self, topic: &str) -> impl Future<Output = Result<String, String>> + Send;

    fn check_answer(
        &self,
        question: &str,
        answer: &str,
    ) -> impl Future<Output = Result<TriviaVerdict, String>> + Send;
}
