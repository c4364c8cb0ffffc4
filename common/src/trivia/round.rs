use super::{ANSWER_FAILED, QUESTION_FAILED, TOPICS, TriviaVerdict};
use crate::log_warn;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TriviaPhase {
    Idle,
    Loading,
    AwaitingAnswer { question: String },
    Checking { question: String, answer: String },
    Answered { question: String, verdict: TriviaVerdict },
    Failed(String),
}

impl TriviaPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, TriviaPhase::Loading | TriviaPhase::Checking { .. })
    }

    pub fn question(&self) -> Option<&str> {
        match self {
            TriviaPhase::AwaitingAnswer { question }
            | TriviaPhase::Checking { question, .. }
            | TriviaPhase::Answered { question, .. } => Some(question),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriviaRound {
    topic: String,
    phase: TriviaPhase,
}

impl Default for TriviaRound {
    fn default() -> Self {
        Self::new(TOPICS[0])
    }
}

impl TriviaRound {
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            phase: TriviaPhase::Idle,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn phase(&self) -> &TriviaPhase {
        &self.phase
    }

    /// Ignored while a request is in flight.
    pub fn set_topic(&mut self, topic: &str) -> bool {
        if self.phase.is_busy() {
            return false;
        }
        self.topic = topic.to_string();
        true
    }

    /// Moves to `Loading` and hands back the topic to ask about.
    pub fn begin_question(&mut self) -> Option<String> {
        if self.phase.is_busy() {
            return None;
        }
        self.phase = TriviaPhase::Loading;
        Some(self.topic.clone())
    }

    pub fn question_ready(&mut self, result: Result<String, String>) {
        if self.phase != TriviaPhase::Loading {
            return;
        }
        self.phase = match result {
            Ok(question) => TriviaPhase::AwaitingAnswer { question },
            Err(e) => {
                log_warn!("Trivia question for {} failed: {}", self.topic, e);
                TriviaPhase::Failed(QUESTION_FAILED.to_string())
            }
        };
    }

    /// Returns the question and trimmed answer to check. Empty answers are ignored.
    pub fn submit_answer(&mut self, answer: &str) -> Option<(String, String)> {
        let answer = answer.trim();
        if answer.is_empty() {
            return None;
        }
        let TriviaPhase::AwaitingAnswer { question } = &self.phase else {
            return None;
        };
        let question = question.clone();
        self.phase = TriviaPhase::Checking {
            question: question.clone(),
            answer: answer.to_string(),
        };
        Some((question, answer.to_string()))
    }

    pub fn answer_checked(&mut self, result: Result<TriviaVerdict, String>) {
        let TriviaPhase::Checking { question, .. } = &self.phase else {
            return;
        };
        self.phase = match result {
            Ok(verdict) => TriviaPhase::Answered {
                question: question.clone(),
                verdict,
            },
            Err(e) => {
                log_warn!("Trivia answer check failed: {}", e);
                TriviaPhase::Failed(ANSWER_FAILED.to_string())
            }
        };
    }
}
