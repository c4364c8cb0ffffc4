use std::future::Future;
use std::sync::Mutex;

use super::{TriviaProvider, TriviaVerdict};
use crate::games::SessionRng;

struct BankEntry {
    topic: &'static str,
    question: &'static str,
    answer: &'static str,
    keywords: &'static [&'static str],
}

const BANK: &[BankEntry] = &[
    BankEntry {
        topic: "React",
        question: "Which React hook lets a function component keep local state?",
        answer: "useState",
        keywords: &["usestate"],
    },
    BankEntry {
        topic: "React",
        question: "What does React compare against the previous render to decide what to update in the DOM?",
        answer: "The virtual DOM",
        keywords: &["virtual dom", "vdom"],
    },
    BankEntry {
        topic: "React",
        question: "Which hook runs side effects after a component renders?",
        answer: "useEffect",
        keywords: &["useeffect"],
    },
    BankEntry {
        topic: "JavaScript",
        question: "What does `typeof null` evaluate to in JavaScript?",
        answer: "\"object\"",
        keywords: &["object"],
    },
    BankEntry {
        topic: "JavaScript",
        question: "Which keyword declares a block-scoped variable that cannot be reassigned?",
        answer: "const",
        keywords: &["const"],
    },
    BankEntry {
        topic: "JavaScript",
        question: "What object represents the eventual completion of an asynchronous operation?",
        answer: "A Promise",
        keywords: &["promise"],
    },
    BankEntry {
        topic: "CSS",
        question: "What does CSS stand for?",
        answer: "Cascading Style Sheets",
        keywords: &["cascading style sheets", "cascading"],
    },
    BankEntry {
        topic: "CSS",
        question: "Which `display` value lays out children along a single axis with flexible sizing?",
        answer: "flex",
        keywords: &["flex"],
    },
    BankEntry {
        topic: "CSS",
        question: "Which property controls the stacking order of positioned elements?",
        answer: "z-index",
        keywords: &["z-index", "zindex", "z index"],
    },
    BankEntry {
        topic: "AI History",
        question: "Which test, proposed in 1950, asks whether a machine's replies can pass for a human's?",
        answer: "The Turing test",
        keywords: &["turing"],
    },
    BankEntry {
        topic: "AI History",
        question: "Which IBM computer beat Garry Kasparov at chess in 1997?",
        answer: "Deep Blue",
        keywords: &["deep blue"],
    },
    BankEntry {
        topic: "AI History",
        question: "At which 1956 workshop was the term \"artificial intelligence\" coined?",
        answer: "The Dartmouth workshop",
        keywords: &["dartmouth"],
    },
    BankEntry {
        topic: "Video Games",
        question: "Which 1972 arcade game about table tennis launched Atari?",
        answer: "Pong",
        keywords: &["pong"],
    },
    BankEntry {
        topic: "Video Games",
        question: "Which plumber first appeared as \"Jumpman\" in Donkey Kong?",
        answer: "Mario",
        keywords: &["mario"],
    },
    BankEntry {
        topic: "Video Games",
        question: "In which game do players eat food to grow longer while avoiding their own tail?",
        answer: "Snake",
        keywords: &["snake"],
    },
];

/// Built-in question bank judged by case-insensitive keyword match.
pub struct OfflineTriviaProvider {
    rng: Mutex<SessionRng>,
}

impl OfflineTriviaProvider {
    pub fn new(rng: SessionRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn pick_question(&self, topic: &str) -> Result<String, String> {
        let candidates: Vec<&BankEntry> = BANK
            .iter()
            .filter(|entry| entry.topic.eq_ignore_ascii_case(topic))
            .collect();
        if candidates.is_empty() {
            return Err(format!("No questions for topic '{}'", topic));
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| format!("Question picker poisoned: {}", e))?;
        let index = rng.random_range(0..candidates.len());
        Ok(candidates[index].question.to_string())
    }

    fn judge(question: &str, answer: &str) -> Result<TriviaVerdict, String> {
        let entry = BANK
            .iter()
            .find(|entry| entry.question == question)
            .ok_or_else(|| format!("Unknown question '{}'", question))?;

        let answer = answer.to_lowercase();
        let correct = entry.keywords.iter().any(|keyword| answer.contains(keyword));
        let feedback = if correct {
            format!("Correct! It's {}.", entry.answer)
        } else {
            format!("Not quite. The answer is {}.", entry.answer)
        };
        Ok(TriviaVerdict { correct, feedback })
    }
}

impl TriviaProvider for OfflineTriviaProvider {
    fn generate_question(&self, topic: &str) -> impl Future<Output = Result<String, String>> + Send {
        let result = self.pick_question(topic);
        async move { result }
    }

    fn check_answer(
        &self,
        question: &str,
        answer: &str,
    ) -> impl Future<Output = Result<TriviaVerdict, String>> + Send {
        let result = Self::judge(question, answer);
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trivia::TOPICS;

    fn provider() -> OfflineTriviaProvider {
        OfflineTriviaProvider::new(SessionRng::new(9))
    }

    #[test]
    fn test_every_topic_has_questions() {
        for topic in TOPICS {
            assert!(BANK.iter().any(|entry| entry.topic == topic), "{}", topic);
        }
    }

    #[tokio::test]
    async fn test_question_belongs_to_topic() {
        let provider = provider();
        for _ in 0..10 {
            let question = provider.generate_question("css").await.unwrap();
            let entry = BANK.iter().find(|e| e.question == question).unwrap();
            assert_eq!(entry.topic, "CSS");
        }
    }

    #[tokio::test]
    async fn test_unknown_topic_fails() {
        assert!(provider().generate_question("Cooking").await.is_err());
    }

    #[tokio::test]
    async fn test_keyword_match_ignores_case() {
        let provider = provider();
        let verdict = provider
            .check_answer("What does CSS stand for?", "cascading STYLE sheets")
            .await
            .unwrap();
        assert!(verdict.correct);
        assert!(verdict.feedback.starts_with("Correct!"));

        let verdict = provider
            .check_answer("What does CSS stand for?", "Computer Style Sheets")
            .await
            .unwrap();
        assert!(!verdict.correct);
        assert_eq!(verdict.feedback, "Not quite. The answer is Cascading Style Sheets.");
    }

    #[tokio::test]
    async fn test_unknown_question_fails() {
        assert!(provider().check_answer("Who?", "me").await.is_err());
    }
}
