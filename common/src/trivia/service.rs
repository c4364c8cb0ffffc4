use tokio::sync::{mpsc, watch};

use super::TriviaProvider;
use super::round::TriviaRound;
use crate::feedback::{FeedbackCue, FeedbackHook};
use crate::log;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TriviaCommand {
    SetTopic(String),
    Ask,
    Answer(String),
}

/// Serves trivia commands one at a time, publishing the round before and after
/// each provider call. Returns once every command sender is dropped.
pub async fn serve<P, F>(
    provider: P,
    feedback: F,
    mut commands: mpsc::Receiver<TriviaCommand>,
    updates: watch::Sender<TriviaRound>,
) where
    P: TriviaProvider,
    F: FeedbackHook,
{
    let mut round = updates.borrow().clone();
    while let Some(command) = commands.recv().await {
        match command {
            TriviaCommand::SetTopic(topic) => {
                round.set_topic(&topic);
            }
            TriviaCommand::Ask => {
                let Some(topic) = round.begin_question() else {
                    continue;
                };
                feedback.notify(FeedbackCue::Start);
                updates.send_replace(round.clone());
                let result = provider.generate_question(&topic).await;
                round.question_ready(result);
            }
            TriviaCommand::Answer(text) => {
                let Some((question, answer)) = round.submit_answer(&text) else {
                    continue;
                };
                updates.send_replace(round.clone());
                let result = provider.check_answer(&question, &answer).await;
                if let Ok(verdict) = &result {
                    feedback.notify(if verdict.correct {
                        FeedbackCue::Win
                    } else {
                        FeedbackCue::Wrong
                    });
                }
                round.answer_checked(result);
            }
        }
        updates.send_replace(round.clone());
    }
    log!("Trivia service stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Arc;

    use crate::feedback::RecordingFeedback;
    use crate::trivia::{ANSWER_FAILED, QUESTION_FAILED, TriviaPhase, TriviaVerdict};

    struct ScriptedProvider {
        question: Result<String, String>,
        correct: Option<bool>,
    }

    impl TriviaProvider for ScriptedProvider {
        fn generate_question(&self, _topic: &str) -> impl Future<Output = Result<String, String>> + Send {
            let result = self.question.clone();
            async move { result }
        }

        fn check_answer(
            &self,
            _question: &str,
            _answer: &str,
        ) -> impl Future<Output = Result<TriviaVerdict, String>> + Send {
            let result = self
                .correct
                .map(|correct| TriviaVerdict {
                    correct,
                    feedback: String::new(),
                })
                .ok_or_else(|| "service down".to_string());
            async move { result }
        }
    }

    async fn run(provider: ScriptedProvider, commands: Vec<TriviaCommand>) -> (TriviaRound, Vec<FeedbackCue>) {
        let feedback = Arc::new(RecordingFeedback::new());
        let (tx, rx) = mpsc::channel(8);
        let (updates, watcher) = watch::channel(TriviaRound::new("CSS"));
        for command in commands {
            tx.send(command).await.unwrap();
        }
        drop(tx);
        serve(provider, feedback.clone(), rx, updates).await;
        let round = watcher.borrow().clone();
        (round, feedback.cues())
    }

    #[tokio::test]
    async fn test_correct_answer_plays_win() {
        let provider = ScriptedProvider {
            question: Ok("Q?".to_string()),
            correct: Some(true),
        };
        let (round, cues) = run(
            provider,
            vec![TriviaCommand::Ask, TriviaCommand::Answer("flex".to_string())],
        )
        .await;
        assert!(matches!(round.phase(), TriviaPhase::Answered { verdict, .. } if verdict.correct));
        assert_eq!(cues, vec![FeedbackCue::Start, FeedbackCue::Win]);
    }

    #[tokio::test]
    async fn test_wrong_answer_plays_wrong() {
        let provider = ScriptedProvider {
            question: Ok("Q?".to_string()),
            correct: Some(false),
        };
        let (_, cues) = run(
            provider,
            vec![TriviaCommand::Ask, TriviaCommand::Answer("grid".to_string())],
        )
        .await;
        assert_eq!(cues, vec![FeedbackCue::Start, FeedbackCue::Wrong]);
    }

    #[tokio::test]
    async fn test_empty_answer_and_topic_change() {
        let provider = ScriptedProvider {
            question: Ok("Q?".to_string()),
            correct: Some(true),
        };
        let (round, cues) = run(
            provider,
            vec![
                TriviaCommand::SetTopic("Video Games".to_string()),
                TriviaCommand::Ask,
                TriviaCommand::Answer("  ".to_string()),
            ],
        )
        .await;
        assert_eq!(round.topic(), "Video Games");
        assert_eq!(round.phase().question(), Some("Q?"));
        assert_eq!(cues, vec![FeedbackCue::Start]);
    }

    #[tokio::test]
    async fn test_question_failure() {
        let provider = ScriptedProvider {
            question: Err("quota".to_string()),
            correct: None,
        };
        let (round, _) = run(provider, vec![TriviaCommand::Ask]).await;
        assert_eq!(round.phase(), &TriviaPhase::Failed(QUESTION_FAILED.to_string()));
    }

    #[tokio::test]
    async fn test_answer_failure() {
        let provider = ScriptedProvider {
            question: Ok("Q?".to_string()),
            correct: None,
        };
        let (round, cues) = run(
            provider,
            vec![TriviaCommand::Ask, TriviaCommand::Answer("x".to_string())],
        )
        .await;
        assert_eq!(round.phase(), &TriviaPhase::Failed(ANSWER_FAILED.to_string()));
        assert_eq!(cues, vec![FeedbackCue::Start]);
    }
}
