use std::sync::{Arc, Mutex};

/// Named moments a front end may turn into sound or haptics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeedbackCue {
    Score,
    GameOver,
    Click,
    Win,
    Wrong,
    Start,
}

/// Fire-and-forget: the engine never waits on or inspects the outcome.
pub trait FeedbackHook {
    fn notify(&self, cue: FeedbackCue);
}

impl<T: FeedbackHook + ?Sized> FeedbackHook for Arc<T> {
    fn notify(&self, cue: FeedbackCue) {
        (**self).notify(cue)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoFeedback;

impl FeedbackHook for NoFeedback {
    fn notify(&self, _cue: FeedbackCue) {}
}

/// Keeps every cue it receives; handy for asserting on engine behaviour.
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    cues: Mutex<Vec<FeedbackCue>>,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cues(&self) -> Vec<FeedbackCue> {
        self.cues.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl FeedbackHook for RecordingFeedback {
    fn notify(&self, cue: FeedbackCue) {
        if let Ok(mut cues) = self.cues.lock() {
            cues.push(cue);
        }
    }
}
