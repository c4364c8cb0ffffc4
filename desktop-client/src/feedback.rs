use common::{FeedbackCue, FeedbackHook, log_debug};

/// Stands in for audio: every cue becomes a debug log line.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogFeedback;

impl FeedbackHook for LogFeedback {
    fn notify(&self, cue: FeedbackCue) {
        log_debug!("Cue: {:?}", cue);
    }
}
