pub mod logger;
pub mod config;
pub mod identifiers;
pub mod storage;
pub mod ledger;
pub mod feedback;
pub mod games;
pub mod session;
pub mod trivia;

pub use identifiers::*;
pub use feedback::{FeedbackCue, FeedbackHook, NoFeedback, RecordingFeedback};
pub use ledger::{RecordPolicy, ScoreLedger};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
