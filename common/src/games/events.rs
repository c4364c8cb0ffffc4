use crate::feedback::FeedbackCue;
use crate::identifiers::GameKind;

/// Something observable that happened during a start, input or tick step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Started(GameKind),
    FoodEaten { score: u32 },
    LevelUp { level: u32 },
    Collision { score: u32 },
    CardFlipped { card_id: usize },
    PairMatched { moves: u32 },
    PairMismatched { moves: u32 },
    BoardCleared { moves: u32 },
    BugSpawned { cell: usize },
    BugHit { score: u32 },
    Missed { score: u32 },
    TimeUp { score: u32 },
    NewRecord { kind: GameKind, value: u32 },
}

impl GameEvent {
    pub fn cue(&self) -> Option<FeedbackCue> {
        match self {
            GameEvent::Started(_) => Some(FeedbackCue::Start),
            GameEvent::FoodEaten { .. } | GameEvent::PairMatched { .. } | GameEvent::BugHit { .. } => {
                Some(FeedbackCue::Score)
            }
            GameEvent::LevelUp { .. } | GameEvent::BoardCleared { .. } => Some(FeedbackCue::Win),
            GameEvent::Collision { .. } | GameEvent::TimeUp { .. } => Some(FeedbackCue::GameOver),
            GameEvent::CardFlipped { .. } => Some(FeedbackCue::Click),
            GameEvent::PairMismatched { .. } | GameEvent::Missed { .. } => Some(FeedbackCue::Wrong),
            GameEvent::BugSpawned { .. } | GameEvent::NewRecord { .. } => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GameEvent::Collision { .. } | GameEvent::BoardCleared { .. } | GameEvent::TimeUp { .. }
        )
    }
}
