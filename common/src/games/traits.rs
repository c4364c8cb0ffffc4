use std::time::Duration;

use super::{GameEvent, Intent};
use crate::identifiers::GameKind;

/// Lifecycle shared by every game. `now` is virtual time since the session began.
pub trait Simulation {
    type Snapshot: Clone;

    fn kind(&self) -> GameKind;

    /// Discards any previous state and timers, then begins a fresh game.
    fn start(&mut self, now: Duration) -> Vec<GameEvent>;

    fn handle_input(&mut self, intent: Intent, now: Duration) -> Vec<GameEvent>;

    /// Fires every timer due at or before `now`, oldest first.
    fn advance(&mut self, now: Duration) -> Vec<GameEvent>;

    fn pause(&mut self, now: Duration);

    fn resume(&mut self, now: Duration);

    /// Back to the pre-start state with every timer cancelled.
    fn reset(&mut self);

    fn next_deadline(&self) -> Option<Duration>;

    fn is_finished(&self) -> bool;

    fn snapshot(&self) -> Self::Snapshot;
}
