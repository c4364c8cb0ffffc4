use std::time::Duration;

use super::game_state::{MemoryState, MemoryStatus, ResolveOutcome, RevealOutcome};
use super::settings::MemorySettings;
use crate::games::{ClockMode, GameClock, GameEvent, Intent, SessionRng, Simulation};
use crate::identifiers::GameKind;

pub struct MemorySimulation {
    settings: MemorySettings,
    state: MemoryState,
    rng: SessionRng,
    resolve_clock: GameClock,
    paused: bool,
}

impl MemorySimulation {
    pub fn new(settings: MemorySettings, rng: SessionRng) -> Self {
        Self {
            settings,
            state: MemoryState::dealing(),
            rng,
            resolve_clock: GameClock::new(),
            paused: false,
        }
    }

    pub fn state(&self) -> &MemoryState {
        &self.state
    }
}

impl Simulation for MemorySimulation {
    type Snapshot = MemoryState;

    fn kind(&self) -> GameKind {
        GameKind::Memory
    }

    fn start(&mut self, _now: Duration) -> Vec<GameEvent> {
        self.resolve_clock.stop();
        self.paused = false;
        self.state = MemoryState::new_game(self.settings.token_count, &mut self.rng);
        vec![GameEvent::Started(GameKind::Memory)]
    }

    fn handle_input(&mut self, intent: Intent, now: Duration) -> Vec<GameEvent> {
        let Intent::Cell(card_id) = intent else {
            return Vec::new();
        };
        if self.paused {
            return Vec::new();
        }

        match self.state.reveal(card_id) {
            RevealOutcome::Ignored => Vec::new(),
            RevealOutcome::FirstPick => vec![GameEvent::CardFlipped { card_id }],
            RevealOutcome::SecondPick { matched } => {
                self.resolve_clock.start(
                    now,
                    ClockMode::Once(self.settings.resolve_delay(matched)),
                    &mut self.rng,
                );
                vec![GameEvent::CardFlipped { card_id }]
            }
        }
    }

    fn advance(&mut self, now: Duration) -> Vec<GameEvent> {
        if self.resolve_clock.fire(now, &mut self.rng).is_none() {
            return Vec::new();
        }

        let moves = self.state.move_count;
        match self.state.resolve() {
            Some(ResolveOutcome::Matched { won: false }) => vec![GameEvent::PairMatched { moves }],
            Some(ResolveOutcome::Matched { won: true }) => vec![
                GameEvent::PairMatched { moves },
                GameEvent::BoardCleared { moves },
            ],
            Some(ResolveOutcome::Mismatched) => vec![GameEvent::PairMismatched { moves }],
            None => Vec::new(),
        }
    }

    fn pause(&mut self, now: Duration) {
        self.paused = true;
        self.resolve_clock.suspend(now);
    }

    fn resume(&mut self, now: Duration) {
        self.paused = false;
        self.resolve_clock.resume(now);
    }

    fn reset(&mut self) {
        self.resolve_clock.stop();
        self.paused = false;
        self.state = MemoryState::dealing();
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.resolve_clock.deadline()
    }

    fn is_finished(&self) -> bool {
        self.state.status == MemoryStatus::Won
    }

    fn snapshot(&self) -> MemoryState {
        self.state.clone()
    }
}
