use std::collections::HashMap;
use std::time::Duration;

use crate::config::PlaygroundConfig;
use crate::feedback::FeedbackHook;
use crate::games::{GameEvent, GameSession, GameSnapshot, Intent, SessionRng};
use crate::identifiers::GameKind;
use crate::ledger::ScoreLedger;
use crate::storage::KeyValueStore;
use crate::{log, log_debug, log_warn};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSnapshot {
    pub game: Option<GameSnapshot>,
    pub paused: bool,
    pub finished: bool,
    pub records: Vec<(GameKind, Option<u32>)>,
    /// Set when the current round has beaten the stored record.
    pub fresh_record: Option<u32>,
}

impl SessionSnapshot {
    pub fn kind(&self) -> Option<GameKind> {
        self.game.as_ref().map(|g| g.kind())
    }

    pub fn record(&self, kind: GameKind) -> Option<u32> {
        self.records
            .iter()
            .find(|(k, _)| *k == kind)
            .and_then(|(_, value)| *value)
    }
}

/// Owns which game is active and its lifecycle; the only writer to the score ledger.
pub struct SessionController<S: KeyValueStore, F: FeedbackHook> {
    config: PlaygroundConfig,
    ledger: ScoreLedger<S>,
    feedback: F,
    rng: SessionRng,
    active: Option<GameSession>,
    started: bool,
    paused_at: Option<Duration>,
    records: HashMap<GameKind, Option<u32>>,
    fresh_record: Option<u32>,
}

impl<S: KeyValueStore, F: FeedbackHook> SessionController<S, F> {
    pub fn new(config: PlaygroundConfig, ledger: ScoreLedger<S>, feedback: F, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };

        let records = GameKind::ALL
            .iter()
            .map(|kind| {
                let best = ledger.best(*kind).unwrap_or_else(|e| {
                    log_warn!("Could not read {} record: {}", kind, e);
                    None
                });
                (*kind, best)
            })
            .collect();

        Self {
            config,
            ledger,
            feedback,
            rng,
            active: None,
            started: false,
            paused_at: None,
            records,
            fresh_record: None,
        }
    }

    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    pub fn active_kind(&self) -> Option<GameKind> {
        self.active.as_ref().map(|s| s.kind())
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn best(&self, kind: GameKind) -> Option<u32> {
        self.records.get(&kind).copied().flatten()
    }

    /// Replaces the active game wholesale; the old one and all its timers are dropped.
    pub fn select(&mut self, kind: GameKind) {
        let rng = SessionRng::new(self.rng.random());
        log!("Selected {} (seed {})", kind, rng.seed());
        self.active = Some(GameSession::create(kind, &self.config, rng));
        self.started = false;
        self.paused_at = None;
        self.fresh_record = None;
    }

    pub fn start(&mut self, now: Duration) -> Vec<GameEvent> {
        let Some(session) = self.active.as_mut() else {
            return Vec::new();
        };
        self.started = true;
        self.paused_at = None;
        self.fresh_record = None;
        let events = session.start(now);
        self.observe(events)
    }

    /// Fires whatever is already due before suspending, so the pause lands on current state.
    pub fn pause(&mut self, now: Duration) -> Vec<GameEvent> {
        if self.paused_at.is_some() || !self.started {
            return Vec::new();
        }
        let events = self.advance(now);
        let Some(session) = self.active.as_mut() else {
            return events;
        };
        if session.is_finished() {
            return events;
        }
        session.pause(now);
        self.paused_at = Some(now);
        log_debug!("Paused {} at {:?}", session.kind(), now);
        events
    }

    pub fn resume(&mut self, now: Duration) {
        let Some(paused_at) = self.paused_at.take() else {
            return;
        };
        if let Some(session) = self.active.as_mut() {
            session.resume(now);
            log_debug!("Resumed {} after {:?}", session.kind(), now.saturating_sub(paused_at));
        }
    }

    pub fn toggle_pause(&mut self, now: Duration) -> Vec<GameEvent> {
        if self.is_paused() {
            self.resume(now);
            Vec::new()
        } else {
            self.pause(now)
        }
    }

    pub fn reset(&mut self) {
        if let Some(session) = self.active.as_mut() {
            session.reset();
        }
        self.started = false;
        self.paused_at = None;
        self.fresh_record = None;
    }

    pub fn handle_input(&mut self, intent: Intent, now: Duration) -> Vec<GameEvent> {
        match intent {
            Intent::TogglePause => self.toggle_pause(now),
            Intent::Restart => self.start(now),
            _ if self.is_paused() => Vec::new(),
            _ => {
                // Input is judged against the state as of `now`, not the last poll.
                let mut events = self.advance(now);
                if let Some(session) = self.active.as_mut() {
                    let reaction = session.handle_input(intent, now);
                    events.extend(self.observe(reaction));
                }
                events
            }
        }
    }

    pub fn advance(&mut self, now: Duration) -> Vec<GameEvent> {
        if self.is_paused() {
            return Vec::new();
        }
        match self.active.as_mut() {
            Some(session) => {
                let events = session.advance(now);
                self.observe(events)
            }
            None => Vec::new(),
        }
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        if self.is_paused() {
            return None;
        }
        self.active.as_ref().and_then(|s| s.next_deadline())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            game: self.active.as_ref().map(|s| s.snapshot()),
            paused: self.is_paused(),
            finished: self.active.as_ref().is_some_and(|s| s.is_finished()),
            records: GameKind::ALL
                .iter()
                .map(|kind| (*kind, self.best(*kind)))
                .collect(),
            fresh_record: self.fresh_record,
        }
    }

    fn observe(&mut self, mut events: Vec<GameEvent>) -> Vec<GameEvent> {
        let mut new_records = Vec::new();
        for event in &events {
            if let Some(cue) = event.cue() {
                self.feedback.notify(cue);
            }
            if event.is_terminal() {
                log!("Round over: {:?}", event);
            }
            if let Some((kind, value)) = scored_value(event)
                && let Some(record) = self.try_record(kind, value)
            {
                new_records.push(record);
            }
        }
        events.extend(new_records);
        events
    }

    fn try_record(&mut self, kind: GameKind, value: u32) -> Option<GameEvent> {
        match self.ledger.record(kind, value) {
            Ok(true) => {
                log!("New {} record: {}", kind, value);
                self.records.insert(kind, Some(value));
                self.fresh_record = Some(value);
                Some(GameEvent::NewRecord { kind, value })
            }
            Ok(false) => None,
            Err(e) => {
                log_warn!("Failed to record {} score {}: {}", kind, value, e);
                None
            }
        }
    }
}

/// Events that carry a value worth comparing against the stored record.
fn scored_value(event: &GameEvent) -> Option<(GameKind, u32)> {
    match *event {
        GameEvent::FoodEaten { score } | GameEvent::Collision { score } => {
            Some((GameKind::Snake, score))
        }
        GameEvent::BoardCleared { moves } => Some((GameKind::Memory, moves)),
        GameEvent::TimeUp { score } => Some((GameKind::Whack, score)),
        _ => None,
    }
}
