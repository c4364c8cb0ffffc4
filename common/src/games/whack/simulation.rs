use std::time::Duration;

use super::game_state::{WhackOutcome, WhackState, WhackStatus};
use super::settings::WhackSettings;
use crate::games::{ClockMode, GameClock, GameEvent, Intent, SessionRng, Simulation, next_due};
use crate::identifiers::GameKind;

const COUNTDOWN_STEP: Duration = Duration::from_secs(1);

#[derive(Clone, Copy)]
enum WhackTimer {
    Countdown,
    Spawn,
}

pub struct WhackSimulation {
    settings: WhackSettings,
    state: WhackState,
    rng: SessionRng,
    countdown: GameClock,
    spawner: GameClock,
    paused: bool,
}

impl WhackSimulation {
    pub fn new(settings: WhackSettings, rng: SessionRng) -> Self {
        let state = WhackState::idle(settings.cell_count, settings.duration_sec);
        Self {
            settings,
            state,
            rng,
            countdown: GameClock::new(),
            spawner: GameClock::new(),
            paused: false,
        }
    }

    pub fn state(&self) -> &WhackState {
        &self.state
    }

    fn stop_clocks(&mut self) {
        self.countdown.stop();
        self.spawner.stop();
    }

    /// The countdown wins ties so a spawn never lands on the tick that ends the round.
    fn due_timer(&self, now: Duration) -> Option<WhackTimer> {
        next_due(
            &[
                (WhackTimer::Countdown, &self.countdown),
                (WhackTimer::Spawn, &self.spawner),
            ],
            now,
        )
    }
}

impl Simulation for WhackSimulation {
    type Snapshot = WhackState;

    fn kind(&self) -> GameKind {
        GameKind::Whack
    }

    fn start(&mut self, now: Duration) -> Vec<GameEvent> {
        self.stop_clocks();
        self.paused = false;
        self.state = WhackState::running(self.settings.cell_count, self.settings.duration_sec);
        self.countdown
            .start(now, ClockMode::Fixed(COUNTDOWN_STEP), &mut self.rng);
        self.spawner
            .start(now, self.settings.spawn_mode(), &mut self.rng);
        vec![GameEvent::Started(GameKind::Whack)]
    }

    fn handle_input(&mut self, intent: Intent, _now: Duration) -> Vec<GameEvent> {
        let Intent::Cell(cell) = intent else {
            return Vec::new();
        };
        if self.paused {
            return Vec::new();
        }
        match self.state.whack(cell) {
            WhackOutcome::Ignored => Vec::new(),
            WhackOutcome::Hit => vec![GameEvent::BugHit {
                score: self.state.score,
            }],
            WhackOutcome::Miss => vec![GameEvent::Missed {
                score: self.state.score,
            }],
        }
    }

    fn advance(&mut self, now: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while let Some(timer) = self.due_timer(now) {
            match timer {
                WhackTimer::Countdown => {
                    self.countdown.fire(now, &mut self.rng);
                    if self.state.count_down() {
                        self.stop_clocks();
                        events.push(GameEvent::TimeUp {
                            score: self.state.score,
                        });
                    }
                }
                WhackTimer::Spawn => {
                    self.spawner.fire(now, &mut self.rng);
                    let cell = self.rng.random_range(0..self.settings.cell_count);
                    if self.state.spawn(cell) {
                        events.push(GameEvent::BugSpawned { cell });
                    }
                }
            }
        }
        events
    }

    fn pause(&mut self, now: Duration) {
        if self.state.status != WhackStatus::Running {
            return;
        }
        self.paused = true;
        self.countdown.suspend(now);
        self.spawner.suspend(now);
    }

    fn resume(&mut self, now: Duration) {
        if !self.paused {
            return;
        }
        self.paused = false;
        self.countdown.resume(now);
        self.spawner.resume(now);
    }

    fn reset(&mut self) {
        self.stop_clocks();
        self.paused = false;
        self.state = WhackState::idle(self.settings.cell_count, self.settings.duration_sec);
    }

    fn next_deadline(&self) -> Option<Duration> {
        [self.countdown.deadline(), self.spawner.deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    fn is_finished(&self) -> bool {
        self.state.status == WhackStatus::Ended
    }

    fn snapshot(&self) -> WhackState {
        self.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn started(seed: u64) -> WhackSimulation {
        let mut sim = WhackSimulation::new(WhackSettings::default(), SessionRng::new(seed));
        sim.start(ms(0));
        sim
    }

    #[test]
    fn test_first_spawn_within_window() {
        let mut sim = started(9);
        assert!(sim.advance(ms(499)).is_empty());
        let events = sim.advance(ms(1000));
        assert!(!events.is_empty());
        assert!(events
            .iter()
            .all(|e| matches!(e, GameEvent::BugSpawned { .. })));
        assert!(sim.state().active_cell.is_some());
    }

    #[test]
    fn test_spawns_keep_coming_without_hits() {
        let mut sim = started(9);
        let events = sim.advance(ms(10_000));
        let spawns = events
            .iter()
            .filter(|e| matches!(e, GameEvent::BugSpawned { .. }))
            .count();
        assert!((10..=20).contains(&spawns), "spawns: {}", spawns);
        assert_eq!(sim.state().time_remaining_sec, 20);
    }

    #[test]
    fn test_hit_and_miss_through_input() {
        let mut sim = started(9);
        sim.advance(ms(1000));
        let cell = sim.state().active_cell.unwrap();

        assert_eq!(
            sim.handle_input(Intent::Cell(cell), ms(1001)),
            vec![GameEvent::BugHit { score: 1 }]
        );
        assert_eq!(sim.state().active_cell, None);

        let other = (cell + 1) % 9;
        assert_eq!(
            sim.handle_input(Intent::Cell(other), ms(1002)),
            vec![GameEvent::Missed { score: 0 }]
        );
        assert_eq!(
            sim.handle_input(Intent::Cell(other), ms(1003)),
            vec![GameEvent::Missed { score: 0 }]
        );
    }

    #[test]
    fn test_round_ends_after_duration() {
        let mut sim = started(21);
        let events = sim.advance(ms(30_000));
        assert_eq!(events.last(), Some(&GameEvent::TimeUp { score: 0 }));
        assert_eq!(sim.state().status, WhackStatus::Ended);
        assert_eq!(sim.state().time_remaining_sec, 0);
        assert_eq!(sim.state().active_cell, None);
        assert_eq!(sim.next_deadline(), None);

        assert!(sim.advance(ms(60_000)).is_empty());
        assert!(sim.handle_input(Intent::Cell(0), ms(60_001)).is_empty());
        assert_eq!(sim.state().active_cell, None);
    }

    #[test]
    fn test_not_running_before_start() {
        let mut sim = WhackSimulation::new(WhackSettings::default(), SessionRng::new(1));
        assert_eq!(sim.state().status, WhackStatus::Idle);
        assert!(sim.handle_input(Intent::Cell(3), ms(0)).is_empty());
        assert!(sim.advance(ms(5_000)).is_empty());
    }

    #[test]
    fn test_pause_stops_countdown() {
        let mut sim = started(9);
        sim.advance(ms(2_500));
        assert_eq!(sim.state().time_remaining_sec, 28);

        sim.pause(ms(2_500));
        assert!(sim.handle_input(Intent::Cell(0), ms(2_600)).is_empty());
        assert!(sim.advance(ms(20_000)).is_empty());
        assert_eq!(sim.state().time_remaining_sec, 28);

        sim.resume(ms(20_000));
        sim.advance(ms(20_500));
        assert_eq!(sim.state().time_remaining_sec, 27);
    }

    #[test]
    fn test_restart_discards_previous_round() {
        let mut sim = started(9);
        sim.advance(ms(5_000));
        sim.start(ms(5_000));
        assert_eq!(sim.state().time_remaining_sec, 30);
        assert_eq!(sim.state().score, 0);
        assert_eq!(sim.state().active_cell, None);
        assert_eq!(sim.next_deadline().map(|d| d >= ms(5_500)), Some(true));
    }
}
