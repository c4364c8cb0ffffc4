use std::time::Duration;

use super::game_state::{SnakeState, StepOutcome};
use super::settings::SnakeSettings;
use super::types::SnakeStatus;
use crate::games::{ClockMode, DirectionBuffer, GameClock, GameEvent, Intent, SessionRng, Simulation, next_due};
use crate::identifiers::GameKind;
use crate::log_debug;

#[derive(Clone, Copy)]
enum SnakeTimer {
    LevelUp,
    Step,
}

pub struct SnakeSimulation {
    settings: SnakeSettings,
    state: SnakeState,
    rng: SessionRng,
    input: DirectionBuffer,
    step_clock: GameClock,
    level_up_clock: GameClock,
    paused_from: Option<SnakeStatus>,
}

impl SnakeSimulation {
    pub fn new(settings: SnakeSettings, mut rng: SessionRng) -> Self {
        let state = SnakeState::new(&settings, &mut rng);
        Self {
            settings,
            state,
            rng,
            input: DirectionBuffer::new(),
            step_clock: GameClock::new(),
            level_up_clock: GameClock::new(),
            paused_from: None,
        }
    }

    pub fn state(&self) -> &SnakeState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SnakeState {
        &mut self.state
    }

    fn stop_clocks(&mut self) {
        self.step_clock.stop();
        self.level_up_clock.stop();
    }

    fn due_timer(&self, now: Duration) -> Option<SnakeTimer> {
        next_due(
            &[
                (SnakeTimer::LevelUp, &self.level_up_clock),
                (SnakeTimer::Step, &self.step_clock),
            ],
            now,
        )
    }

    fn on_step(&mut self, at: Duration, events: &mut Vec<GameEvent>) {
        if self.state.status != SnakeStatus::Running {
            return;
        }
        if let Some(direction) = self.input.take() {
            self.state.direction = direction;
        }

        match self.state.step(&self.settings, &mut self.rng) {
            StepOutcome::Moved => {}
            StepOutcome::Ate { leveled_up } => {
                events.push(GameEvent::FoodEaten {
                    score: self.state.score,
                });
                if leveled_up {
                    self.step_clock.stop();
                    self.level_up_clock.start(
                        at,
                        ClockMode::Once(self.settings.level_up_pause()),
                        &mut self.rng,
                    );
                    events.push(GameEvent::LevelUp {
                        level: self.state.level,
                    });
                }
            }
            StepOutcome::Collided(reason) => {
                log_debug!("Snake collided ({:?}) with score {}", reason, self.state.score);
                self.stop_clocks();
                self.input.clear();
                events.push(GameEvent::Collision {
                    score: self.state.score,
                });
            }
        }
    }

    fn on_level_up_done(&mut self, at: Duration) {
        if self.state.status != SnakeStatus::LevelingUp {
            return;
        }
        self.state.status = SnakeStatus::Running;
        self.step_clock
            .reschedule(at, Duration::from_millis(self.state.speed_ms));
    }
}

impl Simulation for SnakeSimulation {
    type Snapshot = SnakeState;

    fn kind(&self) -> GameKind {
        GameKind::Snake
    }

    fn start(&mut self, now: Duration) -> Vec<GameEvent> {
        self.stop_clocks();
        self.input.clear();
        self.paused_from = None;
        self.state = SnakeState::new(&self.settings, &mut self.rng);
        self.state.status = SnakeStatus::Running;
        self.step_clock
            .reschedule(now, Duration::from_millis(self.state.speed_ms));
        vec![GameEvent::Started(GameKind::Snake)]
    }

    fn handle_input(&mut self, intent: Intent, _now: Duration) -> Vec<GameEvent> {
        if let Intent::Direction(direction) = intent
            && matches!(
                self.state.status,
                SnakeStatus::Running | SnakeStatus::LevelingUp
            )
        {
            self.input.offer(direction, self.state.direction);
        }
        Vec::new()
    }

    fn advance(&mut self, now: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while let Some(timer) = self.due_timer(now) {
            match timer {
                SnakeTimer::LevelUp => {
                    if let Some(at) = self.level_up_clock.fire(now, &mut self.rng) {
                        self.on_level_up_done(at);
                    }
                }
                SnakeTimer::Step => {
                    if let Some(at) = self.step_clock.fire(now, &mut self.rng) {
                        self.on_step(at, &mut events);
                    }
                }
            }
        }
        events
    }

    fn pause(&mut self, now: Duration) {
        if !matches!(
            self.state.status,
            SnakeStatus::Running | SnakeStatus::LevelingUp
        ) {
            return;
        }
        self.paused_from = Some(self.state.status);
        self.state.status = SnakeStatus::Paused;
        self.step_clock.suspend(now);
        self.level_up_clock.suspend(now);
    }

    fn resume(&mut self, now: Duration) {
        let Some(previous) = self.paused_from.take() else {
            return;
        };
        self.state.status = previous;
        self.step_clock.resume(now);
        self.level_up_clock.resume(now);
    }

    fn reset(&mut self) {
        self.stop_clocks();
        self.input.clear();
        self.paused_from = None;
        self.state = SnakeState::new(&self.settings, &mut self.rng);
    }

    fn next_deadline(&self) -> Option<Duration> {
        [self.step_clock.deadline(), self.level_up_clock.deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    fn is_finished(&self) -> bool {
        self.state.status == SnakeStatus::GameOver
    }

    fn snapshot(&self) -> SnakeState {
        self.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::Direction;
    use crate::games::snake::Point;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn started() -> SnakeSimulation {
        let mut sim = SnakeSimulation::new(SnakeSettings::default(), SessionRng::new(3));
        sim.start(ms(0));
        sim.state_mut().food = Point::new(0, 0);
        sim
    }

    #[test]
    fn test_ticks_follow_speed() {
        let mut sim = started();
        assert_eq!(sim.next_deadline(), Some(ms(160)));

        sim.advance(ms(159));
        assert_eq!(sim.state().head(), Point::new(10, 10));

        sim.advance(ms(160));
        assert_eq!(sim.state().head(), Point::new(10, 9));

        sim.advance(ms(480));
        assert_eq!(sim.state().head(), Point::new(10, 7));
    }

    #[test]
    fn test_buffered_direction_applies_on_next_tick() {
        let mut sim = started();
        sim.handle_input(Intent::Direction(Direction::Down), ms(10));
        sim.handle_input(Intent::Direction(Direction::Left), ms(20));
        assert_eq!(sim.state().direction, Direction::Up);

        sim.advance(ms(160));
        assert_eq!(sim.state().direction, Direction::Left);
        assert_eq!(sim.state().head(), Point::new(9, 10));
    }

    #[test]
    fn test_level_up_pauses_ticks_then_speeds_up() {
        let mut sim = started();
        sim.state_mut().score = 40;
        sim.state_mut().food = Point::new(10, 9);

        let events = sim.advance(ms(160));
        assert_eq!(
            events,
            vec![
                GameEvent::FoodEaten { score: 50 },
                GameEvent::LevelUp { level: 2 }
            ]
        );
        assert_eq!(sim.state().status, SnakeStatus::LevelingUp);
        sim.state_mut().food = Point::new(0, 0);
        assert_eq!(sim.next_deadline(), Some(ms(1660)));

        sim.advance(ms(1659));
        assert_eq!(sim.state().head(), Point::new(10, 9));

        sim.advance(ms(1660));
        assert_eq!(sim.state().status, SnakeStatus::Running);
        assert_eq!(sim.next_deadline(), Some(ms(1815)));

        sim.advance(ms(1815));
        assert_eq!(sim.state().head(), Point::new(10, 8));
    }

    #[test]
    fn test_wall_collision_ends_game_and_stops_clock() {
        let mut sim = started();
        let events = sim.advance(ms(160 * 11));
        assert_eq!(events, vec![GameEvent::Collision { score: 0 }]);
        assert!(sim.is_finished());
        assert_eq!(sim.state().head(), Point::new(10, 0));
        assert_eq!(sim.next_deadline(), None);
        assert!(sim.advance(ms(100_000)).is_empty());
    }

    #[test]
    fn test_pause_freezes_and_resume_continues() {
        let mut sim = started();
        sim.advance(ms(100));
        sim.pause(ms(100));
        assert_eq!(sim.state().status, SnakeStatus::Paused);
        assert_eq!(sim.next_deadline(), None);

        sim.handle_input(Intent::Direction(Direction::Left), ms(500));
        sim.advance(ms(5_000));
        assert_eq!(sim.state().head(), Point::new(10, 10));

        sim.resume(ms(5_000));
        assert_eq!(sim.state().status, SnakeStatus::Running);
        assert_eq!(sim.next_deadline(), Some(ms(5_060)));
        sim.advance(ms(5_060));
        assert_eq!(sim.state().head(), Point::new(10, 9));
    }

    #[test]
    fn test_input_before_start_is_ignored() {
        let mut sim = SnakeSimulation::new(SnakeSettings::default(), SessionRng::new(3));
        sim.handle_input(Intent::Direction(Direction::Left), ms(0));
        assert!(sim.advance(ms(10_000)).is_empty());
        assert_eq!(sim.state().status, SnakeStatus::NotStarted);
    }

    #[test]
    fn test_reset_cancels_timers() {
        let mut sim = started();
        sim.reset();
        assert_eq!(sim.next_deadline(), None);
        assert_eq!(sim.state().status, SnakeStatus::NotStarted);
        assert!(sim.advance(ms(10_000)).is_empty());
    }
}
