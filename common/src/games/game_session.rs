use std::time::Duration;

use super::memory::{MemoryState, MemorySimulation};
use super::snake::{SnakeSimulation, SnakeState};
use super::whack::{WhackSimulation, WhackState};
use super::{GameEvent, Intent, SessionRng, Simulation};
use crate::config::PlaygroundConfig;
use crate::identifiers::GameKind;

#[derive(Clone, Debug, PartialEq)]
pub enum GameSnapshot {
    Snake(SnakeState),
    Memory(MemoryState),
    Whack(WhackState),
}

impl GameSnapshot {
    pub fn kind(&self) -> GameKind {
        match self {
            GameSnapshot::Snake(_) => GameKind::Snake,
            GameSnapshot::Memory(_) => GameKind::Memory,
            GameSnapshot::Whack(_) => GameKind::Whack,
        }
    }
}

/// The active game, one variant per simulation.
pub enum GameSession {
    Snake(SnakeSimulation),
    Memory(MemorySimulation),
    Whack(WhackSimulation),
}

macro_rules! dispatch {
    ($session:expr, $sim:ident => $body:expr) => {
        match $session {
            GameSession::Snake($sim) => $body,
            GameSession::Memory($sim) => $body,
            GameSession::Whack($sim) => $body,
        }
    };
}

impl GameSession {
    pub fn create(kind: GameKind, config: &PlaygroundConfig, rng: SessionRng) -> Self {
        match kind {
            GameKind::Snake => GameSession::Snake(SnakeSimulation::new(config.snake.clone(), rng)),
            GameKind::Memory => {
                GameSession::Memory(MemorySimulation::new(config.memory.clone(), rng))
            }
            GameKind::Whack => GameSession::Whack(WhackSimulation::new(config.whack.clone(), rng)),
        }
    }

    pub fn kind(&self) -> GameKind {
        dispatch!(self, sim => sim.kind())
    }

    pub fn start(&mut self, now: Duration) -> Vec<GameEvent> {
        dispatch!(self, sim => sim.start(now))
    }

    pub fn handle_input(&mut self, intent: Intent, now: Duration) -> Vec<GameEvent> {
        dispatch!(self, sim => sim.handle_input(intent, now))
    }

    pub fn advance(&mut self, now: Duration) -> Vec<GameEvent> {
        dispatch!(self, sim => sim.advance(now))
    }

    pub fn pause(&mut self, now: Duration) {
        dispatch!(self, sim => sim.pause(now))
    }

    pub fn resume(&mut self, now: Duration) {
        dispatch!(self, sim => sim.resume(now))
    }

    pub fn reset(&mut self) {
        dispatch!(self, sim => sim.reset())
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        dispatch!(self, sim => sim.next_deadline())
    }

    pub fn is_finished(&self) -> bool {
        dispatch!(self, sim => sim.is_finished())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        match self {
            GameSession::Snake(sim) => GameSnapshot::Snake(sim.snapshot()),
            GameSession::Memory(sim) => GameSnapshot::Memory(sim.snapshot()),
            GameSession::Whack(sim) => GameSnapshot::Whack(sim.snapshot()),
        }
    }
}
