mod game_state;
mod settings;
mod simulation;
mod types;

pub use game_state::{SnakeState, StepOutcome};
pub use settings::SnakeSettings;
pub use simulation::SnakeSimulation;
pub use types::{DeathReason, Point, SnakeStatus};
pub use super::Direction;
