mod game_state;
mod settings;
mod simulation;

pub use game_state::{WhackOutcome, WhackState, WhackStatus};
pub use settings::WhackSettings;
pub use simulation::WhackSimulation;
