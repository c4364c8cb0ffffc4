mod game_state;
mod settings;
mod simulation;

pub use game_state::{MemoryCard, MemoryState, MemoryStatus, RevealOutcome, ResolveOutcome};
pub use settings::MemorySettings;
pub use simulation::MemorySimulation;
