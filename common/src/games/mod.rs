mod clock;
mod events;
mod game_session;
mod input;
mod session_rng;
mod traits;

pub mod memory;
pub mod snake;
pub mod whack;

pub use clock::{ClockMode, GameClock, next_due};
pub use events::GameEvent;
pub use game_session::{GameSession, GameSnapshot};
pub use input::{Direction, DirectionBuffer, Intent};
pub use session_rng::SessionRng;
pub use traits::Simulation;
