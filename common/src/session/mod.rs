mod controller;
mod runner;

pub use controller::{SessionController, SessionSnapshot};
pub use runner::{SessionCommand, SessionRunner};
