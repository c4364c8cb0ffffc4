use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::games::ClockMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhackSettings {
    pub cell_count: usize,
    pub duration_sec: u32,
    pub spawn_min_ms: u64,
    pub spawn_max_ms: u64,
}

impl WhackSettings {
    pub fn spawn_mode(&self) -> ClockMode {
        ClockMode::Jittered {
            min: Duration::from_millis(self.spawn_min_ms),
            max: Duration::from_millis(self.spawn_max_ms),
        }
    }
}

impl Default for WhackSettings {
    fn default() -> Self {
        Self {
            cell_count: 9,
            duration_sec: 30,
            spawn_min_ms: 500,
            spawn_max_ms: 1000,
        }
    }
}

impl Validate for WhackSettings {
    fn validate(&self) -> Result<(), String> {
        if !(1..=64).contains(&self.cell_count) {
            return Err("whack cell_count must be between 1 and 64".to_string());
        }
        if !(1..=600).contains(&self.duration_sec) {
            return Err("whack duration_sec must be between 1 and 600".to_string());
        }
        if self.spawn_min_ms == 0 {
            return Err("whack spawn_min_ms must be greater than 0".to_string());
        }
        if self.spawn_max_ms < self.spawn_min_ms {
            return Err("whack spawn_max_ms must not be below spawn_min_ms".to_string());
        }
        Ok(())
    }
}
