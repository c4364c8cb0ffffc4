use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeSettings {
    pub grid_size: u32,
    pub base_speed_ms: u64,
    pub speed_step_ms: u64,
    pub min_speed_ms: u64,
    pub max_level: u32,
    pub points_per_level: u32,
    pub points_per_food: u32,
    pub level_up_pause_ms: u64,
}

impl SnakeSettings {
    pub fn level_for_score(&self, score: u32) -> u32 {
        (score / self.points_per_level + 1).min(self.max_level)
    }

    pub fn speed_ms_for_level(&self, level: u32) -> u64 {
        let slowdown = u64::from(level.saturating_sub(1)) * self.speed_step_ms;
        self.base_speed_ms
            .saturating_sub(slowdown)
            .max(self.min_speed_ms)
    }

    pub fn tick_interval(&self, level: u32) -> Duration {
        Duration::from_millis(self.speed_ms_for_level(level))
    }

    pub fn level_up_pause(&self) -> Duration {
        Duration::from_millis(self.level_up_pause_ms)
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            grid_size: 20,
            base_speed_ms: 160,
            speed_step_ms: 5,
            min_speed_ms: 50,
            max_level: 20,
            points_per_level: 50,
            points_per_food: 10,
            level_up_pause_ms: 1500,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if !(10..=50).contains(&self.grid_size) {
            return Err("snake grid_size must be between 10 and 50".to_string());
        }
        if self.min_speed_ms == 0 {
            return Err("snake min_speed_ms must be greater than 0".to_string());
        }
        if self.base_speed_ms < self.min_speed_ms {
            return Err("snake base_speed_ms must not be below min_speed_ms".to_string());
        }
        if self.base_speed_ms > 5000 {
            return Err("snake base_speed_ms must not exceed 5000".to_string());
        }
        if self.max_level == 0 {
            return Err("snake max_level must be at least 1".to_string());
        }
        if self.points_per_level == 0 || self.points_per_food == 0 {
            return Err("snake points_per_level and points_per_food must be positive".to_string());
        }
        if self.level_up_pause_ms > 10_000 {
            return Err("snake level_up_pause_ms must not exceed 10000".to_string());
        }
        Ok(())
    }
}
