use serde::{Deserialize, Serialize};

use super::Validate;
use crate::games::memory::MemorySettings;
use crate::games::snake::SnakeSettings;
use crate::games::whack::WhackSettings;
use crate::logger::LogLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub scores_file: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            scores_file: "arcade_playground_scores.yaml".to_string(),
        }
    }
}

impl Validate for StorageSettings {
    fn validate(&self) -> Result<(), String> {
        if self.scores_file.trim().is_empty() {
            return Err("scores_file must not be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub prefix: Option<String>,
    pub level: LogLevel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub snake: SnakeSettings,
    pub memory: MemorySettings,
    pub whack: WhackSettings,
    pub storage: StorageSettings,
    pub log: LogSettings,
}

impl Validate for PlaygroundConfig {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        self.memory.validate()?;
        self.whack.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}
