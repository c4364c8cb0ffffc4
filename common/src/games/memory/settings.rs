use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemorySettings {
    pub token_count: usize,
    pub match_delay_ms: u64,
    pub mismatch_delay_ms: u64,
}

impl MemorySettings {
    pub fn resolve_delay(&self, matched: bool) -> Duration {
        if matched {
            Duration::from_millis(self.match_delay_ms)
        } else {
            Duration::from_millis(self.mismatch_delay_ms)
        }
    }
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self {
            token_count: 8,
            match_delay_ms: 500,
            mismatch_delay_ms: 1000,
        }
    }
}

impl Validate for MemorySettings {
    fn validate(&self) -> Result<(), String> {
        if !(1..=32).contains(&self.token_count) {
            return Err("memory token_count must be between 1 and 32".to_string());
        }
        if self.match_delay_ms > 10_000 || self.mismatch_delay_ms > 10_000 {
            return Err("memory resolve delays must not exceed 10000ms".to_string());
        }
        Ok(())
    }
}
