use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ledger::RecordPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StorageKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    Snake,
    Memory,
    Whack,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [GameKind::Snake, GameKind::Memory, GameKind::Whack];

    pub fn storage_key(&self) -> StorageKey {
        match self {
            GameKind::Snake => StorageKey::from("snakeHighScore"),
            GameKind::Memory => StorageKey::from("memoryBestScore"),
            GameKind::Whack => StorageKey::from("bugHighScore"),
        }
    }

    pub fn record_policy(&self) -> RecordPolicy {
        match self {
            GameKind::Snake | GameKind::Whack => RecordPolicy::HigherIsBetter,
            GameKind::Memory => RecordPolicy::LowerIsBetter,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameKind::Snake => "Snake",
            GameKind::Memory => "Memory",
            GameKind::Whack => "Bug Hunter",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "snake" => Some(GameKind::Snake),
            "memory" => Some(GameKind::Memory),
            "whack" | "bug" | "bughunter" | "bug-hunter" => Some(GameKind::Whack),
            _ => None,
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_are_distinct() {
        let keys: std::collections::HashSet<_> =
            GameKind::ALL.iter().map(|k| k.storage_key()).collect();
        assert_eq!(keys.len(), GameKind::ALL.len());
    }

    #[test]
    fn test_from_name_accepts_aliases() {
        assert_eq!(GameKind::from_name(" Snake "), Some(GameKind::Snake));
        assert_eq!(GameKind::from_name("bug"), Some(GameKind::Whack));
        assert_eq!(GameKind::from_name("tetris"), None);
    }
}
