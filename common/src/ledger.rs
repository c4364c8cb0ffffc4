use crate::identifiers::{GameKind, StorageKey};
use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordPolicy {
    HigherIsBetter,
    LowerIsBetter,
}

impl RecordPolicy {
    /// An unset lower-is-better record accepts anything; an unset higher-is-better
    /// record behaves like a stored zero.
    pub fn improves(&self, value: u32, best: Option<u32>) -> bool {
        match self {
            RecordPolicy::HigherIsBetter => value > best.unwrap_or(0),
            RecordPolicy::LowerIsBetter => best.is_none_or(|best| value < best),
        }
    }
}

pub struct ScoreLedger<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ScoreLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn best(&self, kind: GameKind) -> Result<Option<u32>, String> {
        self.read_best(&kind.storage_key(), kind.record_policy())
    }

    pub fn record(&self, kind: GameKind, value: u32) -> Result<bool, String> {
        self.record_if_best(&kind.storage_key(), value, kind.record_policy())
    }

    /// Writes only when `value` beats the stored record. Repeating the same value is a no-op.
    pub fn record_if_best(
        &self,
        key: &StorageKey,
        value: u32,
        policy: RecordPolicy,
    ) -> Result<bool, String> {
        let best = self.read_best(key, policy)?;
        if !policy.improves(value, best) {
            return Ok(false);
        }
        self.store.set(key.as_str(), &value.to_string())?;
        Ok(true)
    }

    fn read_best(&self, key: &StorageKey, policy: RecordPolicy) -> Result<Option<u32>, String> {
        let Some(raw) = self.store.get(key.as_str())? else {
            return Ok(None);
        };
        let value = raw
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("Stored record for {} is not a number ({:?}): {}", key, raw, e))?;

        // A zero move count is the "never played" sentinel for lower-is-better games.
        if policy == RecordPolicy::LowerIsBetter && value == 0 {
            return Ok(None);
        }
        Ok(Some(value))
    }
}
