use std::collections::HashMap;

use crate::error::LoanError;
use crate::scenario::LoanScenario;

/// String key-value storage for per-session calculator state.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

pub fn save_scenario<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    scenario: &LoanScenario,
) -> Result<(), LoanError> {
    store.set(key, serde_json::to_string(scenario)?);
    Ok(())
}

/// `Ok(None)` when nothing is stored under `key`.
pub fn load_scenario<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<LoanScenario>, LoanError> {
    let Some(raw) = store.get(key) else {
        return Ok(None);
    };
    let scenario: LoanScenario = serde_json::from_str(&raw)?;
    scenario.validate()?;
    Ok(Some(scenario))
}
