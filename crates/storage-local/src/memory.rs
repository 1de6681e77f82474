//! In-memory key-value storage, for tests and off-disk use.

use std::collections::HashMap;
use std::sync::Mutex;

use minha_conta_core::errors::Result;
use minha_conta_core::store::StorageBackend;

/// Volatile backend holding all keys in a map. Contents die with the
/// process.
#[derive(Default)]
pub struct MemoryBackend {
    state: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let state = self.state.lock().unwrap();
        Ok(state.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn write_many(&self, entries: &[(String, String)]) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        for (key, value) in entries {
            state.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.remove(key);
        Ok(())
    }
}
