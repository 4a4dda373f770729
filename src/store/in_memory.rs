//! In-memory implementation of PresetStore for testing.

use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::Result;

use super::{PresetRecord, PresetStore};

/// Keeps presets in a map; nothing touches the filesystem.
pub struct InMemoryPresetStore {
    presets: RefCell<HashMap<String, PresetRecord>>,
}

impl Default for InMemoryPresetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPresetStore {
    /// Create a new empty InMemoryPresetStore.
    pub fn new() -> Self {
        Self {
            presets: RefCell::new(HashMap::new()),
        }
    }

    /// Create a new InMemoryPresetStore with pre-populated presets.
    pub fn with_presets(presets: Vec<(String, PresetRecord)>) -> Self {
        Self {
            presets: RefCell::new(presets.into_iter().collect()),
        }
    }
}

impl PresetStore for InMemoryPresetStore {
    fn get(&self, email: &str) -> Result<Option<PresetRecord>> {
        Ok(self.presets.borrow().get(email).cloned())
    }

    fn put(&self, email: &str, record: &PresetRecord) -> Result<()> {
        self.presets
            .borrow_mut()
            .insert(email.to_string(), record.clone());
        Ok(())
    }
}
