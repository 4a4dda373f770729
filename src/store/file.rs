//! File-backed preset store.
//!
//! All presets live in a single JSON object keyed by e-mail, pretty-printed
//! so the file stays hand-editable. Every save rewrites the whole file
//! through a temp file in the same directory, and a lock file covers each
//! operation.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{PresetRecord, PresetStore};
use crate::lock::StoreLock;

/// Preset store in a single JSON file. The last write per e-mail wins.
pub struct FilePresetStore {
    path: PathBuf,
}

impl FilePresetStore {
    /// Create a store backed by the given file. The file is created on
    /// first save.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The backing file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_all(&self) -> Result<BTreeMap<String, PresetRecord>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read presets from {}", self.path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse presets in {}", self.path.display()))
    }

    fn write_all(&self, presets: &BTreeMap<String, PresetRecord>) -> Result<()> {
        let json =
            serde_json::to_string_pretty(presets).context("Failed to serialize presets")?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
        tmp.write_all(json.as_bytes())
            .context("Failed to write presets")?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        Ok(())
    }
}

impl PresetStore for FilePresetStore {
    fn get(&self, email: &str) -> Result<Option<PresetRecord>> {
        let _lock = StoreLock::acquire(&self.path)?;

        let mut presets = self.load_all()?;
        Ok(presets.remove(email))
    }

    fn put(&self, email: &str, record: &PresetRecord) -> Result<()> {
        let _lock = StoreLock::acquire(&self.path)?;

        // An unreadable store starts over rather than blocking the save.
        let mut presets = self.load_all().unwrap_or_default();
        presets.insert(email.to_string(), record.clone());

        self.write_all(&presets)
    }
}
