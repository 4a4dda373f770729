//! Lock file guarding the preset store.
//!
//! Every store operation holds a sibling `.lock` file for its duration so
//! two concurrent revmin processes cannot interleave a read-modify-write.
//! The lock carries the owner's PID; a crash leaves it behind and the
//! error message tells the user which file to remove.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Held lock on a store file. Dropping it removes the lock file.
#[derive(Debug)]
pub struct StoreLock {
    path: PathBuf,
}

impl StoreLock {
    /// Take the lock for the store at `store_path`, failing when another
    /// process already holds it.
    pub fn acquire(store_path: &Path) -> Result<StoreLock> {
        let path = lock_path(store_path);

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                let owner = read_owner(&path);
                anyhow::bail!(
                    "Preset store is locked by process {} (remove {} if that process is gone)",
                    owner,
                    path.display()
                );
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to create lock {}", path.display()));
            }
        };

        write!(file, "{}", std::process::id())
            .with_context(|| format!("Failed to write lock {}", path.display()))?;

        Ok(StoreLock { path })
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// PID recorded in an existing lock file, or a placeholder when unreadable.
fn read_owner(path: &Path) -> String {
    fs::read_to_string(path)
        .map(|content| content.trim().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}

/// The lock lives next to the store: `presets.json` -> `presets.json.lock`
fn lock_path(store_path: &Path) -> PathBuf {
    let mut name = store_path.as_os_str().to_os_string();
    name.push(".lock");
    PathBuf::from(name)
}
