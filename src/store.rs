//! Persisted scalar storage for preference values

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Key/value storage for integer preference values
pub trait PreferenceStore {
    /// Whether a value has been persisted for `key`
    fn contains(&self, key: &str) -> bool;

    /// Persisted value for `key`, or `default` when there is none
    fn get_int(&self, key: &str, default: u32) -> u32;

    /// Persist `value`; returns false when the write did not happen
    fn put_int(&mut self, key: &str, value: u32) -> bool;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: impl Into<String>, value: u32) -> Self {
        self.values.insert(key.into(), value);
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get_int(&self, key: &str, default: u32) -> u32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn put_int(&mut self, key: &str, value: u32) -> bool {
        self.values.insert(key.to_string(), value);
        true
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    values: BTreeMap<String, u32>,
}

/// Store backed by a TOML file, rewritten on every put
#[derive(Debug)]
pub struct TomlFileStore {
    path: PathBuf,
    file: StoreFile,
}

impl TomlFileStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content)?
        } else {
            StoreFile::default()
        };

        tracing::debug!(path = %path.display(), entries = file.values.len(), "opened store");
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&self.file)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for TomlFileStore {
    fn contains(&self, key: &str) -> bool {
        self.file.values.contains_key(key)
    }

    fn get_int(&self, key: &str, default: u32) -> u32 {
        self.file.values.get(key).copied().unwrap_or(default)
    }

    fn put_int(&mut self, key: &str, value: u32) -> bool {
        let previous = self.file.values.insert(key.to_string(), value);

        match self.write() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to persist preference");
                // Keep memory in line with what is on disk
                match previous {
                    Some(old) => self.file.values.insert(key.to_string(), old),
                    None => self.file.values.remove(key),
                };
                false
            }
        }
    }
}
