//! Key-value persistence for loadout state.
//!
//! Values are JSON documents. Reads never fail: a missing or unreadable key
//! comes back as `None`, and a value that doesn't parse falls back to the
//! type's default.

use crate::constants::{DATA_DIR_NAME, STORE_FILE_EXTENSION};
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub trait KeyValueStore {
    /// Raw value for `key`, if present and readable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process store. Nothing survives the process.
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

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, STORE_FILE_EXTENSION))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

/// `~/.loadout`
pub fn default_data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(DATA_DIR_NAME))
}

/// Parse the JSON under `key`, or `T::default()` if missing or malformed.
pub fn load_json_or_default<S, T>(store: &S, key: &str) -> T
where
    S: KeyValueStore + ?Sized,
    T: Default + DeserializeOwned,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding malformed stored value");
            T::default()
        }
    }
}

/// Serialize `data` as pretty JSON under `key`.
pub fn save_json<S, T>(store: &mut S, key: &str, data: &T) -> Result<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string_pretty(data)?;
    store.set(key, &json)
}
