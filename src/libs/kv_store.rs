//! File-backed key-value storage.
//!
//! Values are kept as JSON under string keys in a single `storage.json` document
//! in the application data directory. Each write rewrites the whole document.

use super::data_storage::DataStorage;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::path::PathBuf;
use tracing::debug;

pub const STORAGE_FILE_NAME: &str = "storage.json";

#[derive(Debug, Clone)]
pub struct KeyValueStore {
    path: PathBuf,
}

impl KeyValueStore {
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(STORAGE_FILE_NAME)?;
        Ok(Self { path })
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Decodes the value stored under `key`, `None` when the key is absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let mut document = self.read_document()?;
        match document.remove(key) {
            Some(value) => {
                let decoded = serde_json::from_value(value).with_context(|| format!("Failed to decode stored value '{}'", key))?;
                Ok(Some(decoded))
            }
            None => Ok(None),
        }
    }

    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let mut document = self.read_document()?;
        document.insert(key.to_string(), serde_json::to_value(value)?);
        self.write_document(&document)?;
        debug!(key, path = %self.path.display(), "stored value");
        Ok(())
    }

    fn read_document(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(&file, document)?;
        Ok(())
    }
}
