//! Best-effort persistence of the last-used configuration.
//!
//! Settings live under a single namespaced key in an opaque key-value store.
//! Loading never fails: anything missing or malformed falls back to the
//! defaults. Saving never fails either; errors are logged and dropped.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::alphabet::letter_to_index;
use crate::error::StoreError;
use crate::model::{Configuration, Direction, GridOrder, Mode, Unit};

/// The key the configuration is stored under.
pub const SETTINGS_KEY: &str = "alphabet-index-settings-v1";

/// A string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store, mainly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object in a single file.
///
/// A missing file reads as an empty store. Every write rewrites the file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking the write.
        let mut entries = self.read_all().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

/// Flat on-disk record.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredSettings<'a> {
    mode: Mode,
    start_letter: &'a str,
    end_letter: &'a str,
    num_questions: u32,
    unit: Unit,
    sequence_length: u32,
    grid_order: GridOrder,
    grid_ask: Direction,
}

/// Load the saved configuration, falling back field by field to defaults.
pub fn load_settings(store: &dyn KeyValueStore) -> Configuration {
    let mut config = Configuration::default();

    let raw = match store.get(SETTINGS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return config,
        Err(e) => {
            tracing::debug!("ignoring unreadable settings store: {e}");
            return config;
        }
    };
    let object = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(object)) => object,
        Ok(_) => {
            tracing::debug!("ignoring settings: not a JSON object");
            return config;
        }
        Err(e) => {
            tracing::debug!("ignoring malformed settings: {e}");
            return config;
        }
    };

    if let Some(mode) = field::<Mode>(&object, "mode") {
        config.mode = mode;
    }
    if let Some(start) = field::<String>(&object, "startLetter").filter(|s| is_letter(s)) {
        config.range_start = start.to_uppercase();
    }
    if let Some(end) = field::<String>(&object, "endLetter").filter(|s| is_letter(s)) {
        config.range_end = end.to_uppercase();
    }
    if let Some(count) = field::<u32>(&object, "numQuestions").filter(|&n| n >= 1) {
        config.question_count = count;
    }
    if let Some(unit) = field::<Unit>(&object, "unit") {
        config.unit = unit;
    }
    if let Some(length) = field::<u32>(&object, "sequenceLength").filter(|&n| n >= 1) {
        config.sequence_length = length;
    }
    if let Some(order) = field::<GridOrder>(&object, "gridOrder") {
        config.grid_order = order;
    }
    if let Some(ask) = field::<Direction>(&object, "gridAsk") {
        config.grid_ask = ask;
    }

    config
}

fn field<T: DeserializeOwned>(object: &Map<String, Value>, name: &str) -> Option<T> {
    object
        .get(name)
        .and_then(|v| serde_json::from_value(v.clone()).ok())
}

fn is_letter(s: &str) -> bool {
    letter_to_index(s).is_some()
}

/// Persist `config`. Failures are logged and swallowed.
pub fn save_settings(store: &mut dyn KeyValueStore, config: &Configuration) {
    let record = StoredSettings {
        mode: config.mode,
        start_letter: &config.range_start,
        end_letter: &config.range_end,
        num_questions: config.question_count,
        unit: config.unit,
        sequence_length: config.sequence_length,
        grid_order: config.grid_order,
        grid_ask: config.grid_ask,
    };
    let result = serde_json::to_string(&record)
        .map_err(StoreError::from)
        .and_then(|json| store.set(SETTINGS_KEY, &json));
    if let Err(e) = result {
        tracing::debug!("failed to save settings: {e}");
    }
}

/// Forget any saved configuration. Failures are logged and swallowed.
pub fn clear_settings(store: &mut dyn KeyValueStore) {
    if let Err(e) = store.remove(SETTINGS_KEY) {
        tracing::debug!("failed to clear settings: {e}");
    }
}
