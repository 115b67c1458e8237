//! Key-value persistence for tasks and settings.
//!
//! Two fixed keys, one JSON document each. Reads never fail outward: a missing,
//! unreadable or malformed document falls back to an empty task list or default
//! settings, with a warning in the log. Inside a readable task array, single bad
//! records are set aside rather than discarding the whole list.

use anyhow::{Context, Result};
use matrix_core::{Settings, Task, TaskList};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const TASKS_KEY: &str = "priority-matrix-tasks";
pub const SETTINGS_KEY: &str = "priority-matrix-settings";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One `<key>.json` file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let p = self.path_for(key);
        if !p.exists() {
            return Ok(None);
        }
        let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
        Ok(Some(s))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).with_context(|| format!("create {}", self.dir.display()))?;
        let p = self.path_for(key);
        // Readers only ever see a complete document.
        let tmp = p.with_extension("json.tmp");
        fs::write(&tmp, value).with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, &p).with_context(|| format!("rename to {}", p.display()))?;
        debug!(key, path = %p.display(), "stored value");
        Ok(())
    }
}

#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Tasks as loaded from the store.
///
/// Records that no longer decode as a [`Task`] are kept verbatim in
/// `unreadable` and written back after the readable ones, so a save never
/// drops data it could not understand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredTasks {
    pub list: TaskList,
    pub unreadable: Vec<Value>,
}

impl From<TaskList> for StoredTasks {
    fn from(list: TaskList) -> Self {
        Self {
            list,
            unreadable: Vec::new(),
        }
    }
}

pub fn load_tasks(store: &impl KeyValueStore) -> StoredTasks {
    let raw = match store.get(TASKS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return StoredTasks::default(),
        Err(e) => {
            warn!(error = %e, "could not read task list; starting empty");
            return StoredTasks::default();
        }
    };

    let records = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(records)) => records,
        Ok(_) => {
            warn!("stored task list is not an array; starting empty");
            return StoredTasks::default();
        }
        Err(e) => {
            warn!(error = %e, "stored task list is malformed; starting empty");
            return StoredTasks::default();
        }
    };

    let mut tasks = Vec::with_capacity(records.len());
    let mut unreadable = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        match Task::deserialize(&record) {
            Ok(task) => tasks.push(task),
            Err(e) => {
                warn!(index, error = %e, "skipping unreadable task record; it will be kept as-is");
                unreadable.push(record);
            }
        }
    }

    StoredTasks {
        list: TaskList::from_tasks(tasks),
        unreadable,
    }
}

pub fn save_tasks(store: &mut impl KeyValueStore, stored: &StoredTasks) -> Result<()> {
    let mut records = stored
        .list
        .tasks()
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<Value>, _>>()
        .context("serialize tasks")?;
    records.extend(stored.unreadable.iter().cloned());

    let json = serde_json::to_string_pretty(&records).context("serialize tasks")?;
    store.set(TASKS_KEY, &json)
}

/// Thresholds are read field by field: a missing, null or non-integer field
/// falls back to its own default without touching the other one.
pub fn load_settings(store: &impl KeyValueStore) -> Settings {
    let raw = match store.get(SETTINGS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Settings::default(),
        Err(e) => {
            warn!(error = %e, "could not read settings; using defaults");
            return Settings::default();
        }
    };

    let doc = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(doc)) => doc,
        Ok(_) => {
            warn!("stored settings are not an object; using defaults");
            return Settings::default();
        }
        Err(e) => {
            warn!(error = %e, "stored settings are malformed; using defaults");
            return Settings::default();
        }
    };

    let defaults = Settings::default();
    let settings = Settings {
        impact_threshold: threshold_field(&doc, "impactThreshold", defaults.impact_threshold),
        urgency_threshold: threshold_field(&doc, "urgencyThreshold", defaults.urgency_threshold),
    };
    if let Err(e) = settings.validate() {
        warn!(error = %e, "stored threshold is out of range");
    }
    settings
}

fn threshold_field(doc: &Map<String, Value>, key: &str, default: i32) -> i32 {
    match doc.get(key) {
        None | Some(Value::Null) => default,
        Some(v) => match v.as_i64().and_then(|n| i32::try_from(n).ok()) {
            Some(n) => n,
            None => {
                warn!(key, value = %v, "ignoring non-integer threshold");
                default
            }
        },
    }
}

pub fn save_settings(store: &mut impl KeyValueStore, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings).context("serialize settings")?;
    store.set(SETTINGS_KEY, &json)
}
