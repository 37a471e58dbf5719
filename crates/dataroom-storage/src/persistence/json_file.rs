//! JSON-file persistence adapter.
//!
//! All keys live in one JSON object file, mirroring the single localStorage
//! area the source state maps onto. The file is rewritten on every save;
//! state volumes here are a handful of kilobytes, so no incremental format
//! is warranted.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use dataroom_core::error::{AppError, ErrorKind};
use dataroom_core::result::AppResult;
use dataroom_core::traits::persistence::StatePersistence;

/// File name of the state map within the configured directory.
const STATE_FILE: &str = "session_state.json";

/// Persistence adapter backed by a single JSON file.
#[derive(Debug)]
pub struct JsonFilePersistence {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFilePersistence {
    /// Open (or create) the state file under the given directory.
    pub fn new(directory: &str) -> AppResult<Self> {
        let dir = PathBuf::from(directory);
        fs::create_dir_all(&dir).map_err(|e| {
            AppError::with_source(
                ErrorKind::Persistence,
                format!("Failed to create state directory: {}", dir.display()),
                e,
            )
        })?;
        let path = dir.join(STATE_FILE);

        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Persistence,
                    format!("Corrupt state file: {}", path.display()),
                    e,
                )
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Persistence,
                    format!("Failed to read state file: {}", path.display()),
                    e,
                ));
            }
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Persistence,
                format!("Failed to write state file: {}", self.path.display()),
                e,
            )
        })
    }
}

impl StatePersistence for JsonFilePersistence {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}
