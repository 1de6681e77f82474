//! File-backed key-value storage.
//!
//! All keys live in one JSON document on disk. Every mutation is staged into
//! a copy, written to a temporary file next to the store and swapped in with
//! a rename, so a failed write leaves the previous contents intact. The
//! in-memory map is only updated after the swap succeeds.

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use log::error;
use minha_conta_core::errors::Result;
use minha_conta_core::store::StorageBackend;

use crate::errors::BackendError;

/// Durable backend persisting to a single JSON file.
pub struct FileBackend {
    path: PathBuf,
    state: Mutex<HashMap<String, String>>,
}

impl FileBackend {
    /// Opens (or creates) the store file at `path`.
    ///
    /// A missing file starts empty. An unreadable or unparseable file also
    /// starts empty, favoring availability: the store re-seeds its defaults
    /// on the next `initialize`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(BackendError::WriteIo)?;
            }
        }

        let state = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(err) => {
                    error!(
                        "store file {} is not parseable, starting empty: {}",
                        path.display(),
                        err
                    );
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(BackendError::ReadIo(err).into()),
        };

        Ok(FileBackend {
            path,
            state: Mutex::new(state),
        })
    }

    fn staging_path(&self) -> PathBuf {
        let mut os: OsString = self.path.clone().into_os_string();
        os.push(".tmp");
        PathBuf::from(os)
    }

    /// Writes the staged map to disk and swaps it in.
    fn persist(&self, staged: &HashMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string_pretty(staged).map_err(BackendError::Serde)?;
        let staging = self.staging_path();
        fs::write(&staging, raw).map_err(BackendError::WriteIo)?;
        fs::rename(&staging, &self.path).map_err(BackendError::WriteIo)?;
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let state = self.state.lock().unwrap();
        Ok(state.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let mut staged = state.clone();
        staged.insert(key.to_string(), value.to_string());
        self.persist(&staged)?;
        *state = staged;
        Ok(())
    }

    fn write_many(&self, entries: &[(String, String)]) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let mut staged = state.clone();
        for (key, value) in entries {
            staged.insert(key.clone(), value.clone());
        }
        self.persist(&staged)?;
        *state = staged;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let mut staged = state.clone();
        if staged.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&staged)?;
        *state = staged;
        Ok(())
    }
}
