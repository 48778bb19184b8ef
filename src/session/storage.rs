//! File-backed token store.
//!
//! The file is a flat JSON object shared with other local settings, so only
//! the `token` key is ever touched. The file is re-read on every `get` so a
//! logout from another process is observed by the next request.

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Map, Value};

use super::{StoreError, TOKEN_KEY, TokenStore};

type Entries = Map<String, Value>;

/// Credential persisted under `token` in a JSON local storage file.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTokenStore {
    /// Open the storage file, creating nothing until the first write.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or is not a JSON object.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        read_entries(&path)?;
        Ok(Self { path, write_lock: Mutex::new(()) })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn update(&self, apply: impl FnOnce(&mut Entries)) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut entries = read_entries(&self.path)?;
        apply(&mut entries);
        write_entries(&self.path, &entries)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        match read_entries(&self.path) {
            Ok(entries) => entries.get(TOKEN_KEY).and_then(Value::as_str).map(str::to_owned),
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "local storage unreadable");
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        self.update(|entries| {
            entries.insert(TOKEN_KEY.to_owned(), Value::String(token.to_owned()));
        })
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.update(|entries| {
            entries.remove(TOKEN_KEY);
        })
    }
}

fn read_entries(path: &Path) -> Result<Entries, StoreError> {
    match fs::read_to_string(path) {
        Ok(raw) if raw.trim().is_empty() => Ok(Entries::new()),
        Ok(raw) => Ok(serde_json::from_str(&raw)?),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(Entries::new()),
        Err(error) => Err(error.into()),
    }
}

fn write_entries(path: &Path, entries: &Entries) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let raw = serde_json::to_string_pretty(entries)?;
    fs::write(path, raw)?;
    Ok(())
}
