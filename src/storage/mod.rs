use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

const TEMP_SUFFIX: &str = ".tmp";
const VALUE_EXTENSION: &str = "json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage key is empty")]
    EmptyKey,
    #[error("failed to read storage entry: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write storage entry: {path}")]
    Write { path: PathBuf, source: io::Error },
    #[error("storage lock poisoned")]
    Poisoned,
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

impl<T> From<PoisonError<T>> for StorageError {
    fn from(_: PoisonError<T>) -> Self {
        StorageError::Poisoned
    }
}

/// String key-value storage shared between the owner and background writers.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::EmptyKey);
    }
    Ok(())
}

/// One file per key under a single directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for_key(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        let mut path = self.root.clone();
        path.push(format!("{}.{VALUE_EXTENSION}", sanitize_key(key)));
        Ok(path)
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for_key(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for_key(key)?;
        fs::create_dir_all(&self.root).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;

        let temp = temp_path_for(&path);

        fs::write(&temp, value).map_err(|source| {
            let _ = fs::remove_file(&temp);
            StorageError::Write {
                path: temp.clone(),
                source,
            }
        })?;
        fs::rename(&temp, &path).map_err(|source| {
            let _ = fs::remove_file(&temp);
            StorageError::Write {
                path: path.clone(),
                source,
            }
        })
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for_key(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Write { path, source }),
        }
    }
}

/// Per-process, per-thread sibling of `path`; rename keeps the entry whole.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut temp = path.as_os_str().to_os_string();
    temp.push(format!(
        "{TEMP_SUFFIX}.{}.{:?}",
        std::process::id(),
        std::thread::current().id()
    ));
    PathBuf::from(temp)
}

fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|ch| match ch {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => ch,
            _ => '_',
        })
        .collect()
}

/// In-process storage, mostly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.entries
            .lock()?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.entries.lock()?.remove(key);
        Ok(())
    }
}
