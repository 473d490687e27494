//! Session storage backends for the session language.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tally_core::error::TallyError;
use tally_core::traits::SessionStorage;
use tracing::debug;

/// Key the session language is stored under.
pub const SESSION_LANGUAGE_KEY: &str = "tally.session_language";

/// Storage that lives as long as the process.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, TallyError> {
        self.values
            .lock()
            .map_err(|e| TallyError::Storage(format!("session storage poisoned: {e}")))
    }
}

impl SessionStorage for MemorySessionStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), TallyError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), TallyError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// One file per key under a directory.
///
/// Keys are sanitized to `[A-Za-z0-9._-]` so they always name a file inside
/// the directory.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    dir: PathBuf,
}

impl FileSessionStorage {
    /// Use `dir` for storage. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let mut file: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        if file.chars().all(|c| c == '.') {
            file.insert(0, '_');
        }
        self.dir.join(file)
    }
}

impl SessionStorage for FileSessionStorage {
    fn read(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content.trim().to_string()),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    debug!("session storage: cannot read {}: {e}", path.display());
                }
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), TallyError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            TallyError::Storage(format!("failed to create {}: {e}", self.dir.display()))
        })?;
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .map_err(|e| TallyError::Storage(format!("failed to write {}: {e}", path.display())))
    }

    fn remove(&self, key: &str) -> Result<(), TallyError> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TallyError::Storage(format!(
                "failed to remove {}: {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemorySessionStorage::new();
        assert_eq!(storage.read(SESSION_LANGUAGE_KEY), None);
        storage.write(SESSION_LANGUAGE_KEY, "es").unwrap();
        assert_eq!(storage.read(SESSION_LANGUAGE_KEY).as_deref(), Some("es"));
        storage.remove(SESSION_LANGUAGE_KEY).unwrap();
        assert_eq!(storage.read(SESSION_LANGUAGE_KEY), None);
    }

    #[test]
    fn test_file_storage_creates_dir_on_write() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("session");
        let storage = FileSessionStorage::new(&dir);
        assert_eq!(storage.read(SESSION_LANGUAGE_KEY), None);

        storage.write(SESSION_LANGUAGE_KEY, "pt").unwrap();
        assert!(dir.join(SESSION_LANGUAGE_KEY).exists());
        assert_eq!(storage.read(SESSION_LANGUAGE_KEY).as_deref(), Some("pt"));

        // A second instance over the same dir sees the value.
        let again = FileSessionStorage::new(&dir);
        assert_eq!(again.read(SESSION_LANGUAGE_KEY).as_deref(), Some("pt"));
    }

    #[test]
    fn test_file_storage_remove_missing_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(tmp.path());
        storage.remove("never-written").unwrap();
        storage.write("k", "v").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.read("k"), None);
    }

    #[test]
    fn test_file_storage_sanitizes_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(tmp.path());
        storage.write("../escape/attempt", "x").unwrap();
        assert!(tmp.path().join(".._escape_attempt").exists());
        assert_eq!(storage.read("../escape/attempt").as_deref(), Some("x"));
    }

    #[test]
    fn test_file_storage_write_failure_is_storage_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        std::fs::write(&blocker, "not a dir").unwrap();
        let storage = FileSessionStorage::new(blocker.join("session"));
        let err = storage.write("k", "v").unwrap_err();
        assert!(matches!(err, TallyError::Storage(_)));
    }
}
