//! Key-value blob storage backends.
//!
//! Where blobs live is a backend concern: `FileStore` keeps one file per
//! key under a directory, `MemoryStore` backs tests and throwaway
//! sessions. The engine only sees the [`BlobStore`] trait.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// External key-value blob storage: one serialized JSON document per key.
pub trait BlobStore {
    /// Returns the stored blob, or `None` when the key is absent.
    fn load(&self, key: &str) -> Option<String>;

    fn save(&mut self, key: &str, value: &str) -> io::Result<()>;

    /// Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// File-backed store: `<dir>/<key>.json` per key.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Open the store rooted at the application data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open_default() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self::new(super::data_dir()?))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn save(&mut self, key: &str, value: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory store for tests and sessions without persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.blobs.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.load("timers").is_none());

        store.save("timers", "[]").unwrap();
        assert_eq!(store.load("timers").as_deref(), Some("[]"));

        store.remove("timers").unwrap();
        assert!(store.load("timers").is_none());
        // Removing again is a no-op.
        store.remove("timers").unwrap();
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        assert!(store.load("timers").is_none());
        store.save("timers", r#"[{"x":1}]"#).unwrap();
        assert_eq!(store.load("timers").as_deref(), Some(r#"[{"x":1}]"#));

        store.remove("timers").unwrap();
        assert!(store.load("timers").is_none());
        store.remove("timers").unwrap();
    }

    #[test]
    fn file_store_keys_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        store.save("timers", "1").unwrap();
        store.save("timer_history", "2").unwrap();
        assert_eq!(store.load("timers").as_deref(), Some("1"));
        assert_eq!(store.load("timer_history").as_deref(), Some("2"));
    }
}
