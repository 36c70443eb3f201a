//! JSON layer over a blob store.
//!
//! Loads fall back to a caller-supplied default on absence or corrupt
//! data; writes never persist a JSON `null`, preserving the last good
//! value instead.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, warn};

use super::blob::BlobStore;
use crate::error::StoreError;

/// Persistence key for the serialized timer set.
pub const KEY_TIMERS: &str = "timers";
/// Persistence key for the serialized history log (newest first).
pub const KEY_HISTORY: &str = "timer_history";

/// Typed load/save over a [`BlobStore`].
#[derive(Debug)]
pub struct StoreAdapter<S> {
    store: S,
}

impl<S: BlobStore> StoreAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load and deserialize `key`, falling back to `default` when the key
    /// is absent or the stored blob does not parse. Corrupt data is
    /// logged, not surfaced.
    pub fn load_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.store.load(key) {
            None => default,
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(value) => value,
                Err(e) => {
                    error!(key, "corrupt blob, falling back to default: {e}");
                    default
                }
            },
        }
    }

    /// Serialize and persist `value` under `key`.
    ///
    /// A value that serializes to JSON `null` is rejected as a no-op; the
    /// previously stored blob stays untouched.
    pub fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_value(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        if json.is_null() {
            warn!(key, "refusing to persist null value");
            return Err(StoreError::NullValue(key.to_string()));
        }
        self.store
            .save(key, &json.to_string())
            .map_err(|source| StoreError::WriteFailed {
                key: key.to_string(),
                source,
            })
    }

    /// Remove the given keys. Subsequent loads observe absence.
    pub fn clear(&mut self, keys: &[&str]) -> Result<(), StoreError> {
        for key in keys {
            self.store
                .remove(key)
                .map_err(|source| StoreError::RemoveFailed {
                    key: (*key).to_string(),
                    source,
                })?;
        }
        Ok(())
    }
}
