mod adapter;
mod blob;

pub use adapter::{StoreAdapter, KEY_HISTORY, KEY_TIMERS};
pub use blob::{BlobStore, FileStore, MemoryStore};

use std::path::PathBuf;

/// Returns `~/.config/tickstack[-dev]/` based on TICKSTACK_ENV.
///
/// Set TICKSTACK_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("TICKSTACK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("tickstack-dev")
    } else {
        base_dir.join("tickstack")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
