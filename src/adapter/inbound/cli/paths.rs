//! Path utilities for outlay.
//!
//! User configuration lives at `~/.outlay/config.toml`.

use std::path::PathBuf;

/// Returns the outlay home directory (`~/.outlay/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".outlay")
}

/// Returns the default config file path (`~/.outlay/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
