//! Filesystem locations used by ghprojects
//!
//! ```text
//! ~/.config/ghprojects/
//! └── config.toml               # API endpoint, token, user agent
//! ```

use std::path::PathBuf;

/// Directory name under the platform config directory
const APP_DIR: &str = "ghprojects";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the global config directory (`~/.config/ghprojects`).
///
/// Falls back to `.ghprojects` in the working directory when the platform
/// has no config directory.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".ghprojects"), |dir| dir.join(APP_DIR))
}

/// Get path to the global config file.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}
