// Showcase browser platform abstraction
// Resolves where the settings file lives on Windows, macOS, and Linux.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Environment variable that overrides the platform config directory.
pub const CONFIG_DIR_ENV: &str = "SHOWCASE_CONFIG_DIR";

/// Returns the configuration directory for the showcase browser.
///
/// - `$SHOWCASE_CONFIG_DIR` when set
/// - **Linux**: `~/.config/showcase-browser` (or `$XDG_CONFIG_HOME/showcase-browser`)
/// - **macOS**: `~/Library/Application Support/ShowcaseBrowser`
/// - **Windows**: `%APPDATA%/ShowcaseBrowser`
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }

    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from(".showcase-browser")
    }
}
