// Showcase browser config path for Linux
// Config: ~/.config/showcase-browser

use std::env;
use std::path::PathBuf;

/// Uses `$XDG_CONFIG_HOME/showcase-browser` if set, otherwise `~/.config/showcase-browser`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("showcase-browser")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("showcase-browser")
    }
}
