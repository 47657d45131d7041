use serde::{Deserialize, Serialize};

/// Top-level showcase settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShowcaseSettings {
    #[serde(default)]
    pub general: GeneralSettings,
    #[serde(default)]
    pub placeholders: PlaceholderSettings,
    #[serde(default)]
    pub window: WindowSettings,
}

/// Startup behaviour of the simulated browser.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    pub startup: StartupBehavior,
    /// Catalog id opened right after startup, if any.
    #[serde(default)]
    pub initial_tab: Option<String>,
}

/// What the tab collection holds when the browser is created.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum StartupBehavior {
    Empty,
    #[default]
    Home,
    NewTab,
}

/// Titles and urls given to placeholder tabs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceholderSettings {
    pub home_title: String,
    pub home_url: String,
    pub new_tab_title: String,
    pub new_tab_url: String,
}

impl Default for PlaceholderSettings {
    fn default() -> Self {
        Self {
            home_title: "Home".to_string(),
            home_url: "about:home".to_string(),
            new_tab_title: "New Tab".to_string(),
            new_tab_url: "about:newtab".to_string(),
        }
    }
}

/// Window chrome settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    pub start_maximized: bool,
}
