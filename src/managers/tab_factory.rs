use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::types::settings::PlaceholderSettings;
use crate::types::tab::{Tab, TabKind};

/// Builds placeholder tabs with fresh identities.
#[derive(Debug, Clone, Default)]
pub struct TabFactory {
    placeholders: PlaceholderSettings,
}

impl TabFactory {
    pub fn new(placeholders: PlaceholderSettings) -> Self {
        Self { placeholders }
    }

    pub fn placeholders(&self) -> &PlaceholderSettings {
        &self.placeholders
    }

    /// A home screen placeholder.
    pub fn create_home(&self) -> Tab {
        Self::placeholder(
            TabKind::Home,
            &self.placeholders.home_title,
            &self.placeholders.home_url,
        )
    }

    /// A blank new-tab placeholder.
    pub fn create_new(&self) -> Tab {
        Self::placeholder(
            TabKind::New,
            &self.placeholders.new_tab_title,
            &self.placeholders.new_tab_url,
        )
    }

    fn placeholder(kind: TabKind, title: &str, url: &str) -> Tab {
        let prefix = match kind {
            TabKind::Home => "home",
            TabKind::New => "new",
            TabKind::Content => "tab",
        };
        Tab {
            id: format!("{}-{}", prefix, Uuid::new_v4()),
            title: title.to_string(),
            url: url.to_string(),
            content: None,
            icon: None,
            kind,
            pinned: false,
            favorited: false,
            has_unsaved_changes: false,
            disabled: false,
            created_at: Self::now_millis(),
        }
    }

    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }
}
