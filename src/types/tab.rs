use serde::{Deserialize, Serialize};

/// Opaque handle to host-owned content. Never interpreted by the browser core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRef(pub String);

impl ContentRef {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Tab icon: either an image location or a host-renderable component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Icon {
    Image(String),
    Renderable(ContentRef),
}

/// What a tab currently represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabKind {
    /// Real content supplied by the host.
    #[default]
    Content,
    /// The home screen placeholder. At most one per collection.
    Home,
    /// A blank "new tab" placeholder.
    New,
}

impl TabKind {
    pub fn is_placeholder(self) -> bool {
        matches!(self, TabKind::Home | TabKind::New)
    }
}

/// Represents a virtual browser tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: Option<ContentRef>,
    #[serde(default)]
    pub icon: Option<Icon>,
    #[serde(default)]
    pub kind: TabKind,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub favorited: bool,
    #[serde(default)]
    pub has_unsaved_changes: bool,
    #[serde(default)]
    pub disabled: bool,
    /// Milliseconds since the Unix epoch. Only meaningful for placeholders.
    #[serde(default)]
    pub created_at: i64,
}

impl Tab {
    /// Builds a content tab with all flags cleared.
    pub fn content(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        content: Option<ContentRef>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            content,
            icon: None,
            kind: TabKind::Content,
            pinned: false,
            favorited: false,
            has_unsaved_changes: false,
            disabled: false,
            created_at: 0,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind.is_placeholder()
    }
}

/// Render state of a tab collection handed to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabsSnapshot {
    pub tabs: Vec<Tab>,
    pub active_index: Option<usize>,
    pub active_id: Option<String>,
    pub home_screen_visible: bool,
}

impl TabsSnapshot {
    pub fn ids(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.id.as_str()).collect()
    }
}
