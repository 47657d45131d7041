use serde::{Deserialize, Serialize};

/// Lifecycle of the simulated browser window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowLifecycle {
    #[default]
    Open,
    Minimized,
    Closed,
}

/// Window chrome state. `maximized` is orthogonal to the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChromeSnapshot {
    pub lifecycle: WindowLifecycle,
    pub maximized: bool,
}

/// Result of a chrome control call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeOutcome {
    /// Local state changed.
    Changed,
    /// The call was not valid in the current state.
    Unchanged,
    /// A host handler took the call; local state untouched.
    Delegated,
}
