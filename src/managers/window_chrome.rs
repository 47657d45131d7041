use tracing::debug;

use crate::types::chrome::{ChromeOutcome, ChromeSnapshot, WindowLifecycle};

/// A host-supplied chrome action.
pub type ChromeHandler = Box<dyn FnMut()>;

/// Host overrides for the window controls.
///
/// When a handler is present the matching control calls it and leaves the
/// local state alone.
#[derive(Default)]
pub struct ChromeHandlers {
    pub close: Option<ChromeHandler>,
    pub minimize: Option<ChromeHandler>,
    pub maximize: Option<ChromeHandler>,
}

/// Lifecycle (open / minimized / closed) and maximize state of the window.
#[derive(Default)]
pub struct WindowChrome {
    state: ChromeSnapshot,
    handlers: ChromeHandlers,
}

impl WindowChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handlers(handlers: ChromeHandlers) -> Self {
        Self {
            state: ChromeSnapshot::default(),
            handlers,
        }
    }

    pub fn set_handlers(&mut self, handlers: ChromeHandlers) {
        self.handlers = handlers;
    }

    pub fn minimize(&mut self) -> ChromeOutcome {
        if let Some(handler) = self.handlers.minimize.as_mut() {
            handler();
            return ChromeOutcome::Delegated;
        }
        self.transition(&[WindowLifecycle::Open], WindowLifecycle::Minimized)
    }

    pub fn close(&mut self) -> ChromeOutcome {
        if let Some(handler) = self.handlers.close.as_mut() {
            handler();
            return ChromeOutcome::Delegated;
        }
        self.transition(
            &[WindowLifecycle::Open, WindowLifecycle::Minimized],
            WindowLifecycle::Closed,
        )
    }

    pub fn restore(&mut self) -> ChromeOutcome {
        self.transition(
            &[WindowLifecycle::Minimized, WindowLifecycle::Closed],
            WindowLifecycle::Open,
        )
    }

    /// Flip `maximized`. Only valid while the window is open.
    pub fn toggle_maximize(&mut self) -> ChromeOutcome {
        if let Some(handler) = self.handlers.maximize.as_mut() {
            handler();
            return ChromeOutcome::Delegated;
        }
        if self.state.lifecycle != WindowLifecycle::Open {
            return ChromeOutcome::Unchanged;
        }
        self.state.maximized = !self.state.maximized;
        debug!(maximized = self.state.maximized, "toggled maximize");
        ChromeOutcome::Changed
    }

    fn transition(&mut self, from: &[WindowLifecycle], to: WindowLifecycle) -> ChromeOutcome {
        if !from.contains(&self.state.lifecycle) {
            return ChromeOutcome::Unchanged;
        }
        debug!(from = ?self.state.lifecycle, to = ?to, "window lifecycle");
        self.state.lifecycle = to;
        ChromeOutcome::Changed
    }

    pub fn lifecycle(&self) -> WindowLifecycle {
        self.state.lifecycle
    }

    pub fn is_maximized(&self) -> bool {
        self.state.maximized
    }

    pub fn snapshot(&self) -> ChromeSnapshot {
        self.state
    }
}
