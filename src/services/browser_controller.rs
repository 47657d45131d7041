//! Browser controller for the project showcase.
//!
//! Owns the tab collection and the window chrome, and turns user triggers
//! ("show project X", "close this tab", "go home") into store operations.
//! All transitions are synchronous; each one finishes, notifications
//! included, before the next trigger is handled.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use tracing::{debug, info};

use crate::managers::active_tab_sync::ActiveTabSync;
use crate::managers::tab_collection::TabCollection;
use crate::managers::tab_factory::TabFactory;
use crate::managers::window_chrome::{ChromeHandlers, WindowChrome};
use crate::types::catalog::Catalog;
use crate::types::chrome::{ChromeOutcome, ChromeSnapshot};
use crate::types::settings::{PlaceholderSettings, ShowcaseSettings, StartupBehavior};
use crate::types::tab::{Tab, TabKind, TabsSnapshot};

/// Outbound notifications to the host.
pub trait BrowserEvents {
    /// The active tab changed because of a user trigger. `None` when no tab is left.
    fn on_active_changed(&mut self, _active_id: Option<&str>) {}
    /// A tab was removed from the collection.
    fn on_tab_closed(&mut self, _id: &str) {}
}

/// Event sink that ignores everything.
#[derive(Debug, Default)]
pub struct NoopEvents;

impl BrowserEvents for NoopEvents {}

/// A notification captured by [`EventQueue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BrowserEvent {
    ActiveChanged { id: Option<String> },
    TabClosed { id: String },
}

/// Shared, clonable buffer of notifications for hosts that poll.
#[derive(Debug, Clone, Default)]
pub struct EventQueue(Rc<RefCell<Vec<BrowserEvent>>>);

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every queued event, oldest first.
    pub fn drain(&self) -> Vec<BrowserEvent> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl BrowserEvents for EventQueue {
    fn on_active_changed(&mut self, active_id: Option<&str>) {
        self.0.borrow_mut().push(BrowserEvent::ActiveChanged {
            id: active_id.map(str::to_string),
        });
    }

    fn on_tab_closed(&mut self, id: &str) {
        self.0.borrow_mut().push(BrowserEvent::TabClosed { id: id.to_string() });
    }
}

/// How an `open_or_focus` request was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The id is not in the catalog.
    NotInCatalog,
    /// The tab was already open and is now active.
    Focused,
    /// The tab was appended.
    Added,
    /// The active placeholder now shows the tab's content under its own id.
    Transformed,
}

/// Composes the tab store, the window chrome and the sync adapter.
pub struct BrowserController {
    tabs: TabCollection,
    chrome: WindowChrome,
    factory: TabFactory,
    sync: ActiveTabSync,
    events: Box<dyn BrowserEvents>,
}

impl BrowserController {
    pub fn new(factory: TabFactory) -> Self {
        Self {
            tabs: TabCollection::new(),
            chrome: WindowChrome::new(),
            factory,
            sync: ActiveTabSync::new(),
            events: Box::new(NoopEvents),
        }
    }

    /// Builds a controller in the startup state described by `settings`.
    ///
    /// `settings.general.initial_tab` is resolved against `catalog` after the
    /// startup placeholder is in place.
    pub fn from_settings(settings: &ShowcaseSettings, catalog: &Catalog) -> Self {
        let mut controller = Self::new(TabFactory::new(settings.placeholders.clone()));

        match settings.general.startup {
            StartupBehavior::Empty => {}
            StartupBehavior::Home => {
                let home = controller.factory.create_home();
                controller.tabs.add_tab(home);
            }
            StartupBehavior::NewTab => {
                let new_tab = controller.factory.create_new();
                controller.tabs.add_tab(new_tab);
            }
        }

        if let Some(initial) = settings.general.initial_tab.as_deref() {
            controller.open_or_focus(initial, catalog);
        }

        if settings.window.start_maximized {
            controller.chrome.toggle_maximize();
        }

        info!(
            tabs = controller.tabs.len(),
            startup = ?settings.general.startup,
            "browser controller ready"
        );
        controller
    }

    pub fn with_events(mut self, events: impl BrowserEvents + 'static) -> Self {
        self.events = Box::new(events);
        self
    }

    pub fn set_chrome_handlers(&mut self, handlers: ChromeHandlers) {
        self.chrome.set_handlers(handlers);
    }

    /// Swaps the placeholder titles and urls used for tabs created from now on.
    pub fn set_placeholders(&mut self, placeholders: PlaceholderSettings) {
        self.factory = TabFactory::new(placeholders);
    }

    /// Show the catalog tab `target_id`.
    ///
    /// An open tab with that id is focused. Otherwise the tab is added to an
    /// empty collection, replaces an active placeholder in place (the
    /// placeholder keeps its id), or is appended after pruning home tabs.
    pub fn open_or_focus(&mut self, target_id: &str, catalog: &Catalog) -> OpenOutcome {
        let Some(target) = catalog.find(target_id) else {
            debug!(id = target_id, "open request for unknown tab");
            return OpenOutcome::NotInCatalog;
        };

        let before = self.active_id_owned();
        let outcome = self.resolve_open(target.clone());
        self.notify_if_active_changed(before);
        outcome
    }

    fn resolve_open(&mut self, target: Tab) -> OpenOutcome {
        if let Some(index) = self.tabs.index_of(&target.id) {
            self.tabs.set_active(index);
            return OpenOutcome::Focused;
        }

        if self.tabs.is_empty() {
            self.tabs.add_tab(target);
            return OpenOutcome::Added;
        }

        let placeholder = self
            .tabs
            .active_tab()
            .filter(|t| t.is_placeholder())
            .map(|t| t.id.clone());
        if let Some(slot) = placeholder {
            if target.kind == TabKind::Home {
                self.prune_home_tabs(Some(slot.as_str()));
            }
            if let Some(index) = self.tabs.index_of(&slot) {
                self.tabs.transform(index, target);
            }
            return OpenOutcome::Transformed;
        }

        self.prune_home_tabs(None);
        self.tabs.add_tab(target);
        OpenOutcome::Added
    }

    /// Removes home tabs other than `keep` and reports each as closed.
    fn prune_home_tabs(&mut self, keep: Option<&str>) {
        let pruned = self.tabs.remove_home_tabs_except(keep);
        self.emit_closed(&pruned);
    }

    /// User activation of the tab at `index`. Disabled tabs are ignored.
    pub fn activate(&mut self, index: usize) {
        let index = index.min(self.tabs.len().saturating_sub(1));
        if self.is_disabled(index) {
            return;
        }
        let before = self.active_id_owned();
        self.tabs.set_active(index);
        self.notify_if_active_changed(before);
    }

    /// User close of the tab at `index`. Disabled tabs are ignored.
    pub fn close(&mut self, index: usize) -> Option<Tab> {
        if self.is_disabled(index) {
            return None;
        }
        let before = self.active_id_owned();
        let removed = self.tabs.remove_tab(index)?;
        self.events.on_tab_closed(&removed.id);
        self.notify_if_active_changed(before);
        Some(removed)
    }

    /// Close every tab except the one at `index`. Disabled tabs stay open.
    pub fn close_other_tabs(&mut self, index: usize) {
        let Some(keep) = self.tabs.get(index).map(|t| t.id.clone()) else {
            return;
        };
        let before = self.active_id_owned();

        let mut i = self.tabs.len();
        while i > 0 {
            i -= 1;
            let closable = self
                .tabs
                .get(i)
                .is_some_and(|t| t.id != keep && !t.disabled);
            if closable {
                if let Some(removed) = self.tabs.remove_tab(i) {
                    self.events.on_tab_closed(&removed.id);
                }
            }
        }

        if let Some(index) = self.tabs.index_of(&keep) {
            self.tabs.set_active(index);
        }
        self.notify_if_active_changed(before);
    }

    /// Open a blank placeholder tab.
    pub fn new_tab(&mut self) {
        let before = self.active_id_owned();
        let tab = self.factory.create_new();
        self.tabs.add_tab(tab);
        self.notify_if_active_changed(before);
    }

    /// Show the home screen.
    ///
    /// Focuses the existing home tab, turns an active new-tab placeholder
    /// into the home tab, or adds a fresh home tab.
    pub fn go_home(&mut self) {
        let before = self.active_id_owned();

        if let Some(index) = self.tabs.home_tab_index() {
            self.tabs.set_active(index);
        } else if let Some(index) = self
            .tabs
            .active_index()
            .filter(|&i| self.tabs.get(i).is_some_and(|t| t.kind == TabKind::New))
        {
            let home = self.factory.create_home();
            self.tabs.transform(index, home);
        } else {
            let home = self.factory.create_home();
            self.tabs.add_tab(home);
        }

        self.tabs.set_home_screen(true);
        self.notify_if_active_changed(before);
    }

    pub fn toggle_pinned(&mut self, index: usize) -> bool {
        let pinned = self.tabs.get(index).is_some_and(|t| t.pinned);
        self.tabs.set_pinned(index, !pinned)
    }

    pub fn toggle_favorited(&mut self, index: usize) -> bool {
        let favorited = self.tabs.get(index).is_some_and(|t| t.favorited);
        self.tabs.set_favorited(index, !favorited)
    }

    pub fn set_unsaved_changes(&mut self, index: usize, unsaved: bool) -> bool {
        self.tabs.set_unsaved_changes(index, unsaved)
    }

    pub fn set_disabled(&mut self, index: usize, disabled: bool) -> bool {
        self.tabs.set_disabled(index, disabled)
    }

    /// Follow the host's desired active tab. Never notifies the host back.
    pub fn sync_active(&mut self, desired: Option<&str>) -> bool {
        self.sync.apply(&mut self.tabs, desired)
    }

    pub fn minimize(&mut self) -> ChromeOutcome {
        self.chrome.minimize()
    }

    pub fn close_window(&mut self) -> ChromeOutcome {
        self.chrome.close()
    }

    pub fn restore(&mut self) -> ChromeOutcome {
        self.chrome.restore()
    }

    pub fn toggle_maximize(&mut self) -> ChromeOutcome {
        self.chrome.toggle_maximize()
    }

    pub fn tabs(&self) -> &TabCollection {
        &self.tabs
    }

    pub fn chrome(&self) -> &WindowChrome {
        &self.chrome
    }

    pub fn factory(&self) -> &TabFactory {
        &self.factory
    }

    pub fn snapshot(&self) -> TabsSnapshot {
        self.tabs.snapshot()
    }

    pub fn chrome_snapshot(&self) -> ChromeSnapshot {
        self.chrome.snapshot()
    }

    fn is_disabled(&self, index: usize) -> bool {
        self.tabs.get(index).is_some_and(|t| t.disabled)
    }

    fn active_id_owned(&self) -> Option<String> {
        self.tabs.active_id().map(str::to_string)
    }

    fn notify_if_active_changed(&mut self, before: Option<String>) {
        let after = self.tabs.active_id();
        if before.as_deref() != after {
            debug!(from = ?before, to = ?after, "active tab changed");
            let after = after.map(str::to_string);
            self.events.on_active_changed(after.as_deref());
        }
    }

    fn emit_closed(&mut self, removed: &[Tab]) {
        for tab in removed {
            self.events.on_tab_closed(&tab.id);
        }
    }
}
