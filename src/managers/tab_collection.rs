//! Tab collection store for the simulated browser.
//!
//! Holds the ordered tabs, the active-tab pointer and the home-screen flag.
//! Every operation is total: bad indices and unknown ids are ignored or
//! clamped, never reported as errors, so a presentation layer can feed user
//! input straight through.
//!
//! After every operation:
//! - tab ids are pairwise distinct;
//! - `active_index` is `None` exactly when the collection is empty, and is
//!   otherwise a valid index;
//! - at most one tab has [`TabKind::Home`];
//! - the home screen is visible when the collection is empty or the active
//!   tab is a placeholder.

use tracing::debug;

use crate::types::tab::{Tab, TabKind, TabsSnapshot};

/// Ordered collection of tabs with an active pointer.
#[derive(Debug, Clone)]
pub struct TabCollection {
    tabs: Vec<Tab>,
    active_index: Option<usize>,
    home_screen_visible: bool,
}

impl TabCollection {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_index: None,
            home_screen_visible: true,
        }
    }

    /// Append `tab` and make it active.
    ///
    /// If a tab with the same id is already present, nothing is appended and
    /// that tab is activated instead. Appending a home tab first removes any
    /// other home tab.
    pub fn add_tab(&mut self, tab: Tab) {
        if let Some(existing) = self.index_of(&tab.id) {
            debug!(id = %tab.id, index = existing, "tab already open, activating");
            self.set_active(existing);
            return;
        }

        if tab.kind == TabKind::Home {
            self.remove_home_tabs_except(None);
        }

        let placeholder = tab.is_placeholder();
        debug!(id = %tab.id, kind = ?tab.kind, "adding tab");
        self.tabs.push(tab);
        self.active_index = Some(self.tabs.len() - 1);
        self.home_screen_visible = placeholder;
    }

    /// Remove the tab at `index` and repair the active pointer.
    ///
    /// Returns the removed tab, or `None` when `index` is out of range.
    pub fn remove_tab(&mut self, index: usize) -> Option<Tab> {
        if index >= self.tabs.len() {
            return None;
        }

        let removed = self.tabs.remove(index);
        debug!(id = %removed.id, index, "removed tab");

        if self.tabs.is_empty() {
            self.active_index = None;
            self.home_screen_visible = true;
            return Some(removed);
        }

        match self.active_index {
            Some(active) if active == index => {
                let next = index.min(self.tabs.len() - 1);
                self.active_index = Some(next);
                self.home_screen_visible = self.tabs[next].is_placeholder();
            }
            Some(active) if active > index => {
                self.active_index = Some(active - 1);
            }
            _ => {}
        }

        Some(removed)
    }

    /// Make the tab at `index` active.
    ///
    /// Out-of-range indices clamp to the last tab. Returns `true` when the
    /// active tab changed; activating the current tab again does nothing.
    pub fn set_active(&mut self, index: usize) -> bool {
        if self.tabs.is_empty() {
            return false;
        }

        let index = index.min(self.tabs.len() - 1);
        if self.active_index == Some(index) {
            return false;
        }

        self.active_index = Some(index);
        self.home_screen_visible = self.tabs[index].is_placeholder();
        debug!(id = %self.tabs[index].id, index, "activated tab");
        true
    }

    /// Show or hide the home screen.
    ///
    /// Hiding is ignored while the collection is empty or a placeholder is active.
    pub fn set_home_screen(&mut self, visible: bool) {
        if !visible && self.requires_home_screen() {
            debug!("home screen must stay visible");
            return;
        }
        self.home_screen_visible = visible;
    }

    /// Replace the tab at `index` with `data`, keeping the tab's id and flags.
    ///
    /// Turning a tab into a home tab first removes every other home tab.
    /// Returns `false` when `index` is out of range.
    pub fn transform(&mut self, index: usize, data: Tab) -> bool {
        let Some(id) = self.tabs.get(index).map(|t| t.id.clone()) else {
            return false;
        };

        if data.kind == TabKind::Home {
            self.remove_home_tabs_except(Some(&id));
        }

        let Some(index) = self.index_of(&id) else {
            return false;
        };

        let tab = &mut self.tabs[index];
        debug!(id = %tab.id, from = ?tab.kind, to = ?data.kind, "transforming tab");
        tab.kind = data.kind;
        tab.title = data.title;
        tab.url = data.url;
        tab.content = data.content;
        tab.icon = data.icon;

        if self.active_index == Some(index) {
            self.home_screen_visible = self.tabs[index].is_placeholder();
        }
        true
    }

    /// Remove every home tab except the one with id `keep`.
    ///
    /// Returns the removed tabs in collection order.
    pub fn remove_home_tabs_except(&mut self, keep: Option<&str>) -> Vec<Tab> {
        let doomed: Vec<usize> = self
            .tabs
            .iter()
            .enumerate()
            .filter(|(_, t)| t.kind == TabKind::Home && Some(t.id.as_str()) != keep)
            .map(|(i, _)| i)
            .collect();

        let mut removed: Vec<Tab> = doomed
            .into_iter()
            .rev()
            .filter_map(|i| self.remove_tab(i))
            .collect();
        removed.reverse();
        removed
    }

    pub fn set_pinned(&mut self, index: usize, pinned: bool) -> bool {
        self.update_flag(index, |t| t.pinned = pinned)
    }

    pub fn set_favorited(&mut self, index: usize, favorited: bool) -> bool {
        self.update_flag(index, |t| t.favorited = favorited)
    }

    pub fn set_unsaved_changes(&mut self, index: usize, unsaved: bool) -> bool {
        self.update_flag(index, |t| t.has_unsaved_changes = unsaved)
    }

    pub fn set_disabled(&mut self, index: usize, disabled: bool) -> bool {
        self.update_flag(index, |t| t.disabled = disabled)
    }

    fn update_flag(&mut self, index: usize, apply: impl FnOnce(&mut Tab)) -> bool {
        match self.tabs.get_mut(index) {
            Some(tab) => {
                apply(tab);
                true
            }
            None => false,
        }
    }

    fn requires_home_screen(&self) -> bool {
        self.active_tab().map_or(true, Tab::is_placeholder)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_index.and_then(|i| self.tabs.get(i))
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_tab().map(|t| t.id.as_str())
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    pub fn home_tab_index(&self) -> Option<usize> {
        self.tabs.iter().position(|t| t.kind == TabKind::Home)
    }

    pub fn home_screen_visible(&self) -> bool {
        self.home_screen_visible
    }

    pub fn snapshot(&self) -> TabsSnapshot {
        TabsSnapshot {
            tabs: self.tabs.clone(),
            active_index: self.active_index,
            active_id: self.active_id().map(str::to_string),
            home_screen_visible: self.home_screen_visible,
        }
    }
}

impl Default for TabCollection {
    fn default() -> Self {
        Self::new()
    }
}
