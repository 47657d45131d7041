use tracing::debug;

use crate::managers::tab_collection::TabCollection;

/// Applies an externally chosen active tab to a [`TabCollection`].
///
/// Strictly one-way: the host's choice wins when it names an open tab that
/// is not already active. Comparing ids first keeps a host that echoes the
/// controller's own notifications from looping.
#[derive(Debug, Default, Clone, Copy)]
pub struct ActiveTabSync;

impl ActiveTabSync {
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` when the active tab was changed.
    pub fn apply(&self, store: &mut TabCollection, desired: Option<&str>) -> bool {
        let Some(desired) = desired else {
            return false;
        };
        if store.active_id() == Some(desired) {
            return false;
        }
        let Some(index) = store.index_of(desired) else {
            debug!(id = desired, "desired active tab is not open");
            return false;
        };

        // set_active derives the home-screen flag from the tab's kind.
        store.set_active(index);
        true
    }
}
