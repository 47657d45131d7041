//! App core for the showcase browser.
//!
//! Ties the settings engine, the tab catalog and the browser controller
//! together for the binaries and the stdio bridge.

use tracing::info;

use crate::services::browser_controller::{BrowserController, BrowserEvent, EventQueue};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::catalog::Catalog;
use crate::types::errors::SettingsError;

/// Central application struct holding the controller and its inputs.
pub struct App {
    pub controller: BrowserController,
    pub catalog: Catalog,
    pub settings_engine: SettingsEngine,
    events: EventQueue,
}

impl App {
    /// Loads settings from `settings_path` (or the platform default) and
    /// builds a controller in its startup state.
    pub fn new(settings_path: Option<String>, catalog: Catalog) -> Result<Self, SettingsError> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        let settings = settings_engine.load()?;

        let events = EventQueue::new();
        let controller =
            BrowserController::from_settings(&settings, &catalog).with_events(events.clone());

        info!(catalog = catalog.len(), "app initialized");
        Ok(Self {
            controller,
            catalog,
            settings_engine,
            events,
        })
    }

    /// Replaces the catalog. Open tabs are left as they are.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        info!(entries = catalog.len(), "catalog replaced");
        self.catalog = catalog;
    }

    /// Pushes the current placeholder settings into the running controller.
    ///
    /// Startup and window settings only take effect on the next launch.
    pub fn apply_settings(&mut self) {
        let placeholders = self.settings_engine.get_settings().placeholders.clone();
        self.controller.set_placeholders(placeholders);
    }

    /// Opens or focuses a catalog tab.
    pub fn open(&mut self, id: &str) {
        self.controller.open_or_focus(id, &self.catalog);
    }

    /// Notifications raised since the last call, oldest first.
    pub fn drain_events(&self) -> Vec<BrowserEvent> {
        self.events.drain()
    }
}
