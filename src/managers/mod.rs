// Showcase browser state managers
// Managers own state transitions: the tab collection, placeholder creation, window chrome, host sync.

pub mod active_tab_sync;
pub mod tab_collection;
pub mod tab_factory;
pub mod window_chrome;
