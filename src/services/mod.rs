// Showcase browser services
// Services compose managers into the browser controller and handle settings.

pub mod browser_controller;
pub mod settings_engine;
