// Showcase browser shared type definitions

pub mod catalog;
pub mod chrome;
pub mod errors;
pub mod settings;
pub mod tab;
