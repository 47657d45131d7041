use thiserror::Error;

// === SettingsError ===

/// Errors related to loading, saving, or editing settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// File system error while reading or writing the settings file.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// The settings file could not be parsed or written as JSON.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The dotted key does not name a known setting.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The value does not fit the setting's type.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === CatalogError ===

/// Errors related to reading the tab catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog I/O error: {0}")]
    Io(String),
    #[error("Catalog parse error: {0}")]
    Parse(String),
    /// Two catalog entries share an id.
    #[error("Duplicate catalog id: {0}")]
    DuplicateId(String),
}
