use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::errors::CatalogError;
use crate::types::tab::Tab;

/// Ordered, read-only list of the tabs that can be opened in the browser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    tabs: Vec<Tab>,
}

impl Catalog {
    /// Builds a catalog, keeping the first entry for any repeated id.
    pub fn new(tabs: Vec<Tab>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(tabs.len());
        for tab in tabs {
            if seen.insert(tab.id.clone()) {
                kept.push(tab);
            } else {
                warn!(id = %tab.id, "dropping catalog entry with repeated id");
            }
        }
        Self { tabs: kept }
    }

    /// Parses a JSON array of tabs. Repeated ids are rejected.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let tabs: Vec<Tab> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        let mut seen = HashSet::new();
        for tab in &tabs {
            if !seen.insert(tab.id.as_str()) {
                return Err(CatalogError::DuplicateId(tab.id.clone()));
            }
        }
        Ok(Self { tabs })
    }

    /// Reads a catalog from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CatalogError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    pub fn find(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.id.as_str()).collect()
    }
}

impl FromIterator<Tab> for Catalog {
    fn from_iter<I: IntoIterator<Item = Tab>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
