// 🏭 Factory Directory - style name → StyleEntry
//
// Built once by the composition root (Showroom) and lent out by reference.
// Keys are lowercase display names, so lookups are case-insensitive.

use crate::assets::ImageLoader;
use crate::catalog::{self, StyleEntry};
use crate::error::{CatalogError, Result};
use crate::furniture::{FurnitureRecord, Kind};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

pub struct FactoryDirectory {
    /// Entries keyed by lowercase style name
    entries: HashMap<String, StyleEntry>,

    /// Lowercase keys in registration order
    order: Vec<String>,
}

impl FactoryDirectory {
    /// Empty directory
    pub fn new() -> Self {
        FactoryDirectory {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Directory holding Modern, Victorian and Art Deco
    pub fn with_defaults(images: Arc<ImageLoader>) -> Self {
        let mut directory = FactoryDirectory::new();
        for entry in catalog::default_entries(images) {
            directory.register(entry);
        }
        directory
    }

    /// Register a style, replacing any entry with the same (case-insensitive) name
    pub fn register(&mut self, entry: StyleEntry) -> Option<StyleEntry> {
        let key = entry.name().to_lowercase();
        let previous = self.entries.insert(key.clone(), entry);
        if previous.is_none() {
            self.order.push(key);
        }
        previous
    }

    /// Find a style by name (case-insensitive)
    pub fn lookup(&self, style_name: &str) -> Option<&StyleEntry> {
        self.entries.get(&style_name.trim().to_lowercase())
    }

    /// Copy of the whole table, keyed by lowercase style name
    pub fn list_all(&self) -> BTreeMap<String, StyleEntry> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.clone()))
            .collect()
    }

    /// Entries in registration order
    pub fn entries(&self) -> impl Iterator<Item = &StyleEntry> {
        self.order.iter().filter_map(|key| self.entries.get(key))
    }

    /// Display names in registration order
    pub fn style_names(&self) -> Vec<String> {
        self.entries().map(|entry| entry.name().to_string()).collect()
    }

    /// Build a new record through the style's factory
    pub fn create(&self, style_name: &str, kind: Kind) -> Result<FurnitureRecord> {
        self.lookup(style_name)
            .map(|entry| entry.create(kind))
            .ok_or_else(|| CatalogError::UnknownStyle(style_name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FactoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
