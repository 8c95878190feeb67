// 🛋️ Showroom - composition root
//
// Owns the image loader, the Factory Directory and the Prototype Store.
// Front ends hold one Showroom and go through it for every record.

use crate::assets::ImageLoader;
use crate::config::CatalogConfig;
use crate::directory::FactoryDirectory;
use crate::error::{CatalogError, Result};
use crate::furniture::{FurnitureRecord, Kind};
use crate::prototypes::{prototype_key, PrototypeStore};
use std::sync::Arc;

/// Which path produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    AbstractFactory,
    Prototype,
}

impl Pattern {
    pub fn label(&self) -> &'static str {
        match self {
            Pattern::AbstractFactory => "Abstract Factory Pattern",
            Pattern::Prototype => "Prototype Pattern",
        }
    }
}

pub struct Showroom {
    config: CatalogConfig,
    images: Arc<ImageLoader>,
    directory: Arc<FactoryDirectory>,
    prototypes: PrototypeStore,
}

impl Showroom {
    /// Wire everything from config; fails if the default style is unknown
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let images = Arc::new(ImageLoader::new(config.asset_root.clone()));
        let directory = Arc::new(FactoryDirectory::with_defaults(images.clone()));

        if directory.lookup(&config.default_style).is_none() {
            return Err(CatalogError::UnknownStyle(config.default_style.clone()));
        }

        let prototypes = PrototypeStore::new(directory.clone());

        Ok(Showroom {
            config,
            images,
            directory,
            prototypes,
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn images(&self) -> &ImageLoader {
        &self.images
    }

    pub fn directory(&self) -> &FactoryDirectory {
        &self.directory
    }

    pub fn prototypes(&self) -> &PrototypeStore {
        &self.prototypes
    }

    /// Abstract Factory path: a freshly built record
    pub fn build(&self, style_name: &str, kind: Kind) -> Result<FurnitureRecord> {
        self.directory.create(style_name, kind)
    }

    /// Prototype path: a duplicate of the stored prototype
    pub fn clone_prototype(&self, style_name: &str, kind: Kind) -> Result<FurnitureRecord> {
        let key = prototype_key(style_name, kind);
        self.prototypes
            .get_clone(&key)
            .ok_or(CatalogError::UnknownPrototype(key))
    }

    /// Clone by raw key, e.g. "victorian_sofa"
    pub fn clone_by_key(&self, key: &str) -> Result<FurnitureRecord> {
        self.prototypes
            .get_clone(key)
            .ok_or_else(|| CatalogError::UnknownPrototype(key.to_string()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
