// Furniture Catalog - Core Library
// Exposes all modules for use in the CLI, the terminal browser, and tests

pub mod error;
pub mod config;
pub mod furniture;  // Records, kinds, kind-specific attributes
pub mod assets;     // PNG loading with placeholder fallback + generator
pub mod catalog;    // Style entries (the concrete factories)
pub mod directory;  // Factory Directory: style name → entry
pub mod prototypes; // Prototype Store: "<style>_<kind>" → prototype
pub mod showroom;   // Composition root

// Re-export commonly used types
pub use error::{CatalogError, Result};
pub use config::CatalogConfig;
pub use furniture::{Attributes, FurnitureRecord, Kind};
pub use assets::{asset_path, Bitmap, ImageLoader};
pub use catalog::{CatalogItem, StyleEntry};
pub use directory::FactoryDirectory;
pub use prototypes::{prototype_key, PrototypeStore};
pub use showroom::{Pattern, Showroom};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
