// 🧬 Prototype Store - one pre-built record per "<style>_<kind>"
//
// Populated exactly once, on the first read or an explicit initialize(),
// from the Factory Directory. Reads return a duplicate, never the stored
// prototype itself.

use crate::directory::FactoryDirectory;
use crate::furniture::{FurnitureRecord, Kind};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Key under which a style/kind prototype is stored, e.g. "art deco_table"
pub fn prototype_key(style_name: &str, kind: Kind) -> String {
    format!("{}_{}", style_name.trim().to_lowercase(), kind.as_str())
}

pub struct PrototypeStore {
    directory: Arc<FactoryDirectory>,
    prototypes: OnceCell<HashMap<String, FurnitureRecord>>,
}

impl PrototypeStore {
    /// Empty store; nothing is built until first use
    pub fn new(directory: Arc<FactoryDirectory>) -> Self {
        PrototypeStore {
            directory,
            prototypes: OnceCell::new(),
        }
    }

    /// Build every prototype. Later calls are no-ops.
    pub fn initialize(&self) {
        self.prototypes();
    }

    pub fn is_initialized(&self) -> bool {
        self.prototypes.get().is_some()
    }

    fn prototypes(&self) -> &HashMap<String, FurnitureRecord> {
        self.prototypes.get_or_init(|| {
            let mut prototypes = HashMap::new();
            for entry in self.directory.entries() {
                for kind in Kind::ALL {
                    prototypes.insert(prototype_key(entry.name(), kind), entry.create(kind));
                }
            }
            debug!("Prototype store initialized with {} prototypes", prototypes.len());
            prototypes
        })
    }

    /// Independent copy of the prototype under `key`, or None
    pub fn get_clone(&self, key: &str) -> Option<FurnitureRecord> {
        self.prototypes()
            .get(&key.to_lowercase())
            .map(FurnitureRecord::duplicate)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.prototypes().contains_key(&key.to_lowercase())
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.prototypes().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.prototypes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes().is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageLoader;
    use crate::furniture::Attributes;
    use rust_decimal::Decimal;

    fn store() -> PrototypeStore {
        let images = Arc::new(ImageLoader::new("/nonexistent/furniture-assets"));
        PrototypeStore::new(Arc::new(FactoryDirectory::with_defaults(images)))
    }

    #[test]
    fn test_prototype_key_format() {
        assert_eq!(prototype_key("Modern", Kind::Chair), "modern_chair");
        assert_eq!(prototype_key("Art Deco", Kind::Table), "art deco_table");
    }

    #[test]
    fn test_lazy_initialization() {
        let store = store();
        assert!(!store.is_initialized());

        let sofa = store.get_clone("victorian_sofa").unwrap();
        assert!(store.is_initialized());
        assert_eq!(sofa.name, "Victorian Sofa");
        assert_eq!(sofa.price, Decimal::new(189999, 2));
        assert_eq!(sofa.attributes, Attributes::Sofa { seats: 3, convertible: false });
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let store = store();
        store.initialize();
        store.initialize();

        assert_eq!(store.len(), 9);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_concurrent_first_access() {
        let store = store();

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    assert!(store.get_clone("modern_table").is_some());
                });
            }
        });

        assert_eq!(store.len(), 9);
    }

    #[test]
    fn test_clone_matches_factory_output() {
        let images = Arc::new(ImageLoader::new("/nonexistent/furniture-assets"));
        let directory = Arc::new(FactoryDirectory::with_defaults(images));
        let store = PrototypeStore::new(directory.clone());

        for entry in directory.entries() {
            for kind in Kind::ALL {
                let key = prototype_key(entry.name(), kind);
                assert_eq!(store.get_clone(&key).unwrap(), entry.create(kind));
            }
        }
    }

    #[test]
    fn test_clones_are_independent() {
        let store = store();

        let mut first = store.get_clone("modern_chair").unwrap();
        first.name = "Scratched Chair".to_string();
        first.price = Decimal::ZERO;
        first.attributes = Attributes::Chair { legs: 3, has_armrests: true };

        let second = store.get_clone("modern_chair").unwrap();
        assert_eq!(second.name, "Modern Chair");
        assert_eq!(second.price, Decimal::new(39999, 2));
        assert_eq!(second.attributes, Attributes::Chair { legs: 4, has_armrests: false });
    }

    #[test]
    fn test_contains_and_normalization() {
        let store = store();

        assert!(store.contains("modern_chair"));
        assert!(store.contains("Modern_Chair"));
        assert!(store.contains("art deco_sofa"));
        assert!(store.get_clone("ART DECO_SOFA").is_some());

        assert!(!store.contains("modern"));
        assert!(!store.contains("modern_bed"));
        assert!(!store.contains("baroque_chair"));
        assert!(!store.contains("chair_modern"));
        assert!(!store.contains("artdeco_sofa"));
        assert!(!store.contains(""));
        assert!(store.get_clone("gothic_table").is_none());
    }

    #[test]
    fn test_keys_cover_every_combination() {
        let keys = store().keys();
        assert_eq!(keys.len(), 9);
        assert_eq!(keys[0], "art deco_chair");
        assert!(keys.contains(&"victorian_table".to_string()));
    }
}
