// End-to-end checks through the public API: directory, prototypes and
// assets wired by a Showroom over a generated asset tree.

use furniture_catalog::assets::generate_all;
use furniture_catalog::{
    prototype_key, Attributes, CatalogConfig, FactoryDirectory, ImageLoader, Kind,
    PrototypeStore, Showroom,
};
use rust_decimal::Decimal;
use std::sync::Arc;

fn showroom_with_assets() -> (tempfile::TempDir, Showroom) {
    let dir = tempfile::tempdir().unwrap();
    let loader = Arc::new(ImageLoader::new(dir.path()));
    generate_all(&FactoryDirectory::with_defaults(loader), dir.path()).unwrap();

    let config = CatalogConfig::default().with_asset_root(dir.path());
    (dir, Showroom::new(config).unwrap())
}

#[test]
fn test_catalog_values_for_every_style() {
    let (_dir, showroom) = showroom_with_assets();
    let directory = showroom.directory();

    let expected = [
        ("Modern", Kind::Chair, 39999, Attributes::Chair { legs: 4, has_armrests: false }),
        ("Modern", Kind::Sofa, 129999, Attributes::Sofa { seats: 3, convertible: true }),
        ("Modern", Kind::Table, 79999, Attributes::Table { legs: 4, surface_area: 2.4 }),
        ("Victorian", Kind::Chair, 69999, Attributes::Chair { legs: 4, has_armrests: true }),
        ("Victorian", Kind::Sofa, 189999, Attributes::Sofa { seats: 3, convertible: false }),
        ("Victorian", Kind::Table, 129999, Attributes::Table { legs: 4, surface_area: 3.2 }),
        ("Art Deco", Kind::Chair, 89999, Attributes::Chair { legs: 4, has_armrests: true }),
        ("Art Deco", Kind::Sofa, 219999, Attributes::Sofa { seats: 4, convertible: false }),
        ("Art Deco", Kind::Table, 169999, Attributes::Table { legs: 4, surface_area: 2.8 }),
    ];

    for (style, kind, cents, attributes) in expected {
        let record = directory.lookup(style).unwrap().create(kind);
        assert_eq!(record.name, format!("{} {}", style, kind));
        assert_eq!(record.price, Decimal::new(cents, 2));
        assert_eq!(record.attributes, attributes);
        assert!(!record.image.is_placeholder(), "{} {} image missing", style, kind);
        assert_eq!((record.image.width, record.image.height), (200, 200));
    }
}

#[test]
fn test_clone_equals_factory_output_but_is_independent() {
    let (_dir, showroom) = showroom_with_assets();

    for style in showroom.directory().style_names() {
        for kind in Kind::ALL {
            let key = prototype_key(&style, kind);
            let built = showroom.build(&style, kind).unwrap();

            let mut first = showroom.prototypes().get_clone(&key).unwrap();
            assert_eq!(first, built);

            first.description.clear();
            first.image.pixels.iter_mut().for_each(|p| *p = 0);

            let second = showroom.prototypes().get_clone(&key).unwrap();
            assert_eq!(second, built);
        }
    }
}

#[test]
fn test_victorian_sofa_clone() {
    let (_dir, showroom) = showroom_with_assets();

    let sofa = showroom.prototypes().get_clone("victorian_sofa").unwrap();
    assert_eq!(sofa.name, "Victorian Sofa");
    assert_eq!(sofa.price.to_string(), "1899.99");
    assert_eq!(sofa.attributes, Attributes::Sofa { seats: 3, convertible: false });
}

#[test]
fn test_store_over_empty_asset_root_still_populates() {
    let dir = tempfile::tempdir().unwrap();
    let directory = Arc::new(FactoryDirectory::with_defaults(Arc::new(ImageLoader::new(
        dir.path(),
    ))));
    let store = PrototypeStore::new(directory);

    assert!(!store.is_initialized());
    let table = store.get_clone("art deco_table").unwrap();
    assert!(table.image.is_placeholder());
    assert_eq!(table.attributes, Attributes::Table { legs: 4, surface_area: 2.8 });
    assert_eq!(store.len(), 9);
}

#[test]
fn test_contains_rejects_malformed_keys() {
    let (_dir, showroom) = showroom_with_assets();
    let store = showroom.prototypes();

    for key in ["modern_chair", "victorian_table", "art deco_sofa"] {
        assert!(store.contains(key), "{}", key);
    }
    for key in ["modern", "_chair", "modern_", "modern-chair", "modern_lamp", "rococo_sofa"] {
        assert!(!store.contains(key), "{}", key);
    }
}
