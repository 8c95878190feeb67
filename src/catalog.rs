// 📚 Style Catalog - fixed values for each style/kind and the factories
// that turn them into records
//
// A StyleEntry is one concrete "furniture factory": it holds the catalog
// item for each kind and builds a fresh record (loading its image) on
// every call.

use crate::assets::ImageLoader;
use crate::error::{CatalogError, Result};
use crate::furniture::{Attributes, FurnitureRecord, Kind};
use rust_decimal::Decimal;
use std::sync::Arc;

// ============================================================================
// CATALOG ITEM
// ============================================================================

/// Fixed catalog values of one style/kind
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub attributes: Attributes,
}

impl CatalogItem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        attributes: Attributes,
    ) -> Self {
        CatalogItem {
            name: name.into(),
            description: description.into(),
            price,
            attributes,
        }
    }

    pub fn kind(&self) -> Kind {
        self.attributes.kind()
    }
}

// ============================================================================
// STYLE ENTRY
// ============================================================================

/// One style: display name, asset slug and an item for every kind
#[derive(Debug, Clone)]
pub struct StyleEntry {
    name: String,
    slug: String,
    chair: CatalogItem,
    sofa: CatalogItem,
    table: CatalogItem,
    images: Arc<ImageLoader>,
}

impl StyleEntry {
    /// Build an entry; each item must match the kind of its slot
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        chair: CatalogItem,
        sofa: CatalogItem,
        table: CatalogItem,
        images: Arc<ImageLoader>,
    ) -> Result<Self> {
        let name = name.into();

        for (slot, item) in [(Kind::Chair, &chair), (Kind::Sofa, &sofa), (Kind::Table, &table)] {
            if item.kind() != slot {
                return Err(CatalogError::KindMismatch {
                    style: name,
                    slot: slot.as_str(),
                    found: item.kind().as_str(),
                });
            }
        }

        Ok(StyleEntry {
            name,
            slug: slug.into(),
            chair,
            sofa,
            table,
            images,
        })
    }

    /// Display name, e.g. "Art Deco"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Asset directory name, e.g. "artdeco"
    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn item(&self, kind: Kind) -> &CatalogItem {
        match kind {
            Kind::Chair => &self.chair,
            Kind::Sofa => &self.sofa,
            Kind::Table => &self.table,
        }
    }

    /// Build a new record of the given kind
    pub fn create(&self, kind: Kind) -> FurnitureRecord {
        let item = self.item(kind);
        FurnitureRecord {
            style: self.name.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            image: self.images.load(&self.slug, kind),
            attributes: item.attributes.clone(),
        }
    }

    pub fn create_chair(&self) -> FurnitureRecord {
        self.create(Kind::Chair)
    }

    pub fn create_sofa(&self) -> FurnitureRecord {
        self.create(Kind::Sofa)
    }

    pub fn create_table(&self) -> FurnitureRecord {
        self.create(Kind::Table)
    }
}

// ============================================================================
// BUILT-IN STYLES
// ============================================================================

fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub fn modern(images: Arc<ImageLoader>) -> Result<StyleEntry> {
    StyleEntry::new(
        "Modern",
        "modern",
        CatalogItem::new(
            "Modern Chair",
            "Minimalist chair with clean lines and metal frame",
            price(39999),
            Attributes::Chair { legs: 4, has_armrests: false },
        ),
        CatalogItem::new(
            "Modern Sofa",
            "Sleek sofa with clean lines and minimalist design",
            price(129999),
            Attributes::Sofa { seats: 3, convertible: true },
        ),
        CatalogItem::new(
            "Modern Table",
            "Sleek table with glass top and metal frame",
            price(79999),
            Attributes::Table { legs: 4, surface_area: 2.4 },
        ),
        images,
    )
}

pub fn victorian(images: Arc<ImageLoader>) -> Result<StyleEntry> {
    StyleEntry::new(
        "Victorian",
        "victorian",
        CatalogItem::new(
            "Victorian Chair",
            "Ornate chair with curved wooden frame and plush upholstery",
            price(69999),
            Attributes::Chair { legs: 4, has_armrests: true },
        ),
        CatalogItem::new(
            "Victorian Sofa",
            "Elegant sofa with ornate carved wood and tufted upholstery",
            price(189999),
            Attributes::Sofa { seats: 3, convertible: false },
        ),
        CatalogItem::new(
            "Victorian Table",
            "Ornate table with carved wooden legs and marble top",
            price(129999),
            Attributes::Table { legs: 4, surface_area: 3.2 },
        ),
        images,
    )
}

pub fn art_deco(images: Arc<ImageLoader>) -> Result<StyleEntry> {
    StyleEntry::new(
        "Art Deco",
        "artdeco",
        CatalogItem::new(
            "Art Deco Chair",
            "Luxurious chair with geometric patterns and rich materials",
            price(89999),
            Attributes::Chair { legs: 4, has_armrests: true },
        ),
        CatalogItem::new(
            "Art Deco Sofa",
            "Glamorous sofa with geometric patterns and bold colors",
            price(219999),
            Attributes::Sofa { seats: 4, convertible: false },
        ),
        CatalogItem::new(
            "Art Deco Table",
            "Luxurious table with exotic woods and geometric inlays",
            price(169999),
            Attributes::Table { legs: 4, surface_area: 2.8 },
        ),
        images,
    )
}

/// The three built-in styles, in display order
pub fn default_entries(images: Arc<ImageLoader>) -> Vec<StyleEntry> {
    [modern, victorian, art_deco]
        .into_iter()
        .filter_map(|build| build(images.clone()).ok())
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
