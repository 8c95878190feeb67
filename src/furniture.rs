// 🪑 Furniture records - the values every factory and prototype produces
//
// One record type for all kinds. Kind-specific fields live in a tagged
// enum over the closed set {Chair, Sofa, Table}.

use crate::assets::Bitmap;
use crate::error::CatalogError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Chair,
    Sofa,
    Table,
}

impl Kind {
    /// All kinds, in display order
    pub const ALL: [Kind; 3] = [Kind::Chair, Kind::Sofa, Kind::Table];

    /// Lowercase key used in prototype keys and asset paths
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Chair => "chair",
            Kind::Sofa => "sofa",
            Kind::Table => "table",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Kind::Chair => "Chair",
            Kind::Sofa => "Sofa",
            Kind::Table => "Table",
        }
    }

    /// Next kind, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Kind::Chair => Kind::Sofa,
            Kind::Sofa => Kind::Table,
            Kind::Table => Kind::Chair,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Kind::Chair => Kind::Table,
            Kind::Sofa => Kind::Chair,
            Kind::Table => Kind::Sofa,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Kind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chair" => Ok(Kind::Chair),
            "sofa" => Ok(Kind::Sofa),
            "table" => Ok(Kind::Table),
            _ => Err(CatalogError::UnknownKind(s.to_string())),
        }
    }
}

// ============================================================================
// ATTRIBUTES
// ============================================================================

/// Kind-specific attribute pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Attributes {
    Chair { legs: u32, has_armrests: bool },
    Sofa { seats: u32, convertible: bool },
    Table { legs: u32, surface_area: f64 },
}

impl Attributes {
    pub fn kind(&self) -> Kind {
        match self {
            Attributes::Chair { .. } => Kind::Chair,
            Attributes::Sofa { .. } => Kind::Sofa,
            Attributes::Table { .. } => Kind::Table,
        }
    }

    /// Human-readable lines, e.g. "Legs: 4", "Armrests: No"
    pub fn detail_lines(&self) -> Vec<String> {
        match self {
            Attributes::Chair { legs, has_armrests } => vec![
                format!("Legs: {}", legs),
                format!("Armrests: {}", yes_no(*has_armrests)),
            ],
            Attributes::Sofa { seats, convertible } => vec![
                format!("Seats: {}", seats),
                format!("Convertible: {}", yes_no(*convertible)),
            ],
            Attributes::Table { legs, surface_area } => vec![
                format!("Legs: {}", legs),
                format!("Surface Area: {:.1} m²", surface_area),
            ],
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

// ============================================================================
// FURNITURE RECORD
// ============================================================================

/// A fully populated piece of furniture
///
/// Records are treated as immutable once built. The prototype store never
/// hands one out by reference; callers always get a `duplicate()`.
#[derive(Debug, PartialEq, Serialize)]
pub struct FurnitureRecord {
    /// Display name of the style that produced this record
    pub style: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: Bitmap,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl FurnitureRecord {
    pub fn kind(&self) -> Kind {
        self.attributes.kind()
    }

    /// Deep copy: every owned buffer is reallocated, nothing is shared
    /// with `self`.
    pub fn duplicate(&self) -> FurnitureRecord {
        FurnitureRecord {
            style: self.style.as_str().to_owned(),
            name: self.name.as_str().to_owned(),
            description: self.description.as_str().to_owned(),
            price: self.price,
            image: self.image.duplicate(),
            attributes: match self.attributes {
                Attributes::Chair { legs, has_armrests } => Attributes::Chair { legs, has_armrests },
                Attributes::Sofa { seats, convertible } => Attributes::Sofa { seats, convertible },
                Attributes::Table { legs, surface_area } => Attributes::Table { legs, surface_area },
            },
        }
    }

    /// "Price: $399.99"
    pub fn price_label(&self) -> String {
        format!("Price: ${:.2}", self.price)
    }

    /// Name, description, price and the kind-specific lines
    pub fn detail_lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.name.clone(),
            self.description.clone(),
            self.price_label(),
        ];
        lines.extend(self.attributes.detail_lines());
        lines
    }
}

// ============================================================================
// TESTS
// ============================================================================
