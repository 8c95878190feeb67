// Catalog errors
//
// Lookups that can simply miss return Option. CatalogError covers the
// cases where a caller asked for something by name and needs a reason.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    #[error("Unknown furniture kind: {0} (expected chair, sofa or table)")]
    UnknownKind(String),

    #[error("No prototype registered under key: {0}")]
    UnknownPrototype(String),

    #[error("Style {style}: {slot} slot holds a {found} item")]
    KindMismatch {
        style: String,
        slot: &'static str,
        found: &'static str,
    },

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG decode error: {0}")]
    Png(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
