// 🖼️ Furniture bitmaps - PNG assets under <asset-root>/<style-slug>/<kind>.png
//
// Loading is best effort: a missing or unreadable file never fails record
// construction, it yields a placeholder bitmap and a warning.

pub mod generator;

use crate::error::{CatalogError, Result};
use crate::furniture::Kind;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::warn;

pub use generator::{generate_all, render, Palette};

// ============================================================================
// BITMAP
// ============================================================================

/// Decoded image, 8 bits per channel
#[derive(Debug, PartialEq, Serialize)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    /// 1 (gray), 2 (gray + alpha), 3 (RGB) or 4 (RGBA)
    pub channels: u8,
    #[serde(skip_serializing)]
    pub pixels: Vec<u8>,
    /// Set when the asset could not be loaded
    pub placeholder: bool,
}

impl Bitmap {
    /// Empty 0x0 image used when an asset is unavailable
    pub fn placeholder() -> Self {
        Bitmap {
            width: 0,
            height: 0,
            channels: 4,
            pixels: Vec::new(),
            placeholder: true,
        }
    }

    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Bitmap {
            width,
            height,
            channels: 4,
            pixels,
            placeholder: false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Deep copy with a freshly allocated pixel buffer
    pub fn duplicate(&self) -> Bitmap {
        Bitmap {
            width: self.width,
            height: self.height,
            channels: self.channels,
            pixels: self.pixels.as_slice().to_vec(),
            placeholder: self.placeholder,
        }
    }

    /// RGB of the pixel at (x, y); None outside the image
    pub fn rgb_at(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let channels = self.channels as usize;
        let offset = (y as usize * self.width as usize + x as usize) * channels;
        let px = self.pixels.get(offset..offset + channels)?;
        match channels {
            1 | 2 => Some((px[0], px[0], px[0])),
            _ => Some((px[0], px[1], px[2])),
        }
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Conventional location of an asset
pub fn asset_path(root: &Path, slug: &str, kind: Kind) -> PathBuf {
    root.join(slug).join(format!("{}.png", kind.as_str()))
}

/// Decode a PNG file, expanding palettes and low bit depths to 8-bit samples
pub fn decode_png(path: &Path) -> Result<Bitmap> {
    let file = File::open(path).map_err(|e| CatalogError::io(path, e))?;

    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut pixels = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut pixels)?;
    pixels.truncate(info.buffer_size());

    Ok(Bitmap {
        width: info.width,
        height: info.height,
        channels: info.color_type.samples() as u8,
        pixels,
        placeholder: false,
    })
}

/// Loads furniture bitmaps from an asset root
#[derive(Debug, Clone)]
pub struct ImageLoader {
    root: PathBuf,
}

impl ImageLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ImageLoader { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, slug: &str, kind: Kind) -> PathBuf {
        asset_path(&self.root, slug, kind)
    }

    /// Load the bitmap for a style/kind, falling back to a placeholder
    pub fn load(&self, slug: &str, kind: Kind) -> Bitmap {
        let path = self.path_for(slug, kind);
        match decode_png(&path) {
            Ok(bitmap) => bitmap,
            Err(e) => {
                warn!("Failed to load {} image for {}: {}", kind, slug, e);
                Bitmap::placeholder()
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_asset_path_layout() {
        let path = asset_path(Path::new("resources/images"), "artdeco", Kind::Table);
        assert_eq!(path, PathBuf::from("resources/images/artdeco/table.png"));
    }

    #[test]
    fn test_missing_asset_falls_back_to_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ImageLoader::new(dir.path());

        let bitmap = loader.load("modern", Kind::Chair);
        assert!(bitmap.is_placeholder());
        assert_eq!(bitmap.width, 0);
        assert!(bitmap.pixels.is_empty());
    }

    #[test]
    fn test_corrupt_asset_falls_back_to_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("modern")).unwrap();
        fs::write(dir.path().join("modern/sofa.png"), b"not a png").unwrap();

        let loader = ImageLoader::new(dir.path());
        assert!(loader.load("modern", Kind::Sofa).is_placeholder());
        assert!(matches!(
            decode_png(&dir.path().join("modern/sofa.png")),
            Err(CatalogError::Png(_))
        ));
    }

    #[test]
    fn test_decode_generated_png() {
        let dir = tempfile::tempdir().unwrap();
        let canvas = render(&Palette::for_style("Victorian"), Kind::Chair);
        let path = dir.path().join("victorian/chair.png");
        canvas.save(&path).unwrap();

        let bitmap = ImageLoader::new(dir.path()).load("victorian", Kind::Chair);
        assert!(!bitmap.is_placeholder());
        assert_eq!((bitmap.width, bitmap.height), (200, 200));
        assert_eq!(bitmap.channels, 4);
        assert_eq!(bitmap.rgb_at(0, 0), Some((255, 240, 220)));
        assert_eq!(bitmap.rgb_at(100, 130), Some((120, 60, 20)));
        assert_eq!(bitmap.rgb_at(200, 0), None);
    }

    #[test]
    fn test_bitmap_duplicate_owns_pixels() {
        let original = Bitmap::from_rgba(1, 1, vec![10, 20, 30, 255]);
        let mut copy = original.duplicate();
        copy.pixels[1] = 0;

        assert_eq!(original.rgb_at(0, 0), Some((10, 20, 30)));
        assert_eq!(copy.rgb_at(0, 0), Some((10, 0, 30)));
    }
}
