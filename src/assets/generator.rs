// Placeholder artwork generator
//
// Draws each kind from a few filled rectangles on a 200x200 canvas in the
// style's palette and writes it where ImageLoader expects it.

use crate::directory::FactoryDirectory;
use crate::error::{CatalogError, Result};
use crate::furniture::Kind;
use png::{BitDepth, ColorType, Encoder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CANVAS_SIZE: u32 = 200;

pub type Rgba = [u8; 4];

const BLACK: Rgba = [0, 0, 0, 255];

/// Background and furniture colors for a style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgba,
    pub furniture: Rgba,
}

impl Palette {
    /// Palette by style display name; unknown styles get white on gray
    pub fn for_style(style_name: &str) -> Self {
        match style_name.to_lowercase().as_str() {
            "modern" => Palette {
                background: [240, 240, 240, 255],
                furniture: [80, 80, 80, 255],
            },
            "victorian" => Palette {
                background: [255, 240, 220, 255],
                furniture: [120, 60, 20, 255],
            },
            "art deco" => Palette {
                background: [220, 220, 255, 255],
                furniture: [200, 180, 60, 255],
            },
            _ => Palette {
                background: [255, 255, 255, 255],
                furniture: [128, 128, 128, 255],
            },
        }
    }
}

// ============================================================================
// CANVAS
// ============================================================================

/// RGBA pixel buffer
#[derive(Debug, Clone)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, fill: Rgba) -> Self {
        let pixels = fill
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Canvas {
            width,
            height,
            pixels,
        }
    }

    /// Fill a rectangle, clipped to the canvas
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for row in y..y_end {
            for col in x..x_end {
                let offset = (row as usize * self.width as usize + col as usize) * 4;
                self.pixels[offset..offset + 4].copy_from_slice(&color);
            }
        }
    }

    /// Encode as an 8-bit RGBA PNG
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(ColorType::Rgba);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
        }
        Ok(buf)
    }

    /// Write to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
        }
        let bytes = self.encode_png()?;
        fs::write(path, bytes).map_err(|e| CatalogError::io(path, e))?;
        debug!("Image generated: {}", path.display());
        Ok(())
    }
}

// ============================================================================
// DRAWING
// ============================================================================

/// Draw one piece of furniture
pub fn render(palette: &Palette, kind: Kind) -> Canvas {
    let mut canvas = Canvas::new(CANVAS_SIZE, CANVAS_SIZE, palette.background);
    let body = palette.furniture;

    match kind {
        Kind::Chair => {
            canvas.fill_rect(50, 120, 100, 20, body); // seat
            canvas.fill_rect(50, 60, 100, 60, body); // back
            canvas.fill_rect(50, 140, 10, 40, BLACK);
            canvas.fill_rect(140, 140, 10, 40, BLACK);
        }
        Kind::Sofa => {
            canvas.fill_rect(20, 120, 160, 30, body); // base
            canvas.fill_rect(20, 70, 160, 50, body); // back
            canvas.fill_rect(20, 70, 20, 80, body); // arms
            canvas.fill_rect(160, 70, 20, 80, body);
            canvas.fill_rect(30, 150, 10, 20, BLACK);
            canvas.fill_rect(160, 150, 10, 20, BLACK);
        }
        Kind::Table => {
            canvas.fill_rect(30, 80, 140, 20, body); // top
            canvas.fill_rect(40, 100, 10, 60, BLACK);
            canvas.fill_rect(150, 100, 10, 60, BLACK);
        }
    }

    canvas
}

/// Generate every style/kind image under `root`, returning the written paths
pub fn generate_all(directory: &FactoryDirectory, root: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for entry in directory.entries() {
        let palette = Palette::for_style(entry.name());
        for kind in Kind::ALL {
            let path = super::asset_path(root, entry.slug(), kind);
            render(&palette, kind).save(&path)?;
            written.push(path);
        }
    }

    Ok(written)
}

// ============================================================================
// TESTS
// ============================================================================
