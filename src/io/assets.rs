// SPDX-License-Identifier: BSD-3-Clause

//! Bundled thumbnail loading.
//!
//! Thumbnails are decoded once at startup into RGBA8 pixel buffers; the app
//! uploads them as egui textures on the first frame. Decoding happens before
//! the window opens so a broken bundle halts startup instead of rendering a
//! partial grid.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A decoded thumbnail ready for texture upload.
#[derive(Clone)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

// Manual Debug: the pixel buffer is noise in logs.
impl std::fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Thumbnail")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// Decode one thumbnail file to RGBA8.
pub fn load_thumbnail(path: &Path) -> Result<Thumbnail> {
    let img = image::open(path)
        .with_context(|| format!("failed to decode thumbnail {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    Ok(Thumbnail {
        width,
        height,
        pixels: img.into_raw(),
    })
}

/// The bundled assets directory: `assets/` next to the working directory
/// when present (installed layout), otherwise the source checkout's copy.
pub fn default_assets_dir() -> PathBuf {
    let local = PathBuf::from("assets");
    if local.is_dir() {
        local
    } else {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_png_to_rgba8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thumb.png");
        image::RgbaImage::from_pixel(4, 3, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let thumb = load_thumbnail(&path).unwrap();
        assert_eq!((thumb.width, thumb.height), (4, 3));
        assert_eq!(thumb.pixels.len(), 4 * 3 * 4);
        assert_eq!(&thumb.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_thumbnail(&dir.path().join("nope.png")).is_err());
    }
}
