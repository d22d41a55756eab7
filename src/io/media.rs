// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image file loading.
//!
//! This module decodes raster image files and converts them to RGBA pixel
//! buffers suitable for uploading as an egui texture.

use anyhow::{bail, Context, Result};
use std::path::Path;

/// A decoded image, immutable once loaded.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    /// Unmultiplied RGBA8, row-major.
    pub pixels: Vec<u8>,
}

impl LoadedImage {
    /// Dimensions as floating point, for coordinate math.
    pub fn size(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }
}

/// Decode the image at `path`.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let context = || format!("Failed to load image {}", path.display());
    let decoded = image::open(path).with_context(context)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    if width == 0 || height == 0 {
        bail!("Image {} is empty ({}x{})", path.display(), width, height);
    }

    Ok(LoadedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.png");
        image::RgbImage::from_pixel(8, 6, image::Rgb([10, 20, 30]))
            .save(&path)
            .unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!((loaded.width, loaded.height), (8, 6));
        assert_eq!(loaded.size(), (8.0, 6.0));
        assert_eq!(loaded.pixels.len(), 8 * 6 * 4);
        assert_eq!(&loaded.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");

        let err = load_image(&path).unwrap_err();
        assert!(format!("{}", err).contains("missing.png"));
    }

    #[test]
    fn test_garbage_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(load_image(&path).is_err());
    }
}
