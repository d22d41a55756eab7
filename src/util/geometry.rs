// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the mapping between image pixel coordinates and
//! display coordinates of the canvas the image is drawn into.

use crate::models::point::Point;

/// Uniform scale plus translation that fits an image inside a viewport.
///
/// The image keeps its aspect ratio and is centred along the axis that has
/// space left over. Never store one of these across frames: the viewport can
/// be resized at any time, so build a fresh one for every conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl ViewTransform {
    /// Fit an `image_width` x `image_height` image into the viewport.
    ///
    /// Returns `None` when either size is degenerate (zero, negative or NaN).
    pub fn fit(
        image_width: f64,
        image_height: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Option<Self> {
        let sizes = [image_width, image_height, viewport_width, viewport_height];
        if !sizes.iter().all(|v| *v > 0.0 && v.is_finite()) {
            return None;
        }

        let image_aspect = image_width / image_height;
        let viewport_aspect = viewport_width / viewport_height;

        let scale = if image_aspect > viewport_aspect {
            // Image is wider - fit to width
            viewport_width / image_width
        } else {
            // Image is taller - fit to height
            viewport_height / image_height
        };

        Some(Self {
            scale,
            translate_x: (viewport_width - image_width * scale) / 2.0,
            translate_y: (viewport_height - image_height * scale) / 2.0,
        })
    }

    /// Convert an image-space point to display coordinates.
    pub fn image_to_display(&self, point: Point) -> Point {
        Point {
            x: point.x * self.scale + self.translate_x,
            y: point.y * self.scale + self.translate_y,
        }
    }

    /// Convert display coordinates back to image space.
    pub fn display_to_image(&self, point: Point) -> Point {
        Point {
            x: (point.x - self.translate_x) / self.scale,
            y: (point.y - self.translate_y) / self.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point, b: Point) {
        let tolerance = 1e-9 * (1.0 + b.x.abs().max(b.y.abs()));
        assert!(
            (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_wide_image_fits_width() {
        let t = ViewTransform::fit(1600.0, 600.0, 800.0, 600.0).unwrap();
        assert_eq!(t.scale, 0.5);
        assert_eq!(t.translate_x, 0.0);
        assert_eq!(t.translate_y, 150.0);
    }

    #[test]
    fn test_tall_image_fits_height() {
        let t = ViewTransform::fit(300.0, 1200.0, 800.0, 600.0).unwrap();
        assert_eq!(t.scale, 0.5);
        assert_eq!(t.translate_x, 325.0);
        assert_eq!(t.translate_y, 0.0);
    }

    #[test]
    fn test_same_aspect_is_identity() {
        let t = ViewTransform::fit(800.0, 600.0, 800.0, 600.0).unwrap();
        let p = Point::new(123.5, 456.25);
        assert_eq!(t.image_to_display(p), p);
        assert_eq!(t.display_to_image(p), p);
    }

    #[test]
    fn test_degenerate_sizes_rejected() {
        assert!(ViewTransform::fit(0.0, 600.0, 800.0, 600.0).is_none());
        assert!(ViewTransform::fit(800.0, 600.0, 800.0, 0.0).is_none());
        assert!(ViewTransform::fit(800.0, 600.0, -1.0, 600.0).is_none());
        assert!(ViewTransform::fit(800.0, f64::NAN, 800.0, 600.0).is_none());
    }

    #[test]
    fn test_display_image_roundtrip() {
        let images = [(800.0, 600.0), (1.0, 1.0), (4000.0, 3.0), (7.0, 5000.0)];
        let viewports = [(800.0, 600.0), (13.0, 977.0), (1920.0, 1080.0), (0.5, 0.25)];
        let points = [
            Point::new(0.0, 0.0),
            Point::new(-35.5, 12.0),
            Point::new(799.9, 600.1),
            Point::new(1e5, -1e5),
        ];

        for (iw, ih) in images {
            for (vw, vh) in viewports {
                let t = ViewTransform::fit(iw, ih, vw, vh).unwrap();
                for p in points {
                    assert_close(t.display_to_image(t.image_to_display(p)), p);
                    assert_close(t.image_to_display(t.display_to_image(p)), p);
                }
            }
        }
    }
}
