// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Quadrilateral point editor.
//!
//! `PointEditor` owns the loaded image, the four control points and the drag
//! state. It knows nothing about the GUI toolkit: the host feeds it pointer
//! positions in canvas-local display coordinates through [`PointerHandler`]
//! and asks it for an [`Overlay`] whenever it draws.

pub mod snap;

use crate::io::media::{self, LoadedImage};
use crate::models::point::{Point, PointSet, POINT_COUNT};
use crate::util::geometry::ViewTransform;
use anyhow::Result;
use std::path::Path;

/// Half the side of a point marker, in display pixels.
pub const DRAG_HANDLE_SIZE: f64 = 10.0;

/// Squared image-space radius within which a hit counts as "near" a point.
pub const NEAR_DISTANCE_SQUARED: f64 = 25.0;

/// Pointer events dispatched by the host's event loop.
pub trait PointerHandler {
    /// Primary button pressed at a canvas-local position.
    fn on_press(&mut self, x: f64, y: f64);
    /// Pointer moved to a canvas-local position.
    fn on_move(&mut self, x: f64, y: f64);
    /// Primary button released.
    fn on_release(&mut self);
    /// User confirmed the selection; returns the final points.
    fn on_confirm(&self) -> Result<PointSet>;
}

/// Display options fixed at startup, plus the user-toggleable snap flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorOptions {
    /// Draw the outline through the points
    pub polyline: bool,
    /// Close the outline back to the first point
    pub closed: bool,
    /// Snap dragged points to peers and borders
    pub snap: bool,
}

/// Result of hit-testing a display position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the closest point
    pub index: usize,
    /// Whether that point lies within the near radius
    pub is_near: bool,
}

/// Outline path through the points, in display coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub points: [Point; POINT_COUNT],
    pub closed: bool,
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub transform: ViewTransform,
    /// Marker centres, in display coordinates
    pub markers: [Point; POINT_COUNT],
    pub outline: Option<Outline>,
}

/// An image together with the points placed on it.
#[derive(Debug, Clone)]
struct Selection {
    image: LoadedImage,
    points: PointSet,
}

/// Editor state for one window.
#[derive(Debug, Default)]
pub struct PointEditor {
    options: EditorOptions,
    selection: Option<Selection>,
    dragging: Option<usize>,
    /// Last reported canvas size; the transform is derived from it on use
    viewport: (f64, f64),
    redraw_requested: bool,
    /// Bumped whenever the image is replaced, so the host re-uploads it
    image_generation: u64,
}

impl PointEditor {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Load an image from disk.
    ///
    /// On failure the current image and points are left untouched.
    pub fn load_image(&mut self, path: &Path) -> Result<()> {
        let image = media::load_image(path)?;
        log::info!(
            "Loaded image: {} ({}x{})",
            path.display(),
            image.width,
            image.height
        );
        self.set_image(image);
        Ok(())
    }

    /// Replace the image and reset the points to its corners.
    pub fn set_image(&mut self, image: LoadedImage) {
        let (width, height) = image.size();
        self.selection = Some(Selection {
            image,
            points: PointSet::corners(width, height),
        });
        self.dragging = None;
        self.image_generation += 1;
        self.request_redraw();
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        self.selection.as_ref().map(|s| &s.image)
    }

    pub fn image_generation(&self) -> u64 {
        self.image_generation
    }

    pub fn points(&self) -> Option<&PointSet> {
        self.selection.as_ref().map(|s| &s.points)
    }

    pub fn dragging(&self) -> Option<usize> {
        self.dragging
    }

    pub fn snap_enabled(&self) -> bool {
        self.options.snap
    }

    pub fn set_snap_enabled(&mut self, snap: bool) {
        self.options.snap = snap;
    }

    /// Record the current canvas size in display units.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport = (width, height);
    }

    /// Image-to-display mapping for the current image and canvas size.
    pub fn view_transform(&self) -> Option<ViewTransform> {
        let (image_width, image_height) = self.selection.as_ref()?.image.size();
        let (viewport_width, viewport_height) = self.viewport;
        ViewTransform::fit(image_width, image_height, viewport_width, viewport_height)
    }

    /// Convert a display position to image space.
    pub fn display_to_image(&self, x: f64, y: f64) -> Option<Point> {
        Some(self.view_transform()?.display_to_image(Point::new(x, y)))
    }

    /// Find the point closest to a display position.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<Hit> {
        let target = self.display_to_image(x, y)?;
        let (index, distance) = self.selection.as_ref()?.points.closest(target);
        Some(Hit {
            index,
            is_near: distance < NEAR_DISTANCE_SQUARED,
        })
    }

    /// Grab the closest point and move it under the pointer.
    ///
    /// There is no miss: a click anywhere relocates the nearest point.
    pub fn begin_drag(&mut self, x: f64, y: f64) {
        let Some(hit) = self.hit_test(x, y) else {
            return;
        };
        let Some(target) = self.display_to_image(x, y) else {
            return;
        };
        if let Some(selection) = self.selection.as_mut() {
            selection.points[hit.index] = target;
            self.dragging = Some(hit.index);
            log::debug!("Started dragging point {} near={}", hit.index, hit.is_near);
            self.request_redraw();
        }
    }

    /// Move the dragged point, snapping it if enabled.
    pub fn update_drag(&mut self, x: f64, y: f64) {
        let Some(index) = self.dragging else {
            return;
        };
        let Some(raw) = self.display_to_image(x, y) else {
            return;
        };
        let snap = self.options.snap;
        if let Some(selection) = self.selection.as_mut() {
            let position = if snap {
                let (width, height) = selection.image.size();
                snap::snap_point(raw, index, &selection.points, width, height)
            } else {
                raw
            };
            selection.points[index] = position;
            self.request_redraw();
        }
    }

    pub fn end_drag(&mut self) {
        if let Some(index) = self.dragging.take() {
            log::debug!("Stopped dragging point {}", index);
        }
    }

    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Return and clear the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Markers and outline for the current frame.
    pub fn overlay(&self) -> Option<Overlay> {
        let transform = self.view_transform()?;
        let points = &self.selection.as_ref()?.points;
        let markers = points.as_array().map(|p| transform.image_to_display(p));
        let outline = self.options.polyline.then_some(Outline {
            points: markers,
            closed: self.options.closed,
        });
        Some(Overlay {
            transform,
            markers,
            outline,
        })
    }
}

impl PointerHandler for PointEditor {
    fn on_press(&mut self, x: f64, y: f64) {
        self.begin_drag(x, y);
    }

    fn on_move(&mut self, x: f64, y: f64) {
        self.update_drag(x, y);
    }

    fn on_release(&mut self) {
        self.end_drag();
    }

    fn on_confirm(&self) -> Result<PointSet> {
        self.points()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("No image loaded, nothing to confirm"))
    }
}
