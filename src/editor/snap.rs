// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Snapping of a dragged point to its peers and to the image borders.

use crate::models::point::{Point, PointSet};

/// Snap tolerance in image pixels.
pub const ALIGN_SNAP_SIZE: f64 = 5.0;

/// Adjust `raw`, the new position of `points[moving]`.
///
/// Each axis is handled on its own. Peers are checked first in index order
/// and every match overwrites the axis, so the last matching peer wins.
/// Borders come after that; the left/top border beats the right/bottom one.
pub fn snap_point(raw: Point, moving: usize, points: &PointSet, width: f64, height: f64) -> Point {
    let mut x = raw.x;
    let mut y = raw.y;

    for (_, peer) in points.iter().enumerate().filter(|(i, _)| *i != moving) {
        if (peer.x - x).abs() < ALIGN_SNAP_SIZE {
            x = peer.x;
        }
        if (peer.y - y).abs() < ALIGN_SNAP_SIZE {
            y = peer.y;
        }
    }

    Point {
        x: snap_to_border(x, width),
        y: snap_to_border(y, height),
    }
}

fn snap_to_border(value: f64, extent: f64) -> f64 {
    if value.abs() < ALIGN_SNAP_SIZE {
        0.0
    } else if (value - extent).abs() < ALIGN_SNAP_SIZE {
        extent
    } else {
        value
    }
}
