// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Point data structures.
//!
//! This module defines the image-space points the user drags around and
//! the fixed, ordered set of four of them that forms the quadrilateral.

use std::ops::{Index, IndexMut};

/// Number of control points in a selection.
pub const POINT_COUNT: usize = 4;

/// A 2D point in image pixel coordinates (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_squared(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// The ordered quadrilateral vertices.
///
/// Order is significant: it defines the outline edges. A fresh set starts
/// at the image corners going top-left, bottom-left, bottom-right, top-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSet([Point; POINT_COUNT]);

impl PointSet {
    pub fn new(points: [Point; POINT_COUNT]) -> Self {
        Self(points)
    }

    /// The four corners of a `width` x `height` image.
    pub fn corners(width: f64, height: f64) -> Self {
        Self::new([
            Point::new(0.0, 0.0),
            Point::new(0.0, height),
            Point::new(width, height),
            Point::new(width, 0.0),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.0.iter()
    }

    pub fn as_array(&self) -> &[Point; POINT_COUNT] {
        &self.0
    }

    /// Index of the point closest to `target`, with its squared distance.
    ///
    /// Ties go to the lowest index.
    pub fn closest(&self, target: Point) -> (usize, f64) {
        let mut best = (0, self.0[0].distance_squared(target));
        for (index, point) in self.0.iter().enumerate().skip(1) {
            let distance = point.distance_squared(target);
            if distance < best.1 {
                best = (index, distance);
            }
        }
        best
    }
}

impl Index<usize> for PointSet {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.0[index]
    }
}

impl IndexMut<usize> for PointSet {
    fn index_mut(&mut self, index: usize) -> &mut Point {
        &mut self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_order() {
        let points = PointSet::corners(800.0, 600.0);
        assert_eq!(
            points.as_array(),
            &[
                Point::new(0.0, 0.0),
                Point::new(0.0, 600.0),
                Point::new(800.0, 600.0),
                Point::new(800.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_closest_prefers_lowest_index_on_tie() {
        let points = PointSet::corners(800.0, 600.0);

        // Halfway along the top edge: equidistant from points 0 and 3
        let (index, distance) = points.closest(Point::new(400.0, 0.0));
        assert_eq!(index, 0);
        assert_eq!(distance, 160_000.0);

        // Dead centre: equidistant from all four
        let (index, _) = points.closest(Point::new(400.0, 300.0));
        assert_eq!(index, 0);
    }

    #[test]
    fn test_closest_picks_minimum() {
        let points = PointSet::corners(800.0, 600.0);
        let (index, distance) = points.closest(Point::new(790.0, 595.0));
        assert_eq!(index, 2);
        assert_eq!(distance, 125.0);
    }
}
