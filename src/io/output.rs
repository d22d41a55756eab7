// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Confirmation output.
//!
//! This module renders the confirmed points as whole pixel coordinates,
//! either as tab separated lines or as a JSON array.

use crate::models::point::PointSet;
use anyhow::Result;
use serde::Serialize;

/// Encoding used when printing the confirmed points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `x<TAB>y` line per point
    #[default]
    Tsv,
    /// A JSON array of `{"x": .., "y": ..}` objects
    Json,
}

/// A point rounded to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PixelCoord {
    pub x: i64,
    pub y: i64,
}

/// Round half to even, so 2.5 becomes 2 and 3.5 becomes 4.
fn round_coordinate(value: f64) -> i64 {
    // `as` saturates, and -0.0 becomes a plain 0
    value.round_ties_even() as i64
}

/// Round every point of the set, keeping its order.
pub fn pixel_coords(points: &PointSet) -> Vec<PixelCoord> {
    points
        .iter()
        .map(|p| PixelCoord {
            x: round_coordinate(p.x),
            y: round_coordinate(p.y),
        })
        .collect()
}

/// Format the points for stdout. The result always ends with a newline.
pub fn format_points(points: &PointSet, format: OutputFormat) -> Result<String> {
    let coords = pixel_coords(points);
    match format {
        OutputFormat::Tsv => Ok(coords
            .iter()
            .map(|c| format!("{}\t{}\n", c.x, c.y))
            .collect()),
        OutputFormat::Json => {
            let json = serde_json::to_string(&coords)?;
            Ok(json + "\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::point::Point;

    fn sample() -> PointSet {
        PointSet::new([
            Point::new(1.4, 2.6),
            Point::new(0.0, 600.0),
            Point::new(800.0, 600.0),
            Point::new(800.0, 0.0),
        ])
    }

    #[test]
    fn test_tsv_output() {
        let out = format_points(&sample(), OutputFormat::Tsv).unwrap();
        assert_eq!(out, "1\t3\n0\t600\n800\t600\n800\t0\n");
    }

    #[test]
    fn test_json_output() {
        let out = format_points(&sample(), OutputFormat::Json).unwrap();
        assert_eq!(
            out,
            "[{\"x\":1,\"y\":3},{\"x\":0,\"y\":600},{\"x\":800,\"y\":600},{\"x\":800,\"y\":0}]\n"
        );
    }

    #[test]
    fn test_rounds_half_to_even() {
        assert_eq!(round_coordinate(2.5), 2);
        assert_eq!(round_coordinate(3.5), 4);
        assert_eq!(round_coordinate(-2.5), -2);
        assert_eq!(round_coordinate(2.500001), 3);
        assert_eq!(round_coordinate(-0.4), 0);
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        let points = PointSet::new([
            Point::new(-0.4, -0.2),
            Point::new(-12.6, 5.0),
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
        ]);
        let out = format_points(&points, OutputFormat::Tsv).unwrap();
        assert_eq!(out, "0\t0\n-13\t5\n0\t0\n0\t0\n");
    }
}
