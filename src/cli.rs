// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command line arguments.

use crate::editor::EditorOptions;
use crate::io::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Image points selector
///
/// Examples:
///   select2d photo.jpg                  # Pick four corners, print them as TSV
///   select2d -lcs photo.jpg             # Closed outline, snapping on
///   select2d -f json -t "Page" scan.png # Custom title, JSON output
#[derive(Parser, Debug, Clone)]
#[clap(name = "select2d", version, about = "Image points selector")]
pub struct CliArgs {
    /// Image file path
    pub image: PathBuf,

    /// Title to show on the window
    #[clap(long, short = 't', default_value = "Select a quadrilateral")]
    pub title: String,

    /// Show the outline of the quadrilateral
    #[clap(long, short = 'l')]
    pub polyline: bool,

    /// Close the drawn outline (only meaningful with --polyline)
    #[clap(long, short = 'c')]
    pub closed: bool,

    /// Activate snapping on points and image borders
    #[clap(long, short = 's')]
    pub snap: bool,

    /// Output encoding for the confirmed points
    #[clap(long, short = 'f', value_enum, default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,
}

impl CliArgs {
    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            polyline: self.polyline,
            closed: self.closed,
            snap: self.snap,
        }
    }
}
