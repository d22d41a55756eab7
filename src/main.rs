// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Select2D - image points selector
//!
//! Opens an image, lets the user drag four points into place over it and
//! prints their pixel coordinates on stdout when the selection is confirmed.

mod app;
mod cli;
mod editor;
mod io;
mod models;
mod ui;
mod util;

use anyhow::{Context, Result};
use app::Select2dApp;
use clap::Parser;
use cli::CliArgs;
use editor::PointEditor;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = CliArgs::parse();

    // Refuse to start without a usable image
    let mut editor = PointEditor::new(args.editor_options());
    editor
        .load_image(&args.image)
        .context("Cannot start without an image")?;

    let format = args.format;

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title(args.title.as_str()),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "select2d",
        options,
        Box::new(move |_cc| Ok(Box::new(Select2dApp::new(editor, format)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
