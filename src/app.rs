// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! The app is a thin shell around [`PointEditor`]: it owns the image
//! texture, lays out the canvas and control bar, and prints the points when
//! the user confirms.

use crate::editor::{PointEditor, PointerHandler};
use crate::io::output::{self, OutputFormat};
use crate::ui::{canvas, toolbar};
use std::io::Write;
use std::path::PathBuf;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "tiff", "tif", "webp"];

/// Main application state.
pub struct Select2dApp {
    editor: PointEditor,

    /// Encoding of the confirmed points on stdout
    format: OutputFormat,

    /// Texture of the current image, with the editor generation it was built from
    image_texture: Option<(u64, egui::TextureHandle)>,
}

impl Select2dApp {
    /// Create the app around an editor that already holds an image.
    pub fn new(editor: PointEditor, format: OutputFormat) -> Self {
        Self {
            editor,
            format,
            image_texture: None,
        }
    }

    /// Upload the editor's image if it changed since the last frame.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        let generation = self.editor.image_generation();
        if matches!(self.image_texture, Some((built, _)) if built == generation) {
            return;
        }

        self.image_texture = self.editor.image().map(|image| {
            let size = [image.width as usize, image.height as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image.pixels);
            let texture =
                ctx.load_texture("loaded_image", color_image, egui::TextureOptions::LINEAR);
            (generation, texture)
        });
    }

    /// Replace the image, keeping the current one if loading fails.
    fn open_image(&mut self, path: PathBuf) {
        if let Err(e) = self.editor.load_image(&path) {
            log::error!("{:#}", e);
        }
    }

    fn confirmed_text(&self) -> anyhow::Result<String> {
        let points = self.editor.on_confirm()?;
        output::format_points(&points, self.format)
    }

    /// Print the points to stdout and close the window.
    fn confirm(&mut self, ctx: &egui::Context) {
        let text = match self.confirmed_text() {
            Ok(text) => text,
            Err(e) => {
                log::error!("{:#}", e);
                return;
            }
        };

        let mut stdout = std::io::stdout().lock();
        let written = stdout.write_all(text.as_bytes());
        if let Err(e) = written.and_then(|_| stdout.flush()) {
            log::error!("Failed to write points: {}", e);
            return;
        }

        log::info!("Confirmed selection");
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

impl eframe::App for Select2dApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let toolbar_action = egui::TopBottomPanel::bottom("controls")
            .show(ctx, |ui| {
                ui.add_space(5.0);
                let action = toolbar::show(ui, &mut self.editor);
                ui.add_space(5.0);
                action
            })
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::OpenImage => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Images", IMAGE_EXTENSIONS)
                    .pick_file()
                {
                    self.open_image(path);
                }
            }
            toolbar::ToolbarAction::Confirm => self.confirm(ctx),
            toolbar::ToolbarAction::None => {}
        }

        self.sync_texture(ctx);
        let texture = self.image_texture.as_ref().map(|(_, texture)| texture);
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| canvas::show(ui, &mut self.editor, texture));

        if self.editor.take_redraw_request() {
            ctx.request_repaint();
        }
    }
}
