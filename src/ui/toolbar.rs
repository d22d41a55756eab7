// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Bottom control bar.
//!
//! Holds the snapping toggle, a button to open another image and the
//! Confirm button.

use crate::editor::PointEditor;

/// Result of control bar interaction.
pub enum ToolbarAction {
    None,
    OpenImage,
    Confirm,
}

/// Display the control bar.
pub fn show(ui: &mut egui::Ui, editor: &mut PointEditor) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let mut snap = editor.snap_enabled();
        if ui.checkbox(&mut snap, "Snapping").changed() {
            editor.set_snap_enabled(snap);
            log::info!("Snapping {}", if snap { "enabled" } else { "disabled" });
        }

        ui.separator();

        if ui.button("Open Image...").clicked() {
            action = ToolbarAction::OpenImage;
        }

        if let Some(index) = editor.dragging() {
            ui.separator();
            let status = format!("Moving point {}", index + 1);
            ui.label(egui::RichText::new(status).italics().weak());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let enabled = editor.points().is_some();
            let confirm = ui.add_enabled(enabled, egui::Button::new("Confirm"));
            if confirm.clicked() {
                action = ToolbarAction::Confirm;
            }
        });
    });

    action
}
