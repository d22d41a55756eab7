// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for the image and the quadrilateral points.
//!
//! This module paints the image scaled to fit the available space, draws a
//! marker for each point plus the optional outline, and forwards pointer
//! events to the editor in canvas-local coordinates.

use crate::editor::{Overlay, PointEditor, PointerHandler, DRAG_HANDLE_SIZE};
use crate::models::point::Point;

const MARKER_COLOR: egui::Color32 = egui::Color32::BLACK;

/// Display the canvas and route mouse interactions to the editor.
pub fn show(ui: &mut egui::Ui, editor: &mut PointEditor, texture: Option<&egui::TextureHandle>) {
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();
    let (response, painter) = ui.allocate_painter(available_size, egui::Sense::click_and_drag());
    let canvas_rect = response.rect;

    // The editor derives its transform from this on every conversion
    editor.set_viewport_size(canvas_rect.width() as f64, canvas_rect.height() as f64);

    let to_local = |pos: egui::Pos2| {
        let local = pos - canvas_rect.min;
        (local.x as f64, local.y as f64)
    };

    let (pressed, released, pointer_pos, moved) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.interact_pos(),
            i.pointer.delta() != egui::Vec2::ZERO,
        )
    });

    if pressed && response.hovered() {
        if let Some(pos) = pointer_pos {
            let (x, y) = to_local(pos);
            editor.on_press(x, y);
        }
    } else if moved && editor.dragging().is_some() {
        // Press frames skip this: the press already placed the point
        if let Some(pos) = pointer_pos {
            let (x, y) = to_local(pos);
            editor.on_move(x, y);
        }
    }
    if released {
        editor.on_release();
    }

    painter.rect_filled(canvas_rect, 0.0, ui.visuals().extreme_bg_color);

    let Some(overlay) = editor.overlay() else {
        return;
    };
    let to_screen = |p: Point| canvas_rect.min + egui::vec2(p.x as f32, p.y as f32);

    if let (Some(texture), Some(image)) = (texture, editor.image()) {
        let (width, height) = image.size();
        let transform = overlay.transform;
        let top_left = transform.image_to_display(Point::new(0.0, 0.0));
        let bottom_right = transform.image_to_display(Point::new(width, height));
        let image_rect = egui::Rect::from_two_pos(to_screen(top_left), to_screen(bottom_right));
        painter.image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }

    draw_overlay(&painter, &overlay, to_screen);
}

/// Draw point markers and the outline, if any.
fn draw_overlay(
    painter: &egui::Painter,
    overlay: &Overlay,
    to_screen: impl Fn(Point) -> egui::Pos2,
) {
    let stroke = egui::Stroke::new(1.0, MARKER_COLOR);
    let half = DRAG_HANDLE_SIZE as f32;
    let arm_x = egui::vec2(half, 0.0);
    let arm_y = egui::vec2(0.0, half);

    // Square with a cross inside, fixed size regardless of zoom
    for marker in &overlay.markers {
        let center = to_screen(*marker);
        painter.rect_stroke(
            egui::Rect::from_center_size(center, egui::vec2(half * 2.0, half * 2.0)),
            0.0,
            stroke,
        );
        painter.line_segment([center - arm_x, center + arm_x], stroke);
        painter.line_segment([center - arm_y, center + arm_y], stroke);
    }

    if let Some(outline) = &overlay.outline {
        let points: Vec<egui::Pos2> = outline.points.iter().map(|p| to_screen(*p)).collect();
        if outline.closed {
            painter.add(egui::Shape::closed_line(points, stroke));
        } else {
            painter.add(egui::Shape::line(points, stroke));
        }
    }
}
