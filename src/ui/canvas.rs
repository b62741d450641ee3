// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas.
//!
//! This module provides the main canvas area: it replays the drawing,
//! overlays the live stroke preview, and reports pointer interactions
//! in canvas-local integer coordinates.

use crate::editor::Button;
use crate::models::{
    drawing::Drawing,
    segment::{Point, Rgb, Segment},
};
use crate::ui::render;

/// Result of canvas interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasAction {
    PointerDown(Point, Button),
    PointerMove(Point),
    /// `None` when the pointer left the window before release.
    PointerUp(Option<Point>),
}

/// Display the canvas and handle mouse interactions.
pub fn show(
    ui: &mut egui::Ui,
    drawing: &Drawing,
    preview: Option<Segment>,
    background: Rgb,
) -> Vec<CanvasAction> {
    let mut actions = Vec::new();

    let (response, painter) =
        ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
    let rect = response.rect;
    let origin = rect.min;

    painter.rect_filled(rect, 0.0, render::to_color32(background));
    render::paint(&painter, &render::segment_shapes(drawing.segments(), origin));
    if let Some(segment) = preview {
        render::paint(&painter, &render::segment_shapes(&[segment], origin));
    }

    let (press_origin, latest) = ui
        .ctx()
        .input(|i| (i.pointer.press_origin(), i.pointer.latest_pos()));
    let latest = latest.map(|pos| to_canvas(pos, origin));

    // Drags are only recognized past the drag threshold; the stroke
    // still starts where the button went down.
    if response.drag_started() {
        if let Some(point) = press_origin.map(|pos| to_canvas(pos, origin)).or(latest) {
            actions.push(CanvasAction::PointerDown(point, drag_button(&response)));
        }
    }
    if response.dragged() {
        if let Some(point) = latest {
            actions.push(CanvasAction::PointerMove(point));
        }
    }
    if response.drag_stopped() {
        actions.push(CanvasAction::PointerUp(latest));
    } else if response.clicked_by(egui::PointerButton::Primary) {
        if let Some(point) = response.interact_pointer_pos().map(|pos| to_canvas(pos, origin)) {
            actions.push(CanvasAction::PointerDown(point, Button::Primary));
            actions.push(CanvasAction::PointerUp(Some(point)));
        }
    }

    actions
}

fn drag_button(response: &egui::Response) -> Button {
    if response.drag_started_by(egui::PointerButton::Primary) {
        Button::Primary
    } else if response.drag_started_by(egui::PointerButton::Secondary) {
        Button::Secondary
    } else {
        Button::Middle
    }
}

/// Convert a screen position to canvas pixel coordinates.
fn to_canvas(pos: egui::Pos2, origin: egui::Pos2) -> Point {
    let local = pos - origin;
    Point::new(local.x.round() as i32, local.y.round() as i32)
}
