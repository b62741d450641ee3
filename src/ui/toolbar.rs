// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar with color, width, and stroke mode selection.
//!
//! Every control emits a [`Command`] rather than touching the tool state
//! directly, so toolbar clicks go through the same dispatch as menus.

use crate::commands::{Command, PALETTE};
use crate::models::{
    segment::Rgb,
    tool::{StrokeMode, ToolState},
};
use crate::ui::render::to_color32;

/// Display the toolbar. Returns the command picked this frame, if any.
pub fn show(ui: &mut egui::Ui, tools: &ToolState, width_presets: &[u32]) -> Option<Command> {
    let mut command = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Color:");
        for (name, rgb) in PALETTE {
            let selected = !tools.is_eraser() && tools.color() == rgb;
            let swatch = egui::Button::new("")
                .fill(to_color32(rgb))
                .min_size(egui::vec2(18.0, 18.0))
                .selected(selected);
            if ui.add(swatch).on_hover_text(name).clicked() {
                command = Some(Command::SetColor(rgb));
            }
        }

        if ui.selectable_label(tools.is_eraser(), "Eraser").clicked() {
            command = Some(Command::Eraser);
        }

        // Custom color picker
        let mut rgb = tools.color().to_array();
        if egui::color_picker::color_edit_button_srgb(ui, &mut rgb).changed() {
            command = Some(Command::SetColor(Rgb::from_array(rgb)));
        }

        ui.separator();

        ui.label("Width:");
        for width in width_presets {
            if ui
                .selectable_label(tools.width() == *width, width.to_string())
                .clicked()
            {
                command = Some(Command::SetWidth(*width));
            }
        }

        ui.separator();

        if ui
            .selectable_label(tools.mode() == StrokeMode::Line, "Line")
            .clicked()
        {
            command = Some(Command::SetMode(StrokeMode::Line));
        }
        if ui
            .selectable_label(tools.mode() == StrokeMode::Freehand, "Freehand")
            .clicked()
        {
            command = Some(Command::SetMode(StrokeMode::Freehand));
        }
    });

    command
}
