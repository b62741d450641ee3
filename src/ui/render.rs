// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Segment replay.
//!
//! Converts drawing segments into screen-space line primitives and paints
//! them in order, so later segments land on top of earlier ones.

use crate::models::segment::{Rgb, Segment};

/// One segment placed on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineShape {
    pub from: egui::Pos2,
    pub to: egui::Pos2,
    pub color: egui::Color32,
    pub width: f32,
    /// Zero-length segment, painted as a single round dot.
    pub dot: bool,
}

pub fn to_color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Place segments relative to the canvas origin, keeping paint order.
pub fn segment_shapes(segments: &[Segment], origin: egui::Pos2) -> Vec<LineShape> {
    segments
        .iter()
        .map(|s| LineShape {
            from: origin + egui::vec2(s.start.x as f32, s.start.y as f32),
            to: origin + egui::vec2(s.end.x as f32, s.end.y as f32),
            color: to_color32(s.color),
            width: s.width as f32,
            dot: s.is_dot(),
        })
        .collect()
}

/// Paint shapes in order with round caps.
pub fn paint(painter: &egui::Painter, shapes: &[LineShape]) {
    for shape in shapes {
        let radius = shape.width / 2.0;
        if shape.dot {
            painter.circle_filled(shape.from, radius, shape.color);
            continue;
        }
        painter.line_segment(
            [shape.from, shape.to],
            egui::Stroke::new(shape.width, shape.color),
        );
        // Caps join consecutive freehand segments without gaps.
        painter.circle_filled(shape.from, radius, shape.color);
        painter.circle_filled(shape.to, radius, shape.color);
    }
}
