// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pen color, width, and stroke mode selection.

use super::segment::{Rgb, DEFAULT_WIDTH, MAX_WIDTH};
use serde::{Deserialize, Serialize};

/// How a pointer drag turns into segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeMode {
    /// One straight segment from press to release, previewed while dragging.
    #[default]
    Line,
    /// One short segment appended per pointer move.
    Freehand,
}

/// The color and width a stroke is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pen {
    pub color: Rgb,
    pub width: u32,
}

/// Currently selected tool settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolState {
    color: Rgb,
    width: u32,
    eraser: bool,
    eraser_width: u32,
    mode: StrokeMode,
    /// Color the eraser paints with.
    background: Rgb,
    /// Erasing always captures freehand.
    eraser_freehand: bool,
}

impl ToolState {
    pub fn new(color: Rgb, width: u32, mode: StrokeMode) -> Self {
        Self {
            color,
            width: clamp_width(width),
            eraser: false,
            eraser_width: 9,
            mode,
            background: Rgb::WHITE,
            eraser_freehand: true,
        }
    }

    /// Configure the eraser.
    pub fn with_eraser(mut self, background: Rgb, width: u32, freehand: bool) -> Self {
        self.background = background;
        self.eraser_width = clamp_width(width);
        self.eraser_freehand = freehand;
        self
    }

    /// Pick a drawing color. Leaves eraser mode.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
        self.eraser = false;
    }

    pub fn select_eraser(&mut self) {
        self.eraser = true;
    }

    /// Set the width of whichever pen is active.
    pub fn set_width(&mut self, width: u32) {
        let width = clamp_width(width);
        if self.eraser {
            self.eraser_width = width;
        } else {
            self.width = width;
        }
    }

    pub fn set_mode(&mut self, mode: StrokeMode) {
        self.mode = mode;
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn is_eraser(&self) -> bool {
        self.eraser
    }

    pub fn mode(&self) -> StrokeMode {
        self.mode
    }

    /// Width of the active pen.
    pub fn width(&self) -> u32 {
        self.pen().width
    }

    /// The pen a new stroke will use. Erasing overdraws with the background.
    pub fn pen(&self) -> Pen {
        if self.eraser {
            Pen {
                color: self.background,
                width: self.eraser_width,
            }
        } else {
            Pen {
                color: self.color,
                width: self.width,
            }
        }
    }

    /// The capture mode a new stroke will use.
    pub fn effective_mode(&self) -> StrokeMode {
        if self.eraser && self.eraser_freehand {
            StrokeMode::Freehand
        } else {
            self.mode
        }
    }
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(Rgb::BLACK, DEFAULT_WIDTH, StrokeMode::Line)
    }
}

fn clamp_width(width: u32) -> u32 {
    width.clamp(1, MAX_WIDTH)
}
