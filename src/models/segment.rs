// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Segment data structures.
//!
//! This module defines the core data structures for representing
//! drawn line segments: integer points, RGB colors, and the segment
//! itself carrying geometry, color, and width.

use serde::{Deserialize, Serialize};

/// Width assumed for lines saved without a width field.
pub const DEFAULT_WIDTH: u32 = 3;

/// Largest pen width the tools will accept.
pub const MAX_WIDTH: u32 = 64;

/// A 2D point in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb::BLACK),
    ("white", Rgb::WHITE),
    ("red", Rgb::RED),
    ("green", Rgb::GREEN),
    ("blue", Rgb::BLUE),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("gray", Rgb::new(160, 160, 164)),
    ("grey", Rgb::new(160, 160, 164)),
    ("darkred", Rgb::new(128, 0, 0)),
    ("darkgreen", Rgb::new(0, 128, 0)),
    ("darkblue", Rgb::new(0, 0, 128)),
    ("darkgray", Rgb::new(128, 128, 128)),
];

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a textual color: `#rrggbb`, `#rgb`, or a known color name.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some(hex) = text.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        NAMED_COLORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(text))
            .map(|(_, color)| *color)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => Some(Self::new(
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            )),
            3 => {
                // Each nibble is doubled, so "#f80" is "#ff8800".
                let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
                Some(Self::new(nibble(0).ok()?, nibble(1).ok()?, nibble(2).ok()?))
            }
            _ => None,
        }
    }

    /// Canonical on-disk form, lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_array(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

/// One straight stroke unit. Immutable once appended to a drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub color: Rgb,
    pub width: u32,
}

impl Segment {
    /// Create a new segment.
    pub fn new(start: Point, end: Point, color: Rgb, width: u32) -> Self {
        Self {
            start,
            end,
            color,
            width,
        }
    }

    /// A zero-length segment, painted as a round dot.
    pub fn is_dot(&self) -> bool {
        self.start == self.end
    }
}
