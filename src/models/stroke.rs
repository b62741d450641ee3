// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Live stroke capture.
//!
//! A stroke is the in-progress pointer drag. Depending on its mode it
//! either previews a single line until release, or emits a short segment
//! for every pointer move.

use super::segment::{Point, Segment};
use super::tool::{Pen, StrokeMode};

/// An in-progress pointer drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stroke {
    start: Point,
    last: Point,
    pen: Pen,
    mode: StrokeMode,
    emitted: usize,
}

impl Stroke {
    /// Begin a stroke at the pointer-down position.
    pub fn begin(point: Point, pen: Pen, mode: StrokeMode) -> Self {
        Self {
            start: point,
            last: point,
            pen,
            mode,
            emitted: 0,
        }
    }

    /// Most recent pointer position seen by the stroke.
    pub fn last_point(&self) -> Point {
        self.last
    }

    /// Track a pointer move. Returns segments to append right away.
    pub fn move_to(&mut self, point: Point) -> Vec<Segment> {
        if point == self.last {
            return Vec::new();
        }
        match self.mode {
            StrokeMode::Line => {
                self.last = point;
                Vec::new()
            }
            StrokeMode::Freehand => {
                let segment = self.segment(self.last, point);
                self.last = point;
                self.emitted += 1;
                vec![segment]
            }
        }
    }

    /// The line to draw over the drawing while dragging.
    pub fn preview(&self) -> Option<Segment> {
        match self.mode {
            StrokeMode::Line => Some(self.segment(self.start, self.last)),
            StrokeMode::Freehand => None,
        }
    }

    /// Finish at the pointer-up position. Returns the final segments.
    pub fn finish(mut self, point: Point) -> Vec<Segment> {
        match self.mode {
            StrokeMode::Line => vec![self.segment(self.start, point)],
            StrokeMode::Freehand => {
                let mut segments = self.move_to(point);
                if self.emitted == 0 {
                    // A click without movement still leaves a dot.
                    segments.push(self.segment(point, point));
                }
                segments
            }
        }
    }

    fn segment(&self, start: Point, end: Point) -> Segment {
        Segment::new(start, end, self.pen.color, self.pen.width)
    }
}
