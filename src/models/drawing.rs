// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The in-memory drawing.
//!
//! A drawing is the ordered list of segments making up the picture.
//! Insertion order is paint order, so later segments cover earlier ones.

use super::segment::Segment;

/// Ordered sequence of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drawing {
    segments: Vec<Segment>,
}

impl Drawing {
    /// Create an empty drawing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a drawing from already-ordered segments.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn extend(&mut self, segments: impl IntoIterator<Item = Segment>) {
        self.segments.extend(segments);
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Replace the whole drawing, as on open.
    pub fn replace(&mut self, segments: Vec<Segment>) {
        self.segments = segments;
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
