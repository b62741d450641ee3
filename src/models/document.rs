// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Document state management.
//!
//! Tracks the file backing the current drawing and whether the drawing
//! has changed since it was last saved or loaded.

use std::path::{Path, PathBuf};

/// The four lifecycle states of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    CleanUntitled,
    CleanNamed,
    DirtyUntitled,
    DirtyNamed,
}

/// Backing path and dirty flag of the open drawing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentState {
    path: Option<PathBuf>,
    dirty: bool,
}

impl DocumentState {
    /// A fresh untitled, clean document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called whenever a segment is appended.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Called after the drawing was written to `path`.
    pub fn mark_saved(&mut self, path: PathBuf) {
        self.path = Some(path);
        self.dirty = false;
    }

    /// Called after the drawing was replaced by the contents of `path`.
    pub fn mark_loaded(&mut self, path: PathBuf) {
        self.path = Some(path);
        self.dirty = false;
    }

    /// Back to untitled and clean, as on "new".
    pub fn reset(&mut self) {
        self.path = None;
        self.dirty = false;
    }

    pub fn lifecycle(&self) -> Lifecycle {
        match (self.dirty, self.path.is_some()) {
            (false, false) => Lifecycle::CleanUntitled,
            (false, true) => Lifecycle::CleanNamed,
            (true, false) => Lifecycle::DirtyUntitled,
            (true, true) => Lifecycle::DirtyNamed,
        }
    }

    /// Window title reflecting the path and dirty state.
    pub fn title(&self, app_name: &str) -> String {
        let mut title = match &self.path {
            Some(path) => format!("{} - {}", app_name, path.display()),
            None => app_name.to_string(),
        };
        if self.dirty {
            title.push_str(" *");
        }
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_transitions() {
        let mut doc = DocumentState::new();
        assert_eq!(doc.lifecycle(), Lifecycle::CleanUntitled);

        doc.mark_dirty();
        assert_eq!(doc.lifecycle(), Lifecycle::DirtyUntitled);

        doc.mark_saved(PathBuf::from("a.draw"));
        assert_eq!(doc.lifecycle(), Lifecycle::CleanNamed);

        doc.mark_dirty();
        assert_eq!(doc.lifecycle(), Lifecycle::DirtyNamed);

        doc.reset();
        assert_eq!(doc.lifecycle(), Lifecycle::CleanUntitled);
        assert!(doc.path().is_none());
    }

    #[test]
    fn test_title() {
        let mut doc = DocumentState::new();
        assert_eq!(doc.title("Scribble"), "Scribble");

        doc.mark_dirty();
        assert_eq!(doc.title("Scribble"), "Scribble *");

        doc.mark_loaded(PathBuf::from("pic.draw"));
        assert_eq!(doc.title("Scribble"), "Scribble - pic.draw");

        doc.mark_dirty();
        assert_eq!(doc.title("Scribble"), "Scribble - pic.draw *");
    }
}
