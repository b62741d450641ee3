// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing editor state machine.
//!
//! The editor owns the drawing, the document state, and the tool
//! selection, and is the only place they are mutated. It knows nothing
//! about windows: every question it needs answered by the user goes
//! through the [`Prompter`] trait, so the lifecycle can be driven by the
//! native dialogs or by a scripted double in tests.

use crate::io::codec::{self, CodecOptions};
use crate::models::{
    document::DocumentState,
    drawing::Drawing,
    segment::{Point, Segment},
    stroke::Stroke,
    tool::ToolState,
};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Answer to the "save changes?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    Save,
    Discard,
    Cancel,
}

/// How a lifecycle operation ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The user backed out; nothing changed.
    Cancelled,
}

/// Pointer button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Secondary,
    Middle,
}

/// User interaction the editor depends on.
pub trait Prompter {
    /// Ask whether unsaved changes should be saved first.
    fn confirm_unsaved(&mut self) -> SaveChoice;

    /// Ask for a drawing to open. `None` if the user cancelled.
    fn pick_open_path(&mut self) -> Option<PathBuf>;

    /// Ask where to save. `None` if the user cancelled.
    fn pick_save_path(&mut self, current: Option<&Path>) -> Option<PathBuf>;

    /// Tell the user an operation failed.
    fn report_error(&mut self, error: &anyhow::Error);
}

/// The drawing, its document state, and the tools used to extend it.
#[derive(Debug, Clone)]
pub struct Editor {
    drawing: Drawing,
    document: DocumentState,
    tools: ToolState,
    stroke: Option<Stroke>,
    codec: CodecOptions,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(ToolState::default(), CodecOptions::default())
    }
}

impl Editor {
    /// Create an editor with an empty, untitled drawing.
    pub fn new(tools: ToolState, codec: CodecOptions) -> Self {
        Self {
            drawing: Drawing::new(),
            document: DocumentState::new(),
            tools,
            stroke: None,
            codec,
        }
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn document(&self) -> &DocumentState {
        &self.document
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub(crate) fn tools_mut(&mut self) -> &mut ToolState {
        &mut self.tools
    }

    pub fn is_stroking(&self) -> bool {
        self.stroke.is_some()
    }

    /// Live line to draw over the drawing while a line stroke is active.
    pub fn preview(&self) -> Option<Segment> {
        self.stroke.as_ref().and_then(Stroke::preview)
    }

    /// Begin a stroke. Only the primary button draws.
    pub fn pointer_down(&mut self, point: Point, button: Button) {
        if button != Button::Primary {
            return;
        }
        self.stroke = Some(Stroke::begin(
            point,
            self.tools.pen(),
            self.tools.effective_mode(),
        ));
    }

    pub fn pointer_move(&mut self, point: Point) {
        if let Some(stroke) = self.stroke.as_mut() {
            let segments = stroke.move_to(point);
            self.append(segments);
        }
    }

    /// Finish the active stroke and commit its segments.
    pub fn pointer_up(&mut self, point: Point) {
        if let Some(stroke) = self.stroke.take() {
            let segments = stroke.finish(point);
            self.append(segments);
        }
    }

    /// Finish the active stroke where the pointer was last seen, for
    /// releases whose position is unknown (pointer left the window).
    pub fn pointer_release(&mut self) {
        if let Some(point) = self.stroke.as_ref().map(Stroke::last_point) {
            self.pointer_up(point);
        }
    }

    fn append(&mut self, segments: Vec<Segment>) {
        if segments.is_empty() {
            return;
        }
        self.drawing.extend(segments);
        self.document.mark_dirty();
    }

    /// Gate in front of operations that would drop unsaved changes.
    fn resolve_unsaved(&mut self, prompter: &mut dyn Prompter) -> Result<Outcome> {
        if !self.document.is_dirty() {
            return Ok(Outcome::Done);
        }
        match prompter.confirm_unsaved() {
            SaveChoice::Save => self.save(prompter),
            SaveChoice::Discard => Ok(Outcome::Done),
            SaveChoice::Cancel => Ok(Outcome::Cancelled),
        }
    }

    /// Start an empty, untitled drawing.
    pub fn new_drawing(&mut self, prompter: &mut dyn Prompter) -> Result<Outcome> {
        if self.resolve_unsaved(prompter)? == Outcome::Cancelled {
            return Ok(Outcome::Cancelled);
        }
        self.stroke = None;
        self.drawing.clear();
        self.document.reset();
        log::info!("Started new drawing");
        Ok(Outcome::Done)
    }

    /// Ask for a file and replace the drawing with its contents.
    pub fn open(&mut self, prompter: &mut dyn Prompter) -> Result<Outcome> {
        if self.resolve_unsaved(prompter)? == Outcome::Cancelled {
            return Ok(Outcome::Cancelled);
        }
        match prompter.pick_open_path() {
            Some(path) => self.open_path(&path),
            None => Ok(Outcome::Cancelled),
        }
    }

    /// Replace the drawing with the contents of `path`.
    ///
    /// The file is fully parsed before anything is replaced, so a failed
    /// open leaves the current drawing and document state untouched.
    pub fn open_path(&mut self, path: &Path) -> Result<Outcome> {
        let segments = codec::read(path)?;
        log::info!("Opened {} ({} segments)", path.display(), segments.len());
        self.stroke = None;
        self.drawing.replace(segments);
        self.document.mark_loaded(path.to_path_buf());
        Ok(Outcome::Done)
    }

    /// Save to the current path, or ask for one if the drawing is untitled.
    pub fn save(&mut self, prompter: &mut dyn Prompter) -> Result<Outcome> {
        match self.document.path().map(Path::to_path_buf) {
            Some(path) => self.write_to(path),
            None => self.save_as(prompter),
        }
    }

    /// Ask for a path and save there.
    pub fn save_as(&mut self, prompter: &mut dyn Prompter) -> Result<Outcome> {
        match prompter.pick_save_path(self.document.path()) {
            Some(path) => self.write_to(path),
            None => Ok(Outcome::Cancelled),
        }
    }

    fn write_to(&mut self, path: PathBuf) -> Result<Outcome> {
        codec::write(&path, self.drawing.segments(), self.codec)?;
        log::info!("Saved {} ({} segments)", path.display(), self.drawing.len());
        self.document.mark_saved(path);
        Ok(Outcome::Done)
    }

    /// Decide whether the window may close. `Done` allows it.
    pub fn close(&mut self, prompter: &mut dyn Prompter) -> Result<Outcome> {
        self.resolve_unsaved(prompter)
    }
}
