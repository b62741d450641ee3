// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! End-to-end document lifecycle through the public editor API.

use scribble::commands::Command;
use scribble::editor::{Button, Editor, Outcome, Prompter, SaveChoice};
use scribble::io::codec::{self, CodecOptions};
use scribble::models::segment::{Point, Rgb, Segment};
use scribble::models::tool::ToolState;
use std::path::{Path, PathBuf};

/// Answers every prompt the same way.
struct FixedPrompter {
    choice: SaveChoice,
    path: Option<PathBuf>,
    errors: usize,
}

impl Prompter for FixedPrompter {
    fn confirm_unsaved(&mut self) -> SaveChoice {
        self.choice
    }

    fn pick_open_path(&mut self) -> Option<PathBuf> {
        self.path.clone()
    }

    fn pick_save_path(&mut self, _current: Option<&Path>) -> Option<PathBuf> {
        self.path.clone()
    }

    fn report_error(&mut self, _error: &anyhow::Error) {
        self.errors += 1;
    }
}

fn draw_line(editor: &mut Editor, from: Point, to: Point) {
    editor.pointer_down(from, Button::Primary);
    editor.pointer_move(to);
    editor.pointer_up(to);
}

#[test]
fn save_reopen_replays_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.draw");
    let mut prompter = FixedPrompter {
        choice: SaveChoice::Save,
        path: Some(path.clone()),
        errors: 0,
    };

    let mut editor = Editor::default();
    draw_line(&mut editor, Point::new(0, 0), Point::new(10, 0));
    editor.dispatch(Command::SetColor(Rgb::RED), &mut prompter).unwrap();
    editor.dispatch(Command::SetWidth(5), &mut prompter).unwrap();
    draw_line(&mut editor, Point::new(10, 0), Point::new(10, 10));
    editor.dispatch(Command::Eraser, &mut prompter).unwrap();
    draw_line(&mut editor, Point::new(0, 0), Point::new(10, 0));
    let drawn = editor.drawing().clone();

    assert_eq!(editor.dispatch(Command::Save, &mut prompter).unwrap(), Outcome::Done);
    assert_eq!(editor.dispatch(Command::New, &mut prompter).unwrap(), Outcome::Done);
    assert!(editor.drawing().is_empty());

    assert_eq!(editor.dispatch(Command::Open, &mut prompter).unwrap(), Outcome::Done);
    assert_eq!(editor.drawing(), &drawn);
    assert!(!editor.document().is_dirty());
    assert_eq!(prompter.errors, 0);
}

#[test]
fn legacy_file_opens_with_default_width() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.draw");
    std::fs::write(&path, "1,1,20,20,#0000ff\n20,20,40,5,black\n").unwrap();

    let mut editor = Editor::default();
    editor.open_path(&path).unwrap();
    assert_eq!(
        editor.drawing().segments(),
        &[
            Segment::new(Point::new(1, 1), Point::new(20, 20), Rgb::BLUE, 3),
            Segment::new(Point::new(20, 20), Point::new(40, 5), Rgb::BLACK, 3),
        ]
    );
}

#[test]
fn versioned_output_is_readable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("versioned.draw");
    let options = CodecOptions {
        version_header: true,
    };
    let mut prompter = FixedPrompter {
        choice: SaveChoice::Discard,
        path: Some(path.clone()),
        errors: 0,
    };

    let mut editor = Editor::new(ToolState::default(), options);
    draw_line(&mut editor, Point::new(2, 2), Point::new(8, 8));
    editor.save_as(&mut prompter).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "#scribble v1\n2,2,8,8,#000000,3\n");
    assert_eq!(codec::read(&path).unwrap(), editor.drawing().segments());
}
