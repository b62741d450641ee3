// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Native dialogs backing the editor's prompts.

use crate::editor::{Prompter, SaveChoice};
use crate::io::codec::EXTENSION;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::{Path, PathBuf};

/// [`Prompter`] implemented with native rfd dialogs.
#[derive(Debug, Default)]
pub struct NativePrompter;

impl Prompter for NativePrompter {
    fn confirm_unsaved(&mut self) -> SaveChoice {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Save Changes?")
            .set_description("Do you want to save the current drawing?")
            .set_buttons(MessageButtons::YesNoCancel)
            .show();
        save_choice(result)
    }

    fn pick_open_path(&mut self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Open Drawing")
            .add_filter("Drawing Files", &[EXTENSION])
            .pick_file()
    }

    fn pick_save_path(&mut self, current: Option<&Path>) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save Drawing")
            .add_filter("Drawing Files", &[EXTENSION]);
        match current {
            Some(path) => {
                if let Some(dir) = path.parent() {
                    dialog = dialog.set_directory(dir);
                }
                if let Some(name) = path.file_name() {
                    dialog = dialog.set_file_name(name.to_string_lossy());
                }
            }
            None => dialog = dialog.set_file_name(format!("untitled.{}", EXTENSION)),
        }
        dialog.save_file().map(with_draw_extension)
    }

    fn report_error(&mut self, error: &anyhow::Error) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title("Error")
            .set_description(format!("{:#}", error))
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

fn save_choice(result: MessageDialogResult) -> SaveChoice {
    match result {
        MessageDialogResult::Yes => SaveChoice::Save,
        MessageDialogResult::No => SaveChoice::Discard,
        _ => SaveChoice::Cancel,
    }
}

/// Some platforms return the typed name verbatim; add `.draw` if missing.
fn with_draw_extension(mut path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension(EXTENSION);
    }
    path
}
