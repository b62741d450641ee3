// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Discrete user commands and their dispatch.
//!
//! Menus, the toolbar, and keyboard shortcuts all produce [`Command`]s;
//! [`Editor::dispatch`] maps each one onto its state transition. The
//! command table pairs every command with its menu placement, label,
//! and shortcut so the UI can be built from data.

use crate::editor::{Editor, Outcome, Prompter};
use crate::models::segment::Rgb;
use crate::models::tool::StrokeMode;
use anyhow::Result;
use egui::{Key, KeyboardShortcut, Modifiers};

/// A discrete command issued from a menu, toolbar, or shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    New,
    Open,
    Save,
    SaveAs,
    Close,
    SetColor(Rgb),
    Eraser,
    SetWidth(u32),
    SetMode(StrokeMode),
}

/// Top-level menu a command is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    File,
    Color,
    Width,
    Mode,
}

impl Menu {
    pub const ALL: [Menu; 4] = [Menu::File, Menu::Color, Menu::Width, Menu::Mode];

    pub fn title(self) -> &'static str {
        match self {
            Menu::File => "File",
            Menu::Color => "Color",
            Menu::Width => "Width",
            Menu::Mode => "Mode",
        }
    }
}

/// Palette entries offered in the Color menu and toolbar.
pub const PALETTE: [(&str, Rgb); 4] = [
    ("Black", Rgb::BLACK),
    ("Red", Rgb::RED),
    ("Green", Rgb::GREEN),
    ("Blue", Rgb::BLUE),
];

const PALETTE_KEYS: [Key; 4] = [Key::Num1, Key::Num2, Key::Num3, Key::Num4];
const WIDTH_KEYS: [Key; 4] = [Key::Num6, Key::Num7, Key::Num8, Key::Num9];

/// One row of the command table.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandEntry {
    pub menu: Menu,
    pub label: String,
    pub shortcut: Option<KeyboardShortcut>,
    pub command: Command,
}

impl CommandEntry {
    fn new(menu: Menu, label: impl Into<String>, command: Command) -> Self {
        Self {
            menu,
            label: label.into(),
            shortcut: None,
            command,
        }
    }

    fn key(mut self, modifiers: Modifiers, key: Key) -> Self {
        self.shortcut = Some(KeyboardShortcut::new(modifiers, key));
        self
    }
}

/// Build the command table. Width entries come from the configured
/// presets; the first four get the 6-9 shortcuts.
pub fn command_table(width_presets: &[u32]) -> Vec<CommandEntry> {
    let mut table = vec![
        CommandEntry::new(Menu::File, "New", Command::New).key(Modifiers::ALT, Key::N),
        CommandEntry::new(Menu::File, "Open...", Command::Open).key(Modifiers::ALT, Key::O),
        CommandEntry::new(Menu::File, "Save", Command::Save).key(Modifiers::ALT, Key::S),
        CommandEntry::new(Menu::File, "Save As...", Command::SaveAs)
            .key(Modifiers::COMMAND | Modifiers::SHIFT, Key::S),
        CommandEntry::new(Menu::File, "Close", Command::Close).key(Modifiers::ALT, Key::X),
    ];

    for ((name, color), key) in PALETTE.iter().zip(PALETTE_KEYS) {
        table.push(
            CommandEntry::new(Menu::Color, *name, Command::SetColor(*color))
                .key(Modifiers::NONE, key),
        );
    }
    table.push(
        CommandEntry::new(Menu::Color, "Eraser", Command::Eraser).key(Modifiers::NONE, Key::Num5),
    );

    for (i, width) in width_presets.iter().enumerate() {
        let mut entry = CommandEntry::new(
            Menu::Width,
            format!("Width {}", width),
            Command::SetWidth(*width),
        );
        if let Some(key) = WIDTH_KEYS.get(i) {
            entry = entry.key(Modifiers::NONE, *key);
        }
        table.push(entry);
    }

    table.push(
        CommandEntry::new(Menu::Mode, "Line", Command::SetMode(StrokeMode::Line))
            .key(Modifiers::NONE, Key::L),
    );
    table.push(
        CommandEntry::new(Menu::Mode, "Freehand", Command::SetMode(StrokeMode::Freehand))
            .key(Modifiers::NONE, Key::F),
    );

    table
}

impl Editor {
    /// Apply a command. Lifecycle commands may consult the prompter;
    /// tool commands always complete.
    pub fn dispatch(&mut self, command: Command, prompter: &mut dyn Prompter) -> Result<Outcome> {
        match command {
            Command::New => self.new_drawing(prompter),
            Command::Open => self.open(prompter),
            Command::Save => self.save(prompter),
            Command::SaveAs => self.save_as(prompter),
            Command::Close => self.close(prompter),
            Command::SetColor(color) => {
                self.tools_mut().set_color(color);
                Ok(Outcome::Done)
            }
            Command::Eraser => {
                self.tools_mut().select_eraser();
                Ok(Outcome::Done)
            }
            Command::SetWidth(width) => {
                self.tools_mut().set_width(width);
                Ok(Outcome::Done)
            }
            Command::SetMode(mode) => {
                self.tools_mut().set_mode(mode);
                Ok(Outcome::Done)
            }
        }
    }
}
