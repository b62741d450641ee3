// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the eframe::App trait. It builds the menus and toolbar, turns their
//! clicks and keyboard shortcuts into commands for the editor, feeds
//! canvas pointer events to the editor, and keeps the window title and
//! close behavior in step with the document state.

use crate::commands::{command_table, Command, CommandEntry, Menu};
use crate::editor::{Editor, Outcome, Prompter};
use crate::io::settings::Settings;
use crate::ui::{
    canvas::{self, CanvasAction},
    dialogs::NativePrompter,
    toolbar,
};

/// Application name shown in the window title.
pub const APP_NAME: &str = "Scribble";

/// Main application state.
pub struct ScribbleApp {
    /// Drawing, document, and tool state
    editor: Editor,

    settings: Settings,

    /// Menu entries and shortcuts
    commands: Vec<CommandEntry>,

    /// Title last sent to the window
    title: String,

    /// Set once the close flow has approved closing the window
    allow_close: bool,
}

impl ScribbleApp {
    /// Create a new application instance around an editor.
    pub fn new(editor: Editor, settings: Settings) -> Self {
        let commands = command_table(&settings.width_presets);
        Self {
            editor,
            settings,
            commands,
            title: String::new(),
            allow_close: false,
        }
    }

    /// Dispatch a command, reporting failures to the user.
    fn run(&mut self, ctx: &egui::Context, command: Command) {
        let mut prompter = NativePrompter;
        match self.editor.dispatch(command, &mut prompter) {
            Ok(Outcome::Done) if command == Command::Close => {
                log::info!("Closing window");
                self.allow_close = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            Ok(Outcome::Cancelled) => log::info!("{:?} cancelled", command),
            Ok(Outcome::Done) => {}
            Err(e) => {
                log::error!("{:?} failed: {:#}", command, e);
                prompter.report_error(&e);
            }
        }
    }

    /// Collect commands triggered by keyboard shortcuts.
    fn shortcut_commands(&self, ctx: &egui::Context) -> Vec<Command> {
        if ctx.wants_keyboard_input() {
            return Vec::new();
        }
        self.commands
            .iter()
            .filter_map(|entry| {
                let shortcut = entry.shortcut?;
                ctx.input_mut(|i| i.consume_shortcut(&shortcut))
                    .then_some(entry.command)
            })
            .collect()
    }

    fn menu_bar(&self, ui: &mut egui::Ui) -> Option<Command> {
        let mut picked = None;
        egui::menu::bar(ui, |ui| {
            for menu in Menu::ALL {
                ui.menu_button(menu.title(), |ui| {
                    for entry in self.commands.iter().filter(|entry| entry.menu == menu) {
                        let mut button = egui::Button::new(entry.label.as_str());
                        if let Some(shortcut) = &entry.shortcut {
                            button = button.shortcut_text(ui.ctx().format_shortcut(shortcut));
                        }
                        if ui.add(button).clicked() {
                            picked = Some(entry.command);
                            ui.close_menu();
                        }
                    }
                });
            }
        });
        picked
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        let tools = self.editor.tools();
        ui.horizontal(|ui| {
            let pen = if tools.is_eraser() {
                "Eraser".to_string()
            } else {
                tools.color().to_hex()
            };
            ui.label(format!("Pen: {}", pen));
            ui.separator();
            ui.label(format!("Width: {}", tools.width()));
            ui.separator();
            ui.label(format!("Mode: {:?}", tools.effective_mode()));
            ui.separator();
            ui.label(format!("Segments: {}", self.editor.drawing().len()));
            if self.editor.is_stroking() {
                ui.separator();
                ui.label("Drawing...");
            }
        });
    }

    fn update_title(&mut self, ctx: &egui::Context) {
        let title = self.editor.document().title(APP_NAME);
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }
}

impl eframe::App for ScribbleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Intercept window close so unsaved changes can be saved first
        if ctx.input(|i| i.viewport().close_requested()) && !self.allow_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.run(ctx, Command::Close);
        }

        let mut pending = self.shortcut_commands(ctx);

        // Top menu bar
        let menu_command = egui::TopBottomPanel::top("menu_bar")
            .show(ctx, |ui| self.menu_bar(ui))
            .inner;
        pending.extend(menu_command);

        // Toolbar
        let toolbar_command = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                toolbar::show(ui, self.editor.tools(), &self.settings.width_presets)
            })
            .inner;
        pending.extend(toolbar_command);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| self.status_bar(ui));

        // Main canvas (center)
        let canvas_actions = egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                canvas::show(
                    ui,
                    self.editor.drawing(),
                    self.editor.preview(),
                    self.settings.background,
                )
            })
            .inner;

        // Handle canvas actions
        for action in canvas_actions {
            match action {
                CanvasAction::PointerDown(point, button) => self.editor.pointer_down(point, button),
                CanvasAction::PointerMove(point) => self.editor.pointer_move(point),
                CanvasAction::PointerUp(Some(point)) => self.editor.pointer_up(point),
                CanvasAction::PointerUp(None) => self.editor.pointer_release(),
            }
        }

        // Dialogs block, so commands run after the frame's UI is laid out
        for command in pending {
            self.run(ctx, command);
        }

        self.update_title(ctx);
    }
}
