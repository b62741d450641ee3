// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scribble desktop entry point.

use anyhow::Result;
use scribble::app::{ScribbleApp, APP_NAME};
use scribble::editor::Editor;
use scribble::io::settings::Settings;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let settings_path = Settings::default_path();
    let settings = Settings::load(&settings_path).unwrap_or_else(|e| {
        log::warn!("{:#}; using default settings", e);
        Settings::default()
    });

    let mut editor = Editor::new(settings.tool_state(), settings.codec_options());

    // Optional drawing to open at startup
    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        if let Err(e) = editor.open_path(&path) {
            log::error!("{:#}", e);
        }
    }

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width as f32, settings.window_height as f32])
            .with_min_inner_size([400.0, 300.0])
            .with_title(APP_NAME),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|_cc| Ok(Box::new(ScribbleApp::new(editor, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
