// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application settings.
//!
//! Settings are stored as JSON. A missing or empty file yields the
//! defaults; fields absent from the file also take their defaults.

use crate::io::codec::CodecOptions;
use crate::models::segment::{Rgb, DEFAULT_WIDTH};
use crate::models::tool::{StrokeMode, ToolState};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the settings file location.
pub const SETTINGS_ENV: &str = "SCRIBBLE_SETTINGS";

/// Settings file name used when the environment variable is unset.
pub const SETTINGS_FILE: &str = "scribble.json";

/// User-tunable application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial window size in logical pixels.
    pub window_width: u32,
    pub window_height: u32,
    /// Canvas background; also the color the eraser paints with.
    pub background: Rgb,
    pub default_color: Rgb,
    pub default_width: u32,
    /// Entries of the Width menu.
    pub width_presets: Vec<u32>,
    pub eraser_width: u32,
    /// Erase freehand regardless of the selected stroke mode.
    pub eraser_freehand: bool,
    pub stroke_mode: StrokeMode,
    /// Write the format version line when saving.
    pub version_header: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            background: Rgb::WHITE,
            default_color: Rgb::BLACK,
            default_width: DEFAULT_WIDTH,
            width_presets: vec![1, 3, 5, 7],
            eraser_width: 9,
            eraser_freehand: true,
            stroke_mode: StrokeMode::Line,
            version_header: false,
        }
    }
}

impl Settings {
    /// Settings path from `$SCRIBBLE_SETTINGS`, else `scribble.json`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        };
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Initial tool selection described by these settings.
    pub fn tool_state(&self) -> ToolState {
        ToolState::new(self.default_color, self.default_width, self.stroke_mode).with_eraser(
            self.background,
            self.eraser_width,
            self.eraser_freehand,
        )
    }

    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions {
            version_header: self.version_header,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("none.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "  \n").unwrap();
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "eraser_width": 20, "stroke_mode": "freehand" }"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.eraser_width, 20);
        assert_eq!(settings.stroke_mode, StrokeMode::Freehand);
        assert_eq!(settings.default_width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            background: Rgb::new(250, 250, 240),
            version_header: true,
            ..Settings::default()
        };

        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn test_tool_state_uses_background_for_eraser() {
        let settings = Settings {
            background: Rgb::new(1, 2, 3),
            eraser_width: 15,
            ..Settings::default()
        };
        let mut tools = settings.tool_state();
        tools.select_eraser();
        assert_eq!(tools.pen().color, Rgb::new(1, 2, 3));
        assert_eq!(tools.pen().width, 15);
    }
}
