// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scribble - a small line-segment paint program
//!
//! Draw lines and freehand strokes in a handful of colors and widths,
//! and save them to a plain-text `.draw` file that replays exactly.
//! The drawing model, codec, and editor state machine are independent
//! of the window layer in [`app`] and [`ui`].

pub mod app;
pub mod commands;
pub mod editor;
pub mod io;
pub mod models;
pub mod ui;
