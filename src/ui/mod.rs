// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Scribble application.

pub mod canvas;
pub mod dialogs;
pub mod render;
pub mod toolbar;
