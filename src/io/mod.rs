// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for drawing and settings files.

pub mod codec;
pub mod settings;
