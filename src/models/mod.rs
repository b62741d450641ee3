// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: segments, the drawing, document state, and tools.

pub mod document;
pub mod drawing;
pub mod segment;
pub mod stroke;
pub mod tool;
