// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Square crop selection over a displayed image.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;

pub use app::view::crop::{CursorHint, VisualState};
pub use app::{CropChange, CropMessage, CropWidget, FieldRole, FieldSink, Key, TextField};
pub use config::CropConfig;
pub use domain::{Corner, CropRect, CropRegion, ImageBounds, Point};
