// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Crop widget: messages, state, update loop and output.

pub mod message;
pub mod model;
pub mod output;
pub mod script;
pub mod update;
pub mod view;

pub use message::{CropMessage, Key};
pub use model::{CropWidget, InteractionMode};
pub use output::{CropChange, FieldRole, FieldSink, OutputAdapter, TextField};
