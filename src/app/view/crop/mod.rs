// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/mod.rs
//
// Crop view module: hit testing, visual state and the optional overlay widget.
// Inspired by cosmic-viewer (https://codeberg.org/bhh by Bryan Hyland

mod selection;
#[cfg(feature = "cosmic")]
mod overlay;

pub use selection::{CursorHint, HitTarget, VisualState, hit_test};
#[cfg(feature = "cosmic")]
pub use overlay::{CropOverlay, crop_overlay};
