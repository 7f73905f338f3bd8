// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Crop constants that should not be changed by the user.

/// Smallest side of the crop square in display pixels.
pub const MIN_SIDE: i32 = 10;

/// Fraction of the shorter image side covered by the initial square.
pub const DEFAULT_INITIAL_FILL: f64 = 1.0;

/// Arrow key nudge in display pixels.
pub const NUDGE_STEP: i32 = 1;

/// Grow/shrink step for the `=` and `-` keys in display pixels.
pub const RESIZE_STEP: i32 = 10;

/// Edge length of the square hit area centred on each corner handle.
pub const HANDLE_HIT_SIZE: f32 = 10.0;

/// Drawn edge length of a corner handle (rendering adapter only).
pub const HANDLE_SIZE: f32 = 9.0;
