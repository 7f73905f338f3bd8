// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Per-widget configuration for the crop selection.

use crate::constant::{
    DEFAULT_INITIAL_FILL, HANDLE_HIT_SIZE, MIN_SIDE, NUDGE_STEP, RESIZE_STEP,
};

/// Tunables of one crop widget instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CropConfig {
    /// Smallest allowed side of the crop square (display pixels).
    pub min_side: i32,
    /// Share of the shorter image side used for the initial square (0, 1].
    pub initial_fill: f64,
    /// Arrow key step in display pixels.
    pub nudge_step: i32,
    /// Grow/shrink step for `=` / `-` in display pixels.
    pub resize_step: i32,
    /// Edge of the square hit area around each corner handle.
    pub handle_hit_size: f32,
    /// Whether keyboard input is handled while focused.
    pub enable_keyboard: bool,
    /// Whether touch input is handled.
    pub enable_touch: bool,
    /// Render the selection as a circle. Geometry stays square.
    pub rounded: bool,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            min_side: MIN_SIDE,
            initial_fill: DEFAULT_INITIAL_FILL,
            nudge_step: NUDGE_STEP,
            resize_step: RESIZE_STEP,
            handle_hit_size: HANDLE_HIT_SIZE,
            enable_keyboard: true,
            enable_touch: true,
            rounded: false,
        }
    }
}

impl CropConfig {
    /// Clamp values that would break the geometry into a usable range.
    pub fn sanitized(mut self) -> Self {
        if !(self.initial_fill > 0.0 && self.initial_fill <= 1.0) {
            log::warn!(
                "initial fill {} out of range, using {}",
                self.initial_fill,
                DEFAULT_INITIAL_FILL
            );
            self.initial_fill = DEFAULT_INITIAL_FILL;
        }
        self.min_side = self.min_side.max(1);
        self.nudge_step = self.nudge_step.max(1);
        self.resize_step = self.resize_step.max(1);
        if !self.handle_hit_size.is_finite() || self.handle_hit_size < 0.0 {
            self.handle_hit_size = HANDLE_HIT_SIZE;
        }
        self
    }
}
