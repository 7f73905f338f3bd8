// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Crop widget state.

use crate::app::output::{CropChange, FieldRole, FieldSink, OutputAdapter};
use crate::app::view::crop::{CursorHint, VisualState};
use crate::config::CropConfig;
use crate::domain::{CoordinateMapper, Corner, CropRect, CropRegion, ImageBounds, Point};

// =============================================================================
// Enums
// =============================================================================

/// The gesture currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    /// Dragging the whole box. `last` is the previous pointer sample.
    Moving { last: Point },
    /// Dragging a corner; `anchor` is the opposite corner, held fixed.
    Resizing { corner: Corner, anchor: Point },
}

impl InteractionMode {
    pub fn is_active(&self) -> bool {
        !matches!(self, InteractionMode::Idle)
    }
}

// =============================================================================
// Model
// =============================================================================

/// One crop widget instance. Owns all of its geometry and gesture state.
#[derive(Debug)]
pub struct CropWidget {
    pub(crate) config: CropConfig,

    // Image.
    pub(crate) src: Option<String>,
    pub(crate) loaded: bool,
    pub(crate) bounds: Option<ImageBounds>,

    // Selection.
    pub(crate) rect: Option<CropRect>,
    pub(crate) mode: InteractionMode,

    // Host.
    pub(crate) origin: Point,
    pub(crate) focused: bool,

    pub(crate) output: OutputAdapter,
}

impl Default for CropWidget {
    fn default() -> Self {
        Self::new(CropConfig::default())
    }
}

impl CropWidget {
    pub fn new(config: CropConfig) -> Self {
        Self {
            config: config.sanitized(),
            src: None,
            loaded: false,
            bounds: None,
            rect: None,
            mode: InteractionMode::Idle,
            origin: Point::default(),
            focused: false,
            output: OutputAdapter::default(),
        }
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn bounds(&self) -> Option<ImageBounds> {
        self.bounds
    }

    /// Current box in display pixels.
    pub fn rect(&self) -> Option<CropRect> {
        self.rect
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Current box in native pixels.
    pub fn native_region(&self) -> Option<CropRegion> {
        let bounds = self.bounds?;
        let rect = self.rect?;
        Some(CoordinateMapper::new(&bounds).to_native(&rect))
    }

    pub fn cursor_hint(&self) -> CursorHint {
        match self.mode {
            InteractionMode::Resizing { corner, .. } => CursorHint::for_corner(corner),
            _ => CursorHint::None,
        }
    }

    pub fn visual_state(&self) -> VisualState {
        VisualState {
            rect: self.rect,
            cursor: self.cursor_hint(),
            rounded: self.config.rounded,
            placeholder_visible: !self.loaded,
        }
    }

    /// Mirror one output field into `sink`.
    pub fn set_field(&mut self, role: FieldRole, sink: impl FieldSink + 'static) {
        self.output.set_field(role, Box::new(sink));
    }

    /// Register a change listener.
    pub fn on_change(&mut self, listener: impl FnMut(&CropChange) + 'static) {
        self.output.add_listener(Box::new(listener));
    }
}
