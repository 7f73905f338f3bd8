// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Gesture state machine: turns messages into geometry changes.

use crate::app::message::{CropMessage, Key};
use crate::app::model::{CropWidget, InteractionMode};
use crate::app::output::CropChange;
use crate::app::view::crop::{HitTarget, hit_test};
use crate::domain::geometry::{centered_square, resize_in_place, resize_square, translate};
use crate::domain::{CoordinateMapper, CropRect, ImageBounds, Point};

impl CropWidget {
    /// Handle one message. Returns the change notification if the box moved
    /// or changed size.
    pub fn update(&mut self, message: CropMessage) -> Option<CropChange> {
        match message {
            CropMessage::SourceChanged(src) => {
                self.set_src(src);
                None
            }
            CropMessage::ImageReady { display, natural } => self.image_ready(display, natural),
            CropMessage::Origin(origin) => {
                self.origin = origin;
                None
            }
            CropMessage::Focus(focused) => {
                self.focused = focused;
                None
            }

            CropMessage::PointerDown(pos) => self.start_gesture(pos),
            CropMessage::PointerMove(pos) => self.continue_gesture(pos),
            CropMessage::PointerUp | CropMessage::PointerLeave => {
                self.end_gesture();
                None
            }

            CropMessage::TouchStart(touches) => {
                let pos = self.first_touch(&touches)?;
                self.start_gesture(pos)
            }
            CropMessage::TouchMove(touches) => {
                let pos = self.first_touch(&touches)?;
                self.continue_gesture(pos)
            }
            CropMessage::TouchEnd | CropMessage::TouchCancel => {
                if self.config.enable_touch {
                    self.end_gesture();
                }
                None
            }

            CropMessage::Key(key) => self.key_press(key),
        }
    }

    /// Point the widget at a new image. Everything waits for `image_ready`.
    pub fn set_src(&mut self, src: Option<String>) {
        if self.src == src {
            return;
        }
        log::debug!("crop source changed to {src:?}");
        self.src = src;
        self.loaded = false;
        self.bounds = None;
        self.rect = None;
        self.mode = InteractionMode::Idle;
    }

    /// Record the image size and place the initial square.
    pub fn image_ready(&mut self, display: (u32, u32), natural: (u32, u32)) -> Option<CropChange> {
        let Some(bounds) = ImageBounds::new(display, natural) else {
            log::warn!("ignoring image with unusable size {display:?} / {natural:?}");
            return None;
        };
        log::debug!(
            "image ready: display {}x{}, natural {}x{}",
            bounds.display_width,
            bounds.display_height,
            bounds.natural_width,
            bounds.natural_height
        );

        self.bounds = Some(bounds);
        self.loaded = true;
        self.rect = None;
        self.mode = InteractionMode::Idle;
        self.commit(self.initial_rect(&bounds))
    }

    /// Put the box back to its initial centred placement.
    pub fn recenter(&mut self) -> Option<CropChange> {
        self.end_gesture();
        let bounds = self.bounds?;
        self.commit(self.initial_rect(&bounds))
    }

    fn initial_rect(&self, bounds: &ImageBounds) -> CropRect {
        centered_square(bounds, self.config.initial_fill, self.config.min_side)
    }

    fn first_touch(&self, touches: &[Point]) -> Option<Point> {
        if !self.config.enable_touch {
            log::trace!("touch disabled, ignoring");
            return None;
        }
        touches.first().copied()
    }

    fn start_gesture(&mut self, pos: Point) -> Option<CropChange> {
        let (Some(bounds), Some(rect)) = (self.bounds, self.rect) else {
            log::trace!("press before image is ready, ignoring");
            return None;
        };
        if self.mode.is_active() {
            log::trace!("gesture already in progress, ignoring press");
            return None;
        }

        let local = pos - self.origin;
        match hit_test(&rect, local, self.config.handle_hit_size)? {
            HitTarget::Body => {
                log::debug!("move started at {local:?}");
                self.mode = InteractionMode::Moving { last: pos };
                None
            }
            HitTarget::Handle(corner) => {
                let anchor = rect.corner(corner.opposite());
                log::debug!("resize started from {} handle, anchor {anchor:?}", corner.as_str());
                self.mode = InteractionMode::Resizing { corner, anchor };
                // Seed the first frame with the press position.
                self.resize_towards(local, anchor, &bounds)
            }
        }
    }

    fn continue_gesture(&mut self, pos: Point) -> Option<CropChange> {
        let (Some(bounds), Some(rect)) = (self.bounds, self.rect) else {
            return None;
        };

        match self.mode {
            InteractionMode::Idle => None,
            InteractionMode::Moving { last } => {
                let delta = pos - last;
                self.mode = InteractionMode::Moving { last: pos };
                if delta.is_zero() {
                    return None;
                }
                self.commit(translate(&rect, delta.x, delta.y, &bounds))
            }
            InteractionMode::Resizing { anchor, .. } => {
                let local = pos - self.origin;
                self.resize_towards(local, anchor, &bounds)
            }
        }
    }

    fn resize_towards(
        &mut self,
        local: Point,
        anchor: Point,
        bounds: &ImageBounds,
    ) -> Option<CropChange> {
        let delta = local - anchor;
        // A pointer level with the anchor on either axis has no direction to grow in.
        if delta.x == 0 || delta.y == 0 {
            return None;
        }
        let next = resize_square(anchor, delta.x, delta.y, bounds, self.config.min_side);
        self.commit(next)
    }

    fn end_gesture(&mut self) {
        if self.mode.is_active() {
            log::debug!("gesture ended");
        }
        self.mode = InteractionMode::Idle;
    }

    fn key_press(&mut self, key: Key) -> Option<CropChange> {
        if !self.config.enable_keyboard || !self.focused {
            log::trace!("key {key:?} ignored, keyboard inactive");
            return None;
        }
        let (Some(bounds), Some(rect)) = (self.bounds, self.rect) else {
            return None;
        };

        let step = self.config.nudge_step;
        let next = match key {
            Key::ArrowUp => translate(&rect, 0, -step, &bounds),
            Key::ArrowDown => translate(&rect, 0, step, &bounds),
            Key::ArrowLeft => translate(&rect, -step, 0, &bounds),
            Key::ArrowRight => translate(&rect, step, 0, &bounds),
            Key::Minus => resize_in_place(
                &rect,
                rect.width.saturating_sub(self.config.resize_step),
                &bounds,
                self.config.min_side,
            ),
            Key::Equal => resize_in_place(
                &rect,
                rect.width.saturating_add(self.config.resize_step),
                &bounds,
                self.config.min_side,
            ),
            Key::Escape => return self.recenter(),
        };
        self.commit(next)
    }

    /// Store `next` and notify, unless nothing changed.
    fn commit(&mut self, next: CropRect) -> Option<CropChange> {
        if self.rect == Some(next) {
            return None;
        }
        log::trace!("crop rect {:?} -> {next:?}", self.rect);
        self.rect = Some(next);

        let bounds = self.bounds?;
        let region = CoordinateMapper::new(&bounds).to_native(&next);
        Some(self.output.publish(region))
    }
}
