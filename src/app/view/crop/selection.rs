// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/selection.rs
//
// Hit testing of the crop box and its visual state.

use crate::domain::{Corner, CropRect, Point};

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Handle(Corner),
    Body,
}

/// Diagonal resize cursor shown while a corner is dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    None,
    /// Top-left / bottom-right diagonal.
    NwSe,
    /// Top-right / bottom-left diagonal.
    NeSw,
}

impl CursorHint {
    pub fn for_corner(corner: Corner) -> Self {
        match corner {
            Corner::TopLeft | Corner::BottomRight => CursorHint::NwSe,
            Corner::TopRight | Corner::BottomLeft => CursorHint::NeSw,
        }
    }

    /// Class name for markup-based renderers.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            CursorHint::None => None,
            CursorHint::NwSe => Some("nwse"),
            CursorHint::NeSw => Some("nesw"),
        }
    }
}

/// Read-only snapshot for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualState {
    /// Box in display pixels, `None` until an image is ready.
    pub rect: Option<CropRect>,
    pub cursor: CursorHint,
    pub rounded: bool,
    pub placeholder_visible: bool,
}

/// Find the handle or body under a widget-local point.
///
/// Handles win over the body and extend half their hit size outside the box.
pub fn hit_test(rect: &CropRect, point: Point, hit_size: f32) -> Option<HitTarget> {
    let half = hit_size / 2.0;

    for corner in Corner::ALL {
        if point_in_handle(point, rect.corner(corner), half) {
            return Some(HitTarget::Handle(corner));
        }
    }

    if rect.contains(point) {
        return Some(HitTarget::Body);
    }

    None
}

fn point_in_handle(point: Point, handle_center: Point, half: f32) -> bool {
    let dx = point.x.saturating_sub(handle_center.x) as f32;
    let dy = point.y.saturating_sub(handle_center.y) as f32;
    dx.abs() <= half && dy.abs() <= half
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_take_priority_over_body() {
        let rect = CropRect::square(100, 100, 50);
        assert_eq!(
            hit_test(&rect, Point::new(102, 98), 10.0),
            Some(HitTarget::Handle(Corner::TopLeft))
        );
        assert_eq!(
            hit_test(&rect, Point::new(150, 100), 10.0),
            Some(HitTarget::Handle(Corner::TopRight))
        );
        assert_eq!(
            hit_test(&rect, Point::new(100, 154), 10.0),
            Some(HitTarget::Handle(Corner::BottomLeft))
        );
        assert_eq!(
            hit_test(&rect, Point::new(153, 153), 10.0),
            Some(HitTarget::Handle(Corner::BottomRight))
        );
    }

    #[test]
    fn inside_is_body_outside_is_nothing() {
        let rect = CropRect::square(100, 100, 50);
        assert_eq!(hit_test(&rect, Point::new(125, 125), 10.0), Some(HitTarget::Body));
        assert_eq!(hit_test(&rect, Point::new(90, 125), 10.0), None);
        assert_eq!(hit_test(&rect, Point::new(200, 200), 10.0), None);
    }

    #[test]
    fn cursor_hint_per_diagonal() {
        assert_eq!(CursorHint::for_corner(Corner::TopLeft), CursorHint::NwSe);
        assert_eq!(CursorHint::for_corner(Corner::BottomRight), CursorHint::NwSe);
        assert_eq!(CursorHint::for_corner(Corner::TopRight), CursorHint::NeSw);
        assert_eq!(CursorHint::for_corner(Corner::BottomLeft), CursorHint::NeSw);
        assert_eq!(CursorHint::None.class_name(), None);
        assert_eq!(CursorHint::NeSw.class_name(), Some("nesw"));
    }
}
