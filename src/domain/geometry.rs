// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry.rs
//
// Square crop geometry in display space.
//
// All functions are pure. Coordinates are integer display pixels with the
// origin at the top-left corner of the displayed image.

use std::ops::Sub;

/// A point in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Displayed and natural dimensions of the loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageBounds {
    pub display_width: i32,
    pub display_height: i32,
    pub natural_width: u32,
    pub natural_height: u32,
}

impl ImageBounds {
    /// Returns `None` when any dimension is zero or the display size does not
    /// fit the signed pixel range.
    pub fn new(display: (u32, u32), natural: (u32, u32)) -> Option<Self> {
        let display_width = i32::try_from(display.0).ok()?;
        let display_height = i32::try_from(display.1).ok()?;
        if display_width == 0 || display_height == 0 || natural.0 == 0 || natural.1 == 0 {
            return None;
        }
        Some(Self {
            display_width,
            display_height,
            natural_width: natural.0,
            natural_height: natural.1,
        })
    }

    /// Length of the shorter displayed side.
    pub fn shorter_side(&self) -> i32 {
        self.display_width.min(self.display_height)
    }
}

/// A corner of the crop box, also the tag of its resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// The diagonally opposite corner.
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    /// Compass name used by markup and scripts (`nw`, `ne`, `sw`, `se`).
    pub fn as_str(self) -> &'static str {
        match self {
            Corner::TopLeft => "nw",
            Corner::TopRight => "ne",
            Corner::BottomLeft => "sw",
            Corner::BottomRight => "se",
        }
    }
}

/// The crop square in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CropRect {
    pub const fn square(x: i32, y: i32, side: i32) -> Self {
        Self {
            x,
            y,
            width: side,
            height: side,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => Point::new(self.x, self.y),
            Corner::TopRight => Point::new(self.right(), self.y),
            Corner::BottomLeft => Point::new(self.x, self.bottom()),
            Corner::BottomRight => Point::new(self.right(), self.bottom()),
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Whether the rect satisfies every crop invariant for these bounds.
    pub fn is_valid_for(&self, bounds: &ImageBounds, min_side: i32) -> bool {
        self.width == self.height
            && self.width >= min_side.min(bounds.shorter_side())
            && self.x >= 0
            && self.y >= 0
            && self.right() <= bounds.display_width
            && self.bottom() <= bounds.display_height
    }
}

/// Grow or shrink a square away from a fixed anchor.
///
/// The side follows the larger of the two delta magnitudes, never drops below
/// `min_side`, and is limited by the room between the anchor and the image
/// edge on the side each delta points toward. A zero delta counts as
/// pointing toward the origin.
pub fn resize_square(
    anchor: Point,
    delta_x: i32,
    delta_y: i32,
    bounds: &ImageBounds,
    min_side: i32,
) -> CropRect {
    let width = bounds.display_width;
    let height = bounds.display_height;

    let room_x = if delta_x > 0 { width - anchor.x } else { anchor.x };
    let room_y = if delta_y > 0 { height - anchor.y } else { anchor.y };

    let side = delta_x
        .saturating_abs()
        .max(delta_y.saturating_abs())
        .max(min_side)
        .min(room_x)
        .min(room_y);
    // Near an edge the pointed side can offer less than `min_side`.
    let side = side.max(min_side).min(bounds.shorter_side());

    let x = if delta_x > 0 { anchor.x } else { anchor.x - side };
    let y = if delta_y > 0 { anchor.y } else { anchor.y - side };

    CropRect::square(x.clamp(0, width - side), y.clamp(0, height - side), side)
}

/// Resize around the current top-left corner without repositioning.
pub fn resize_in_place(
    rect: &CropRect,
    target_side: i32,
    bounds: &ImageBounds,
    min_side: i32,
) -> CropRect {
    let room = (bounds.display_width - rect.x).min(bounds.display_height - rect.y);
    let side = target_side
        .min(room)
        .max(min_side)
        .min(bounds.shorter_side());

    CropRect::square(
        rect.x.clamp(0, bounds.display_width - side),
        rect.y.clamp(0, bounds.display_height - side),
        side,
    )
}

/// Move the square by a delta, keeping it inside the image.
pub fn translate(rect: &CropRect, delta_x: i32, delta_y: i32, bounds: &ImageBounds) -> CropRect {
    let max_x = (bounds.display_width - rect.width).max(0);
    let max_y = (bounds.display_height - rect.height).max(0);

    CropRect {
        x: rect.x.saturating_add(delta_x).clamp(0, max_x),
        y: rect.y.saturating_add(delta_y).clamp(0, max_y),
        ..*rect
    }
}

/// The initial placement: a square over `fill` of the shorter side, centred.
pub fn centered_square(bounds: &ImageBounds, fill: f64, min_side: i32) -> CropRect {
    let shorter = bounds.shorter_side();

    #[allow(clippy::cast_possible_truncation)]
    let side = (f64::from(shorter) * fill).round() as i32;
    let side = side.max(min_side).min(shorter);

    #[allow(clippy::cast_possible_truncation)]
    let centre = |extent: i32| (f64::from(extent - side) / 2.0).round() as i32;

    CropRect::square(
        centre(bounds.display_width).clamp(0, bounds.display_width - side),
        centre(bounds.display_height).clamp(0, bounds.display_height - side),
        side,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(w: u32, h: u32) -> ImageBounds {
        ImageBounds::new((w, h), (w, h)).unwrap()
    }

    #[test]
    fn image_bounds_reject_zero_dimensions() {
        assert!(ImageBounds::new((0, 10), (10, 10)).is_none());
        assert!(ImageBounds::new((10, 10), (10, 0)).is_none());
        assert!(ImageBounds::new((u32::MAX, 10), (10, 10)).is_none());
    }

    #[test]
    fn resize_grows_away_from_anchor() {
        let rect = resize_square(Point::new(100, 100), 50, 50, &bounds(500, 500), 10);
        assert_eq!(rect, CropRect::square(100, 100, 50));
    }

    #[test]
    fn resize_uses_larger_delta_magnitude() {
        let rect = resize_square(Point::new(100, 100), 30, 70, &bounds(500, 500), 10);
        assert_eq!(rect, CropRect::square(100, 100, 70));
    }

    #[test]
    fn resize_toward_origin_places_box_before_anchor() {
        let rect = resize_square(Point::new(200, 200), -40, -60, &bounds(500, 500), 10);
        assert_eq!(rect, CropRect::square(140, 140, 60));

        let rect = resize_square(Point::new(200, 200), 40, -60, &bounds(500, 500), 10);
        assert_eq!(rect, CropRect::square(200, 140, 60));
    }

    #[test]
    fn resize_respects_min_side() {
        let rect = resize_square(Point::new(100, 100), 2, 3, &bounds(500, 500), 10);
        assert_eq!(rect, CropRect::square(100, 100, 10));
    }

    #[test]
    fn resize_is_clamped_at_growth_edge() {
        let rect = resize_square(Point::new(400, 300), 10_000, 10_000, &bounds(500, 500), 10);
        assert_eq!(rect, CropRect::square(400, 300, 100));

        let rect = resize_square(Point::new(30, 80), -10_000, -10_000, &bounds(500, 500), 10);
        assert_eq!(rect, CropRect::square(0, 50, 30));
    }

    #[test]
    fn resize_with_too_little_room_keeps_min_side_inside() {
        let b = bounds(500, 500);
        let rect = resize_square(Point::new(3, 3), -20, -20, &b, 10);
        assert_eq!(rect, CropRect::square(0, 0, 10));
        assert!(rect.is_valid_for(&b, 10));
    }

    #[test]
    fn resize_in_place_keeps_top_left() {
        let b = bounds(200, 100);
        let rect = CropRect::square(20, 10, 50);
        assert_eq!(resize_in_place(&rect, 60, &b, 10), CropRect::square(20, 10, 60));
        assert_eq!(resize_in_place(&rect, 40, &b, 10), CropRect::square(20, 10, 40));
        assert_eq!(resize_in_place(&rect, 500, &b, 10), CropRect::square(20, 10, 90));
        assert_eq!(resize_in_place(&rect, 0, &b, 10), CropRect::square(20, 10, 10));
    }

    #[test]
    fn translate_clamps_to_image() {
        let b = bounds(300, 200);
        let rect = CropRect::square(10, 10, 100);
        assert_eq!(translate(&rect, 5, -3, &b), CropRect::square(15, 7, 100));
        assert_eq!(translate(&rect, -50, -50, &b), CropRect::square(0, 0, 100));
        assert_eq!(translate(&rect, 1_000, 1_000, &b), CropRect::square(200, 100, 100));
    }

    #[test]
    fn centered_square_spans_shorter_side() {
        assert_eq!(centered_square(&bounds(123, 123), 1.0, 10), CropRect::square(0, 0, 123));
        assert_eq!(centered_square(&bounds(400, 200), 1.0, 10), CropRect::square(100, 0, 200));
        assert_eq!(centered_square(&bounds(200, 400), 1.0, 10), CropRect::square(0, 100, 200));
    }

    #[test]
    fn centered_square_with_partial_fill() {
        assert_eq!(centered_square(&bounds(400, 200), 0.9, 10), CropRect::square(110, 10, 180));
    }

    #[test]
    fn centered_square_rounds_half_pixels_inside() {
        let b = bounds(124, 123);
        let rect = centered_square(&b, 1.0, 10);
        assert_eq!(rect, CropRect::square(1, 0, 123));
        assert!(rect.is_valid_for(&b, 10));
    }

    #[test]
    fn corners_and_opposites() {
        let rect = CropRect::square(10, 20, 30);
        assert_eq!(rect.corner(Corner::BottomRight), Point::new(40, 50));
        assert_eq!(rect.corner(Corner::TopRight.opposite()), Point::new(10, 50));
        for corner in Corner::ALL {
            assert_eq!(corner.opposite().opposite(), corner);
        }
    }
}
