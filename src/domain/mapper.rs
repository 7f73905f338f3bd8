// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mapper.rs
//
// Display space <-> native image space conversion.

use super::crop::CropRegion;
use super::geometry::{CropRect, ImageBounds};

/// Scales crop geometry between display and native pixels.
///
/// A single ratio, `natural_width / display_width`, is used for both axes.
/// When the displayed aspect differs from the natural one, heights are still
/// scaled by the width ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    ratio: f64,
}

impl CoordinateMapper {
    pub fn new(bounds: &ImageBounds) -> Self {
        Self {
            ratio: f64::from(bounds.natural_width) / f64::from(bounds.display_width),
        }
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn to_native(&self, rect: &CropRect) -> CropRegion {
        CropRegion::new(
            self.scale(rect.x),
            self.scale(rect.y),
            self.scale(rect.width),
            self.scale(rect.height),
        )
    }

    pub fn to_display(&self, region: &CropRegion) -> CropRect {
        CropRect {
            x: self.unscale(region.x),
            y: self.unscale(region.y),
            width: self.unscale(region.width),
            height: self.unscale(region.height),
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn scale(&self, value: i32) -> u32 {
        (f64::from(value.max(0)) * self.ratio).round() as u32
    }

    #[allow(clippy::cast_possible_truncation)]
    fn unscale(&self, value: u32) -> i32 {
        (f64::from(value) / self.ratio).round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_when_sizes_match() {
        let bounds = ImageBounds::new((123, 123), (123, 123)).unwrap();
        let mapper = CoordinateMapper::new(&bounds);
        assert_eq!(
            mapper.to_native(&CropRect::square(0, 0, 123)),
            CropRegion::new(0, 0, 123, 123)
        );
    }

    #[test]
    fn scales_up_and_rounds() {
        let bounds = ImageBounds::new((123, 123), (250, 250)).unwrap();
        let mapper = CoordinateMapper::new(&bounds);
        assert!((mapper.ratio() - 250.0 / 123.0).abs() < f64::EPSILON);
        assert_eq!(
            mapper.to_native(&CropRect::square(0, 0, 123)),
            CropRegion::new(0, 0, 250, 250)
        );
        // 10 * 2.0325 = 20.33, 50 * 2.0325 = 101.63
        assert_eq!(
            mapper.to_native(&CropRect::square(10, 10, 50)),
            CropRegion::new(20, 20, 102, 102)
        );
    }

    #[test]
    fn scales_down() {
        let bounds = ImageBounds::new((400, 300), (200, 150)).unwrap();
        let mapper = CoordinateMapper::new(&bounds);
        assert_eq!(
            mapper.to_native(&CropRect::square(51, 20, 100)),
            CropRegion::new(26, 10, 50, 50)
        );
    }

    #[test]
    fn height_uses_width_ratio() {
        // Natural aspect 2:1 shown squeezed into a 100x100 box.
        let bounds = ImageBounds::new((100, 100), (200, 100)).unwrap();
        let region = CoordinateMapper::new(&bounds).to_native(&CropRect::square(0, 0, 50));
        assert_eq!(region, CropRegion::new(0, 0, 100, 100));
    }

    #[test]
    fn round_trip_within_one_pixel() {
        let bounds = ImageBounds::new((123, 97), (4032, 3024)).unwrap();
        let mapper = CoordinateMapper::new(&bounds);
        let rect = CropRect::square(17, 5, 61);
        let back = mapper.to_display(&mapper.to_native(&rect));
        assert!((back.x - rect.x).abs() <= 1);
        assert!((back.y - rect.y).abs() <= 1);
        assert!((back.width - rect.width).abs() <= 1);
        assert!((back.height - rect.height).abs() <= 1);
    }
}
