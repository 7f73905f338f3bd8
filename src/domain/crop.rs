// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop.rs
//
// Crop region in native image pixels.

use std::fmt;

/// Crop region in native pixel coordinates.
///
/// Pure domain model, the output of the selection after scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if region has valid dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Whether the region lies inside an image of the given size.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        matches!(self.x.checked_add(self.width), Some(right) if right <= width)
            && matches!(self.y.checked_add(self.height), Some(bottom) if bottom <= height)
    }

    /// Shrink the region so it fits an image of the given size.
    ///
    /// Needed because heights are scaled with the width ratio and rounding can
    /// overshoot the natural edge by a pixel.
    pub fn clamped_to(&self, width: u32, height: u32) -> Self {
        let x = self.x.min(width);
        let y = self.y.min(height);
        Self {
            x,
            y,
            width: self.width.min(width - x),
            height: self.height.min(height - y),
        }
    }

    /// Cut this region out of a decoded image.
    #[cfg(feature = "image")]
    pub fn apply(&self, image: &image::DynamicImage) -> anyhow::Result<image::DynamicImage> {
        use image::GenericImageView;

        let (width, height) = image.dimensions();
        if !self.is_valid() {
            anyhow::bail!("empty crop region {self}");
        }
        if !self.fits_within(width, height) {
            anyhow::bail!("crop region {self} exceeds image size {width}x{height}");
        }
        Ok(image.crop_imm(self.x, self.y, self.width, self.height))
    }
}

impl fmt::Display for CropRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={} y={} width={} height={}",
            self.x, self.y, self.width, self.height
        )
    }
}
