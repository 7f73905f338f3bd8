// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Pure crop domain: display geometry, native regions and their mapping.

pub mod crop;
pub mod geometry;
pub mod mapper;

pub use crop::CropRegion;
pub use geometry::{Corner, CropRect, ImageBounds, Point};
pub use mapper::CoordinateMapper;
