//! Geometric primitives and coordinate frames
//!
//! This module contains:
//! - Points, bounding boxes and the perturbed rectangle primitive
//! - Conversions between zone-local, world and pixel frames

/// Conversions between zone-local, world and pixel frames
pub mod frames;
/// Points, bounding boxes and perturbed rectangles
pub mod shapes;

pub use frames::{PixelFrame, ZoneFrame};
pub use shapes::{Aabb, Point, wobbly_rect};
