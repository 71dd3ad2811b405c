//! Conversions between zone-local, world and output pixel frames
//!
//! Three frames are in play:
//! - zone-local meters: origin at the top-left corner of a generation area,
//!   y grows downward
//! - world meters: the landmark frame, centers anchored, y grows upward
//! - output pixels: top-left origin raster frame, y grows downward
//!
//! Zone generators anchor at the top-left while the resolver and renderer
//! anchor at centers. Mixing the two without these conversions mirrors the
//! layout vertically.

use crate::geometry::shapes::Point;
use crate::io::configuration::CM_PER_INCH;

/// Placement of a zone-local frame inside the world frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneFrame {
    /// World position of the zone's top-left corner
    pub top_left: Point,
}

impl ZoneFrame {
    /// Frame whose local origin sits at the given world point
    pub const fn new(top_left: Point) -> Self {
        Self { top_left }
    }

    /// Frame for an area of `width` by `length` centered on `center`
    ///
    /// The top edge of the area has the largest world y, so the local origin
    /// sits at `center.y + length / 2`.
    pub fn from_center(center: Point, width: f64, length: f64) -> Self {
        Self::new(Point::new(
            center.x - width / 2.0,
            center.y + length / 2.0,
        ))
    }

    /// Convert a zone-local point to world meters
    pub fn to_world(&self, local: Point) -> Point {
        Point::new(self.top_left.x + local.x, self.top_left.y - local.y)
    }

    /// Convert a local point sequence to world meters, preserving order
    pub fn points_to_world(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|p| self.to_world(*p)).collect()
    }
}

/// Mapping from world meters to output pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelFrame {
    /// Pixel position of the reference point
    pub center_px: Point,
    /// World point drawn at `center_px`
    pub reference: Point,
    /// Pixels per meter
    pub scale: f64,
}

impl PixelFrame {
    /// Create a pixel frame
    pub const fn new(center_px: Point, reference: Point, scale: f64) -> Self {
        Self {
            center_px,
            reference,
            scale,
        }
    }

    /// Convert a world point to pixel coordinates
    pub fn to_pixel(&self, world: Point) -> Point {
        Point::new(
            self.center_px.x + (world.x - self.reference.x) * self.scale,
            self.center_px.y - (world.y - self.reference.y) * self.scale,
        )
    }

    /// Convert pixel coordinates back to a world point
    pub fn to_world(&self, pixel: Point) -> Point {
        Point::new(
            self.reference.x + (pixel.x - self.center_px.x) / self.scale,
            self.reference.y - (pixel.y - self.center_px.y) / self.scale,
        )
    }

    /// Convert a length in meters to pixels
    pub fn length(&self, meters: f64) -> f64 {
        meters * self.scale
    }
}

/// Pixels per real-world meter for a print scale `1:scale_ratio` at `dpi`
pub fn pixels_per_meter(scale_ratio: f64, dpi: f64) -> f64 {
    (100.0 / scale_ratio) / CM_PER_INCH * dpi
}

/// Whole pixels covering `meters`, truncated toward zero
pub fn meters_to_pixels(meters: f64, scale: f64) -> i64 {
    (meters * scale) as i64
}

/// Whole pixels covering a print length in centimeters
pub fn print_cm_to_pixels(cm: f64, dpi: f64) -> i64 {
    (cm / CM_PER_INCH * dpi) as i64
}
