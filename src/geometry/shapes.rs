//! Points, axis-aligned boxes and the perturbed-rectangle primitive
//!
//! Every generated shape is built from [`wobbly_rect`]: an axis-aligned
//! rectangle whose four corners are independently jittered so that
//! engraved outlines read as hand-built walls rather than ruled lines.

use serde::{Deserialize, Serialize};

use crate::math::sampler::ZoneRng;

/// A position in meters
///
/// Serialized as a two-element `[x, y]` array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate (direction depends on the frame)
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Smallest x coordinate
    pub min_x: f64,
    /// Smallest y coordinate
    pub min_y: f64,
    /// Largest x coordinate
    pub max_x: f64,
    /// Largest y coordinate
    pub max_y: f64,
}

impl Aabb {
    /// Create a box from its extremes
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Box of the given size centered on a point
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self::new(
            center.x - half_w,
            center.y - half_h,
            center.x + half_w,
            center.y + half_h,
        )
    }

    /// Smallest box containing every point, `None` for an empty slice
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self::new(first.x, first.y, first.x, first.y);
        for point in points {
            bounds.min_x = bounds.min_x.min(point.x);
            bounds.min_y = bounds.min_y.min(point.y);
            bounds.max_x = bounds.max_x.max(point.x);
            bounds.max_y = bounds.max_y.max(point.y);
        }
        Some(bounds)
    }

    /// Grow the box by `padding` on every side
    pub fn padded(&self, padding: f64) -> Self {
        Self::new(
            self.min_x - padding,
            self.min_y - padding,
            self.max_x + padding,
            self.max_y + padding,
        )
    }

    /// True when both ranges overlap with positive length
    ///
    /// Boxes that only share an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center point
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

/// Rectangle anchored at `(x, y)` with each corner jittered by up to `wobble`
///
/// Corners are returned in drawing order starting at the anchor: `(x, y)`,
/// `(x + w, y)`, `(x + w, y + h)`, `(x, y + h)`. Each corner draws its x
/// offset then its y offset from `rng`, eight draws in total. A zero wobble
/// draws nothing.
pub fn wobbly_rect(rng: &mut ZoneRng, x: f64, y: f64, w: f64, h: f64, wobble: f64) -> [Point; 4] {
    let anchors = [(x, y), (x + w, y), (x + w, y + h), (x, y + h)];
    anchors.map(|(ax, ay)| {
        let dx = rng.jitter(wobble);
        let dy = rng.jitter(wobble);
        Point::new(ax + dx, ay + dy)
    })
}
