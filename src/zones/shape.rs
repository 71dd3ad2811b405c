//! Shapes produced by zone generators and the generator contract

use std::fmt;

use crate::geometry::frames::ZoneFrame;
use crate::geometry::shapes::{Aabb, Point};

/// Role of a generated shape, used for filtering and render styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeCategory {
    /// Footprint of a rich-zone house
    RichWall,
    /// Open courtyard cut out of a rich-zone house
    Courtyard,
    /// Zero-area placeholder paired with a solid rich-zone house
    SolidFiller,
    /// Poor-zone house
    Poor,
    /// Regular grid street
    Street,
    /// Organic cut-through lane
    Lane,
    /// Industrial building
    Industrial,
    /// Fortification bastion
    Bastion,
    /// Curtain wall between bastions
    CurtainWall,
}

impl ShapeCategory {
    /// Every category, in declaration order
    pub const ALL: [Self; 9] = [
        Self::RichWall,
        Self::Courtyard,
        Self::SolidFiller,
        Self::Poor,
        Self::Street,
        Self::Lane,
        Self::Industrial,
        Self::Bastion,
        Self::CurtainWall,
    ];

    /// Stable upper-case label written into feature descriptions
    pub const fn label(self) -> &'static str {
        match self {
            Self::RichWall => "RICH_WALL",
            Self::Courtyard => "COURTYARD",
            Self::SolidFiller => "SOLID_FILLER",
            Self::Poor => "POOR",
            Self::Street => "STREET",
            Self::Lane => "LANE",
            Self::Industrial => "INDUSTRIAL",
            Self::Bastion => "BASTION",
            Self::CurtainWall => "CURTAIN_WALL",
        }
    }

    /// Category with the given label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }

    /// Shapes that cut back to ground level inside a house
    pub const fn is_open_ground(self) -> bool {
        matches!(self, Self::Courtyard | Self::SolidFiller)
    }

    /// Shapes that form the circulation network
    pub const fn is_street(self) -> bool {
        matches!(self, Self::Street | Self::Lane)
    }
}

impl fmt::Display for ShapeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered outline tagged with its category
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneShape {
    /// Outline points in drawing order
    pub points: Vec<Point>,
    /// Role of the shape
    pub category: ShapeCategory,
}

impl ZoneShape {
    /// Create a shape from its outline
    pub fn new(points: impl Into<Vec<Point>>, category: ShapeCategory) -> Self {
        Self {
            points: points.into(),
            category,
        }
    }

    /// Bounding box of the outline, `None` when it has no points
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.points)
    }

    /// Same shape with every point converted from zone-local to world meters
    #[must_use]
    pub fn to_world(&self, frame: &ZoneFrame) -> Self {
        Self {
            points: frame.points_to_world(&self.points),
            category: self.category,
        }
    }
}

/// A rich-zone house: its footprint and the courtyard or filler inside it
///
/// Both halves are always accepted or discarded together.
#[derive(Debug, Clone, PartialEq)]
pub struct HousePair {
    /// House footprint, the only half tested for collisions
    pub wall: ZoneShape,
    /// Courtyard cut-out or zero-area filler
    pub inner: ZoneShape,
}

impl HousePair {
    /// Same pair converted from zone-local to world meters
    #[must_use]
    pub fn to_world(&self, frame: &ZoneFrame) -> Self {
        Self {
            wall: self.wall.to_world(frame),
            inner: self.inner.to_world(frame),
        }
    }
}

/// Ordered output of one generator call
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneOutput {
    /// Shapes that must be consumed two at a time
    Paired(Vec<HousePair>),
    /// Shapes that are filtered individually
    Single(Vec<ZoneShape>),
    /// Shapes that touch each other by construction, filtered as one network
    /// against the obstacles that existed before it
    Network(Vec<ZoneShape>),
}

impl ZoneOutput {
    /// Total number of shapes, counting both halves of each pair
    pub fn shape_count(&self) -> usize {
        match self {
            Self::Paired(pairs) => pairs.len() * 2,
            Self::Single(shapes) | Self::Network(shapes) => shapes.len(),
        }
    }

    /// True when the generator produced nothing
    pub fn is_empty(&self) -> bool {
        self.shape_count() == 0
    }

    /// Flatten into the generator contract order: wall then inner for pairs
    pub fn into_shapes(self) -> Vec<ZoneShape> {
        match self {
            Self::Paired(pairs) => pairs
                .into_iter()
                .flat_map(|pair| [pair.wall, pair.inner])
                .collect(),
            Self::Single(shapes) | Self::Network(shapes) => shapes,
        }
    }

    /// Same output with every point converted from zone-local to world meters
    #[must_use]
    pub fn to_world(&self, frame: &ZoneFrame) -> Self {
        match self {
            Self::Paired(pairs) => Self::Paired(pairs.iter().map(|p| p.to_world(frame)).collect()),
            Self::Single(shapes) => {
                Self::Single(shapes.iter().map(|s| s.to_world(frame)).collect())
            }
            Self::Network(shapes) => {
                Self::Network(shapes.iter().map(|s| s.to_world(frame)).collect())
            }
        }
    }
}

/// Maps a rectangular area and a seed to local-space shapes
///
/// The local origin is the top-left corner of the area with y growing down.
/// Implementations seed their own random stream from `seed`, so equal inputs
/// always reproduce the same output. Degenerate areas yield empty output.
pub trait ZoneGenerator {
    /// Generate shapes for an area of `width` by `length` meters
    fn generate(&self, width: f64, length: f64, seed: u64) -> ZoneOutput;
}

/// True when an area cannot hold any shape
pub fn is_degenerate_area(width: f64, length: f64) -> bool {
    !width.is_finite() || !length.is_finite() || width <= 0.0 || length <= 0.0
}

/// Top-left offsets of cells of `size` repeated every `stride` along `extent`
///
/// Only cells lying entirely inside `[0, extent]` are returned.
pub fn cell_offsets(extent: f64, size: f64, stride: f64) -> Vec<f64> {
    let mut offsets = Vec::new();
    if size.is_nan() || size <= 0.0 || stride.is_nan() || stride <= 0.0 || !extent.is_finite()
    {
        return offsets;
    }
    let mut offset = 0.0;
    while offset + size <= extent {
        offsets.push(offset);
        offset += stride;
    }
    offsets
}
