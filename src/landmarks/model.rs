//! Landmark records as they are read from site data files

use serde::{Deserialize, Serialize};

/// World axis along which a relative placement is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// East-west, x grows east
    X,
    /// North-south, y grows north
    Y,
}

/// Outline family of a landmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Plain rectangle
    #[serde(rename = "RECT", alias = "RECTANGLE")]
    Rect,
    /// Circle sized by its diameter
    #[serde(rename = "CIRCLE")]
    Circle,
    /// Ellipse inscribed in width by length
    #[serde(rename = "OVAL")]
    Oval,
    /// Linear feature such as a river course
    #[serde(rename = "LINE", alias = "CURVE")]
    Line,
    /// Regular grid of cells (granary bays, platforms)
    #[serde(rename = "GRID")]
    Grid,
    /// Outline only, e.g. a site boundary
    #[serde(rename = "RECT_BORDER", alias = "BORDER")]
    Border,
    /// Rectangle with inner structure (pool, courtyard)
    #[serde(rename = "RECT_COMPLEX", alias = "COMPOUND")]
    Compound,
    /// Area reserved for procedural infill
    #[serde(rename = "RECT_ZONE", alias = "ZONE")]
    Zone,
}

impl ShapeKind {
    /// True for shapes that describe an area rather than a built structure
    pub const fn is_area(self) -> bool {
        matches!(self, Self::Border | Self::Zone)
    }
}

/// Measured extents in meters; every field defaults to zero
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    /// East-west extent
    pub width: f64,
    /// North-south extent
    pub length: f64,
    /// Diameter of circular structures
    pub diameter: f64,
    /// Width of an inner pool
    pub pool_w: f64,
    /// Length of an inner pool
    pub pool_l: f64,
    /// Width of an inner courtyard
    pub courtyard_w: f64,
    /// Length of an inner courtyard
    pub courtyard_l: f64,
    /// Rows of a grid structure
    pub grid_rows: u32,
    /// Columns of a grid structure
    pub grid_cols: u32,
}

impl Dimensions {
    /// Rectangle of the given width and length
    pub const fn rect(width: f64, length: f64) -> Self {
        Self {
            width,
            length,
            diameter: 0.0,
            pool_w: 0.0,
            pool_l: 0.0,
            courtyard_w: 0.0,
            courtyard_l: 0.0,
            grid_rows: 0,
            grid_cols: 0,
        }
    }

    /// Circle of the given diameter
    pub const fn circle(diameter: f64) -> Self {
        let mut dims = Self::rect(0.0, 0.0);
        dims.diameter = diameter;
        dims
    }

    /// Half of the extent along `axis`
    ///
    /// Circles with a diameter use it on both axes.
    pub fn half_extent(&self, axis: Axis, shape: ShapeKind) -> f64 {
        if shape == ShapeKind::Circle && self.diameter > 0.0 {
            return self.diameter / 2.0;
        }
        match axis {
            Axis::X => self.width / 2.0,
            Axis::Y => self.length / 2.0,
        }
    }
}

/// Cardinal direction of a relative placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Toward positive y
    #[default]
    North,
    /// Toward negative y
    South,
    /// Toward positive x
    East,
    /// Toward negative x
    West,
}

impl Direction {
    /// Axis the placement distance is applied along
    pub const fn axis(self) -> Axis {
        match self {
            Self::North | Self::South => Axis::Y,
            Self::East | Self::West => Axis::X,
        }
    }

    /// Sign of the placement distance in the world frame
    pub const fn sign(self) -> f64 {
        match self {
            Self::North | Self::East => 1.0,
            Self::South | Self::West => -1.0,
        }
    }
}

/// Where a landmark sits: explicit world coordinates or beside a parent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Location {
    /// Center given directly in world meters
    Absolute {
        /// World x of the center
        grid_x: f64,
        /// World y of the center
        grid_y: f64,
    },
    /// Center derived from a parent landmark
    Relative {
        /// Identifier of the parent landmark
        relative_to: String,
        /// Side of the parent to place on
        #[serde(default)]
        direction: Direction,
        /// Additional east-west shift
        #[serde(default)]
        offset_x: f64,
        /// Additional north-south shift
        #[serde(default)]
        offset_y: f64,
    },
}

impl Location {
    /// Parent identifier for relative locations
    pub fn parent(&self) -> Option<&str> {
        match self {
            Self::Absolute { .. } => None,
            Self::Relative { relative_to, .. } => Some(relative_to.as_str()),
        }
    }
}

fn unknown_region() -> String {
    "Unknown".to_string()
}

/// A fixed, named structure of the site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Region tag used for grouping and styling
    #[serde(default = "unknown_region")]
    pub region: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Measured extents
    #[serde(default, rename = "dimensions_m", alias = "dimensions")]
    pub dimensions: Dimensions,
    /// Height of the structure
    #[serde(default)]
    pub height_m: f64,
    /// Outline family
    pub shape: ShapeKind,
    /// Placement specification
    pub location: Location,
}

impl Landmark {
    /// Landmark centered at explicit world coordinates
    pub fn absolute(id: &str, shape: ShapeKind, dimensions: Dimensions, x: f64, y: f64) -> Self {
        Self::with_location(
            id,
            shape,
            dimensions,
            Location::Absolute {
                grid_x: x,
                grid_y: y,
            },
        )
    }

    /// Landmark placed beside `parent` in `direction`
    pub fn relative(
        id: &str,
        shape: ShapeKind,
        dimensions: Dimensions,
        parent: &str,
        direction: Direction,
    ) -> Self {
        Self::with_location(
            id,
            shape,
            dimensions,
            Location::Relative {
                relative_to: parent.to_string(),
                direction,
                offset_x: 0.0,
                offset_y: 0.0,
            },
        )
    }

    fn with_location(id: &str, shape: ShapeKind, dimensions: Dimensions, location: Location) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            region: unknown_region(),
            description: String::new(),
            dimensions,
            height_m: 0.0,
            shape,
            location,
        }
    }

    /// Set the additional shift of a relative placement
    ///
    /// Has no effect on absolute landmarks.
    #[must_use]
    pub fn offset(mut self, x: f64, y: f64) -> Self {
        if let Location::Relative {
            offset_x, offset_y, ..
        } = &mut self.location
        {
            *offset_x = x;
            *offset_y = y;
        }
        self
    }

    /// Set the display name
    #[must_use]
    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Set the region tag
    #[must_use]
    pub fn in_region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }
}
