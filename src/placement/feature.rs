//! Generated features in world space and their persisted record form

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::geometry::shapes::{Aabb, Point};
use crate::zones::shape::{ShapeCategory, ZoneShape};

/// World-space outline of a feature
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureGeometry {
    /// Axis-aligned rectangle given by its center and size
    Rect {
        /// Center x
        x: f64,
        /// Center y
        y: f64,
        /// Width
        w: f64,
        /// Height
        h: f64,
    },
    /// Ordered outline
    Polygon {
        /// Points in drawing order
        points: Vec<Point>,
    },
}

impl FeatureGeometry {
    /// Record tag of this geometry
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Rect { .. } => "RECT",
            Self::Polygon { .. } => "POLYGON",
        }
    }

    /// Bounding box, `None` for a polygon without points
    pub fn bounds(&self) -> Option<Aabb> {
        match self {
            Self::Rect { x, y, w, h } => Some(Aabb::centered(Point::new(*x, *y), *w, *h)),
            Self::Polygon { points } => Aabb::from_points(points),
        }
    }

    /// Outline points; rectangles yield their four corners
    pub fn points(&self) -> Vec<Point> {
        match self {
            Self::Rect { .. } => self.bounds().map_or_else(Vec::new, |b| {
                vec![
                    Point::new(b.min_x, b.max_y),
                    Point::new(b.max_x, b.max_y),
                    Point::new(b.max_x, b.min_y),
                    Point::new(b.min_x, b.min_y),
                ]
            }),
            Self::Polygon { points } => points.clone(),
        }
    }
}

/// A generated artifact attached to the zone that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FeatureRecord", into = "FeatureRecord")]
pub struct ProceduralFeature {
    /// Unique identifier
    pub id: String,
    /// Id of the zone landmark that owns this feature
    pub parent_id: String,
    /// World-space outline
    pub geometry: FeatureGeometry,
    /// Free text, ends with the category label in parentheses
    pub description: String,
}

impl ProceduralFeature {
    /// Polygon feature built from a world-space zone shape
    ///
    /// Streets and lanes are described as such; every other category is
    /// described as a house and carries its label.
    pub fn from_shape(id: String, parent_id: &str, zone_name: &str, shape: ZoneShape) -> Self {
        let description = if shape.category.is_street() {
            format!("Street in {zone_name} ({})", shape.category)
        } else {
            format!("Procedural House in {zone_name} ({})", shape.category)
        };
        Self {
            id,
            parent_id: parent_id.to_string(),
            geometry: FeatureGeometry::Polygon {
                points: shape.points,
            },
            description,
        }
    }

    /// Category named by the trailing `(LABEL)` of the description
    pub fn category(&self) -> Option<ShapeCategory> {
        let open = self.description.rfind('(')?;
        let label = self.description.get(open + 1..)?.strip_suffix(')')?;
        ShapeCategory::from_label(label)
    }

    /// Bounding box of the outline
    pub fn bounds(&self) -> Option<Aabb> {
        self.geometry.bounds()
    }
}

/// Replace the features owned by `zones` with `generated`
///
/// Features of every other parent are kept in their original order, followed
/// by the newly generated ones.
pub fn replace_zone_features(
    existing: Vec<ProceduralFeature>,
    generated: Vec<ProceduralFeature>,
    zones: &[&str],
) -> Vec<ProceduralFeature> {
    let regenerated: HashSet<&str> = zones.iter().copied().collect();
    existing
        .into_iter()
        .filter(|feature| !regenerated.contains(feature.parent_id.as_str()))
        .chain(generated)
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FeatureRecord {
    id: String,
    parent_id: String,
    shape: String,
    geometry: GeometryRecord,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum GeometryRecord {
    Rect { x: f64, y: f64, w: f64, h: f64 },
    Polygon { points: Vec<Point> },
}

impl TryFrom<FeatureRecord> for ProceduralFeature {
    type Error = String;

    fn try_from(record: FeatureRecord) -> Result<Self, Self::Error> {
        let geometry = match (record.shape.to_ascii_uppercase().as_str(), record.geometry) {
            ("RECT", GeometryRecord::Rect { x, y, w, h }) => FeatureGeometry::Rect { x, y, w, h },
            ("POLYGON", GeometryRecord::Polygon { points }) => FeatureGeometry::Polygon { points },
            (tag, _) => {
                return Err(format!(
                    "feature '{}' has shape '{tag}' that does not match its geometry",
                    record.id
                ));
            }
        };
        Ok(Self {
            id: record.id,
            parent_id: record.parent_id,
            geometry,
            description: record.description,
        })
    }
}

impl From<ProceduralFeature> for FeatureRecord {
    fn from(feature: ProceduralFeature) -> Self {
        let shape = feature.geometry.tag().to_string();
        let geometry = match feature.geometry {
            FeatureGeometry::Rect { x, y, w, h } => GeometryRecord::Rect { x, y, w, h },
            FeatureGeometry::Polygon { points } => GeometryRecord::Polygon { points },
        };
        Self {
            id: feature.id,
            parent_id: feature.parent_id,
            shape,
            geometry,
            description: feature.description,
        }
    }
}
