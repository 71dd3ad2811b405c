//! Rejection of generated shapes that overlap fixed obstacles

use crate::geometry::shapes::{Aabb, Point};
use crate::landmarks::resolver::ResolvedLandmark;
use crate::zones::shape::{HousePair, ZoneOutput, ZoneShape};

/// A box that generated shapes must not overlap
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// World-space bounds, padding already applied
    pub bounds: Aabb,
    /// Id of the landmark or feature the box came from
    pub source: String,
}

impl Obstacle {
    /// Create an obstacle
    pub fn new(bounds: Aabb, source: impl Into<String>) -> Self {
        Self {
            bounds,
            source: source.into(),
        }
    }

    /// Obstacle covering a resolved landmark grown by `padding`
    pub fn from_landmark(resolved: &ResolvedLandmark, padding: f64) -> Self {
        Self::new(resolved.bounds(padding), resolved.id())
    }
}

/// True when the bounding box of `points` overlaps any obstacle
///
/// An empty point list is never blocked. Touching edges do not count.
pub fn is_blocked(points: &[Point], obstacles: &[Obstacle]) -> bool {
    Aabb::from_points(points).is_some_and(|candidate| {
        obstacles
            .iter()
            .any(|obstacle| candidate.overlaps(&obstacle.bounds))
    })
}

/// Growing set of obstacles used while filtering one or more zones
///
/// Accepted shapes are added back to the set so later candidates, including
/// those of other zones, cannot overlap them.
#[derive(Debug, Clone, Default)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSet {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set seeded with landmark footprints
    pub fn from_landmarks<'a>(
        landmarks: impl IntoIterator<Item = &'a ResolvedLandmark>,
        padding: f64,
    ) -> Self {
        Self {
            obstacles: landmarks
                .into_iter()
                .map(|resolved| Obstacle::from_landmark(resolved, padding))
                .collect(),
        }
    }

    /// Add an obstacle
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Obstacles in insertion order
    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Number of obstacles
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// True when the set holds no obstacles
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// True when the shape overlaps an obstacle
    pub fn is_blocked(&self, points: &[Point]) -> bool {
        is_blocked(points, &self.obstacles)
    }

    /// Accept the shape if it is clear and record it as a new obstacle
    pub fn admit(&mut self, shape: &ZoneShape, source: &str) -> bool {
        let Some(bounds) = shape.bounds() else {
            return false;
        };
        if self.is_blocked(&shape.points) {
            return false;
        }
        self.push(Obstacle::new(bounds, source));
        true
    }

    /// Accept or reject a house pair as a unit
    ///
    /// Only the wall is tested and recorded; the inner shape lies within it.
    pub fn admit_pair(&mut self, pair: &HousePair, source: &str) -> bool {
        self.admit(&pair.wall, source)
    }

    /// Keep the network shapes that clear the current obstacles
    ///
    /// Streets of one network cross each other and curtain walls reach into
    /// the bastions they join, so every candidate is tested
    /// against the set as it was before the call and accepted streets are
    /// only recorded afterwards.
    pub fn filter_network(&mut self, shapes: Vec<ZoneShape>, source: &str) -> Vec<ZoneShape> {
        let accepted: Vec<ZoneShape> = shapes
            .into_iter()
            .filter(|shape| !shape.points.is_empty() && !self.is_blocked(&shape.points))
            .collect();
        for bounds in accepted.iter().filter_map(ZoneShape::bounds) {
            self.push(Obstacle::new(bounds, source));
        }
        accepted
    }

    /// Keep the shapes of `output` that clear every obstacle, in order
    ///
    /// Pairs stay pairs: a blocked wall drops its inner shape too. Network
    /// shapes go through [`Self::filter_network`].
    pub fn filter(&mut self, output: ZoneOutput, source: &str) -> ZoneOutput {
        match output {
            ZoneOutput::Paired(pairs) => ZoneOutput::Paired(
                pairs
                    .into_iter()
                    .filter(|pair| self.admit_pair(pair, source))
                    .collect(),
            ),
            ZoneOutput::Single(shapes) => ZoneOutput::Single(
                shapes
                    .into_iter()
                    .filter(|shape| self.admit(shape, source))
                    .collect(),
            ),
            ZoneOutput::Network(shapes) => ZoneOutput::Network(self.filter_network(shapes, source)),
        }
    }
}
