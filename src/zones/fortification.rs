//! Fortification ring: bastions along the perimeter joined by curtain walls

use serde::{Deserialize, Serialize};

use crate::geometry::shapes::{Point, wobbly_rect};
use crate::io::configuration::{
    BASTION_INTERVAL_M, BASTION_SIZE_M, CURTAIN_WALL_THICKNESS_M, FORTIFICATION_WOBBLE_M,
};
use crate::math::sampler::ZoneRng;
use crate::zones::shape::{
    ShapeCategory, ZoneGenerator, ZoneOutput, ZoneShape, is_degenerate_area,
};

// Curtain walls reach slightly into the bastions they join
const WALL_OVERLAP_M: f64 = 0.5;

/// Parameters of the fortification generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FortificationRing {
    /// Side of each square bastion
    pub bastion_size: f64,
    /// Target distance between bastion centers
    pub interval: f64,
    /// Thickness of the curtain walls
    pub wall_thickness: f64,
    /// Corner perturbation
    pub wobble: f64,
}

impl Default for FortificationRing {
    fn default() -> Self {
        Self {
            bastion_size: BASTION_SIZE_M,
            interval: BASTION_INTERVAL_M,
            wall_thickness: CURTAIN_WALL_THICKNESS_M,
            wobble: FORTIFICATION_WOBBLE_M,
        }
    }
}

impl FortificationRing {
    /// Bastion centers along one edge of `extent` meters
    ///
    /// Both ends always carry a bastion; a closing bastion is appended when
    /// the last regular station falls short of the far corner.
    pub fn stations(&self, extent: f64) -> Vec<f64> {
        let mut stations = Vec::new();
        if self.interval.is_nan() || self.interval <= 0.0 || !extent.is_finite() || extent < 0.0 {
            return stations;
        }
        let mut offset = 0.0;
        while offset <= extent + 0.1 {
            stations.push(offset);
            offset += self.interval;
        }
        if stations
            .last()
            .is_some_and(|&last| last < extent - self.bastion_size / 2.0)
        {
            stations.push(extent);
        }
        stations
    }

    /// Generate bastions then curtain walls around the area edge
    pub fn generate_shapes(&self, width: f64, length: f64, seed: u64) -> Vec<ZoneShape> {
        if is_degenerate_area(width, length)
            || self.bastion_size.is_nan()
            || self.bastion_size <= 0.0
        {
            return Vec::new();
        }

        let mut rng = ZoneRng::seeded(seed);
        let across = self.stations(width);
        let down = self.stations(length);
        let interior_down = down
            .get(1..down.len().saturating_sub(1))
            .unwrap_or_default();

        let mut bastions = Vec::new();
        for &y in &[0.0, length] {
            for &x in &across {
                bastions.push(Point::new(x, y));
            }
        }
        for &x in &[0.0, width] {
            for &y in interior_down {
                bastions.push(Point::new(x, y));
            }
        }

        let mut shapes: Vec<ZoneShape> = bastions
            .into_iter()
            .map(|center| {
                self.centered(
                    &mut rng,
                    center,
                    self.bastion_size,
                    self.bastion_size,
                    ShapeCategory::Bastion,
                )
            })
            .collect();

        for &y in &[0.0, length] {
            for pair in across.windows(2) {
                let &[start, end] = pair else { continue };
                let Some(span) = self.wall_span(start, end) else {
                    continue;
                };
                let center = Point::new((start + end) / 2.0, y);
                shapes.push(self.centered(
                    &mut rng,
                    center,
                    span,
                    self.wall_thickness,
                    ShapeCategory::CurtainWall,
                ));
            }
        }
        for &x in &[0.0, width] {
            for pair in down.windows(2) {
                let &[start, end] = pair else { continue };
                let Some(span) = self.wall_span(start, end) else {
                    continue;
                };
                let center = Point::new(x, (start + end) / 2.0);
                shapes.push(self.centered(
                    &mut rng,
                    center,
                    self.wall_thickness,
                    span,
                    ShapeCategory::CurtainWall,
                ));
            }
        }
        shapes
    }

    // Wall length between two bastion centers, `None` when they touch
    fn wall_span(&self, start: f64, end: f64) -> Option<f64> {
        let span = end - start - self.bastion_size + WALL_OVERLAP_M;
        (span > 0.0).then_some(span)
    }

    fn centered(
        &self,
        rng: &mut ZoneRng,
        center: Point,
        w: f64,
        h: f64,
        category: ShapeCategory,
    ) -> ZoneShape {
        let corners = wobbly_rect(
            rng,
            center.x - w / 2.0,
            center.y - h / 2.0,
            w,
            h,
            self.wobble,
        );
        ZoneShape::new(corners, category)
    }
}

impl ZoneGenerator for FortificationRing {
    fn generate(&self, width: f64, length: f64, seed: u64) -> ZoneOutput {
        ZoneOutput::Network(self.generate_shapes(width, length, seed))
    }
}
