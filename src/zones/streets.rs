//! Street networks: regular grids and organic cut-through lanes

use serde::{Deserialize, Serialize};

use crate::geometry::shapes::wobbly_rect;
use crate::io::configuration::{
    LANE_WIDTH_M, LANE_WOBBLE_M, ORGANIC_STREET_AREA_M2, STREET_BLOCK_INTERVAL_M, STREET_WIDTH_M,
};
use crate::math::sampler::ZoneRng;
use crate::zones::shape::{
    ShapeCategory, ZoneGenerator, ZoneOutput, ZoneShape, is_degenerate_area,
};

/// Layout family of a street network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreetStyle {
    /// Full-span strips at a fixed block interval
    #[default]
    Regular,
    /// Randomly placed full-span lanes, count derived from the area
    Organic,
}

/// Parameters of the street network generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreetNetwork {
    /// Layout family
    pub style: StreetStyle,
    /// Block size between regular streets
    pub block_interval: f64,
    /// Width of regular streets
    pub street_width: f64,
    /// Width of organic lanes
    pub lane_width: f64,
    /// Area served by a single organic lane
    pub area_per_lane: f64,
    /// Corner perturbation of organic lanes
    pub lane_wobble: f64,
}

impl Default for StreetNetwork {
    fn default() -> Self {
        Self {
            style: StreetStyle::Regular,
            block_interval: STREET_BLOCK_INTERVAL_M,
            street_width: STREET_WIDTH_M,
            lane_width: LANE_WIDTH_M,
            area_per_lane: ORGANIC_STREET_AREA_M2,
            lane_wobble: LANE_WOBBLE_M,
        }
    }
}

impl StreetNetwork {
    /// Network of the given style with default parameters
    pub fn new(style: StreetStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Generate street strips for an area
    pub fn generate_shapes(&self, width: f64, length: f64, seed: u64) -> Vec<ZoneShape> {
        if is_degenerate_area(width, length) {
            return Vec::new();
        }
        let mut rng = ZoneRng::seeded(seed);
        match self.style {
            StreetStyle::Regular => self.regular(&mut rng, width, length),
            StreetStyle::Organic => self.organic(&mut rng, width, length),
        }
    }

    // Horizontal streets first, then vertical ones, each after a full block
    fn regular(&self, rng: &mut ZoneRng, width: f64, length: f64) -> Vec<ZoneShape> {
        let mut streets = Vec::new();
        let street = self.street_width;
        if self.block_interval.is_nan()
            || self.block_interval <= 0.0
            || street.is_nan()
            || street <= 0.0
        {
            return streets;
        }
        let stride = self.block_interval + street;

        let mut y = self.block_interval;
        while y + street <= length {
            streets.push(ZoneShape::new(
                wobbly_rect(rng, 0.0, y, width, street, 0.0),
                ShapeCategory::Street,
            ));
            y += stride;
        }

        let mut x = self.block_interval;
        while x + street <= width {
            streets.push(ZoneShape::new(
                wobbly_rect(rng, x, 0.0, street, length, 0.0),
                ShapeCategory::Street,
            ));
            x += stride;
        }
        streets
    }

    fn organic(&self, rng: &mut ZoneRng, width: f64, length: f64) -> Vec<ZoneShape> {
        let mut lanes = Vec::new();
        let lane = self.lane_width;
        if self.area_per_lane.is_nan()
            || self.area_per_lane <= 0.0
            || lane.is_nan()
            || lane <= 0.0
        {
            return lanes;
        }

        let count = (width * length / self.area_per_lane).floor() as usize;
        for _ in 0..count {
            let horizontal = rng.chance(0.5);
            let span = if horizontal { length } else { width };
            let offset = rng.uniform(0.0, (span - lane).max(0.0));
            if lane > span {
                continue;
            }
            let corners = if horizontal {
                wobbly_rect(rng, 0.0, offset, width, lane, self.lane_wobble)
            } else {
                wobbly_rect(rng, offset, 0.0, lane, length, self.lane_wobble)
            };
            lanes.push(ZoneShape::new(corners, ShapeCategory::Lane));
        }
        lanes
    }
}

impl ZoneGenerator for StreetNetwork {
    fn generate(&self, width: f64, length: f64, seed: u64) -> ZoneOutput {
        ZoneOutput::Network(self.generate_shapes(width, length, seed))
    }
}
