//! Industrial blocks: loose row packing of variably sized buildings

use serde::{Deserialize, Serialize};

use crate::geometry::shapes::wobbly_rect;
use crate::io::configuration::{
    INDUSTRIAL_GAP_M, INDUSTRIAL_MAX_SIDE_M, INDUSTRIAL_MIN_SIDE_M, INDUSTRIAL_WOBBLE_M,
};
use crate::math::sampler::ZoneRng;
use crate::zones::shape::{
    ShapeCategory, ZoneGenerator, ZoneOutput, ZoneShape, is_degenerate_area,
};

/// Parameters of the industrial block generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndustrialBlocks {
    /// Smallest building width
    pub min_w: f64,
    /// Largest building width
    pub max_w: f64,
    /// Smallest building depth
    pub min_h: f64,
    /// Largest building depth
    pub max_h: f64,
    /// Spacing between buildings and rows
    pub gap: f64,
    /// Corner perturbation
    pub wobble: f64,
}

impl Default for IndustrialBlocks {
    fn default() -> Self {
        Self {
            min_w: INDUSTRIAL_MIN_SIDE_M,
            max_w: INDUSTRIAL_MAX_SIDE_M,
            min_h: INDUSTRIAL_MIN_SIDE_M,
            max_h: INDUSTRIAL_MAX_SIDE_M,
            gap: INDUSTRIAL_GAP_M,
            wobble: INDUSTRIAL_WOBBLE_M,
        }
    }
}

impl IndustrialBlocks {
    fn is_valid(&self) -> bool {
        self.min_w > 0.0
            && self.min_h > 0.0
            && self.max_w >= self.min_w
            && self.max_h >= self.min_h
            && self.max_w.is_finite()
            && self.max_h.is_finite()
            && self.gap >= 0.0
    }

    /// Place buildings left to right, wrapping to a new row when one no
    /// longer fits
    ///
    /// The tallest building sampled in a row sets the vertical advance to the
    /// next row. Buildings overhanging the bottom edge are dropped.
    pub fn generate_shapes(&self, width: f64, length: f64, seed: u64) -> Vec<ZoneShape> {
        let mut buildings = Vec::new();
        if is_degenerate_area(width, length) || !self.is_valid() {
            return buildings;
        }

        let mut rng = ZoneRng::seeded(seed);
        let mut x = 0.0;
        let mut y = 0.0;
        let mut row_height: f64 = 0.0;

        while y < length {
            let w = rng.uniform(self.min_w, self.max_w);
            let h = rng.uniform(self.min_h, self.max_h);

            if x > 0.0 && x + w > width {
                x = 0.0;
                y += row_height + self.gap;
                row_height = 0.0;
                if y >= length {
                    break;
                }
            }
            if w > width {
                break;
            }

            if y + h <= length {
                buildings.push(ZoneShape::new(
                    wobbly_rect(&mut rng, x, y, w, h, self.wobble),
                    ShapeCategory::Industrial,
                ));
            }
            row_height = row_height.max(h);
            x += w + self.gap;
        }
        buildings
    }
}

impl ZoneGenerator for IndustrialBlocks {
    fn generate(&self, width: f64, length: f64, seed: u64) -> ZoneOutput {
        ZoneOutput::Single(self.generate_shapes(width, length, seed))
    }
}
