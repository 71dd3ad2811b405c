//! Poor housing: dense scanline packing of small jittered houses

use serde::{Deserialize, Serialize};

use crate::geometry::shapes::wobbly_rect;
use crate::io::configuration::{
    POOR_COALESCE_PROBABILITY, POOR_GAP_M, POOR_HOUSE_H_M, POOR_HOUSE_W_M, POOR_JITTER_M,
    POOR_SKIP_PROBABILITY, POOR_WOBBLE_M,
};
use crate::math::sampler::ZoneRng;
use crate::zones::shape::{
    ShapeCategory, ZoneGenerator, ZoneOutput, ZoneShape, is_degenerate_area,
};

/// Parameters of the poor housing generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoorHousing {
    /// Base footprint width
    pub house_w: f64,
    /// Base footprint depth, also the row pitch
    pub house_h: f64,
    /// Minimum spacing between houses and rows
    pub gap: f64,
    /// Probability of leaving a slot empty
    pub skip_probability: f64,
    /// Probability of merging a slot with the next one
    pub coalesce_probability: f64,
    /// Maximum footprint jitter in either direction
    pub jitter: f64,
    /// Corner perturbation
    pub wobble: f64,
}

impl Default for PoorHousing {
    fn default() -> Self {
        Self {
            house_w: POOR_HOUSE_W_M,
            house_h: POOR_HOUSE_H_M,
            gap: POOR_GAP_M,
            skip_probability: POOR_SKIP_PROBABILITY,
            coalesce_probability: POOR_COALESCE_PROBABILITY,
            jitter: POOR_JITTER_M,
            wobble: POOR_WOBBLE_M,
        }
    }
}

impl PoorHousing {
    // Jitter must stay below the footprint so every step advances
    fn is_valid(&self) -> bool {
        let jitter = self.jitter.abs();
        self.house_w > 0.0
            && self.house_h > 0.0
            && self.gap >= 0.0
            && jitter < self.house_w
            && jitter < self.house_h
    }

    /// Pack houses left to right, top to bottom
    ///
    /// Each slot is skipped, merged with the next slot into a double-width
    /// house, or filled with a single house. Houses are only emitted when
    /// their jittered footprint stays inside the area.
    pub fn generate_shapes(&self, width: f64, length: f64, seed: u64) -> Vec<ZoneShape> {
        let mut houses = Vec::new();
        if is_degenerate_area(width, length) || !self.is_valid() {
            return houses;
        }

        let mut rng = ZoneRng::seeded(seed);
        let double_w = self.house_w * 2.0 + self.gap;

        let mut y = 0.0;
        while y + self.house_h <= length {
            let mut x = 0.0;
            while x + self.house_w <= width {
                if rng.chance(self.skip_probability) {
                    x += self.house_w + self.gap;
                    continue;
                }

                let coalesce = rng.chance(self.coalesce_probability) && x + double_w <= width;
                let base_w = if coalesce { double_w } else { self.house_w };
                let w = base_w + rng.jitter(self.jitter);
                let h = self.house_h + rng.jitter(self.jitter);

                if x + w <= width && y + h <= length {
                    houses.push(ZoneShape::new(
                        wobbly_rect(&mut rng, x, y, w, h, self.wobble),
                        ShapeCategory::Poor,
                    ));
                }

                x += w + self.gap;
            }
            y += self.house_h + self.gap;
        }
        houses
    }
}

impl ZoneGenerator for PoorHousing {
    fn generate(&self, width: f64, length: f64, seed: u64) -> ZoneOutput {
        ZoneOutput::Single(self.generate_shapes(width, length, seed))
    }
}
