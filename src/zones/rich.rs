//! Rich housing: a grid of square courtyard houses
//!
//! Every plot yields a wall footprint followed by either a courtyard cut-out
//! (open on one side, or enclosed in the middle) or a zero-area filler for
//! solid houses, so the output is always a sequence of pairs.

use serde::{Deserialize, Serialize};

use crate::geometry::shapes::wobbly_rect;
use crate::io::configuration::{
    RICH_COURTYARD_WOBBLE_M, RICH_GAP_M, RICH_HOUSE_SIZE_M, RICH_WALL_FRACTION,
    RICH_WALL_WOBBLE_M,
};
use crate::math::sampler::ZoneRng;
use crate::zones::shape::{
    HousePair, ShapeCategory, ZoneGenerator, ZoneOutput, ZoneShape, cell_offsets,
    is_degenerate_area,
};

/// Layout of the courtyard inside a rich-zone house
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HouseVariant {
    /// U-shape open toward the top edge of the zone
    OpenNorth,
    /// U-shape open toward the right edge of the zone
    OpenEast,
    /// U-shape open toward the bottom edge of the zone
    OpenSouth,
    /// U-shape open toward the left edge of the zone
    OpenWest,
    /// O-shape with a centered enclosed courtyard
    Enclosed,
    /// Solid block without a courtyard
    Solid,
}

impl HouseVariant {
    /// Every variant, in the order weights are listed
    pub const ALL: [Self; 6] = [
        Self::OpenNorth,
        Self::OpenEast,
        Self::OpenSouth,
        Self::OpenWest,
        Self::Enclosed,
        Self::Solid,
    ];
}

/// Relative likelihood of each house variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantWeights {
    /// Courtyard open to the north
    pub open_north: f64,
    /// Courtyard open to the east
    pub open_east: f64,
    /// Courtyard open to the south
    pub open_south: f64,
    /// Courtyard open to the west
    pub open_west: f64,
    /// Enclosed central courtyard
    pub enclosed: f64,
    /// Solid block
    pub solid: f64,
}

impl Default for VariantWeights {
    fn default() -> Self {
        Self {
            open_north: 0.15,
            open_east: 0.15,
            open_south: 0.15,
            open_west: 0.15,
            enclosed: 0.2,
            solid: 0.2,
        }
    }
}

impl VariantWeights {
    /// Weights in `HouseVariant::ALL` order
    pub const fn as_array(&self) -> [f64; 6] {
        [
            self.open_north,
            self.open_east,
            self.open_south,
            self.open_west,
            self.enclosed,
            self.solid,
        ]
    }
}

/// Parameters of the rich housing generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RichHousing {
    /// Side of each square plot
    pub house_size: f64,
    /// Spacing between plots
    pub gap: f64,
    /// Wall thickness as a fraction of the plot side
    pub wall_fraction: f64,
    /// Corner perturbation of the footprint
    pub wall_wobble: f64,
    /// Corner perturbation of the courtyard
    pub courtyard_wobble: f64,
    /// Likelihood of each house variant
    pub variants: VariantWeights,
}

impl Default for RichHousing {
    fn default() -> Self {
        Self {
            house_size: RICH_HOUSE_SIZE_M,
            gap: RICH_GAP_M,
            wall_fraction: RICH_WALL_FRACTION,
            wall_wobble: RICH_WALL_WOBBLE_M,
            courtyard_wobble: RICH_COURTYARD_WOBBLE_M,
            variants: VariantWeights::default(),
        }
    }
}

impl RichHousing {
    /// Plots of the given side separated by `gap`, other parameters default
    pub fn with_plot(house_size: f64, gap: f64) -> Self {
        Self {
            house_size,
            gap,
            ..Self::default()
        }
    }

    /// Generate the house pairs for an area, row by row from the top-left
    pub fn generate_pairs(&self, width: f64, length: f64, seed: u64) -> Vec<HousePair> {
        if is_degenerate_area(width, length) || self.gap.is_nan() || self.gap < 0.0 {
            return Vec::new();
        }

        let stride = self.house_size + self.gap;
        let rows = cell_offsets(length, self.house_size, stride);
        let cols = cell_offsets(width, self.house_size, stride);
        let weights = self.variants.as_array();

        let mut rng = ZoneRng::seeded(seed);
        let mut pairs = Vec::with_capacity(rows.len() * cols.len());
        for &y in &rows {
            for &x in &cols {
                let variant = HouseVariant::ALL
                    .get(rng.weighted_choice(&weights))
                    .copied()
                    .unwrap_or(HouseVariant::Solid);
                pairs.push(self.house(&mut rng, x, y, variant));
            }
        }
        pairs
    }

    fn house(&self, rng: &mut ZoneRng, x: f64, y: f64, variant: HouseVariant) -> HousePair {
        let size = self.house_size;
        let wall = ZoneShape::new(
            wobbly_rect(rng, x, y, size, size, self.wall_wobble),
            ShapeCategory::RichWall,
        );

        let inner = match self.courtyard(x, y, variant) {
            Some((cx, cy, cw, ch)) => ZoneShape::new(
                wobbly_rect(rng, cx, cy, cw, ch, self.courtyard_wobble),
                ShapeCategory::Courtyard,
            ),
            None => {
                let center = size / 2.0;
                ZoneShape::new(
                    wobbly_rect(rng, x + center, y + center, 0.0, 0.0, 0.0),
                    ShapeCategory::SolidFiller,
                )
            }
        };

        HousePair { wall, inner }
    }

    // Courtyard rectangle (x, y, w, h) in zone-local coordinates, y down
    fn courtyard(&self, x: f64, y: f64, variant: HouseVariant) -> Option<(f64, f64, f64, f64)> {
        let size = self.house_size;
        let wall = size * self.wall_fraction;
        let narrow = size - 2.0 * wall;
        let deep = size - wall;
        match variant {
            HouseVariant::OpenNorth => Some((x + wall, y, narrow, deep)),
            HouseVariant::OpenEast => Some((x + wall, y + wall, deep, narrow)),
            HouseVariant::OpenSouth => Some((x + wall, y + wall, narrow, deep)),
            HouseVariant::OpenWest => Some((x, y + wall, deep, narrow)),
            HouseVariant::Enclosed => Some((x + wall, y + wall, narrow, narrow)),
            HouseVariant::Solid => None,
        }
    }
}

impl ZoneGenerator for RichHousing {
    fn generate(&self, width: f64, length: f64, seed: u64) -> ZoneOutput {
        ZoneOutput::Paired(self.generate_pairs(width, length, seed))
    }
}
