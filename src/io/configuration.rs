//! Layout constants and runtime configuration defaults

// Landmark resolution
/// Default clearance between a landmark and the parent it is placed against
pub const DEFAULT_GAP_M: f64 = 20.0;
/// Number of relaxation rounds before unresolved landmarks are reported
pub const RESOLUTION_ROUNDS: usize = 5;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Print scale: 1:4000 at 600 DPI
/// Map scale denominator
pub const SCALE_RATIO: f64 = 4000.0;
/// Output resolution in dots per inch
pub const DPI: f64 = 600.0;
/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

// Laser engraving grey levels
/// Untouched ground between structures
pub const LEVEL_GROUND: u8 = 50;
/// Streets and lanes, burned deepest
pub const LEVEL_STREET: u8 = 20;
/// Buildings, left at full height
pub const LEVEL_BUILDING: u8 = 255;

/// Margin around a rendered focus area
pub const CANVAS_PADDING_M: f64 = 10.0;
/// Overlap shared by adjacent print tiles
pub const TILE_OVERLAP_CM: f64 = 0.5;
/// Clearance added around fixed landmarks when they become obstacles
pub const OBSTACLE_PADDING_M: f64 = 0.0;

// Rich housing
/// Side of a square rich-zone plot
pub const RICH_HOUSE_SIZE_M: f64 = 15.0;
/// Spacing between rich-zone plots
pub const RICH_GAP_M: f64 = 4.0;
/// Fraction of the plot side taken by the house walls
pub const RICH_WALL_FRACTION: f64 = 0.25;
/// Corner perturbation of the house footprint
pub const RICH_WALL_WOBBLE_M: f64 = 0.3;
/// Corner perturbation of the courtyard
pub const RICH_COURTYARD_WOBBLE_M: f64 = 0.1;

// Poor housing
/// Base footprint width of a poor-zone house
pub const POOR_HOUSE_W_M: f64 = 5.0;
/// Base footprint depth of a poor-zone house
pub const POOR_HOUSE_H_M: f64 = 6.0;
/// Minimum spacing between poor-zone houses
pub const POOR_GAP_M: f64 = 1.0;
/// Probability of leaving a slot empty
pub const POOR_SKIP_PROBABILITY: f64 = 0.2;
/// Probability of merging a slot with its neighbour
pub const POOR_COALESCE_PROBABILITY: f64 = 0.3;
/// Maximum footprint jitter in either direction
pub const POOR_JITTER_M: f64 = 0.5;
/// Corner perturbation of poor-zone houses
pub const POOR_WOBBLE_M: f64 = 0.2;

// Street networks
/// Block size between regular streets
pub const STREET_BLOCK_INTERVAL_M: f64 = 30.0;
/// Width of regular streets
pub const STREET_WIDTH_M: f64 = 4.0;
/// Width of organic lanes
pub const LANE_WIDTH_M: f64 = 2.5;
/// Area served by a single organic lane
pub const ORGANIC_STREET_AREA_M2: f64 = 1200.0;
/// Corner perturbation of organic lanes
pub const LANE_WOBBLE_M: f64 = 0.5;

// Industrial blocks
/// Smallest industrial building side
pub const INDUSTRIAL_MIN_SIDE_M: f64 = 8.0;
/// Largest industrial building side
pub const INDUSTRIAL_MAX_SIDE_M: f64 = 20.0;
/// Spacing between industrial buildings
pub const INDUSTRIAL_GAP_M: f64 = 3.0;
/// Corner perturbation of industrial buildings
pub const INDUSTRIAL_WOBBLE_M: f64 = 0.2;

// Fortifications
/// Side of a square bastion
pub const BASTION_SIZE_M: f64 = 12.0;
/// Distance between bastion centers along a wall
pub const BASTION_INTERVAL_M: f64 = 30.0;
/// Thickness of curtain wall segments
pub const CURTAIN_WALL_THICKNESS_M: f64 = 6.0;
/// Corner perturbation of bastions and walls
pub const FORTIFICATION_WOBBLE_M: f64 = 0.3;
