//! Tests for layout constants

#[cfg(test)]
mod tests {
    use siteplan::geometry::frames::{pixels_per_meter, print_cm_to_pixels};
    use siteplan::io::configuration::{
        BASTION_INTERVAL_M, BASTION_SIZE_M, DEFAULT_GAP_M, DEFAULT_SEED, DPI, LEVEL_BUILDING,
        LEVEL_GROUND, LEVEL_STREET, RESOLUTION_ROUNDS, RICH_GAP_M, RICH_HOUSE_SIZE_M,
        RICH_WALL_FRACTION, SCALE_RATIO, TILE_OVERLAP_CM,
    };

    // Tests resolution defaults
    // Verified by changing the gap
    #[test]
    fn test_resolution_defaults() {
        assert_eq!(DEFAULT_GAP_M, 20.0);
        assert_eq!(RESOLUTION_ROUNDS, 5);
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests streets engrave deeper than ground and buildings stay highest
    // Verified by swapping street and ground levels
    #[test]
    fn test_grey_level_order() {
        assert!(LEVEL_STREET < LEVEL_GROUND);
        assert!(LEVEL_GROUND < LEVEL_BUILDING);
        assert_eq!(LEVEL_BUILDING, u8::MAX);
    }

    // Tests the print scale gives about six pixels per meter
    // Verified by inverting the scale ratio
    #[test]
    fn test_print_scale() {
        let scale = pixels_per_meter(SCALE_RATIO, DPI);

        assert!((scale - 5.905_511).abs() < 1e-5);
        assert_eq!(print_cm_to_pixels(TILE_OVERLAP_CM, DPI), 118);
    }

    // Tests rich plots leave a courtyard and bastions leave room for walls
    // Verified by setting the wall fraction to one half
    #[test]
    fn test_generator_defaults_are_consistent() {
        assert!(RICH_WALL_FRACTION < 0.5);
        assert!(RICH_GAP_M >= 0.0 && RICH_HOUSE_SIZE_M > 0.0);
        assert!(BASTION_INTERVAL_M > BASTION_SIZE_M);
    }
}
