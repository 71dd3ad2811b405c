//! Tests for points, bounding boxes and the perturbed rectangle primitive

#[cfg(test)]
mod tests {
    use siteplan::geometry::shapes::{Aabb, Point, wobbly_rect};
    use siteplan::math::sampler::ZoneRng;

    // Tests corner order and exact placement without perturbation
    // Verified by swapping the second and fourth anchors
    #[test]
    fn test_wobbly_rect_without_wobble_is_exact() {
        let mut rng = ZoneRng::seeded(1);
        let corners = wobbly_rect(&mut rng, 2.0, 3.0, 10.0, 4.0, 0.0);

        assert_eq!(
            corners,
            [
                Point::new(2.0, 3.0),
                Point::new(12.0, 3.0),
                Point::new(12.0, 7.0),
                Point::new(2.0, 7.0),
            ]
        );
    }

    // Tests each corner stays within the wobble amplitude of its anchor
    // Verified by doubling the jitter amplitude
    #[test]
    fn test_wobbly_rect_stays_within_wobble() {
        let mut rng = ZoneRng::seeded(7);
        let anchors = [(0.0, 0.0), (5.0, 0.0), (5.0, 8.0), (0.0, 8.0)];

        for _ in 0..50 {
            let corners = wobbly_rect(&mut rng, 0.0, 0.0, 5.0, 8.0, 0.3);
            for (corner, (ax, ay)) in corners.iter().zip(anchors) {
                assert!((corner.x - ax).abs() <= 0.3);
                assert!((corner.y - ay).abs() <= 0.3);
            }
        }
    }

    // Tests the primitive consumes exactly two draws per corner
    // Verified by drawing the y offset only once per rectangle
    #[test]
    fn test_wobbly_rect_consumes_eight_draws() {
        let mut via_rect = ZoneRng::seeded(99);
        let mut via_jitter = ZoneRng::seeded(99);

        let _ = wobbly_rect(&mut via_rect, 0.0, 0.0, 1.0, 1.0, 0.3);
        for _ in 0..8 {
            let _ = via_jitter.jitter(0.3);
        }

        assert_eq!(via_rect.unit().to_bits(), via_jitter.unit().to_bits());
    }

    // Tests that boxes sharing only an edge do not overlap
    // Verified by relaxing the strict comparisons to inclusive ones
    #[test]
    fn test_overlap_is_strict() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let touching = Aabb::new(10.0, 0.0, 20.0, 10.0);
        let corner = Aabb::new(10.0, 10.0, 20.0, 20.0);
        let inside = Aabb::new(9.0, 9.0, 20.0, 20.0);

        assert!(!a.overlaps(&touching));
        assert!(!a.overlaps(&corner));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    // Tests centered construction and padding
    // Verified by applying padding to one side only
    #[test]
    fn test_box_construction_helpers() {
        let centered = Aabb::centered(Point::new(10.0, 20.0), 4.0, 6.0);
        assert_eq!(centered, Aabb::new(8.0, 17.0, 12.0, 23.0));
        assert_eq!(centered.width(), 4.0);
        assert_eq!(centered.height(), 6.0);
        assert_eq!(centered.center(), Point::new(10.0, 20.0));

        let padded = centered.padded(1.0);
        assert_eq!(padded, Aabb::new(7.0, 16.0, 13.0, 24.0));
        assert_eq!(centered.padded(0.0), centered);
    }

    // Tests points serialize as two-element arrays
    // Verified by serializing through a named-field struct
    #[test]
    fn test_point_serializes_as_pair() {
        let json = serde_json::to_string(&Point::new(1.5, -2.0)).expect("Failed to serialize");
        assert_eq!(json, "[1.5,-2.0]");

        let point: Point = serde_json::from_str("[3.0, 4.0]").expect("Failed to parse point");
        assert_eq!(point, Point::new(3.0, 4.0));
    }
}
