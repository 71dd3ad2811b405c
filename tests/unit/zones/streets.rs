//! Tests for regular and organic street networks

#[cfg(test)]
mod tests {
    use siteplan::zones::shape::{ShapeCategory, ZoneGenerator};
    use siteplan::zones::streets::{StreetNetwork, StreetStyle};

    // Tests a regular grid places full-span strips after every block
    // Verified by omitting the street width from the stride
    #[test]
    fn test_regular_grid() {
        let streets = StreetNetwork::new(StreetStyle::Regular).generate_shapes(100.0, 70.0, 1);

        assert_eq!(streets.len(), 4);
        let bounds: Vec<_> = streets
            .iter()
            .map(|street| street.bounds().expect("Street has points"))
            .collect();

        // Horizontal strips at y = 30 and y = 64
        assert_eq!(bounds.first().map(|b| (b.min_y, b.width())), Some((30.0, 100.0)));
        assert_eq!(bounds.get(1).map(|b| (b.min_y, b.height())), Some((64.0, 4.0)));
        // Vertical strips at x = 30 and x = 64
        assert_eq!(bounds.get(2).map(|b| (b.min_x, b.height())), Some((30.0, 70.0)));
        assert_eq!(bounds.get(3).map(|b| b.min_x), Some(64.0));
        assert!(streets.iter().all(|s| s.category == ShapeCategory::Street));
    }

    // Tests the organic lane count follows the area density
    // Verified by rounding the lane count up
    #[test]
    fn test_organic_lane_count() {
        let network = StreetNetwork::new(StreetStyle::Organic);

        assert_eq!(network.generate_shapes(100.0, 60.0, 9).len(), 5);
        assert_eq!(network.generate_shapes(100.0, 59.0, 9).len(), 4);
        assert!(network.generate_shapes(20.0, 20.0, 9).is_empty());
    }

    // Tests each lane crosses the whole area in one direction
    // Verified by sampling lane length from the area instead of spanning it
    #[test]
    fn test_organic_lanes_span_the_area() {
        let lanes = StreetNetwork::new(StreetStyle::Organic).generate_shapes(120.0, 90.0, 4);

        for lane in &lanes {
            let bounds = lane.bounds().expect("Lane has points");
            assert_eq!(lane.category, ShapeCategory::Lane);
            let spans_width = (bounds.width() - 120.0).abs() <= 1.0;
            let spans_length = (bounds.height() - 90.0).abs() <= 1.0;
            assert!(spans_width || spans_length);
        }
    }

    // Tests lanes wider than the area are dropped
    // Verified by clamping the lane offset and emitting anyway
    #[test]
    fn test_lanes_wider_than_area_are_skipped() {
        let network = StreetNetwork {
            lane_width: 50.0,
            area_per_lane: 100.0,
            ..StreetNetwork::new(StreetStyle::Organic)
        };

        assert!(network.generate_shapes(40.0, 40.0, 2).is_empty());
    }

    // Tests both styles are reproducible from the seed
    // Verified by drawing lane orientation from a fresh unseeded stream
    #[test]
    fn test_deterministic_per_seed() {
        for style in [StreetStyle::Regular, StreetStyle::Organic] {
            let network = StreetNetwork::new(style);
            assert_eq!(
                network.generate(200.0, 150.0, 42),
                network.generate(200.0, 150.0, 42)
            );
        }
    }

    // Tests style names in plan files
    // Verified by renaming the organic variant
    #[test]
    fn test_style_names() {
        let network: StreetNetwork =
            serde_json::from_str(r#"{"style": "organic"}"#).expect("Failed to parse network");

        assert_eq!(network.style, StreetStyle::Organic);
        assert_eq!(network.street_width, StreetNetwork::default().street_width);
    }
}
