//! Tests for landmark records and their JSON form

#[cfg(test)]
mod tests {
    use siteplan::landmarks::model::{
        Axis, Dimensions, Direction, Landmark, Location, ShapeKind,
    };

    // Tests missing optional fields fall back to their defaults
    // Verified by removing the default on the region field
    #[test]
    fn test_landmark_defaults() {
        let json = r#"{
            "id": "stupa",
            "name": "Stupa",
            "shape": "CIRCLE",
            "dimensions_m": {"diameter": 25.0},
            "location": {"relative_to": "citadel_mound"}
        }"#;

        let landmark: Landmark = serde_json::from_str(json).expect("Failed to parse landmark");

        assert_eq!(landmark.region, "Unknown");
        assert_eq!(landmark.description, "");
        assert_eq!(landmark.dimensions.width, 0.0);
        assert_eq!(landmark.dimensions.diameter, 25.0);
        assert_eq!(landmark.dimensions.grid_rows, 0);
        assert_eq!(
            landmark.location,
            Location::Relative {
                relative_to: "citadel_mound".to_string(),
                direction: Direction::North,
                offset_x: 0.0,
                offset_y: 0.0,
            }
        );
    }

    // Tests absolute locations and shape aliases parse
    // Verified by removing the RECT_ZONE rename
    #[test]
    fn test_absolute_location_and_shape_names() {
        let json = r#"{
            "id": "lower_town",
            "name": "Lower Town",
            "shape": "RECT_ZONE",
            "dimensions": {"width": 200.0, "length": 150.0},
            "location": {"grid_x": 10.0, "grid_y": -40.0}
        }"#;

        let landmark: Landmark = serde_json::from_str(json).expect("Failed to parse landmark");

        assert_eq!(landmark.shape, ShapeKind::Zone);
        assert!(landmark.shape.is_area());
        assert_eq!(landmark.location.parent(), None);
        assert_eq!(
            landmark.location,
            Location::Absolute {
                grid_x: 10.0,
                grid_y: -40.0
            }
        );

        let border: ShapeKind =
            serde_json::from_str("\"RECT_BORDER\"").expect("Failed to parse shape");
        assert_eq!(border, ShapeKind::Border);
        let rect: ShapeKind = serde_json::from_str("\"RECTANGLE\"").expect("Failed to parse shape");
        assert_eq!(rect, ShapeKind::Rect);
    }

    // Tests a diameter overrides width and length only for circles
    // Verified by applying the diameter to ovals too
    #[test]
    fn test_half_extent_uses_diameter_for_circles() {
        let mut dims = Dimensions::rect(40.0, 10.0);
        dims.diameter = 30.0;

        assert_eq!(dims.half_extent(Axis::X, ShapeKind::Circle), 15.0);
        assert_eq!(dims.half_extent(Axis::Y, ShapeKind::Circle), 15.0);
        assert_eq!(dims.half_extent(Axis::X, ShapeKind::Oval), 20.0);
        assert_eq!(dims.half_extent(Axis::Y, ShapeKind::Rect), 5.0);
        assert_eq!(
            Dimensions::rect(40.0, 10.0).half_extent(Axis::X, ShapeKind::Circle),
            20.0
        );
    }

    // Tests direction axes and signs
    // Verified by swapping the signs of EAST and WEST
    #[test]
    fn test_direction_axis_and_sign() {
        assert_eq!(Direction::North.axis(), Axis::Y);
        assert_eq!(Direction::West.axis(), Axis::X);
        assert_eq!(Direction::East.sign(), 1.0);
        assert_eq!(Direction::South.sign(), -1.0);

        let parsed: Direction = serde_json::from_str("\"WEST\"").expect("Failed to parse");
        assert_eq!(parsed, Direction::West);
    }

    // Tests builder helpers set the relative offset and metadata
    // Verified by ignoring the offset on relative landmarks
    #[test]
    fn test_builders() {
        let landmark = Landmark::relative(
            "granary",
            ShapeKind::Grid,
            Dimensions::rect(50.0, 27.0),
            "great_bath",
            Direction::West,
        )
        .offset(2.0, -3.0)
        .named("Granary")
        .in_region("Citadel");

        assert_eq!(landmark.name, "Granary");
        assert_eq!(landmark.region, "Citadel");
        assert_eq!(landmark.location.parent(), Some("great_bath"));
        match landmark.location {
            Location::Relative {
                offset_x, offset_y, ..
            } => {
                assert_eq!(offset_x, 2.0);
                assert_eq!(offset_y, -3.0);
            }
            Location::Absolute { .. } => unreachable!("Expected a relative location"),
        }
    }
}
