//! Tests for the fortification ring generator

#[cfg(test)]
mod tests {
    use siteplan::zones::fortification::FortificationRing;
    use siteplan::zones::shape::{ShapeCategory, ZoneGenerator, ZoneOutput};

    fn ring() -> FortificationRing {
        FortificationRing {
            wobble: 0.0,
            ..FortificationRing::default()
        }
    }

    // Tests stations run every interval and close at the far corner
    // Verified by never appending the closing station
    #[test]
    fn test_stations() {
        let ring = ring();

        assert_eq!(ring.stations(100.0), vec![0.0, 30.0, 60.0, 90.0, 100.0]);
        assert_eq!(ring.stations(60.0), vec![0.0, 30.0, 60.0]);
        assert_eq!(ring.stations(92.0), vec![0.0, 30.0, 60.0, 90.0]);
    }

    // Tests bastion and wall counts around a 100 by 60 area
    // Verified by placing side bastions at the corners a second time
    #[test]
    fn test_perimeter_counts() {
        let shapes = ring().generate_shapes(100.0, 60.0, 1);

        let bastions = shapes
            .iter()
            .filter(|s| s.category == ShapeCategory::Bastion)
            .count();
        let walls = shapes
            .iter()
            .filter(|s| s.category == ShapeCategory::CurtainWall)
            .count();

        // Five stations on each long edge, one interior station per short edge
        assert_eq!(bastions, 12);
        // Closing bastion at 100 m is too close to the one at 90 m for a wall
        assert_eq!(walls, 10);
    }

    // Tests bastions are centered on the area edge
    // Verified by anchoring bastions at their top-left corner
    #[test]
    fn test_bastions_centered_on_edge() {
        let shapes = ring().generate_shapes(100.0, 60.0, 1);

        let corner = shapes
            .first()
            .and_then(|s| s.bounds())
            .expect("Corner bastion exists");
        assert_eq!(corner.center().x, 0.0);
        assert_eq!(corner.center().y, 0.0);
        assert_eq!(corner.width(), 12.0);
    }

    // Tests curtain walls bridge the gap between neighbouring bastions
    // Verified by dropping the overlap allowance
    #[test]
    fn test_curtain_wall_span() {
        let shapes = ring().generate_shapes(100.0, 60.0, 1);

        let wall = shapes
            .iter()
            .find(|s| s.category == ShapeCategory::CurtainWall)
            .and_then(|s| s.bounds())
            .expect("A curtain wall exists");
        assert!((wall.width() - 18.5).abs() < 1e-9);
        assert!((wall.height() - 6.0).abs() < 1e-9);
        assert!((wall.center().x - 15.0).abs() < 1e-9);
    }

    // Tests the same seed reproduces the wobbled ring
    // Verified by reseeding between bastions and walls
    #[test]
    fn test_deterministic_per_seed() {
        let generator = FortificationRing::default();

        assert_eq!(
            generator.generate(120.0, 90.0, 42),
            generator.generate(120.0, 90.0, 42)
        );
        assert!(generator.generate(0.0, 90.0, 42).is_empty());
        let unsized_ring = FortificationRing {
            bastion_size: f64::NAN,
            ..FortificationRing::default()
        };
        assert!(unsized_ring.generate(120.0, 90.0, 42).is_empty());
        assert!(FortificationRing { interval: f64::NAN, ..ring() }.stations(90.0).is_empty());
    }

    // Tests the ring is handed to the planner as one network
    // Verified by returning the ring as individually filtered shapes
    #[test]
    fn test_ring_is_network_output() {
        let output = FortificationRing::default().generate(120.0, 90.0, 42);

        assert!(matches!(output, ZoneOutput::Network(ref shapes) if shapes.len() == 28));
    }
}
