//! Tests for heightmap rasterization and print tiling

#[cfg(test)]
mod tests {
    use image::GrayImage;
    use siteplan::LayoutError;
    use siteplan::geometry::frames::PixelFrame;
    use siteplan::geometry::shapes::{Aabb, Point};
    use siteplan::io::configuration::{LEVEL_BUILDING, LEVEL_GROUND, LEVEL_STREET};
    use siteplan::io::raster::{Canvas, render_site, save_png, split_tiles};
    use siteplan::landmarks::model::{Dimensions, Landmark, ShapeKind};
    use siteplan::landmarks::resolver::LandmarkRegistry;
    use siteplan::placement::feature::{FeatureGeometry, ProceduralFeature};

    fn unit_canvas() -> Canvas {
        Canvas::new(10, 10, PixelFrame::new(Point::new(5.0, 5.0), Point::new(0.0, 0.0), 1.0))
    }

    fn filled(canvas: &Canvas, level: u8) -> usize {
        canvas.levels.iter().filter(|&&value| value == level).count()
    }

    fn level_at(canvas: &Canvas, world: Point) -> Option<u8> {
        let pixel = canvas.frame.to_pixel(world);
        canvas.level(pixel.x as usize, pixel.y as usize)
    }

    fn rect_feature(id: &str, center: Point, size: f64, label: &str) -> ProceduralFeature {
        ProceduralFeature {
            id: id.to_string(),
            parent_id: "plaza".to_string(),
            geometry: FeatureGeometry::Rect {
                x: center.x,
                y: center.y,
                w: size,
                h: size,
            },
            description: format!("Feature in plaza ({label})"),
        }
    }

    // Tests rectangles cover exactly the pixels whose centers fall inside
    // Verified by filling pixels touched by the outline
    #[test]
    fn test_fill_rect_pixel_centers() {
        let mut canvas = unit_canvas();

        canvas.fill_rect(Point::new(0.0, 0.0), 4.0, 2.0, LEVEL_BUILDING);

        assert_eq!(filled(&canvas, LEVEL_BUILDING), 8);
        assert_eq!(canvas.level(3, 4), Some(LEVEL_BUILDING));
        assert_eq!(canvas.level(7, 4), Some(LEVEL_GROUND));
        assert_eq!(canvas.level(3, 6), Some(LEVEL_GROUND));
    }

    // Tests world y grows upward on the canvas
    // Verified by adding world y to the pixel row
    #[test]
    fn test_world_north_is_up() {
        let mut canvas = unit_canvas();

        canvas.fill_rect(Point::new(0.0, 3.0), 2.0, 2.0, LEVEL_STREET);

        assert_eq!(canvas.level(5, 2), Some(LEVEL_STREET));
        assert_eq!(canvas.level(5, 7), Some(LEVEL_GROUND));
    }

    // Tests ellipses leave the bounding box corners untouched
    // Verified by filling the whole bounding box
    #[test]
    fn test_fill_ellipse() {
        let mut canvas = unit_canvas();

        canvas.fill_ellipse(Point::new(0.0, 0.0), 4.0, 4.0, LEVEL_BUILDING);

        assert_eq!(filled(&canvas, LEVEL_BUILDING), 12);
        assert_eq!(canvas.level(5, 5), Some(LEVEL_BUILDING));
        assert_eq!(canvas.level(4, 3), Some(LEVEL_BUILDING));
        assert_eq!(canvas.level(3, 3), Some(LEVEL_GROUND));
    }

    // Tests shapes partly outside the canvas are clipped
    // Verified by removing the column clamp
    #[test]
    fn test_fill_clips_to_canvas() {
        let mut canvas = unit_canvas();

        canvas.fill_rect(Point::new(10.0, 0.0), 20.0, 20.0, LEVEL_STREET);
        canvas.fill_polygon(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)], LEVEL_BUILDING);

        assert_eq!(filled(&canvas, LEVEL_STREET), 50);
        assert_eq!(filled(&canvas, LEVEL_BUILDING), 0);
    }

    // Tests a view canvas covers the view plus its padding
    // Verified by centering the canvas on the world origin
    #[test]
    fn test_canvas_for_view() {
        let canvas = Canvas::for_view(Aabb::new(90.0, -5.0, 110.0, 5.0), 0.0, 1.0);

        assert_eq!((canvas.width(), canvas.height()), (20, 10));
        assert_eq!(canvas.view(), Aabb::new(90.0, -5.0, 110.0, 5.0));
        assert_eq!(canvas.to_image().dimensions(), (20, 10));

        let padded = Canvas::for_view(Aabb::new(0.0, 0.0, 10.0, 4.0), 3.0, 1.0);
        assert_eq!((padded.width(), padded.height()), (16, 10));
        assert_eq!(padded.view(), Aabb::new(-3.0, -3.0, 13.0, 7.0));
    }

    // Tests tiles share the overlap on both sides of the cut
    // Verified by cutting the right tile at the midpoint
    #[test]
    fn test_split_tiles() {
        let image = GrayImage::from_fn(100, 10, |x, _| image::Luma([x as u8]));

        let (left, right) = split_tiles(&image, 10);

        assert_eq!(left.dimensions(), (60, 10));
        assert_eq!(right.dimensions(), (60, 10));
        assert_eq!(right.get_pixel(0, 0).0, [40]);

        let (whole, rest) = split_tiles(&image, 80);
        assert_eq!(whole.width(), 100);
        assert_eq!(rest.width(), 100);
    }

    // Tests landmarks, streets and houses are layered in drawing order
    // Verified by drawing features strictly in stored order
    #[test]
    fn test_render_site_layers() {
        let registry = LandmarkRegistry::resolve(vec![
            Landmark::absolute("plaza", ShapeKind::Zone, Dimensions::rect(40.0, 40.0), 0.0, 0.0),
            Landmark::absolute("shrine", ShapeKind::Rect, Dimensions::rect(4.0, 4.0), 0.0, 0.0),
        ])
        .expect("Site resolves");
        let street = ProceduralFeature {
            id: "plaza_street_0".to_string(),
            parent_id: "plaza".to_string(),
            geometry: FeatureGeometry::Polygon {
                points: vec![
                    Point::new(-20.0, 12.0),
                    Point::new(20.0, 12.0),
                    Point::new(20.0, 10.0),
                    Point::new(-20.0, 10.0),
                ],
            },
            description: "Street in plaza (STREET)".to_string(),
        };
        let features = vec![
            rect_feature("plaza_house_0", Point::new(15.0, 11.0), 4.0, "POOR"),
            street,
            rect_feature("plaza_house_1", Point::new(-10.0, -10.0), 10.0, "RICH_WALL"),
            rect_feature("plaza_house_2", Point::new(-10.0, -10.0), 4.0, "COURTYARD"),
        ];

        let canvas = render_site(&registry, &features, "plaza").expect("Focus exists");

        assert_eq!(level_at(&canvas, Point::new(0.0, 0.0)), Some(LEVEL_BUILDING));
        assert_eq!(level_at(&canvas, Point::new(0.0, 11.0)), Some(LEVEL_STREET));
        assert_eq!(level_at(&canvas, Point::new(15.0, 11.0)), Some(LEVEL_BUILDING));
        assert_eq!(level_at(&canvas, Point::new(-10.0, -10.0)), Some(LEVEL_GROUND));
        assert_eq!(level_at(&canvas, Point::new(-14.0, -10.0)), Some(LEVEL_BUILDING));
        assert_eq!(level_at(&canvas, Point::new(15.0, -15.0)), Some(LEVEL_GROUND));
    }

    // Tests rendering an unknown focus fails
    // Verified by falling back to the world origin
    #[test]
    fn test_render_unknown_focus() {
        let registry = LandmarkRegistry::resolve(Vec::new()).expect("Empty site resolves");

        let result = render_site(&registry, &[], "citadel");

        assert!(matches!(result, Err(LayoutError::UnknownLandmark { .. })));
    }

    // Tests saved images land in freshly created directories
    // Verified by writing without creating the parent
    #[test]
    fn test_save_png() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("renders").join("site.png");

        save_png(&unit_canvas().to_image(), &path).expect("Image saved");

        let saved = image::open(&path).expect("Image readable").to_luma8();
        assert_eq!(saved.dimensions(), (10, 10));
        assert_eq!(saved.get_pixel(0, 0).0, [LEVEL_GROUND]);
    }
}
