//! Greyscale heightmap rendering for laser engraving
//!
//! Grey levels encode depth: streets are burned deepest, open ground less,
//! buildings are left at full height. A canvas covers one focus landmark
//! plus a margin at print scale.

use std::path::Path;

use image::{GrayImage, Luma, imageops};
use log::{debug, info};
use ndarray::Array2;

use crate::geometry::frames::{PixelFrame, meters_to_pixels, pixels_per_meter};
use crate::geometry::shapes::{Aabb, Point};
use crate::io::configuration::{
    CANVAS_PADDING_M, DPI, LEVEL_BUILDING, LEVEL_GROUND, LEVEL_STREET, SCALE_RATIO,
};
use crate::io::error::{LayoutError, Result, WithPath};
use crate::landmarks::model::{Axis, ShapeKind};
use crate::landmarks::resolver::{LandmarkRegistry, ResolvedLandmark};
use crate::placement::feature::ProceduralFeature;
use crate::zones::shape::ShapeCategory;

/// Grey level raster together with its world mapping
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Grey levels indexed `[row, col]`
    pub levels: Array2<u8>,
    /// World to pixel mapping
    pub frame: PixelFrame,
}

impl Canvas {
    /// Blank canvas of `rows` by `cols` pixels filled with ground level
    pub fn new(rows: usize, cols: usize, frame: PixelFrame) -> Self {
        Self {
            levels: Array2::from_elem((rows, cols), LEVEL_GROUND),
            frame,
        }
    }

    /// Canvas covering `view` plus `padding` meters, centered on the view
    pub fn for_view(view: Aabb, padding: f64, scale: f64) -> Self {
        let covered = view.padded(padding);
        let cols = pixel_count(covered.width(), scale);
        let rows = pixel_count(covered.height(), scale);
        let center_px = Point::new((cols / 2) as f64, (rows / 2) as f64);
        Self::new(rows, cols, PixelFrame::new(center_px, view.center(), scale))
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.levels.ncols()
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.levels.nrows()
    }

    /// Grey level at a pixel, `None` outside the canvas
    pub fn level(&self, col: usize, row: usize) -> Option<u8> {
        self.levels.get([row, col]).copied()
    }

    /// World-space box visible on the canvas
    pub fn view(&self) -> Aabb {
        let top_left = self.frame.to_world(Point::new(0.0, 0.0));
        let bottom_right =
            self.frame.to_world(Point::new(self.width() as f64, self.height() as f64));
        Aabb::new(top_left.x, bottom_right.y, bottom_right.x, top_left.y)
    }

    /// Fill a world-space polygon using the even-odd rule at pixel centers
    pub fn fill_polygon(&mut self, outline: &[Point], level: u8) {
        let pixels: Vec<Point> = outline.iter().map(|p| self.frame.to_pixel(*p)).collect();
        if pixels.len() < 3 {
            return;
        }
        let Some(extent) = Aabb::from_points(&pixels) else {
            return;
        };
        let (first_row, last_row) =
            pixel_span(extent.min_y - 0.5, extent.max_y - 0.5, self.height());
        let cols = self.width();

        let mut crossings = Vec::new();
        for row in first_row..last_row {
            let y = row as f64 + 0.5;
            crossings.clear();
            for (a, b) in pixels.iter().zip(pixels.iter().cycle().skip(1)) {
                if (a.y <= y) != (b.y <= y) {
                    crossings.push(a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
            crossings.sort_by(f64::total_cmp);

            for span in crossings.chunks_exact(2) {
                if let [start, end] = *span {
                    let (from, to) = pixel_span(start - 0.5, end - 0.5, cols);
                    self.fill_row(row, from, to, level);
                }
            }
        }
    }

    /// Fill a world-space axis-aligned rectangle given by center and size
    pub fn fill_rect(&mut self, center: Point, width: f64, height: f64, level: u8) {
        let b = Aabb::centered(center, width, height);
        self.fill_polygon(
            &[
                Point::new(b.min_x, b.max_y),
                Point::new(b.max_x, b.max_y),
                Point::new(b.max_x, b.min_y),
                Point::new(b.min_x, b.min_y),
            ],
            level,
        );
    }

    /// Fill a world-space axis-aligned ellipse given by center and size
    pub fn fill_ellipse(&mut self, center: Point, width: f64, height: f64, level: u8) {
        let c = self.frame.to_pixel(center);
        let rx = self.frame.length(width) / 2.0;
        let ry = self.frame.length(height) / 2.0;
        if rx.is_nan() || rx <= 0.0 || ry.is_nan() || ry <= 0.0 {
            return;
        }
        let (first_row, last_row) = pixel_span(c.y - ry - 0.5, c.y + ry - 0.5, self.height());
        for row in first_row..last_row {
            let dy = (row as f64 + 0.5 - c.y) / ry;
            let reach = 1.0 - dy * dy;
            if reach < 0.0 {
                continue;
            }
            let half = rx * reach.sqrt();
            let (from, to) = pixel_span(c.x - half - 0.5, c.x + half - 0.5, self.width());
            self.fill_row(row, from, to, level);
        }
    }

    // Fill columns in [from, to) of one row
    fn fill_row(&mut self, row: usize, from: usize, to: usize, level: u8) {
        for col in from..to {
            if let Some(cell) = self.levels.get_mut([row, col]) {
                *cell = level;
            }
        }
    }

    /// Convert to an 8-bit greyscale image
    pub fn to_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            Luma([self.level(x as usize, y as usize).unwrap_or(LEVEL_GROUND)])
        })
    }
}

// Indices i with start <= i <= end as a half-open range clamped to [0, limit)
fn pixel_span(start: f64, end: f64, limit: usize) -> (usize, usize) {
    let from = start.ceil().max(0.0);
    let to = (end.floor() + 1.0).max(0.0);
    let clamp = |value: f64| (value as usize).min(limit);
    (clamp(from), clamp(to))
}

fn pixel_count(meters: f64, scale: f64) -> usize {
    usize::try_from(meters_to_pixels(meters, scale))
        .unwrap_or(0)
        .max(1)
}

/// Split an image at its horizontal midpoint into two tiles sharing
/// `overlap` pixels on each side of the cut
pub fn split_tiles(image: &GrayImage, overlap: u32) -> (GrayImage, GrayImage) {
    let (width, height) = image.dimensions();
    let split = width / 2;
    let left_end = (split + overlap).min(width);
    let right_start = split.saturating_sub(overlap);
    let left = imageops::crop_imm(image, 0, 0, left_end, height).to_image();
    let right = imageops::crop_imm(image, right_start, 0, width - right_start, height).to_image();
    (left, right)
}

/// Save an image as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the image cannot be
/// written
pub fn save_png(image: &GrayImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    image.save(path).map_err(|source| LayoutError::ImageExport {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Saved {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}

fn landmark_level(resolved: &ResolvedLandmark) -> u8 {
    let landmark = &resolved.landmark;
    let description = landmark.description.to_lowercase();
    if landmark.id.contains("street") || landmark.id.contains("lane") {
        LEVEL_STREET
    } else if description.contains("pool") || description.contains("tank") {
        LEVEL_GROUND
    } else {
        LEVEL_BUILDING
    }
}

fn draw_landmark(canvas: &mut Canvas, resolved: &ResolvedLandmark) {
    let landmark = &resolved.landmark;
    let dims = &landmark.dimensions;
    let level = landmark_level(resolved);
    match landmark.shape {
        ShapeKind::Circle | ShapeKind::Oval => {
            let (w, l) = if dims.diameter > 0.0 {
                (dims.diameter, dims.diameter)
            } else {
                (dims.width, dims.length)
            };
            canvas.fill_ellipse(resolved.center, w, l, level);
        }
        ShapeKind::Rect
        | ShapeKind::Line
        | ShapeKind::Grid
        | ShapeKind::Compound
        | ShapeKind::Border
        | ShapeKind::Zone => {
            let w = dims.half_extent(Axis::X, landmark.shape) * 2.0;
            let l = dims.half_extent(Axis::Y, landmark.shape) * 2.0;
            canvas.fill_rect(resolved.center, w, l, level);
            if dims.pool_w > 0.0 && dims.pool_l > 0.0 {
                canvas.fill_rect(resolved.center, dims.pool_w, dims.pool_l, LEVEL_GROUND);
            }
        }
    }
}

fn feature_level(category: Option<ShapeCategory>) -> u8 {
    match category {
        Some(category) if category.is_street() => LEVEL_STREET,
        Some(category) if category.is_open_ground() => LEVEL_GROUND,
        _ => LEVEL_BUILDING,
    }
}

/// Render the area around `focus` at print scale
///
/// Fixed landmarks in view are drawn first, zones and borders excepted,
/// then streets, then every other feature in stored order so courtyards
/// cut into the walls drawn before them.
///
/// # Errors
///
/// Returns `UnknownLandmark` if `focus` is not in the registry
pub fn render_site(
    registry: &LandmarkRegistry,
    features: &[ProceduralFeature],
    focus: &str,
) -> Result<Canvas> {
    let focus_bounds = registry.bounds(focus, 0.0)?;
    let mut canvas = Canvas::for_view(
        focus_bounds,
        CANVAS_PADDING_M,
        pixels_per_meter(SCALE_RATIO, DPI),
    );
    let view = canvas.view();
    debug!(
        "Rendering '{focus}' on a {}x{} canvas",
        canvas.width(),
        canvas.height()
    );

    for resolved in registry.iter() {
        if resolved.landmark.shape.is_area() || !resolved.bounds(0.0).overlaps(&view) {
            continue;
        }
        draw_landmark(&mut canvas, resolved);
    }

    let (streets, others): (Vec<&ProceduralFeature>, Vec<&ProceduralFeature>) = features
        .iter()
        .filter(|feature| feature.bounds().is_some_and(|b| b.overlaps(&view)))
        .partition(|feature| feature.category().is_some_and(ShapeCategory::is_street));
    for feature in streets.into_iter().chain(others) {
        canvas.fill_polygon(&feature.geometry.points(), feature_level(feature.category()));
    }

    Ok(canvas)
}
