//! Command-line interface for resolving landmarks, filling zones and rendering

use crate::geometry::frames::print_cm_to_pixels;
use crate::io::configuration::{DPI, TILE_OVERLAP_CM};
use crate::io::error::{LayoutError, Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::raster::{render_site, save_png, split_tiles};
use crate::io::records::{load_features, load_plan, load_registry, save_features};
use crate::landmarks::resolver::{LandmarkRegistry, ResolverConfig};
use crate::placement::feature::{ProceduralFeature, replace_zone_features};
use crate::placement::planner::{SitePlan, SitePlanner};
use clap::Parser;
use log::{LevelFilter, info};
use simple_logger::SimpleLogger;
use std::path::{Path, PathBuf};
use std::time::Instant;

const DEFAULT_FEATURES_NAME: &str = "features.json";

#[derive(Parser)]
#[command(name = "siteplan")]
#[command(
    author,
    version,
    about = "Resolve site landmarks and generate procedural zone infill"
)]
/// Command-line arguments for the site layout tool
pub struct Cli {
    /// Landmark JSON file
    #[arg(value_name = "LANDMARKS")]
    pub landmarks: PathBuf,

    /// Site plan listing the zones to fill
    #[arg(short, long)]
    pub plan: Option<PathBuf>,

    /// Stored features to merge with and avoid
    #[arg(short, long)]
    pub features: Option<PathBuf>,

    /// Where merged features are written (defaults to the features file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Render the focus area to this PNG file
    #[arg(short, long)]
    pub render: Option<PathBuf>,

    /// Landmark centered in the render (defaults to the first planned zone)
    #[arg(long)]
    pub focus: Option<String>,

    /// Also write the render as two overlapping print tiles
    #[arg(short, long)]
    pub tiles: bool,

    /// Seed used for every zone instead of the seeds in the plan
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Only log warnings and errors, hide progress
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log resolution and collision details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log level selected by the verbosity flags
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Path the merged features are written to
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .or_else(|| self.features.clone())
            .unwrap_or_else(|| {
                self.landmarks
                    .parent()
                    .map_or_else(|| PathBuf::from(DEFAULT_FEATURES_NAME), |dir| {
                        dir.join(DEFAULT_FEATURES_NAME)
                    })
            })
    }
}

/// Install the global logger at the level chosen on the command line
///
/// # Errors
///
/// Returns an error if a logger has already been installed
pub fn init_logging(cli: &Cli) -> Result<()> {
    let level = cli.log_level();
    SimpleLogger::new()
        .with_level(level)
        .init()
        .map_err(|e| invalid_parameter("log level", &level, &e))
}

/// Runs one invocation: resolve, generate, save, render
pub struct SiteProcessor {
    cli: Cli,
}

impl SiteProcessor {
    /// Create a processor for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Process the landmark file according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if any input cannot be loaded, a landmark cannot be
    /// resolved, the plan or focus names an unknown landmark, or an output
    /// cannot be written
    pub fn process(&self) -> Result<()> {
        let start_time = Instant::now();
        let registry = load_registry(&self.cli.landmarks, &ResolverConfig::default())?;
        let stored = match &self.cli.features {
            Some(path) => load_features(path)?,
            None => Vec::new(),
        };

        let (plan, features) = match &self.cli.plan {
            Some(path) => {
                let plan = load_plan(path)?;
                let features = self.generate(&registry, &plan, stored)?;
                (Some(plan), features)
            }
            None => {
                Self::report_landmarks(&registry);
                (None, stored)
            }
        };

        if let Some(render_path) = &self.cli.render {
            let focus = self.focus(plan.as_ref())?;
            self.render(&registry, &features, &focus, render_path)?;
        }

        info!("Finished in {:.2?}", start_time.elapsed());
        Ok(())
    }

    fn generate(
        &self,
        registry: &LandmarkRegistry,
        plan: &SitePlan,
        stored: Vec<ProceduralFeature>,
    ) -> Result<Vec<ProceduralFeature>> {
        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(plan.zones.len())
        } else {
            ProgressManager::hidden()
        };

        let generated = SitePlanner::new(registry)
            .with_seed(self.cli.seed)
            .run_with(plan, &stored, |zone| progress.complete_zone(&zone.zone))?;
        let filled = progress.position();
        progress.finish();
        info!("Generated {} features in {filled} zones", generated.len());

        let merged = replace_zone_features(stored, generated, &plan.zone_ids());
        save_features(&self.cli.output_path(), &merged)?;
        Ok(merged)
    }

    fn report_landmarks(registry: &LandmarkRegistry) {
        for resolved in registry.iter() {
            info!(
                "{:<32} ({:>9.2}, {:>9.2})",
                resolved.id(),
                resolved.center.x,
                resolved.center.y
            );
        }
    }

    fn focus(&self, plan: Option<&SitePlan>) -> Result<String> {
        self.cli
            .focus
            .clone()
            .or_else(|| plan.and_then(|plan| plan.zones.first()).map(|zone| zone.zone.clone()))
            .ok_or_else(|| {
                invalid_parameter(
                    "focus",
                    &"<none>",
                    &"rendering needs --focus or a plan with at least one zone",
                )
            })
    }

    fn render(
        &self,
        registry: &LandmarkRegistry,
        features: &[ProceduralFeature],
        focus: &str,
        path: &Path,
    ) -> Result<()> {
        let image = render_site(registry, features, focus)?.to_image();
        save_png(&image, path)?;

        if self.cli.tiles {
            let overlap = u32::try_from(print_cm_to_pixels(TILE_OVERLAP_CM, DPI))
                .map_err(|e| invalid_parameter("tile overlap", &TILE_OVERLAP_CM, &e))?;
            let (left, right) = split_tiles(&image, overlap);
            save_png(&left, &Self::tile_path(path, 1)?)?;
            save_png(&right, &Self::tile_path(path, 2)?)?;
        }
        Ok(())
    }

    fn tile_path(path: &Path, index: usize) -> Result<PathBuf> {
        let stem = path
            .file_stem()
            .ok_or_else(|| LayoutError::InvalidParameter {
                parameter: "render",
                value: path.display().to_string(),
                reason: "render path has no file name".to_string(),
            })?;
        let tile_name = format!("{}_tile_{index}.png", stem.to_string_lossy());
        Ok(path.with_file_name(tile_name))
    }
}
