//! Site generation pass: obstacles, streets, then zone infill
//!
//! A [`SitePlan`] names the zone landmarks to fill and the style of each.
//! The planner resolves every zone to a world frame, seeds an obstacle set
//! with the fixed landmarks around those zones, lays out all street networks
//! and finally fills each zone with housing. Accepted shapes become obstacles
//! for everything generated after them.

use std::collections::{HashMap, HashSet};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::geometry::frames::ZoneFrame;
use crate::geometry::shapes::Aabb;
use crate::io::configuration::{DEFAULT_SEED, OBSTACLE_PADDING_M};
use crate::io::error::Result;
use crate::landmarks::model::Axis;
use crate::landmarks::resolver::{LandmarkRegistry, ResolvedLandmark};
use crate::placement::collision::{Obstacle, ObstacleSet};
use crate::placement::feature::ProceduralFeature;
use crate::zones::fortification::FortificationRing;
use crate::zones::industrial::IndustrialBlocks;
use crate::zones::poor::PoorHousing;
use crate::zones::rich::RichHousing;
use crate::zones::shape::{ShapeCategory, ZoneGenerator, ZoneShape};
use crate::zones::streets::StreetNetwork;

/// Infill style of a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HousingStyle {
    /// Courtyard houses
    Rich,
    /// Dense small houses
    #[default]
    Poor,
    /// Row-packed workshops
    Industrial,
    /// Bastions and curtain walls along the zone edge
    Fortification,
    /// Streets only
    None,
}

/// How one zone landmark is filled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZonePlan {
    /// Id of the zone landmark
    pub zone: String,
    /// Infill style
    #[serde(default)]
    pub housing: HousingStyle,
    /// Street network laid out before the infill, if any
    #[serde(default)]
    pub streets: Option<StreetNetwork>,
    /// Seed for every generator run in this zone
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Rich housing parameters
    #[serde(default)]
    pub rich: RichHousing,
    /// Poor housing parameters
    #[serde(default)]
    pub poor: PoorHousing,
    /// Industrial parameters
    #[serde(default)]
    pub industrial: IndustrialBlocks,
    /// Fortification parameters
    #[serde(default)]
    pub fortification: FortificationRing,
}

const fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl ZonePlan {
    /// Plan for a zone with default parameters and no streets
    pub fn new(zone: &str, housing: HousingStyle) -> Self {
        Self {
            zone: zone.to_string(),
            housing,
            streets: None,
            seed: DEFAULT_SEED,
            rich: RichHousing::default(),
            poor: PoorHousing::default(),
            industrial: IndustrialBlocks::default(),
            fortification: FortificationRing::default(),
        }
    }

    /// Same plan with a street network
    #[must_use]
    pub const fn with_streets(mut self, streets: StreetNetwork) -> Self {
        self.streets = Some(streets);
        self
    }

    /// Same plan with another seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generator for the infill style, `None` for street-only zones
    pub fn housing_generator(&self) -> Option<&dyn ZoneGenerator> {
        match self.housing {
            HousingStyle::Rich => Some(&self.rich),
            HousingStyle::Poor => Some(&self.poor),
            HousingStyle::Industrial => Some(&self.industrial),
            HousingStyle::Fortification => Some(&self.fortification),
            HousingStyle::None => None,
        }
    }
}

/// Zones to fill in one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitePlan {
    /// Zones in generation order
    pub zones: Vec<ZonePlan>,
    /// Clearance added around landmark obstacles
    #[serde(default = "default_padding")]
    pub obstacle_padding: f64,
}

const fn default_padding() -> f64 {
    OBSTACLE_PADDING_M
}

impl SitePlan {
    /// Plan over the given zones with default padding
    pub fn new(zones: Vec<ZonePlan>) -> Self {
        Self {
            zones,
            obstacle_padding: OBSTACLE_PADDING_M,
        }
    }

    /// Ids of the planned zones
    pub fn zone_ids(&self) -> Vec<&str> {
        self.zones.iter().map(|plan| plan.zone.as_str()).collect()
    }
}

/// World placement of a planned zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneArea {
    /// Width in meters
    pub width: f64,
    /// Length in meters
    pub length: f64,
    /// Local to world conversion
    pub frame: ZoneFrame,
    /// World-space bounds
    pub bounds: Aabb,
}

impl ZoneArea {
    /// Area covered by a resolved zone landmark
    pub fn of(resolved: &ResolvedLandmark) -> Self {
        let landmark = &resolved.landmark;
        let width = landmark.dimensions.half_extent(Axis::X, landmark.shape) * 2.0;
        let length = landmark.dimensions.half_extent(Axis::Y, landmark.shape) * 2.0;
        Self {
            width,
            length,
            frame: ZoneFrame::from_center(resolved.center, width, length),
            bounds: resolved.bounds(0.0),
        }
    }
}

/// Runs a [`SitePlan`] against resolved landmarks
#[derive(Debug, Clone, Copy)]
pub struct SitePlanner<'a> {
    registry: &'a LandmarkRegistry,
    seed_override: Option<u64>,
}

impl<'a> SitePlanner<'a> {
    /// Planner over a resolved landmark set
    pub const fn new(registry: &'a LandmarkRegistry) -> Self {
        Self {
            registry,
            seed_override: None,
        }
    }

    /// Use `seed` for every zone instead of the seeds in the plan
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed_override = seed;
        self
    }

    /// Obstacles present before anything is generated
    ///
    /// Landmarks count when they intersect a planned zone, unless they are
    /// zones or borders themselves, are one of the planned zones, or are
    /// boundary markers. Stored features of zones that are not being
    /// regenerated count as well.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLandmark` if the plan names a zone that does not exist
    pub fn prepare_obstacles(
        &self,
        plan: &SitePlan,
        existing: &[ProceduralFeature],
    ) -> Result<ObstacleSet> {
        let planned: HashSet<&str> = plan.zone_ids().into_iter().collect();
        let zone_bounds = plan
            .zones
            .iter()
            .map(|zone| self.registry.bounds(&zone.zone, 0.0))
            .collect::<Result<Vec<Aabb>>>()?;

        let mut obstacles = ObstacleSet::new();
        for resolved in self.registry.iter() {
            let landmark = &resolved.landmark;
            if planned.contains(resolved.id())
                || landmark.shape.is_area()
                || landmark.id.contains("boundary")
            {
                continue;
            }
            let footprint = resolved.bounds(0.0);
            if zone_bounds.iter().any(|zone| zone.overlaps(&footprint)) {
                obstacles.push(Obstacle::from_landmark(resolved, plan.obstacle_padding));
            }
        }
        let landmark_count = obstacles.len();

        for feature in existing {
            if planned.contains(feature.parent_id.as_str()) {
                continue;
            }
            if let Some(bounds) = feature.bounds() {
                obstacles.push(Obstacle::new(bounds, feature.id.as_str()));
            }
        }

        info!(
            "Prepared {} obstacles ({landmark_count} landmarks, {} stored features)",
            obstacles.len(),
            obstacles.len() - landmark_count
        );
        Ok(obstacles)
    }

    /// Generate features for every zone of the plan
    ///
    /// # Errors
    ///
    /// Returns `UnknownLandmark` if the plan names a zone that does not exist
    pub fn run(
        &self,
        plan: &SitePlan,
        existing: &[ProceduralFeature],
    ) -> Result<Vec<ProceduralFeature>> {
        self.run_with(plan, existing, |_| {})
    }

    /// Like [`Self::run`], calling `on_zone` after each zone is filled
    ///
    /// # Errors
    ///
    /// Returns `UnknownLandmark` if the plan names a zone that does not exist
    pub fn run_with(
        &self,
        plan: &SitePlan,
        existing: &[ProceduralFeature],
        mut on_zone: impl FnMut(&ZonePlan),
    ) -> Result<Vec<ProceduralFeature>> {
        let mut obstacles = self.prepare_obstacles(plan, existing)?;
        let zones = plan
            .zones
            .iter()
            .map(|zone| {
                let resolved = self.registry.require(&zone.zone)?;
                Ok((zone, resolved, ZoneArea::of(resolved)))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut features = Vec::new();
        for &(zone, resolved, area) in &zones {
            let Some(network) = zone.streets else {
                continue;
            };
            let candidates: Vec<ZoneShape> = network
                .generate_shapes(area.width, area.length, self.seed_for(zone))
                .iter()
                .map(|shape| shape.to_world(&area.frame))
                .collect();
            let generated = candidates.len();
            let accepted = obstacles.filter_network(candidates, &zone.zone);
            debug!(
                "Zone '{}': {} of {generated} streets accepted",
                zone.zone,
                accepted.len()
            );
            features.extend(Self::name_features(zone, resolved, accepted));
        }

        for &(zone, resolved, area) in &zones {
            if let Some(generator) = zone.housing_generator() {
                let output = generator
                    .generate(area.width, area.length, self.seed_for(zone))
                    .to_world(&area.frame);
                let generated = output.shape_count();
                let accepted = obstacles.filter(output, &zone.zone);
                info!(
                    "Zone '{}': {} of {generated} shapes accepted",
                    zone.zone,
                    accepted.shape_count()
                );
                features.extend(Self::name_features(zone, resolved, accepted.into_shapes()));
            }
            on_zone(zone);
        }

        Ok(features)
    }

    fn seed_for(&self, zone: &ZonePlan) -> u64 {
        self.seed_override.unwrap_or(zone.seed)
    }

    // Each id family is numbered from zero within the call
    fn name_features(
        zone: &ZonePlan,
        resolved: &ResolvedLandmark,
        shapes: Vec<ZoneShape>,
    ) -> Vec<ProceduralFeature> {
        let zone_name = if resolved.landmark.name.is_empty() {
            zone.zone.as_str()
        } else {
            resolved.landmark.name.as_str()
        };
        let mut counters: HashMap<&'static str, usize> = HashMap::new();
        shapes
            .into_iter()
            .map(|shape| {
                let family = id_family(shape.category);
                let counter = counters.entry(family).or_insert(0);
                let id = format!("{}_{family}_{counter}", zone.zone);
                *counter += 1;
                ProceduralFeature::from_shape(id, &zone.zone, zone_name, shape)
            })
            .collect()
    }
}

const fn id_family(category: ShapeCategory) -> &'static str {
    match category {
        ShapeCategory::Street | ShapeCategory::Lane => "street",
        ShapeCategory::RichWall
        | ShapeCategory::Courtyard
        | ShapeCategory::SolidFiller
        | ShapeCategory::Poor => "house",
        ShapeCategory::Industrial => "block",
        ShapeCategory::Bastion | ShapeCategory::CurtainWall => "bastion",
    }
}
