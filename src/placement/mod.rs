//! Placement of generated shapes into the world
//!
//! This module contains:
//! - Bounding-box collision filtering against a growing obstacle set
//! - Generated features and their persisted record form
//! - The site planner running streets and infill for every zone

/// Obstacles and the collision filter
pub mod collision;
/// Generated features and feature merging
pub mod feature;
/// Site plans and the generation pass
pub mod planner;

pub use collision::{Obstacle, ObstacleSet, is_blocked};
pub use feature::{FeatureGeometry, ProceduralFeature, replace_zone_features};
pub use planner::{HousingStyle, SitePlan, SitePlanner, ZoneArea, ZonePlan};
