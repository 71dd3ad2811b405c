//! Fixed site landmarks and their placement
//!
//! This module contains:
//! - Landmark records with absolute or relative location specifications
//! - The resolver turning those specifications into absolute centers

/// Landmark records, dimensions and location specifications
pub mod model;
/// Fixed-point resolution of relative placements
pub mod resolver;

pub use model::{Dimensions, Direction, Landmark, Location, ShapeKind};
pub use resolver::{LandmarkRegistry, ResolvedLandmark, ResolverConfig, resolve_landmarks};
