//! Procedural zone generators
//!
//! This module contains:
//! - The shape model and the generator contract shared by every zone style
//! - Rich, poor, industrial and fortification generators plus street networks

/// Fortification bastions and curtain walls
pub mod fortification;
/// Row-packed industrial buildings
pub mod industrial;
/// Dense jittered poor housing
pub mod poor;
/// Courtyard houses on a square grid
pub mod rich;
/// Generated shapes, categories and the generator trait
pub mod shape;
/// Regular and organic street networks
pub mod streets;

pub use fortification::FortificationRing;
pub use industrial::IndustrialBlocks;
pub use poor::PoorHousing;
pub use rich::{HouseVariant, RichHousing, VariantWeights};
pub use shape::{HousePair, ShapeCategory, ZoneGenerator, ZoneOutput, ZoneShape};
pub use streets::{StreetNetwork, StreetStyle};
