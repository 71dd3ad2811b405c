//! Deterministic procedural layout of archaeological site plans
//!
//! Fixed landmarks are placed from absolute or relative location records,
//! then rectangular zones are filled with seeded procedural infill (houses,
//! streets, industrial blocks, fortifications) that avoids the landmarks and
//! everything placed before it. The result can be stored as feature records
//! and rendered to a greyscale heightmap for engraving.

#![forbid(unsafe_code)]

/// Points, bounding boxes and coordinate frames
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Landmark records and position resolution
pub mod landmarks;
/// Seeded random sampling
pub mod math;
/// Collision filtering, generated features and the site planner
pub mod placement;
/// Procedural zone generators
pub mod zones;

pub use io::error::{LayoutError, Result};
