//! Input/output around the layout core
//!
//! This module contains:
//! - Error types and compile-time configuration
//! - JSON records for landmarks, features and site plans
//! - Heightmap rendering, progress display and the command line front end

/// Command-line arguments and run orchestration
pub mod cli;
/// Layout constants and generator defaults
pub mod configuration;
/// Error types and path-aware conversions
pub mod error;
/// Progress display over planned zones
pub mod progress;
/// Greyscale heightmap rendering and print tiling
pub mod raster;
/// Landmark, feature and plan files
pub mod records;
