//! Random sampling utilities for the generators

/// Seeded random stream owned by each generation pass
pub mod sampler;

pub use sampler::ZoneRng;
