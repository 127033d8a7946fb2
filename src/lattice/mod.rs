//! Uniform lattice sampling of the contact field
//!
//! This module provides lattice sampling with dependency inversion, allowing
//! for different strategies (serial/parallel) behind one entry point,
//! [`sample_field`].

pub mod grid;
pub mod traits;

#[cfg(not(feature = "parallel"))]
pub mod serial;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export core types
pub use grid::{Lattice, LatticeSamples};
pub use traits::SampleOps;

#[cfg(not(feature = "parallel"))]
pub use serial::SerialSampleOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelSampleOps;

use crate::field::FieldSample;
use crate::float_types::Real;
use nalgebra::Point3;

/// Evaluate `field` at every lattice point, producing the three parallel
/// arrays the extractor consumes. `O(resolution³)` evaluations; deterministic
/// for a given field regardless of the strategy, since the field is pure.
pub fn sample_field<F>(lattice: &Lattice, field: F) -> LatticeSamples
where
    F: Fn(&Point3<Real>) -> FieldSample + Sync + Send,
{
    #[cfg(not(feature = "parallel"))]
    let ops = SerialSampleOps::new();
    #[cfg(feature = "parallel")]
    let ops = ParallelSampleOps::new();

    ops.sample(lattice, field)
}
