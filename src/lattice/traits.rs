//! Trait defining lattice sampling for dependency inversion

use crate::field::FieldSample;
use crate::float_types::Real;
use crate::lattice::grid::{Lattice, LatticeSamples};
use nalgebra::Point3;

/// Core lattice sampling operation
pub trait SampleOps {
    /// Evaluate `field` at every point of `lattice`.
    fn sample<F>(&self, lattice: &Lattice, field: F) -> LatticeSamples
    where
        F: Fn(&Point3<Real>) -> FieldSample + Sync + Send;
}
