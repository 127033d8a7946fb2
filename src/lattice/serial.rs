//! Serial implementation of lattice sampling

use crate::field::FieldSample;
use crate::float_types::Real;
use crate::lattice::grid::{Lattice, LatticeSamples};
use crate::lattice::traits::SampleOps;
use nalgebra::Point3;

/// Serial implementation of lattice sampling
pub struct SerialSampleOps;

impl SerialSampleOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SerialSampleOps {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleOps for SerialSampleOps {
    fn sample<F>(&self, lattice: &Lattice, field: F) -> LatticeSamples
    where
        F: Fn(&Point3<Real>) -> FieldSample + Sync + Send,
    {
        let count = lattice.point_count();
        let mut positions = Vec::with_capacity(count);
        let mut values = Vec::with_capacity(count);
        let mut depths = Vec::with_capacity(count);

        // k-outer / i-inner matches the x-fastest linear indexing.
        for k in 0..lattice.resolution {
            for j in 0..lattice.resolution {
                for i in 0..lattice.resolution {
                    let point = lattice.point_at(i, j, k);
                    let sample = field(&point);
                    positions.push(point);
                    values.push(sample.value);
                    depths.push(sample.depth);
                }
            }
        }

        LatticeSamples {
            lattice: *lattice,
            positions,
            values,
            depths,
        }
    }
}
