//! Parallel implementation of lattice sampling
//!
//! Safe because the contact field is a pure function of the query point and
//! the bodies' fixed poses; evaluations at distinct lattice points are
//! independent.

use crate::field::FieldSample;
use crate::float_types::Real;
use crate::lattice::grid::{Lattice, LatticeSamples};
use crate::lattice::traits::SampleOps;
use nalgebra::Point3;
use rayon::prelude::*;

/// Parallel implementation of lattice sampling
pub struct ParallelSampleOps;

impl ParallelSampleOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ParallelSampleOps {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleOps for ParallelSampleOps {
    fn sample<F>(&self, lattice: &Lattice, field: F) -> LatticeSamples
    where
        F: Fn(&Point3<Real>) -> FieldSample + Sync + Send,
    {
        let evaluated: Vec<(Point3<Real>, FieldSample)> = (0..lattice.point_count())
            .into_par_iter()
            .map(|index| {
                let (i, j, k) = lattice.delinearize(index);
                let point = lattice.point_at(i, j, k);
                (point, field(&point))
            })
            .collect();

        let mut positions = Vec::with_capacity(evaluated.len());
        let mut values = Vec::with_capacity(evaluated.len());
        let mut depths = Vec::with_capacity(evaluated.len());
        for (point, sample) in evaluated {
            positions.push(point);
            values.push(sample.value);
            depths.push(sample.depth);
        }

        LatticeSamples {
            lattice: *lattice,
            positions,
            values,
            depths,
        }
    }
}
