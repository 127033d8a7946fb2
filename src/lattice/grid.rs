//! Lattice shape and the sampled parallel arrays.

use crate::float_types::Real;
use nalgebra::Point3;

/// A `resolution × resolution × resolution` uniform grid spanning an
/// axis-aligned box, both ends inclusive. Linear index of point `(i, j, k)`
/// is `i + resolution·j + resolution²·k` — x varies fastest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lattice {
    pub resolution: usize,
    pub min: Point3<Real>,
    pub max: Point3<Real>,
}

impl Lattice {
    pub const fn new(resolution: usize, min: Point3<Real>, max: Point3<Real>) -> Self {
        Self { resolution, min, max }
    }

    /// Total number of lattice points, `resolution³`.
    #[inline]
    pub const fn point_count(&self) -> usize {
        self.resolution * self.resolution * self.resolution
    }

    /// Linear index of lattice point `(i, j, k)`.
    #[inline]
    pub const fn linearize(&self, i: usize, j: usize, k: usize) -> usize {
        i + self.resolution * j + self.resolution * self.resolution * k
    }

    /// Inverse of [`linearize`](Self::linearize).
    #[inline]
    pub const fn delinearize(&self, index: usize) -> (usize, usize, usize) {
        let i = index % self.resolution;
        let jk = index / self.resolution;
        (i, jk % self.resolution, jk / self.resolution)
    }

    /// World-space position of lattice point `(i, j, k)`: each axis is
    /// subdivided into `resolution` steps inclusive of both ends, so spacing
    /// is `(max − min) / (resolution − 1)`.
    #[inline]
    pub fn point_at(&self, i: usize, j: usize, k: usize) -> Point3<Real> {
        let range = self.max - self.min;
        let step = (self.resolution - 1) as Real;
        Point3::new(
            self.min.x + range.x * i as Real / step,
            self.min.y + range.y * j as Real / step,
            self.min.z + range.z * k as Real / step,
        )
    }

    /// Length of one grid cell's space diagonal.
    pub fn cell_diagonal(&self) -> Real {
        ((self.max - self.min) / (self.resolution - 1) as Real).norm()
    }
}

/// The sampled field: three index-aligned arrays of length
/// [`point_count`](Lattice::point_count), rebuilt from scratch on every
/// sampling pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeSamples {
    pub lattice: Lattice,
    pub positions: Vec<Point3<Real>>,
    pub values: Vec<Real>,
    pub depths: Vec<Real>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linearize_is_x_fastest() {
        let lattice = Lattice::new(4, Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        assert_eq!(lattice.linearize(1, 0, 0), 1);
        assert_eq!(lattice.linearize(0, 1, 0), 4);
        assert_eq!(lattice.linearize(0, 0, 1), 16);
        assert_eq!(lattice.linearize(3, 3, 3), 63);
        for index in 0..lattice.point_count() {
            let (i, j, k) = lattice.delinearize(index);
            assert_eq!(lattice.linearize(i, j, k), index);
        }
    }

    #[test]
    fn points_span_both_ends_inclusive() {
        let lattice = Lattice::new(5, Point3::new(-1.0, -2.0, 3.0), Point3::new(1.0, 2.0, 7.0));
        assert_eq!(lattice.point_at(0, 0, 0), lattice.min);
        assert_eq!(lattice.point_at(4, 4, 4), lattice.max);
        let mid = lattice.point_at(2, 2, 2);
        assert_eq!(mid, Point3::new(0.0, 0.0, 5.0));
    }
}
