//! The scalar contact field sampled over the lattice.
//!
//! For a world-space point and two posed bodies, [`ContactField`] evaluates a
//! normalized difference of the two per-body signed distances (the `value`
//! whose zero-crossing the extractor surfaces) and an unsigned penetration
//! `depth` used only for shading.

use crate::body::Body;
use crate::float_types::{EPSILON, Real};
use nalgebra::Point3;

/// One field evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// Normalized signed-distance difference in `[-1, 1]`; zero where the
    /// point is equidistant from both surfaces.
    pub value: Real,
    /// `max` of the two unsigned surface distances.
    pub depth: Real,
}

/// A pure scalar field over two posed bodies.
///
/// Borrowed bodies, no retained scratch: evaluation is a pure function of
/// the point and the bodies' current poses, so samples may be taken from
/// multiple threads under the `parallel` feature.
#[derive(Debug, Clone, Copy)]
pub struct ContactField<'a> {
    body1: &'a Body,
    body2: &'a Body,
}

impl<'a> ContactField<'a> {
    pub const fn new(body1: &'a Body, body2: &'a Body) -> Self {
        Self { body1, body2 }
    }

    /// Signed distance from `world` to one body's surface: negative inside,
    /// positive outside.
    ///
    /// Inside/outside is decided by the nearest face's normal: the dot
    /// product of that normal with the vector from the query point to the
    /// hit point is positive exactly when the query point sits on the
    /// interior side. A degenerate face (no normal) classifies as outside.
    fn signed_distance(body: &Body, world: &Point3<Real>) -> (Real, Real) {
        let local = body.inverse_transform().transform_point(world);
        let hit = body.closest_surface_point(&local);
        let inside = body
            .face_normal(hit.face)
            .is_some_and(|normal| normal.dot(&(hit.point - local)) > 0.0);
        let signed = if inside { -hit.distance } else { hit.distance };
        (signed, hit.distance)
    }

    /// Evaluate the field at a world-space point.
    pub fn sample(&self, world: &Point3<Real>) -> FieldSample {
        let (signed1, unsigned1) = Self::signed_distance(self.body1, world);
        let (signed2, unsigned2) = Self::signed_distance(self.body2, world);

        let denominator = signed1.abs() + signed2.abs();
        // Both distances vanish only when the point lies on both surfaces at
        // once; call that the isosurface itself rather than emit NaN.
        let value = if denominator < EPSILON {
            0.0
        } else {
            (signed1 - signed2) / denominator
        };

        FieldSample {
            value,
            depth: unsigned1.max(unsigned2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn signed_distance_detects_interior_of_cube() {
        let cube = Body::cube(2.0).unwrap();
        let (signed, unsigned) = ContactField::signed_distance(&cube, &Point3::new(1.0, 1.0, 1.0));
        assert!(signed < 0.0, "cube center must be classified interior");
        assert!((unsigned - 1.0).abs() < 1e-9, "center is 1.0 from each face");
        assert!((signed + 1.0).abs() < 1e-9);

        let (signed, _) = ContactField::signed_distance(&cube, &Point3::new(3.0, 1.0, 1.0));
        assert!((signed - 1.0).abs() < 1e-9, "exterior point must be positive");
    }

    #[test]
    fn signed_distance_follows_world_transform() {
        let mut cube = Body::cube(2.0).unwrap();
        cube.set_translation(10.0, 0.0, 0.0);
        let (signed, _) = ContactField::signed_distance(&cube, &Point3::new(11.0, 1.0, 1.0));
        assert!(signed < 0.0, "translated cube interior must follow the pose");
        let (signed, _) = ContactField::signed_distance(&cube, &Point3::new(1.0, 1.0, 1.0));
        assert!(signed > 0.0, "old pose must not linger after set_translation");
    }

    #[test]
    fn value_is_normalized_and_finite() {
        let a = Body::cube(2.0).unwrap();
        let mut b = Body::cube(2.0).unwrap();
        b.set_translation(1.0, 0.0, 0.0);

        let field = ContactField::new(&a, &b);
        for point in [
            Point3::new(1.5, 1.0, 1.0),
            Point3::new(0.5, 0.5, 0.5),
            Point3::new(2.5, 1.0, 1.0),
            Point3::new(-1.0, -1.0, -1.0),
        ] {
            let s = field.sample(&point);
            assert!(
                (-1.0..=1.0).contains(&s.value),
                "value {} out of range at {point}",
                s.value
            );
            assert!(s.depth >= 0.0);
            assert!(s.value.is_finite() && s.depth.is_finite());
        }
    }

    #[test]
    fn midpoint_between_identical_cubes_is_zero() {
        // Two copies of the same cube: every point is equidistant from both
        // surfaces, so the normalized difference vanishes everywhere.
        let a = Body::cube(2.0).unwrap();
        let b = Body::cube(2.0).unwrap();
        let field = ContactField::new(&a, &b);
        let s = field.sample(&Point3::new(1.0, 1.0, 1.5));
        assert!(s.value.abs() < 1e-12);
    }
}
