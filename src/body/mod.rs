//! `Body`: a triangle mesh paired with its spatial index and world transform.
//!
//! This is the crate's view of one of the two rigid meshes being tested for
//! overlap. The mesh is held as a parry [`TriMesh`], whose internal BVH makes
//! nearest-surface-point queries sublinear in the triangle count; the body
//! also carries the current world transform and its cached inverse so the
//! sampler can move query points into mesh-local space. Acceleration lives in
//! the body by composition; nothing is grafted onto a shared mesh type.

use crate::errors::OverlapError;
use crate::float_types::{
    Real,
    parry3d::{
        bounding_volume::Aabb,
        query::PointQuery,
        shape::{FeatureId, TriMesh},
    },
};
use nalgebra::{Matrix4, Point3, Unit, Vector3};

pub mod shapes;

/// Result of a closest-point-on-surface query, in mesh-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    /// Unsigned distance from the query point to the surface.
    pub distance: Real,
    /// The nearest point on the surface.
    pub point: Point3<Real>,
    /// Index of the triangle the nearest point lies on.
    pub face: u32,
}

/// A rigid triangle mesh with a BVH spatial index and a world transform.
#[derive(Clone)]
pub struct Body {
    shape: TriMesh,
    transform: Matrix4<Real>,
    inverse: Matrix4<Real>,
}

impl Body {
    /// Build a body from raw triangle buffers, posed at the identity.
    ///
    /// ## Errors
    /// If parry rejects the buffers (e.g. an index out of range) a
    /// [`OverlapError::TriMesh`] is returned.
    pub fn new(
        vertices: Vec<Point3<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, OverlapError> {
        let shape = TriMesh::new(vertices, indices)?;
        Ok(Self {
            shape,
            transform: Matrix4::identity(),
            inverse: Matrix4::identity(),
        })
    }

    /// The current world transform.
    #[inline]
    pub const fn transform(&self) -> &Matrix4<Real> {
        &self.transform
    }

    /// The cached inverse of the current world transform.
    #[inline]
    pub const fn inverse_transform(&self) -> &Matrix4<Real> {
        &self.inverse
    }

    /// Replace the world transform, recomputing the cached inverse.
    ///
    /// ## Errors
    /// [`OverlapError::NonInvertibleTransform`] if `transform` has no
    /// inverse; the body keeps its previous pose in that case.
    pub fn set_transform(&mut self, transform: &Matrix4<Real>) -> Result<(), OverlapError> {
        let inverse = transform
            .try_inverse()
            .ok_or(OverlapError::NonInvertibleTransform)?;
        self.transform = *transform;
        self.inverse = inverse;
        Ok(())
    }

    /// Convenience: pose the body at a pure translation.
    pub fn set_translation(&mut self, x: Real, y: Real, z: Real) {
        let transform = Matrix4::new_translation(&Vector3::new(x, y, z));
        // A translation always inverts.
        self.inverse = Matrix4::new_translation(&Vector3::new(-x, -y, -z));
        self.transform = transform;
    }

    /// World-space AABB of the posed mesh, recomputed from the local AABB's
    /// eight corners on every call. Never cached across frames: the transform
    /// may change between any two calls.
    pub fn world_aabb(&self) -> Aabb {
        let corners = self.shape.local_aabb().vertices();
        let mut mins = self.transform.transform_point(&corners[0]).coords;
        let mut maxs = mins;
        for corner in &corners[1..] {
            let p = self.transform.transform_point(corner).coords;
            mins = mins.inf(&p);
            maxs = maxs.sup(&p);
        }
        Aabb::new(Point3::from(mins), Point3::from(maxs))
    }

    /// Closest point on the mesh surface to `local`, found through the BVH.
    pub fn closest_surface_point(&self, local: &Point3<Real>) -> SurfacePoint {
        let (projection, feature) = self.shape.project_local_point_and_get_feature(local);
        let face = match feature {
            FeatureId::Face(i) => i,
            // TriMesh projections always report a face.
            _ => 0,
        };
        SurfacePoint {
            distance: (local - projection.point).norm(),
            point: projection.point,
            face,
        }
    }

    /// Geometric normal of the indexed triangle, or `None` when the triangle
    /// is degenerate (zero area).
    pub fn face_normal(&self, face: u32) -> Option<Unit<Vector3<Real>>> {
        self.shape.triangle(face).normal()
    }

    /// Number of triangles in the mesh.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.shape.indices().len()
    }
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Body")
            .field("triangles", &self.triangle_count())
            .field("transform", &self.transform)
            .finish()
    }
}
