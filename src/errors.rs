//! Construction-time errors
//!
//! The per-frame pipeline itself is infallible given two valid bodies; all
//! fallibility lives at the boundary where a [`Body`](crate::body::Body) is
//! built or repositioned.

/// Everything that can go wrong while building or posing a body.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OverlapError {
    /// The triangle buffers could not be assembled into a queryable mesh.
    #[error(transparent)]
    TriMesh(#[from] crate::float_types::parry3d::shape::TriMeshBuilderError),
    /// A world transform with no inverse was supplied; the sampler needs the
    /// inverse to move query points into mesh-local space.
    #[error("world transform is not invertible")]
    NonInvertibleTransform,
}
