//! Visualize the interpenetration of two rigid triangle meshes as an implicit
//! surface, extracted per frame with table-driven **marching cubes** and
//! colored by penetration depth.
//!
//! The pipeline, run once per frame by [`driver::OverlapDriver`]:
//! 1. recompute both meshes' world-space AABBs and bail out (hidden) unless
//!    they intersect,
//! 2. sample a normalized signed-distance difference ([`field::ContactField`])
//!    over a uniform lattice spanning the intersection box
//!    ([`lattice::sample_field`]), using nearest-surface-point queries against
//!    each mesh's BVH ([`body::Body`]),
//! 3. extract the zero isosurface as a triangle soup with an interpolated
//!    per-vertex depth attribute ([`isosurface::extract`]).
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to parallelize lattice sampling

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod body;
pub mod driver;
pub mod errors;
pub mod field;
pub mod float_types;
pub mod isosurface;
pub mod lattice;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use body::Body;
pub use driver::{OverlapConfig, OverlapDriver, OverlapOutput, OverlapState};
pub use field::ContactField;
pub use isosurface::SurfaceBuffers;
pub use lattice::Lattice;
