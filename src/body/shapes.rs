//! Primitive bodies for tests and demos.
//!
//! The visualization itself takes whatever triangle buffers the host hands
//! over; these constructors stand in for the host's own geometry when
//! exercising the pipeline without an asset pipeline.

use crate::body::Body;
use crate::errors::OverlapError;
use crate::float_types::{PI, Real, TAU};
use nalgebra::Point3;

impl Body {
    /// Axis-aligned cuboid spanning `[0, width] × [0, length] × [0, height]`,
    /// 8 shared vertices and 12 triangles wound counter-clockwise from
    /// outside.
    ///
    /// ## Example
    /// ```
    /// # use intersurf::Body;
    /// let cube = Body::cube(2.0).unwrap();
    /// assert_eq!(cube.triangle_count(), 12);
    /// ```
    pub fn cuboid(width: Real, length: Real, height: Real) -> Result<Body, OverlapError> {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),          // 0: origin
            Point3::new(width, 0.0, 0.0),        // 1: +X
            Point3::new(width, length, 0.0),     // 2: +X+Y
            Point3::new(0.0, length, 0.0),       // 3: +Y
            Point3::new(0.0, 0.0, height),       // 4: +Z
            Point3::new(width, 0.0, height),     // 5: +X+Z
            Point3::new(width, length, height),  // 6: +X+Y+Z
            Point3::new(0.0, length, height),    // 7: +Y+Z
        ];

        // Quad faces, CCW from outside; each splits into two triangles.
        let faces: [[u32; 4]; 6] = [
            [0, 3, 2, 1], // bottom, -Z
            [4, 5, 6, 7], // top, +Z
            [0, 1, 5, 4], // front, -Y
            [3, 7, 6, 2], // back, +Y
            [0, 4, 7, 3], // left, -X
            [1, 2, 6, 5], // right, +X
        ];

        let mut indices = Vec::with_capacity(12);
        for [a, b, c, d] in faces {
            indices.push([a, b, c]);
            indices.push([a, c, d]);
        }

        Body::new(vertices, indices)
    }

    /// Cube of edge `width` with one corner at the origin.
    pub fn cube(width: Real) -> Result<Body, OverlapError> {
        Self::cuboid(width, width, width)
    }

    /// UV sphere of the given `radius` centered at the origin, with shared
    /// pole vertices and `segments × stacks` tessellation. Tessellation is
    /// clamped to at least 3 segments and 2 stacks, the minimum for a
    /// closed surface.
    ///
    /// ## Example
    /// ```
    /// # use intersurf::Body;
    /// # use nalgebra::Point3;
    /// let ball = Body::sphere(1.0, 16, 8).unwrap();
    /// let hit = ball.closest_surface_point(&Point3::new(3.0, 0.0, 0.0));
    /// assert!((hit.distance - 2.0).abs() < 0.05);
    /// ```
    pub fn sphere(radius: Real, segments: usize, stacks: usize) -> Result<Body, OverlapError> {
        let segments = segments.max(3);
        let stacks = stacks.max(2);
        let mut vertices = Vec::with_capacity(segments * (stacks - 1) + 2);

        // North pole
        vertices.push(Point3::new(0.0, radius, 0.0));

        // Intermediate stacks, one ring per stack
        for j in 1..stacks {
            let v = j as Real / stacks as Real;
            let phi = v * PI;
            let y = radius * phi.cos();
            let ring_radius = radius * phi.sin();

            for i in 0..segments {
                let u = i as Real / segments as Real;
                let theta = u * TAU;
                vertices.push(Point3::new(
                    ring_radius * theta.cos(),
                    y,
                    ring_radius * theta.sin(),
                ));
            }
        }

        // South pole
        vertices.push(Point3::new(0.0, -radius, 0.0));

        let north_pole = 0u32;
        let south_pole = (vertices.len() - 1) as u32;
        let mut indices = Vec::new();

        // Top cap, CCW viewed from outside above the north pole
        for i in 0..segments {
            let next_i = (i + 1) % segments;
            let v1 = (1 + i) as u32;
            let v2 = (1 + next_i) as u32;
            indices.push([north_pole, v2, v1]);
        }

        // Middle quads, split into two CCW triangles
        for j in 1..stacks - 1 {
            let ring_start = 1 + (j - 1) * segments;
            let next_ring_start = 1 + j * segments;

            for i in 0..segments {
                let next_i = (i + 1) % segments;
                let v1 = (ring_start + i) as u32;
                let v2 = (ring_start + next_i) as u32;
                let v3 = (next_ring_start + i) as u32;
                let v4 = (next_ring_start + next_i) as u32;
                indices.push([v1, v3, v2]);
                indices.push([v2, v3, v4]);
            }
        }

        // Bottom cap
        let last_ring_start = 1 + (stacks - 2) * segments;
        for i in 0..segments {
            let next_i = (i + 1) % segments;
            let v1 = (last_ring_start + i) as u32;
            let v2 = (last_ring_start + next_i) as u32;
            indices.push([v1, v2, south_pole]);
        }

        Body::new(vertices, indices)
    }
}
