//! End-to-end extraction scenarios over analytically sampled lattices.

use intersurf::field::FieldSample;
use intersurf::float_types::Real;
use intersurf::isosurface;
use intersurf::lattice::{Lattice, sample_field};
use nalgebra::Point3;

fn unit_box_lattice(resolution: usize) -> Lattice {
    Lattice::new(
        resolution,
        Point3::new(-1.0, -1.0, -1.0),
        Point3::new(1.0, 1.0, 1.0),
    )
}

#[test]
fn sphere_field_extracts_a_surface_near_the_radius() {
    // Spherical signed-distance field of radius 0.5 sampled on [-1, 1]^3 at
    // resolution 10: the extracted vertices must hug the sphere to within
    // one grid-cell diagonal, with no NaN anywhere.
    let radius: Real = 0.5;
    let lattice = unit_box_lattice(10);
    let samples = sample_field(&lattice, |point| {
        let distance = point.coords.norm();
        FieldSample {
            value: distance - radius,
            depth: (radius - distance).max(0.0),
        }
    });

    let buffers = isosurface::extract(&samples, 0.0);
    assert!(!buffers.is_empty(), "a contained sphere must produce triangles");

    let tolerance = lattice.cell_diagonal();
    for vertex in buffers.positions.chunks_exact(3) {
        assert!(vertex.iter().all(|c| c.is_finite()), "NaN coordinate emitted");
        let r = (vertex[0] * vertex[0] + vertex[1] * vertex[1] + vertex[2] * vertex[2]).sqrt();
        assert!(
            (r - radius).abs() <= tolerance,
            "vertex at radius {r} strays more than a cell diagonal from {radius}"
        );
    }
    for &depth in &buffers.depths {
        assert!(depth.is_finite() && depth >= 0.0);
        assert!(depth <= radius + 1e-12, "depth interpolates between samples");
    }
    assert_eq!(buffers.depths.len(), buffers.vertex_count());
    assert_eq!(buffers.positions.len() % 3, 0);
    assert_eq!(buffers.indices.len() % 3, 0);
}

#[test]
fn linear_field_is_interpolated_exactly() {
    // f(p) = p.x is linear, so every edge crossing lands exactly on the
    // x = 0 plane; this pins the affine-combination property of mu.
    let lattice = unit_box_lattice(10);
    let samples = sample_field(&lattice, |point| FieldSample {
        value: point.x,
        depth: point.x + 1.0,
    });

    let buffers = isosurface::extract(&samples, 0.0);
    assert!(!buffers.is_empty());
    for vertex in buffers.positions.chunks_exact(3) {
        assert!(
            vertex[0].abs() < 1e-12,
            "crossing of a linear field must lie on the zero plane, got x = {}",
            vertex[0]
        );
        assert!((-1.0..=1.0).contains(&vertex[1]));
        assert!((-1.0..=1.0).contains(&vertex[2]));
    }
    // Depth interpolates with the same mu, so the linear attribute x + 1
    // evaluates to exactly 1 on the plane.
    for &depth in &buffers.depths {
        assert!((depth - 1.0).abs() < 1e-12);
    }
}

#[test]
fn indices_are_flat_sequential_triples() {
    let lattice = unit_box_lattice(6);
    let samples = sample_field(&lattice, |point| FieldSample {
        value: point.coords.norm() - 0.7,
        depth: 0.0,
    });
    let buffers = isosurface::extract(&samples, 0.0);
    assert!(!buffers.is_empty());
    // Triangle soup: indices count straight up, three fresh vertices each.
    for (position, &index) in buffers.indices.iter().enumerate() {
        assert_eq!(index as usize, position, "indices must be sequential");
    }
    assert_eq!(buffers.indices.len(), buffers.vertex_count());
}

#[test]
fn triangle_count_per_cell_never_exceeds_five() {
    // Resolution 3 gives 8 cells; brute-force a handful of sign patterns and
    // check the per-cell bound through the aggregate count.
    let lattice = unit_box_lattice(3);
    for seed in 0..32u64 {
        let samples = sample_field(&lattice, |point| {
            // A deterministic, seed-dependent sign pattern.
            let h = (point.x * 3.0 + point.y * 5.0 + point.z * 7.0 + seed as Real).sin();
            FieldSample {
                value: h,
                depth: h.abs(),
            }
        });
        let buffers = isosurface::extract(&samples, 0.0);
        let cells = 2 * 2 * 2;
        assert!(
            buffers.triangle_count() <= 5 * cells,
            "seed {seed} exceeded the marching-cubes triangle bound"
        );
    }
}

#[test]
fn extraction_twice_is_byte_identical() {
    let lattice = unit_box_lattice(8);
    let samples = sample_field(&lattice, |point| FieldSample {
        value: point.coords.norm() - 0.6,
        depth: point.coords.norm(),
    });
    let first = isosurface::extract(&samples, 0.0);
    let second = isosurface::extract(&samples, 0.0);
    assert_eq!(first, second);
}
