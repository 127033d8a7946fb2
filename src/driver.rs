//! Per-frame overlap driver.
//!
//! Re-evaluated once per rendered frame by the host: recompute both bodies'
//! world AABBs, and either run the sample-and-extract pipeline over their
//! intersection box (Visible) or hide the output and skip all work (Hidden).
//! The check is level-triggered; while Visible the extraction reruns every
//! frame, because the host may move either body between frames.

use crate::body::Body;
use crate::field::ContactField;
use crate::float_types::parry3d::bounding_volume::{Aabb, BoundingVolume};
use crate::isosurface::{self, SurfaceBuffers};
use crate::lattice::{Lattice, sample_field};
use nalgebra::Point3;

/// Recognized host options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapConfig {
    /// Sample count per lattice axis; fed to the per-frame path.
    pub resolution: usize,
    /// Host-side display toggle for its own debug mesh; carried for the
    /// host, never consumed by the pipeline.
    pub show_mesh: bool,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            resolution: 10,
            show_mesh: true,
        }
    }
}

/// The driver's two states, re-derived every frame from the AABB test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapState {
    Hidden,
    Visible,
}

/// The consumer-owned output object: geometry buffers plus the visibility
/// flag the host honors when drawing. Buffers are replaced wholesale on
/// Visible frames and left in place (merely hidden) on Hidden frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlapOutput {
    pub buffers: SurfaceBuffers,
    pub visible: bool,
}

/// Per-frame pipeline driver over two posed bodies.
#[derive(Debug)]
pub struct OverlapDriver {
    config: OverlapConfig,
    state: OverlapState,
    extractions: u64,
}

impl OverlapDriver {
    pub const fn new(config: OverlapConfig) -> Self {
        Self {
            config,
            state: OverlapState::Hidden,
            extractions: 0,
        }
    }

    /// Current state as of the last [`update`](Self::update).
    #[inline]
    pub const fn state(&self) -> OverlapState {
        self.state
    }

    /// How many times the sample-and-extract pipeline has actually run.
    /// Frames that skip it, whether hidden or degraded below the minimum
    /// lattice resolution, leave this untouched.
    #[inline]
    pub const fn extraction_count(&self) -> u64 {
        self.extractions
    }

    /// Run one frame. Both bodies must already exist and be indexed, which
    /// the signature enforces; a host still waiting on assets keeps its
    /// bodies in `Option` and does not call this.
    pub fn update(&mut self, body1: &Body, body2: &Body, output: &mut OverlapOutput) {
        let aabb1 = body1.world_aabb();
        let aabb2 = body2.world_aabb();

        if aabb1.intersects(&aabb2) {
            // Below the minimum lattice there are zero cells; degrade to
            // empty geometry without sampling anything.
            output.buffers = if self.config.resolution < 3 {
                SurfaceBuffers::default()
            } else {
                let overlap = intersection(&aabb1, &aabb2);
                let lattice =
                    Lattice::new(self.config.resolution, overlap.mins, overlap.maxs);
                let field = ContactField::new(body1, body2);
                let samples = sample_field(&lattice, |point| field.sample(point));
                self.extractions += 1;
                isosurface::extract(&samples, 0.0)
            };
            output.visible = true;

            if self.state != OverlapState::Visible {
                log::debug!("overlap entered: {:?} -> Visible", self.state);
            }
            log::trace!(
                "frame extracted {} triangles at resolution {}",
                output.buffers.triangle_count(),
                self.config.resolution
            );
            self.state = OverlapState::Visible;
        } else {
            if self.state != OverlapState::Hidden {
                log::debug!("overlap left: {:?} -> Hidden", self.state);
            }
            output.visible = false;
            self.state = OverlapState::Hidden;
        }
    }
}

/// Componentwise intersection box of two intersecting AABBs.
fn intersection(a: &Aabb, b: &Aabb) -> Aabb {
    Aabb::new(
        Point3::from(a.mins.coords.sup(&b.mins.coords)),
        Point3::from(a.maxs.coords.inf(&b.maxs.coords)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_box_is_componentwise() {
        let a = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 2.0, 2.0));
        let b = Aabb::new(Point3::new(1.0, -1.0, 0.5), Point3::new(3.0, 1.0, 1.5));
        let overlap = intersection(&a, &b);
        assert_eq!(overlap.mins, Point3::new(1.0, 0.0, 0.5));
        assert_eq!(overlap.maxs, Point3::new(2.0, 1.0, 1.5));
    }
}
