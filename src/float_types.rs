// Re-export parry for the appropriate float size
#[cfg(feature = "f64")]
pub use parry3d_f64 as parry3d;

#[cfg(feature = "f32")]
pub use parry3d;

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

/// Tolerance used across the crate for degenerate-denominator guards
/// (coincident field values on a cube edge, a query point equidistant from
/// both surfaces).
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-5;
/// Tolerance used across the crate for degenerate-denominator guards
/// (coincident field values on a cube edge, a query point equidistant from
/// both surfaces).
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-9;
