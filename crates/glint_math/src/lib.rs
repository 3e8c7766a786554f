//! Glint math - points, directions and rays for the ray tracer.

// Re-export glam for convenience
pub use glam::DVec3;

mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{dot, reflect_about_normal, Direction, MathError, Point};

/// Minimum ray parameter accepted as an intersection.
pub const TOLERANCE: f64 = 0.001;
