//! Glint renderer - CPU ray tracing.
//!
//! Casts one primary ray per pixel and follows mirror and scattered rays
//! recursively until they reach a light or leave the scene. Scattering uses
//! a fixed fan of rays, so the same scene always renders to the same image.

mod bucket;
mod camera;
mod material;
mod renderer;
mod scene;
mod shape;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult};
pub use camera::Camera;
pub use material::{Material, Reflection, ScatteredRay, FAN_RAYS_PER_RING, FAN_RAY_WEIGHT};
pub use renderer::{blend, render, shade, ImageBuffer, RenderError, RenderResult};
pub use scene::{Hit, Scene};
pub use shape::Shape;
pub use sphere::Sphere;

/// Re-export common types from glint_core and glint_math
pub use glint_core::{Color, RenderSettings, SceneDesc};
pub use glint_math::{Direction, Point, Ray};
