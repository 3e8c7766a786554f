//! Core ray tracing renderer.
//!
//! Implements recursive shading with:
//! - Weighted blending of every outgoing ray of a surface
//! - A configurable bounce limit
//! - Parallel bucket rendering into a shared image buffer

use glint_core::{Color, ConfigError, RenderSettings};
use glint_math::{Interval, MathError, Ray};
use rayon::prelude::*;
use thiserror::Error;

use crate::bucket::{generate_buckets, render_bucket, BucketResult};
use crate::camera::Camera;
use crate::scene::Scene;

/// Errors that abort a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Degenerate geometry: {0}")]
    Math(#[from] MathError),

    #[error("Shading event with zero total weight")]
    EmptyWeightSet,

    #[error("Invalid render settings: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Compute the color seen by a ray.
///
/// Misses return the background; luminous surfaces return their color.
/// Any other surface recurses into each of its outgoing rays with one
/// bounce less and blends the results. When no bounces are left, the
/// background is returned in place of the blend.
pub fn shade(ray: &Ray, scene: &Scene, depth: u32) -> RenderResult<Color> {
    let Some(hit) = scene.find_nearest_hit(ray) else {
        return Ok(scene.background());
    };

    let reflection = hit.shape.reflect(ray, hit.point)?;
    if reflection.is_emission() {
        return Ok(reflection.color);
    }

    if depth == 0 {
        log::trace!("Bounce limit reached at {:?}", hit.point);
        return Ok(scene.background());
    }

    let mut samples = Vec::with_capacity(reflection.outgoing.len());
    for scattered in &reflection.outgoing {
        let color = shade(&scattered.ray, scene, depth - 1)?;
        samples.push((color, scattered.weight));
    }

    blend(reflection.color, &samples)
}

/// Weighted average of `samples`, tinted by `base`.
///
/// Each sample contributes `sample / sample.alpha * base * weight` per
/// channel. The sum is divided by the total weight and by the alpha of
/// `base`, then clamped to the 8-bit range. The result is opaque.
/// Fully transparent samples contribute their weight but no color.
pub fn blend(base: Color, samples: &[(Color, f64)]) -> RenderResult<Color> {
    let base_channels = base.channels();
    let mut total_weight = 0.0;
    let mut sum = [0.0f64; 3];

    for (color, weight) in samples {
        total_weight += weight;
        if color.a == 0 {
            continue;
        }
        let alpha = color.a as f64;
        let channels = color.channels().into_iter().zip(base_channels);
        for (acc, (channel, base_channel)) in sum.iter_mut().zip(channels) {
            *acc += channel / alpha * base_channel * weight;
        }
    }

    if total_weight.is_nan() || total_weight <= 0.0 {
        return Err(RenderError::EmptyWeightSet);
    }
    if base.a == 0 {
        return Ok(Color::TRANSPARENT);
    }

    let base_alpha = base.a as f64;
    let [r, g, b] = sum.map(|acc| to_channel(acc / total_weight / base_alpha * 255.0));
    Ok(Color::rgb(r, g, b))
}

/// Clamp to the 8-bit range and truncate.
#[inline]
fn to_channel(value: f64) -> u8 {
    Interval::CHANNEL.clamp(value) as u8
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let width = result.bucket.width as usize;
        for (local_row, row_pixels) in result.pixels.chunks_exact(width).enumerate() {
            let start = self.index(result.bucket.x, result.bucket.y + local_row as u32);
            self.pixels[start..start + width].copy_from_slice(row_pixels);
        }
    }

    /// RGBA bytes, row-major, four per pixel.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Render the entire scene to an image buffer.
///
/// Settings are validated before any work starts. Buckets run in parallel;
/// the first error aborts the whole render.
pub fn render(scene: &Scene, settings: &RenderSettings) -> RenderResult<ImageBuffer> {
    settings.validate()?;

    let camera = Camera::from(settings);
    let buckets = generate_buckets(settings.width, settings.height, settings.bucket_size);

    log::info!(
        "Rendering {}x{} in {} buckets of {}px ({} shapes, max depth {})",
        settings.width,
        settings.height,
        buckets.len(),
        settings.bucket_size,
        scene.len(),
        settings.max_depth
    );

    let results = buckets
        .par_iter()
        .map(|bucket| {
            render_bucket(bucket, &camera, scene, settings.max_depth)
                .map(|pixels| BucketResult::new(*bucket, pixels))
        })
        .collect::<RenderResult<Vec<_>>>()?;

    let mut image = ImageBuffer::new(settings.width, settings.height);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Rendered {} pixels", image.pixels.len());
    Ok(image)
}
