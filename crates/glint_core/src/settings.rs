//! Render parameters: resolution, image plane and bucket layout.

use glint_math::{Interval, Point};
use serde::{Deserialize, Serialize};

use crate::loader::{ConfigError, ConfigResult};

/// Default bucket edge in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 200;

/// Default bounce limit for the shading recursion.
pub const DEFAULT_MAX_DEPTH: u32 = 16;

/// The window in camera space that the raster is mapped onto.
///
/// Pixel `(col, row)` maps to
/// `(x_min + col * (x_max - x_min) / width, y_min + row * (y_max - y_min) / height, z)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImagePlane {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub z: f64,
}

impl ImagePlane {
    pub fn x_range(&self) -> Interval {
        Interval::new(self.x_min, self.x_max)
    }

    pub fn y_range(&self) -> Interval {
        Interval::new(self.y_min, self.y_max)
    }
}

impl Default for ImagePlane {
    fn default() -> Self {
        Self {
            x_min: -0.5,
            x_max: 0.5,
            y_min: -0.25,
            y_max: 0.25,
            z: 1.0,
        }
    }
}

/// Everything the render driver needs besides the scene itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Camera position; every primary ray starts here
    pub eye: [f64; 3],
    pub plane: ImagePlane,
    /// Bucket edge in pixels, must divide both width and height
    pub bucket_size: u32,
    /// Maximum number of bounces before a ray falls back to the background
    pub max_depth: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 2000,
            height: 1000,
            eye: [0.0, 0.0, 0.0],
            plane: ImagePlane::default(),
            bucket_size: DEFAULT_BUCKET_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderSettings {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set bucket size.
    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    /// Set bounce limit.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn eye_point(&self) -> Point {
        let [x, y, z] = self.eye;
        Point::new(x, y, z)
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Reject settings that would leave pixels uncovered or rays undefined.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if self.bucket_size == 0
            || self.width % self.bucket_size != 0
            || self.height % self.bucket_size != 0
        {
            return Err(ConfigError::InvalidTileConfiguration {
                bucket_size: self.bucket_size,
                width: self.width,
                height: self.height,
            });
        }
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth);
        }

        let p = &self.plane;
        let finite = [p.x_min, p.x_max, p.y_min, p.y_max, p.z]
            .iter()
            .chain(self.eye.iter())
            .all(|v| v.is_finite());
        if !finite || p.x_min >= p.x_max || p.y_min >= p.y_max {
            return Err(ConfigError::InvalidImagePlane(*p));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = RenderSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.pixel_count(), 2_000_000);
        assert_eq!(settings.eye_point(), Point::ORIGIN);
    }

    #[test]
    fn test_bucket_must_divide_image() {
        let settings = RenderSettings::default().with_resolution(100, 60).with_bucket_size(20);
        assert!(settings.validate().is_ok());

        let settings = settings.with_bucket_size(30);
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidTileConfiguration { bucket_size: 30, .. })
        ));

        let settings = settings.with_bucket_size(0);
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidTileConfiguration { .. })
        ));
    }

    #[test]
    fn test_empty_image_rejected() {
        let settings = RenderSettings::default().with_resolution(0, 200);
        assert!(matches!(settings.validate(), Err(ConfigError::EmptyImage { .. })));
    }

    #[test]
    fn test_zero_depth_rejected() {
        let settings = RenderSettings::default().with_max_depth(0);
        assert!(matches!(settings.validate(), Err(ConfigError::InvalidMaxDepth)));
    }

    #[test]
    fn test_inverted_plane_rejected() {
        let mut settings = RenderSettings::default();
        settings.plane.x_min = 1.0;
        assert!(matches!(settings.validate(), Err(ConfigError::InvalidImagePlane(_))));
    }
}
