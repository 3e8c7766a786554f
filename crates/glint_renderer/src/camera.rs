//! Camera for primary ray generation.

use glint_core::{ImagePlane, RenderSettings};
use glint_math::{Interval, Point, Ray};

/// Pinhole camera looking through a rectangular window at fixed depth.
///
/// Pixel `(col, row)` is mapped linearly onto the window; row 0 lies at
/// `y_min`.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    eye: Point,
    x_range: Interval,
    y_range: Interval,
    depth: f64,
}

impl Camera {
    pub fn new(eye: Point, plane: ImagePlane, image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            eye,
            x_range: plane.x_range(),
            y_range: plane.y_range(),
            depth: plane.z,
        }
    }

    /// Point on the image plane for pixel `(col, row)`.
    pub fn plane_point(&self, col: u32, row: u32) -> Point {
        let x = self.x_range.lerp(col as f64, self.image_width as f64);
        let y = self.y_range.lerp(row as f64, self.image_height as f64);
        Point::new(x, y, self.depth)
    }

    /// Generate the ray for pixel `(col, row)`.
    ///
    /// The direction is the unnormalized vector from the eye to the plane.
    pub fn get_ray(&self, col: u32, row: u32) -> Ray {
        Ray::between(self.eye, self.plane_point(col, row))
    }
}

impl From<&RenderSettings> for Camera {
    fn from(settings: &RenderSettings) -> Self {
        Camera::new(settings.eye_point(), settings.plane, settings.width, settings.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Direction;

    #[test]
    fn test_corner_pixels() {
        let camera = Camera::from(&RenderSettings::default());

        assert_eq!(camera.plane_point(0, 0), Point::new(-0.5, -0.25, 1.0));
        assert_eq!(camera.plane_point(1000, 500), Point::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_camera_ray_direction() {
        let camera = Camera::from(&RenderSettings::default());

        let ray = camera.get_ray(1000, 500);
        assert_eq!(ray.origin(), Point::ORIGIN);
        assert_eq!(ray.direction(), Direction::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_camera_eye_offset() {
        let mut settings = RenderSettings::default().with_resolution(10, 10);
        settings.eye = [0.0, 0.0, -1.0];
        let camera = Camera::from(&settings);

        let ray = camera.get_ray(0, 0);
        assert_eq!(ray.origin(), Point::new(0.0, 0.0, -1.0));
        assert_eq!(ray.at(1.0), Point::new(-0.5, -0.25, 1.0));
    }
}
