//! Sphere primitive for ray tracing.

use crate::material::{Material, Reflection};
use glint_math::{Interval, MathError, Point, Ray};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// The radius is not checked here. A sphere of radius zero makes every
    /// hit fail with `MathError::DegenerateVector` once its normal is taken;
    /// `SceneDesc::validate` rejects such spheres up front.
    pub fn new(center: Point, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Nearest entry point of `ray` into the sphere.
    ///
    /// Only the smaller root of the quadratic is considered. If it lies
    /// behind the tolerance the ray starts on or inside the surface and no
    /// hit is reported, even if the ray would leave through the far side.
    pub fn intersect(&self, ray: &Ray) -> Option<Point> {
        let offset = self.center.to(ray.origin());
        let dir = ray.direction();

        let a = dir.norm2();
        let b = 2.0 * offset.dot(dir);
        let c = offset.norm2() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        if !Interval::HIT_RANGE.contains(t) {
            return None;
        }

        Some(ray.at(t))
    }

    /// Rays leaving the surface at `hit`.
    ///
    /// The normal runs from the center out through the hit point.
    pub fn reflect(&self, incoming: &Ray, hit: Point) -> Result<Reflection, MathError> {
        let normal = Ray::between(hit, self.center).flip();
        self.material.reflect(incoming, hit, normal.direction())
    }
}
