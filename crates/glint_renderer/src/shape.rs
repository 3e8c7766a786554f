//! Shapes that rays can interact with.

use glint_core::ShapeDesc;
use glint_math::{MathError, Point, Ray};

use crate::material::{Material, Reflection};
use crate::sphere::Sphere;

/// Every kind of object the renderer can trace against.
///
/// Intersection math is entirely different per kind, so this is a closed
/// set dispatched by `match` rather than a trait object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
}

impl Shape {
    /// Nearest valid hit point along `ray`, if any.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<Point> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray),
        }
    }

    /// Outgoing rays, weights and base color at `hit`.
    #[inline]
    pub fn reflect(&self, incoming: &Ray, hit: Point) -> Result<Reflection, MathError> {
        match self {
            Shape::Sphere(sphere) => sphere.reflect(incoming, hit),
        }
    }

    pub fn material(&self) -> &Material {
        match self {
            Shape::Sphere(sphere) => sphere.material(),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<&ShapeDesc> for Shape {
    fn from(desc: &ShapeDesc) -> Self {
        match desc {
            ShapeDesc::Sphere {
                center: [x, y, z],
                radius,
                material,
            } => Shape::Sphere(Sphere::new(Point::new(*x, *y, *z), *radius, material.into())),
        }
    }
}
