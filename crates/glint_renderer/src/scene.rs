//! Runtime scene: the shapes to trace and the background color.

use glint_core::{Color, SceneDesc};
use glint_math::{Point, Ray};

use crate::shape::Shape;

/// The closest shape along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub shape: &'a Shape,
    pub point: Point,
    /// Distance from the ray origin to `point`
    pub distance: f64,
}

/// Shapes plus the color of empty space. Read-only while rendering.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    background: Color,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(background: Color) -> Self {
        Self {
            shapes: Vec::new(),
            background,
        }
    }

    /// Add a shape.
    pub fn add(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Add a shape, builder style.
    pub fn with(mut self, shape: impl Into<Shape>) -> Self {
        self.add(shape);
        self
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Closest hit along `ray`, by straight-line distance from its origin.
    ///
    /// Every shape is tested; on an exact tie the earlier shape wins.
    pub fn find_nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut nearest: Option<Hit<'_>> = None;

        for shape in &self.shapes {
            let Some(point) = shape.intersect(ray) else {
                continue;
            };
            let distance = ray.origin().distance(point);
            if nearest.map_or(true, |n| distance < n.distance) {
                nearest = Some(Hit {
                    shape,
                    point,
                    distance,
                });
            }
        }

        nearest
    }
}

impl From<&SceneDesc> for Scene {
    fn from(desc: &SceneDesc) -> Self {
        let mut scene = Scene::new(desc.background);
        for shape in &desc.shapes {
            scene.add(shape);
        }
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Sphere};
    use glint_math::Direction;

    fn sphere_at(z: f64, radius: f64, color: Color) -> Sphere {
        Sphere::new(Point::new(0.0, 0.0, z), radius, Material::light(color))
    }

    #[test]
    fn test_nearest_of_two() {
        let scene = Scene::new(Color::BLACK)
            .with(sphere_at(20.0, 1.0, Color::WHITE))
            .with(sphere_at(10.0, 1.0, Color::rgb(255, 0, 0)));
        let ray = Ray::new(Point::ORIGIN, Direction::new(0.0, 0.0, 1.0));

        let hit = scene.find_nearest_hit(&ray).unwrap();
        assert!((hit.distance - 9.0).abs() < 1e-9);
        assert_eq!(hit.shape.material().color(), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_tie_first_wins() {
        let scene = Scene::new(Color::BLACK)
            .with(sphere_at(10.0, 1.0, Color::rgb(1, 1, 1)))
            .with(sphere_at(10.0, 1.0, Color::rgb(2, 2, 2)));
        let ray = Ray::new(Point::ORIGIN, Direction::new(0.0, 0.0, 1.0));

        let hit = scene.find_nearest_hit(&ray).unwrap();
        assert_eq!(hit.shape.material().color(), Color::rgb(1, 1, 1));
    }

    #[test]
    fn test_no_hit() {
        let scene = Scene::new(Color::BLACK).with(sphere_at(10.0, 1.0, Color::WHITE));
        let ray = Ray::new(Point::ORIGIN, Direction::new(0.0, 1.0, 0.0));

        assert!(scene.find_nearest_hit(&ray).is_none());
        assert!(Scene::default().find_nearest_hit(&ray).is_none());
    }

    #[test]
    fn test_scene_from_desc() {
        let scene = Scene::from(&SceneDesc::demo());

        assert_eq!(scene.len(), 2);
        assert_eq!(scene.background(), Color::rgb(32, 32, 32));
        assert!(scene.shapes()[1].material().is_luminous());
    }
}
