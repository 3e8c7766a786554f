use crate::{Direction, Point};

/// A ray in 3D space with an origin and a direction.
///
/// The ray is parametrized by `t`: `at(t) = origin + t * direction`. The
/// direction is not required to be unit length, so `t` is only a distance
/// when it is.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: Direction,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Point, direction: Direction) -> Self {
        Self { origin, direction }
    }

    /// The ray starting at `src` whose direction is the (unnormalized)
    /// vector from `src` to `dst`.
    pub fn between(src: Point, dst: Point) -> Self {
        Self::new(src, src.to(dst))
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Point {
        Point::new(
            self.origin.x() + t * self.direction.dx(),
            self.origin.y() + t * self.direction.dy(),
            self.origin.z() + t * self.direction.dz(),
        )
    }

    /// The same ray pointing the other way.
    ///
    /// The origin is kept; the direction runs from the origin to the point
    /// one step behind it.
    pub fn flip(&self) -> Ray {
        Ray::between(self.origin, self.at(-1.0))
    }

    /// The ray with `offset` added to its direction.
    pub fn shift_by(&self, offset: Direction) -> Ray {
        Ray::new(self.origin, self.direction.add(offset))
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Point::ORIGIN,
            direction: Direction::new(0.0, 0.0, 1.0),
        }
    }
}
