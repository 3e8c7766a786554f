//! Points and directions in 3-D space.
//!
//! Both are thin wrappers over `glam::DVec3` so that positions and
//! displacements cannot be mixed up by accident.

use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec3;
use thiserror::Error;

/// Errors raised by vector algebra.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    #[error("cannot normalize degenerate vector ({0}, {1}, {2})")]
    DegenerateVector(f64, f64, f64),
}

/// A position in 3-D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point(pub DVec3);

/// A 3-D displacement, not necessarily unit length.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Direction(pub DVec3);

impl Point {
    pub const ORIGIN: Point = Point(DVec3::ZERO);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// The direction leading from `self` to `other`.
    #[inline]
    pub fn to(&self, other: Point) -> Direction {
        Direction(other.0 - self.0)
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        self.to(other).norm()
    }
}

impl Direction {
    #[inline]
    pub const fn new(dx: f64, dy: f64, dz: f64) -> Self {
        Self(DVec3::new(dx, dy, dz))
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn dz(&self) -> f64 {
        self.0.z
    }

    #[inline]
    pub fn scale(self, factor: f64) -> Direction {
        Direction(factor * self.0)
    }

    /// Same as `scale(-1.0)`.
    #[inline]
    pub fn flip(self) -> Direction {
        self.scale(-1.0)
    }

    #[inline]
    pub fn add(self, other: Direction) -> Direction {
        Direction(self.0 + other.0)
    }

    #[inline]
    pub fn dot(self, other: Direction) -> f64 {
        self.0.dot(other.0)
    }

    /// Squared Euclidean norm.
    #[inline]
    pub fn norm2(self) -> f64 {
        self.0.length_squared()
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(self) -> f64 {
        self.norm2().sqrt()
    }

    /// Divide every component by the norm.
    ///
    /// Zero-length and non-finite vectors are rejected instead of producing
    /// NaN components.
    pub fn normalize(self) -> Result<Direction, MathError> {
        let n = self.norm();
        if n == 0.0 || !n.is_finite() {
            return Err(MathError::DegenerateVector(self.0.x, self.0.y, self.0.z));
        }
        Ok(Direction(self.0 / n))
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    fn add(self, rhs: Direction) -> Point {
        Point(self.0 + rhs.0)
    }
}

impl Sub for Point {
    type Output = Direction;

    fn sub(self, rhs: Point) -> Direction {
        rhs.to(self)
    }
}

impl Add for Direction {
    type Output = Direction;

    fn add(self, rhs: Direction) -> Direction {
        Direction(self.0 + rhs.0)
    }
}

impl Mul<f64> for Direction {
    type Output = Direction;

    fn mul(self, rhs: f64) -> Direction {
        self.scale(rhs)
    }
}

impl Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Direction {
        self.flip()
    }
}

/// Dot product of two directions.
#[inline]
pub fn dot(a: Direction, b: Direction) -> f64 {
    a.dot(b)
}

/// Mirror `v` about the axis given by `normal`.
///
/// The normal is normalized first, then `v` is reflected as
/// `v - 2 * (v - (v.n) n)`: the tangential part of `v` is reversed and the
/// normal part is kept. Fed the reversed incoming direction, this yields the
/// outgoing mirror direction.
pub fn reflect_about_normal(v: Direction, normal: Direction) -> Result<Direction, MathError> {
    let n = normal.normalize()?;
    let along = v.dot(n);
    let diff = v.0 - along * n.0;
    Ok(Direction(v.0 - 2.0 * diff))
}
