//! Surface materials and the reflection model.
//!
//! A non-luminous surface always sends one ray along the ideal mirror
//! direction. Rough surfaces add a fixed fan of rays around it: rings of
//! growing radius, each sampled at 72 evenly spaced angles. The fan is a
//! deterministic grid, so renders are reproducible.

use std::f64::consts::PI;

use glint_core::{Color, MaterialDesc};
use glint_math::{reflect_about_normal, Direction, MathError, Point, Ray};

/// Radius of the innermost ring of scattered rays, relative to the
/// length of the mirror direction.
const FAN_FIRST_RADIUS: f64 = 0.01;

/// Spacing between consecutive rings.
const FAN_RADIUS_STEP: f64 = 0.05;

/// Outermost ring radius at roughness 1.
const FAN_MAX_RADIUS: f64 = 5.0;

/// Angular spacing of rays on a ring, in degrees.
const FAN_ANGLE_STEP_DEG: u32 = 5;

/// Rays per ring.
pub const FAN_RAYS_PER_RING: u32 = 360 / FAN_ANGLE_STEP_DEG;

/// Weight of a single fan ray. The mirror ray has weight 1.
pub const FAN_RAY_WEIGHT: f64 = 1.0 / FAN_RAYS_PER_RING as f64;

/// How a surface responds to light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    luminous: bool,
    color: Color,
    roughness: f64,
}

impl Material {
    /// Create a new material. Roughness is clamped to [0, 1].
    pub fn new(luminous: bool, color: Color, roughness: f64) -> Self {
        Self {
            luminous,
            color,
            roughness: roughness.clamp(0.0, 1.0),
        }
    }

    /// A light source.
    pub fn light(color: Color) -> Self {
        Self::new(true, color, 0.0)
    }

    /// A reflective surface.
    ///
    /// - `roughness`: 0.0 = perfect mirror, 1.0 = widest scattering fan
    pub fn surface(color: Color, roughness: f64) -> Self {
        Self::new(false, color, roughness)
    }

    pub fn is_luminous(&self) -> bool {
        self.luminous
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn roughness(&self) -> f64 {
        self.roughness
    }

    /// Compute the rays leaving a surface point.
    ///
    /// `normal` must point away from the surface; it need not be unit length.
    /// Luminous materials return no outgoing rays.
    pub fn reflect(
        &self,
        incoming: &Ray,
        hit: Point,
        normal: Direction,
    ) -> Result<Reflection, MathError> {
        if self.luminous {
            return Ok(Reflection::emission(self.color));
        }

        let mirror = reflect_about_normal(incoming.flip().direction(), normal)?;
        let mirror_ray = Ray::new(hit, mirror);

        let mut outgoing = vec![ScatteredRay::new(mirror_ray, 1.0)];
        if self.roughness > 0.0 {
            self.scatter_fan(&mirror_ray, &mut outgoing)?;
        }

        Ok(Reflection {
            outgoing,
            color: self.color,
        })
    }

    /// Append the rings of scattered rays around `mirror_ray`.
    fn scatter_fan(
        &self,
        mirror_ray: &Ray,
        outgoing: &mut Vec<ScatteredRay>,
    ) -> Result<(), MathError> {
        let mirror = mirror_ray.direction();
        let (n1, n2) = orthonormal_basis(mirror)?;
        let spread = mirror.norm();
        let max_radius = FAN_MAX_RADIUS * self.roughness;

        // Accumulated rather than indexed so the ring count matches
        // repeated addition of the step.
        let mut radius = FAN_FIRST_RADIUS;
        while radius <= max_radius {
            let scale = radius * spread;
            for step in 0..FAN_RAYS_PER_RING {
                let radians = (step * FAN_ANGLE_STEP_DEG) as f64 * (PI / 180.0);
                let (sin, cos) = radians.sin_cos();
                let offset = Direction(n1.0 * cos + n2.0 * sin).scale(scale);
                outgoing.push(ScatteredRay::new(mirror_ray.shift_by(offset), FAN_RAY_WEIGHT));
            }
            radius += FAN_RADIUS_STEP;
        }

        Ok(())
    }
}

impl From<&MaterialDesc> for Material {
    fn from(desc: &MaterialDesc) -> Self {
        if !(0.0..=1.0).contains(&desc.roughness) {
            log::warn!("Roughness {} clamped to [0, 1]", desc.roughness);
        }
        Material::new(desc.luminous, desc.color, desc.roughness)
    }
}

/// Two unit vectors perpendicular to `v` and to each other.
///
/// The first is found by solving `v . n = 0` for whichever component of `v`
/// is non-zero; the second candidate is made orthogonal to the first with
/// one Gram-Schmidt step.
fn orthonormal_basis(v: Direction) -> Result<(Direction, Direction), MathError> {
    let (dx, dy, dz) = (v.dx(), v.dy(), v.dz());
    let (n1, n2_candidate) = if dx != 0.0 {
        (
            Direction::new(-(dy + dz) / dx, 1.0, 1.0),
            Direction::new(-(dy + 2.0 * dz) / dx, 1.0, 2.0),
        )
    } else if dy != 0.0 {
        (
            Direction::new(1.0, -(dx + dz) / dy, 1.0),
            Direction::new(2.0, -(2.0 * dx + dz) / dy, 1.0),
        )
    } else if dz != 0.0 {
        (
            Direction::new(1.0, 1.0, -(dx + dy) / dz),
            Direction::new(1.0, 2.0, -(dx + 2.0 * dy) / dz),
        )
    } else {
        return Err(MathError::DegenerateVector(dx, dy, dz));
    };

    let n1 = n1.normalize()?;
    let parallel = n1.dot(n2_candidate);
    let n2 = Direction(n2_candidate.0 - parallel * n1.0).normalize()?;
    Ok((n1, n2))
}

/// One outgoing ray and its share of the blended color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatteredRay {
    pub ray: Ray,
    pub weight: f64,
}

impl ScatteredRay {
    pub fn new(ray: Ray, weight: f64) -> Self {
        Self { ray, weight }
    }
}

/// Result of a surface interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Reflection {
    /// Rays to follow; empty for light sources
    pub outgoing: Vec<ScatteredRay>,
    /// Base color of the surface
    pub color: Color,
}

impl Reflection {
    /// A light source: no further rays.
    pub fn emission(color: Color) -> Self {
        Self {
            outgoing: Vec::new(),
            color,
        }
    }

    /// True when the recursion stops here.
    pub fn is_emission(&self) -> bool {
        self.outgoing.is_empty()
    }

    /// Sum of all outgoing weights.
    pub fn total_weight(&self) -> f64 {
        self.outgoing.iter().map(|s| s.weight).sum()
    }
}
