//! Scene description types.
//!
//! This module defines the renderer-agnostic description of a scene as it
//! is read from disk or built in code. The renderer turns a validated
//! `SceneDesc` into its own runtime representation.

use glint_math::Point;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::loader::{ConfigError, ConfigResult};
use crate::settings::RenderSettings;

/// Surface response of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialDesc {
    /// Emits light; rays stop here
    #[serde(default)]
    pub luminous: bool,

    /// Base color
    pub color: Color,

    /// Spread of scattered rays around the mirror direction (clamped to 0-1)
    #[serde(default)]
    pub roughness: f64,
}

impl Default for MaterialDesc {
    fn default() -> Self {
        Self {
            luminous: false,
            color: Color::rgb(128, 128, 128),
            roughness: 0.0,
        }
    }
}

impl MaterialDesc {
    /// A light source of the given color.
    pub fn light(color: Color) -> Self {
        Self {
            luminous: true,
            color,
            roughness: 0.0,
        }
    }

    /// A reflective surface.
    pub fn surface(color: Color, roughness: f64) -> Self {
        Self {
            luminous: false,
            color,
            roughness,
        }
    }
}

/// One shape in the scene, tagged by `kind` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeDesc {
    Sphere {
        center: [f64; 3],
        radius: f64,
        material: MaterialDesc,
    },
}

impl ShapeDesc {
    pub fn sphere(center: Point, radius: f64, material: MaterialDesc) -> Self {
        ShapeDesc::Sphere {
            center: [center.x(), center.y(), center.z()],
            radius,
            material,
        }
    }

    pub fn material(&self) -> &MaterialDesc {
        match self {
            ShapeDesc::Sphere { material, .. } => material,
        }
    }

    fn validate(&self, index: usize) -> ConfigResult<()> {
        match self {
            ShapeDesc::Sphere {
                center,
                radius,
                material,
            } => {
                if !(radius.is_finite() && *radius > 0.0) || !center.iter().all(|c| c.is_finite()) {
                    return Err(ConfigError::InvalidRadius {
                        index,
                        radius: *radius,
                    });
                }
                if material.roughness.is_nan() {
                    return Err(ConfigError::InvalidRoughness { index });
                }
            }
        }
        Ok(())
    }
}

/// A complete scene: shapes, background and render settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDesc {
    /// Color returned by rays that hit nothing
    pub background: Color,

    /// Shapes; order only matters for exact distance ties
    #[serde(default)]
    pub shapes: Vec<ShapeDesc>,

    #[serde(default)]
    pub render: RenderSettings,
}

impl Default for SceneDesc {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            shapes: Vec::new(),
            render: RenderSettings::default(),
        }
    }
}

impl SceneDesc {
    /// Create an empty scene with the given background.
    pub fn new(background: Color) -> Self {
        Self {
            background,
            ..Default::default()
        }
    }

    /// Add a shape, builder style.
    pub fn with_shape(mut self, shape: ShapeDesc) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Replace the render settings.
    pub fn with_render(mut self, render: RenderSettings) -> Self {
        self.render = render;
        self
    }

    /// A small rough green sphere lit by a large white light sphere on a
    /// dark gray background.
    pub fn demo() -> Self {
        SceneDesc::new(Color::rgb(32, 32, 32))
            .with_shape(ShapeDesc::sphere(
                Point::new(-10.0, 0.0, 50.0),
                1.0,
                MaterialDesc::surface(Color::rgb(0, 255, 0), 1.0),
            ))
            .with_shape(ShapeDesc::sphere(
                Point::new(30.0, 0.0, 40.0),
                30.0,
                MaterialDesc::light(Color::WHITE),
            ))
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn light_count(&self) -> usize {
        self.shapes.iter().filter(|s| s.material().luminous).count()
    }

    /// Check shapes and render settings before any rendering starts.
    pub fn validate(&self) -> ConfigResult<()> {
        for (index, shape) in self.shapes.iter().enumerate() {
            shape.validate(index)?;
        }
        self.render.validate()
    }
}
