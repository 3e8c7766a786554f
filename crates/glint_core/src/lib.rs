//! Glint Core - scene descriptions and render settings.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDesc`, `ShapeDesc`, `MaterialDesc`, `Color`
//! - **Render settings**: `RenderSettings`, `ImagePlane`
//! - **Loading**: JSON scene files with up-front validation
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("{} shapes at {}x{}",
//!     scene.shape_count(),
//!     scene.render.width,
//!     scene.render.height);
//! ```

pub mod color;
pub mod loader;
pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use color::Color;
pub use loader::{load_scene, load_scene_str, ConfigError, ConfigResult};
pub use scene::{MaterialDesc, SceneDesc, ShapeDesc};
pub use settings::{ImagePlane, RenderSettings, DEFAULT_BUCKET_SIZE, DEFAULT_MAX_DEPTH};
