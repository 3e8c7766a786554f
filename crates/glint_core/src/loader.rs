//! Scene file loading.
//!
//! Scenes are stored as JSON. Loading always validates, so a `SceneDesc`
//! coming out of this module is ready to render.

use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDesc;
use crate::settings::ImagePlane;

/// Errors in scene files and render settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Shape {index}: radius must be positive and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f64 },

    #[error("Shape {index}: roughness is not a number")]
    InvalidRoughness { index: usize },

    #[error("Bucket size {bucket_size} does not evenly divide a {width}x{height} image")]
    InvalidTileConfiguration {
        bucket_size: u32,
        width: u32,
        height: u32,
    },

    #[error("Image must have at least one pixel, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Invalid image plane: {0:?}")]
    InvalidImagePlane(ImagePlane),

    #[error("Maximum bounce depth must be at least 1")]
    InvalidMaxDepth,
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load and validate a scene from a JSON file.
///
/// # Example
///
/// ```ignore
/// use glint_core::load_scene;
///
/// let scene = load_scene("scenes/demo.json")?;
/// println!("Loaded {} shapes", scene.shape_count());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> ConfigResult<SceneDesc> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let scene = load_scene_str(&contents)?;

    log::info!(
        "Loaded scene {}: {} shapes ({} luminous)",
        path.display(),
        scene.shape_count(),
        scene.light_count()
    );

    Ok(scene)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_str(contents: &str) -> ConfigResult<SceneDesc> {
    let scene: SceneDesc = serde_json::from_str(contents)?;
    scene.validate()?;
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::scene::ShapeDesc;

    const TWO_SPHERES: &str = r#"{
        "background": [32, 32, 32, 255],
        "shapes": [
            {
                "kind": "sphere",
                "center": [-10, 0, 50],
                "radius": 1,
                "material": { "color": [0, 255, 0, 255], "roughness": 1 }
            },
            {
                "kind": "sphere",
                "center": [30, 0, 40],
                "radius": 30,
                "material": { "luminous": true, "color": [255, 255, 255, 255] }
            }
        ],
        "render": { "width": 40, "height": 20, "bucket_size": 10 }
    }"#;

    #[test]
    fn test_load_scene_str() {
        let scene = load_scene_str(TWO_SPHERES).unwrap();

        assert_eq!(scene.background, Color::rgb(32, 32, 32));
        assert_eq!(scene.shape_count(), 2);
        assert_eq!(scene.light_count(), 1);

        // Unspecified render settings fall back to defaults
        assert_eq!(scene.render.width, 40);
        assert_eq!(scene.render.bucket_size, 10);
        assert_eq!(scene.render.plane, ImagePlane::default());

        let ShapeDesc::Sphere { material, .. } = scene.shapes[1];
        assert!(material.luminous);
        assert_eq!(material.roughness, 0.0);
    }

    #[test]
    fn test_demo_matches_file_form() {
        let mut scene = load_scene_str(TWO_SPHERES).unwrap();
        scene.render = Default::default();
        assert_eq!(scene, SceneDesc::demo());
    }

    #[test]
    fn test_invalid_tiles_rejected_on_load() {
        let json = TWO_SPHERES.replace("\"bucket_size\": 10", "\"bucket_size\": 15");
        assert!(matches!(
            load_scene_str(&json),
            Err(ConfigError::InvalidTileConfiguration { .. })
        ));
    }

    #[test]
    fn test_unknown_shape_kind() {
        let json = r#"{ "background": [0,0,0,255], "shapes": [ { "kind": "torus" } ] }"#;
        assert!(matches!(load_scene_str(json), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_shipped_scenes_load() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../scenes");

        let scene = load_scene(format!("{dir}/two_spheres.json")).unwrap();
        assert_eq!(scene, SceneDesc::demo());

        let scene = load_scene(format!("{dir}/mirrors.json")).unwrap();
        assert_eq!(scene.shape_count(), 3);
        assert_eq!(scene.render.max_depth, 8);
    }

    #[test]
    fn test_missing_file() {
        let result = load_scene("does/not/exist.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
