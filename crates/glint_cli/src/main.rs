use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{load_scene, SceneDesc};
use glint_renderer::{render, ImageBuffer, Scene};

mod cli;

use cli::Args;

/// Encode the rendered buffer as an 8-bit RGBA PNG.
fn save_png(image: &ImageBuffer, path: &Path) -> Result<()> {
    let buffer = image::RgbaImage::from_raw(image.width, image.height, image.as_bytes().to_vec())
        .context("Pixel buffer does not match image dimensions")?;
    buffer
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let mut desc = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene file given, using the demo scene");
            SceneDesc::demo()
        }
    };
    args.apply(&mut desc.render);

    let scene = Scene::from(&desc);

    println!("Rendering...");
    let start = Instant::now();
    let image = render(&scene, &desc.render)?;
    let elapsed = start.elapsed();

    save_png(&image, &args.output)?;
    log::info!("Saved to {}", args.output.display());
    println!("Time elapsed: {:?}", elapsed);

    Ok(())
}
