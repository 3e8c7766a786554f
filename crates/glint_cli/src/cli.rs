use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_core::RenderSettings;
use log::LevelFilter;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "Render a scene of spheres to a PNG image")]
pub struct Args {
    /// Scene file (JSON); renders the built-in demo scene when omitted
    pub scene: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "image.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Bucket edge in pixels, must divide width and height
    #[arg(long)]
    pub bucket_size: Option<u32>,

    /// Maximum number of bounces per ray
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply command line overrides on top of the scene's settings.
    pub fn apply(&self, settings: &mut RenderSettings) {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(bucket_size) = self.bucket_size {
            settings.bucket_size = bucket_size;
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = max_depth;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["glint"]);
        assert!(args.scene.is_none());
        assert_eq!(args.output, PathBuf::from("image.png"));

        let mut settings = RenderSettings::default();
        args.apply(&mut settings);
        assert_eq!(settings, RenderSettings::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "glint",
            "scene.json",
            "-o",
            "out.png",
            "--width",
            "400",
            "--height",
            "200",
            "--bucket-size",
            "50",
            "--max-depth",
            "3",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.scene, Some(PathBuf::from("scene.json")));
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);

        let mut settings = RenderSettings::default();
        args.apply(&mut settings);
        assert_eq!((settings.width, settings.height), (400, 200));
        assert_eq!(settings.bucket_size, 50);
        assert_eq!(settings.max_depth, 3);
    }
}
