//! Command line interface.

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line.
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Errors and warnings.
    Warn,
    /// Normal operational output.
    Info,
    /// Verbose diagnostics.
    Debug,
    /// Everything.
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

/// Command line arguments.
#[derive(Parser)]
#[command(name = "lumipath")]
#[command(about = "An offline path tracer in Rust")]
pub struct Args {
    /// Image width in pixels (height follows from the aspect ratio)
    #[arg(long, default_value_t = 400)]
    pub width: u32,

    /// Viewport aspect ratio, width / height
    #[arg(long, default_value_t = 16.0 / 9.0)]
    pub aspect_ratio: f32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 100)]
    pub samples_per_pixel: u32,

    /// Maximum number of ray bounces per sample
    #[arg(long, default_value_t = 50)]
    pub max_depth: u32,

    /// Base seed for the per-pixel random streams
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Output file path (.ppm for plain-text P3, .png for 8-bit PNG)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: String,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub debug_level: LogLevel,
}
