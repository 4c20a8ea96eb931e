use std::path::PathBuf;

use clap::Parser;

/// Full-window hero slider over a directory of images.
#[derive(Debug, Parser)]
#[command(name = "hero-slider", version, about)]
pub struct Cli {
    /// Directory holding the slide images (png, jpg, jpeg, bmp, gif).
    pub image_directory: PathBuf,

    /// TOML file with captions, statistics and control toggles.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seconds between automatic advances.
    #[arg(long, allow_negative_numbers = true)]
    pub interval: Option<f32>,

    /// Horizontal travel, in window pixels, that counts as a swipe.
    #[arg(long)]
    pub swipe_threshold: Option<f32>,

    /// Show the slides in random order instead of by file name.
    #[arg(long)]
    pub shuffle: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
