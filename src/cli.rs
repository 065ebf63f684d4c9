use clap::Parser;
use std::path::PathBuf;

/// A terminal-based viewer for normalized single-channel image planes
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Image file path(s) to normalize and display
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output width in terminal columns
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Output height in terminal rows
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Apply z-score normalization only, skipping the unit-range rescale
    #[arg(short, long)]
    pub zscore: bool,

    /// Write the normalized plane to this path as an 8-bit grayscale image
    /// instead of displaying it
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Show normalization statistics
    #[arg(short, long)]
    pub verbose: bool,
}
