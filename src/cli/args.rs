//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate kana ASCII-art tables and splice them into the viewer source
#[derive(Parser, Debug)]
#[command(name = "kana-artgen")]
#[command(version, about = "Kana glyph to ASCII-art table generator", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Grid width in symbols (default: 50)
    #[arg(long)]
    pub width: Option<u16>,

    /// Grid height in rows (default: 15)
    #[arg(long)]
    pub height: Option<u16>,

    /// Render canvas size in pixels (default: 1000)
    #[arg(long)]
    pub canvas: Option<usize>,

    /// Glyph point size in pixels (default: 800)
    #[arg(long)]
    pub point_size: Option<f32>,

    /// Font file to try, in order (repeatable)
    #[arg(long = "font")]
    pub fonts: Vec<PathBuf>,

    /// Directory for the per-category table files (default: scripts)
    #[arg(long, short)]
    pub out_dir: Option<PathBuf>,

    /// Source file to splice the tables into
    #[arg(long, short)]
    pub target: Option<PathBuf>,

    /// Density ramp override, lightest to darkest
    #[arg(long)]
    pub ramp: Option<String>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a single character's grid to stdout
    Preview {
        /// The character to render
        character: String,
    },
}
