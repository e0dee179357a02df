mod cli;

use clap::Parser;
use std::path::PathBuf;

use cli::{Args, Command};
use kana_artgen::ascii::{quantize, DensityRamp, RampError};
use kana_artgen::batch::{self, BatchOptions, BatchSummary};
use kana_artgen::config::Config;
use kana_artgen::render::{render, resolve_font, RenderOptions};

fn main() {
    env_logger::init();

    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let opts = match build_options(&args, &config) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match args.command {
        Some(Command::Preview { character }) => run_preview(&character, &opts),
        None => match batch::run(&opts) {
            Ok(summary) => print_summary(&summary),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

/// Merge CLI flags over config values over built-in defaults.
fn build_options(args: &Args, config: &Config) -> Result<BatchOptions, RampError> {
    let ramp = match args.ramp.as_deref().or(config.ramp.symbols.as_deref()) {
        Some(symbols) => DensityRamp::new(symbols)?,
        None => DensityRamp::default(),
    };

    let font_sources = if args.fonts.is_empty() {
        config.font.sources.clone()
    } else {
        args.fonts.clone()
    };

    let defaults = RenderOptions::default();
    Ok(BatchOptions {
        grid_width: args
            .width
            .or(config.grid.width)
            .unwrap_or(batch::DEFAULT_GRID_WIDTH),
        grid_height: args
            .height
            .or(config.grid.height)
            .unwrap_or(batch::DEFAULT_GRID_HEIGHT),
        render: RenderOptions {
            canvas_size: args
                .canvas
                .or(config.render.canvas)
                .unwrap_or(defaults.canvas_size),
            point_size: args
                .point_size
                .or(config.render.point_size)
                .unwrap_or(defaults.point_size),
        },
        font_sources,
        ramp,
        out_dir: args
            .out_dir
            .clone()
            .or_else(|| config.output.dir.clone())
            .unwrap_or_else(|| PathBuf::from("scripts")),
        target: args.target.clone().or_else(|| config.output.target.clone()),
    })
}

/// Render one character's grid to stdout and exit.
fn run_preview(character: &str, opts: &BatchOptions) {
    let mut chars = character.chars();
    let (first, rest) = (chars.next(), chars.next());
    let character = match (first, rest) {
        (Some(c), None) => c,
        _ => {
            eprintln!("Error: preview takes exactly one character, got {:?}", character);
            std::process::exit(1);
        }
    };

    let font = resolve_font(&opts.font_sources);
    let raster = render(character, &font, &opts.render);
    let grid = quantize(&raster, opts.grid_width, opts.grid_height, &opts.ramp);
    for row in grid.rows() {
        println!("{}", row);
    }
}

fn print_summary(summary: &BatchSummary) {
    println!("\n{}", "=".repeat(60));
    println!("Done. Tables written to:");
    for path in &summary.artifacts {
        println!("  - {}", path.display());
    }
    if let Some(target) = &summary.patched {
        println!("Patched: {}", target.display());
    }
    println!("{}", "=".repeat(60));
}
