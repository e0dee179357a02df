//! Batch driver: render every kana, quantize, format, write the
//! per-category table files and splice the target source file.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::ascii::{quantize, DensityRamp};
use crate::codegen::{format_entry, join_fragments, splice, EscapingError, SpliceError};
use crate::kana::{Category, ALL_CATEGORIES};
use crate::render::{render, resolve_font, GlyphFont, RenderOptions};

/// Default grid width in symbols.
pub const DEFAULT_GRID_WIDTH: u16 = 50;
/// Default grid height in rows.
pub const DEFAULT_GRID_HEIGHT: u16 = 15;

/// Everything a batch run needs, resolved from CLI flags and config.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub grid_width: u16,
    pub grid_height: u16,
    pub render: RenderOptions,
    pub font_sources: Vec<PathBuf>,
    pub ramp: DensityRamp,
    /// Directory receiving the per-category table files.
    pub out_dir: PathBuf,
    /// Source file to splice the tables into; `None` skips splicing.
    pub target: Option<PathBuf>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            render: RenderOptions::default(),
            font_sources: Vec::new(),
            ramp: DensityRamp::default(),
            out_dir: PathBuf::from("scripts"),
            target: None,
        }
    }
}

/// What a completed run produced.
#[derive(Debug)]
pub struct BatchSummary {
    /// Per-category table files, in category order.
    pub artifacts: Vec<PathBuf>,
    /// The spliced target file, when one was configured.
    pub patched: Option<PathBuf>,
}

/// Errors that abort a batch run. There is no partial-success contract:
/// the first failure stops the whole run.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Escaping(#[from] EscapingError),
    #[error(transparent)]
    Splice(#[from] SpliceError),
}

/// Run the full pipeline.
///
/// Renders each category's characters in declared order, prints the
/// transcript to stdout, writes one table file per category, then reads
/// the target once, splices both regions in memory and writes it back
/// in a single call. A missing anchor aborts before the target write.
pub fn run(opts: &BatchOptions) -> Result<BatchSummary, BatchError> {
    let font = resolve_font(&opts.font_sources);

    let tables = generate_tables(opts, &font)?;

    fs::create_dir_all(&opts.out_dir).map_err(|source| BatchError::Write {
        path: opts.out_dir.clone(),
        source,
    })?;

    let mut artifacts = Vec::with_capacity(tables.len());
    for (category, body) in &tables {
        let path = opts.out_dir.join(category.artifact_file());
        fs::write(&path, body).map_err(|source| BatchError::Write {
            path: path.clone(),
            source,
        })?;
        artifacts.push(path);
    }

    let mut patched = None;
    if let Some(target) = &opts.target {
        let blob = fs::read_to_string(target).map_err(|source| BatchError::Read {
            path: target.clone(),
            source,
        })?;

        let replacements: Vec<_> = tables
            .iter()
            .map(|(category, body)| (category.anchor(), body.clone()))
            .collect();
        let updated = splice(&blob, &replacements)?;

        fs::write(target, updated).map_err(|source| BatchError::Write {
            path: target.clone(),
            source,
        })?;
        patched = Some(target.clone());
    }

    Ok(BatchSummary { artifacts, patched })
}

/// Render, quantize and format every character, printing the transcript
/// along the way. Returns the concatenated table body per category.
fn generate_tables(
    opts: &BatchOptions,
    font: &GlyphFont,
) -> Result<Vec<(Category, String)>, BatchError> {
    let mut tables = Vec::with_capacity(ALL_CATEGORIES.len());

    for &category in ALL_CATEGORIES {
        println!("\n{}", "=".repeat(60));
        println!("{}", category.display_name());
        println!("{}", "=".repeat(60));

        let mut fragments = Vec::with_capacity(category.characters().len());
        for &character in category.characters() {
            let raster = render(character, font, &opts.render);
            let grid = quantize(&raster, opts.grid_width, opts.grid_height, &opts.ramp);

            println!("\n{}:", character);
            for row in grid.rows() {
                println!("{}", row);
            }

            fragments.push(format_entry(character, &grid)?);
        }
        tables.push((category, join_fragments(&fragments)));
    }

    Ok(tables)
}
