//! Font source resolution.
//!
//! The renderer depends on an abstract "best available glyph font": an
//! ordered list of font files is tried in turn and the first that loads
//! wins. When none loads, rendering degrades to a built-in placeholder
//! instead of failing; that condition is surfaced on stderr once.

use std::path::{Path, PathBuf};

/// Rendering parameters for a single glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Canvas edge length in pixels.
    pub canvas_size: usize,
    /// Glyph point size in pixels.
    pub point_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            canvas_size: 1000,
            point_size: 800.0,
        }
    }
}

/// The resolved glyph rendering capability.
pub enum GlyphFont {
    /// A parsed font ready for rasterization.
    Loaded(fontdue::Font),
    /// No source loaded; glyphs render as boxed placeholders.
    Fallback,
}

impl GlyphFont {
    pub fn is_fallback(&self) -> bool {
        matches!(self, GlyphFont::Fallback)
    }
}

/// Try each font source in order and return the first that parses.
///
/// Total failure is a soft-degrade condition, not an error: a warning is
/// emitted and [`GlyphFont::Fallback`] is returned.
pub fn resolve_font(sources: &[PathBuf]) -> GlyphFont {
    for path in sources {
        if let Some(font) = try_load(path) {
            log::info!("using font {}", path.display());
            return GlyphFont::Loaded(font);
        }
    }

    eprintln!("Warning: no usable font source; kana will render as boxed placeholders.");
    log::warn!("no usable font source among {} candidate(s)", sources.len());
    GlyphFont::Fallback
}

fn try_load(path: &Path) -> Option<fontdue::Font> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::debug!("font source {} unavailable: {}", path.display(), e);
            return None;
        }
    };
    match fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()) {
        Ok(font) => Some(font),
        Err(e) => {
            log::warn!("failed to parse font {}: {}", path.display(), e);
            None
        }
    }
}
