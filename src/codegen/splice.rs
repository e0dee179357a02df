//! Anchor-bounded region replacement in the target source file.

use regex::Regex;
use thiserror::Error;

/// A named region of the target blob bounded by literal start/end
/// markers. The markers themselves are preserved verbatim on splice;
/// only the text strictly between them is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorRegion {
    pub name: String,
    pub start: String,
    pub end: String,
}

/// Errors that can occur while splicing.
#[derive(Debug, Error)]
pub enum SpliceError {
    /// A region's start/end marker pair was not found in the target.
    #[error("anchor markers for {region:?} not found in target")]
    AnchorNotFound { region: String },
    /// The compiled marker pattern was rejected by the regex engine.
    #[error("invalid anchor pattern for {region:?}: {source}")]
    Pattern {
        region: String,
        source: regex::Error,
    },
}

impl AnchorRegion {
    pub fn new(name: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// Non-greedy matcher over the smallest region satisfying the
    /// marker pair, so unrelated trailing blocks are never swallowed.
    fn matcher(&self) -> Result<Regex, SpliceError> {
        let pattern = format!(
            "(?s){}.*?{}",
            regex::escape(&self.start),
            regex::escape(&self.end)
        );
        Regex::new(&pattern).map_err(|source| SpliceError::Pattern {
            region: self.name.clone(),
            source,
        })
    }
}

/// Replace each region's interior with its replacement body.
///
/// The whole transformation happens in memory; on any error the caller
/// still holds the original blob, so nothing is ever half-patched.
/// Running the same splice twice yields the same blob as running it
/// once, and all bytes outside the regions are preserved exactly.
pub fn splice(blob: &str, replacements: &[(AnchorRegion, String)]) -> Result<String, SpliceError> {
    let mut patched = blob.to_string();

    for (region, body) in replacements {
        let matcher = region.matcher()?;
        let found = matcher
            .find(&patched)
            .ok_or_else(|| SpliceError::AnchorNotFound {
                region: region.name.clone(),
            })?;

        let mut next = String::with_capacity(patched.len() + body.len());
        next.push_str(&patched[..found.start()]);
        next.push_str(&region.start);
        next.push('\n');
        next.push_str(body);
        next.push('\n');
        next.push_str(&region.end);
        next.push_str(&patched[found.end()..]);
        patched = next;
    }

    Ok(patched)
}
