//! Density ramp definitions for luminance-to-symbol mapping.

use thiserror::Error;

/// Default density ramp (13 levels).
/// Symbols ordered from lightest (space) to densest (@).
/// Restricted to printable ASCII so downstream consumers never have to
/// deal with ambiguous display widths.
pub const DEFAULT_RAMP: &str = " .',:;-=+*#%@";

/// An ordered sequence of symbols from lightest to darkest.
///
/// Invariants enforced at construction:
/// - at least 2 symbols
/// - printable ASCII only (0x20..=0x7E)
/// - no duplicate symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityRamp {
    symbols: Vec<char>,
}

/// Errors that can occur when building a density ramp.
#[derive(Debug, Error)]
pub enum RampError {
    #[error("density ramp needs at least 2 symbols, got {0}")]
    TooShort(usize),
    #[error("density ramp symbol {0:?} is not printable ASCII")]
    NotPrintableAscii(char),
    #[error("density ramp contains duplicate symbol {0:?}")]
    Duplicate(char),
}

impl DensityRamp {
    /// Build a ramp from a string of symbols ordered lightest to darkest.
    pub fn new(symbols: &str) -> Result<Self, RampError> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.len() < 2 {
            return Err(RampError::TooShort(symbols.len()));
        }
        for (i, &c) in symbols.iter().enumerate() {
            if !(' '..='~').contains(&c) {
                return Err(RampError::NotPrintableAscii(c));
            }
            if symbols[..i].contains(&c) {
                return Err(RampError::Duplicate(c));
            }
        }
        Ok(Self { symbols })
    }

    /// Number of density levels.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; a ramp has at least 2 symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at the given level, clamped to the ramp bounds.
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index.min(self.symbols.len() - 1)]
    }

    /// The lightest symbol (level 0).
    pub fn lightest(&self) -> char {
        self.symbols[0]
    }

    /// The densest symbol (last level).
    pub fn darkest(&self) -> char {
        self.symbols[self.symbols.len() - 1]
    }
}

impl Default for DensityRamp {
    fn default() -> Self {
        // DEFAULT_RAMP satisfies all invariants
        Self {
            symbols: DEFAULT_RAMP.chars().collect(),
        }
    }
}
