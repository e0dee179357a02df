//! Code generation: serialize grids as Rust match-arm fragments and
//! splice them between anchor markers in the target source file.

mod fragment;
mod splice;

pub use fragment::{format_entry, join_fragments, EscapingError, Fragment};
pub use splice::{splice, AnchorRegion, SpliceError};
