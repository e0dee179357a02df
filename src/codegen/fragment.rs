//! Match-arm fragment formatting with lossless escaping.

use thiserror::Error;

use crate::ascii::ArtGrid;

/// One character's serialized table entry, ready for splicing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub character: char,
    pub text: String,
}

/// A row contained a character that cannot be represented in the table
/// literal syntax. The fragment fails rather than silently truncating.
#[derive(Debug, Error)]
#[error("row {row} for {character:?} contains unescapable character {offending:?}")]
pub struct EscapingError {
    pub character: char,
    pub row: usize,
    pub offending: char,
}

/// Serialize one character's grid as a Rust match-arm entry:
///
/// ```text
///         "あ" => vec![
///             "  .. ".to_string(),
///             ...
///         ],
/// ```
///
/// Quote and backslash symbols are escaped so the rows round-trip
/// through a naive parse of the string literals. Any other symbol
/// outside printable ASCII fails the fragment.
pub fn format_entry(character: char, grid: &ArtGrid) -> Result<Fragment, EscapingError> {
    let mut text = format!("        \"{}\" => vec![\n", character);
    for (row_idx, row) in grid.rows().iter().enumerate() {
        let escaped = escape_row(row).map_err(|offending| EscapingError {
            character,
            row: row_idx,
            offending,
        })?;
        text.push_str("            \"");
        text.push_str(&escaped);
        text.push_str("\".to_string(),\n");
    }
    text.push_str("        ],");
    Ok(Fragment { character, text })
}

/// Concatenate fragments in category order, newline-separated.
pub fn join_fragments(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_row(row: &str) -> Result<String, char> {
    let mut out = String::with_capacity(row.len());
    for c in row.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            ' '..='~' => out.push(c),
            other => return Err(other),
        }
    }
    Ok(out)
}
