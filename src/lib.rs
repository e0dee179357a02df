//! kana-artgen library crate.
//!
//! Turns each kana glyph into a fixed-size ASCII-art grid and splices
//! the resulting match-arm tables into the viewer's source file between
//! anchor markers. This module exposes the pipeline stages for
//! integration testing.

pub mod ascii;
pub mod batch;
pub mod codegen;
pub mod config;
pub mod kana;
pub mod render;
