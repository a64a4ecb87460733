//! Lazy, adjacency-constrained tiling of an infinite grid
//!
//! Parts are cut from a source image, one per pixel, and are compatible when
//! their source pixels touch. As a player walks the grid, every cell it
//! reaches for the first time is filled with a part compatible with the most
//! recently placed one. Filled cells never change.

#![forbid(unsafe_code)]

/// Tile resolution engine, draw sources, and walk sessions
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Part catalog, grid stores, and cursor
pub mod spatial;

pub use algorithm::resolution::{Resolution, SelectionPolicy, TileResolver};
pub use algorithm::session::{SessionConfig, StepReport, WalkSession};
pub use io::error::{AlgorithmError, Result};
