//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - The part catalog and its adjacency relation
//! - Grid stores for placed tiles
//! - The player cursor

/// Part catalog built from source image dimensions
pub mod catalog;
/// Player cursor and movement directions
pub mod cursor;
/// Write-once grid stores
pub mod grid;
/// Placed tile type and neighborhood helpers
pub mod tiles;

pub use catalog::{Part, PartCatalog, PartId};
pub use cursor::{Cursor, Direction};
pub use grid::{BoundedGrid, GridStore, SparseGrid};
pub use tiles::Tile;
