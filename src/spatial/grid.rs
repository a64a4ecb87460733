//! Grid stores mapping cell coordinates to placed tiles
//!
//! `SparseGrid` covers the whole `i32` plane and only allocates for filled
//! cells. `BoundedGrid` is a dense array sized to a canvas; it reads as
//! unfilled outside its area and refuses writes there.

use ndarray::Array2;
use std::collections::HashMap;

use crate::io::error::{AlgorithmError, Result};
use crate::spatial::tiles::Tile;

/// Write-once storage of tiles by grid coordinate
pub trait GridStore {
    /// Tile at a cell, or `None` when the cell is unfilled
    ///
    /// Never fails, for any coordinate.
    fn get(&self, position: [i32; 2]) -> Option<&Tile>;

    /// Commit a tile into its (unfilled) cell
    ///
    /// # Errors
    ///
    /// Returns `DuplicateResolution` if the cell is already filled. Bounded
    /// stores return `CellOutOfBounds` for cells outside their area.
    fn set(&mut self, tile: Tile) -> Result<()>;

    /// Number of filled cells
    fn filled_count(&self) -> usize;

    /// Whether a cell is filled
    fn contains(&self, position: [i32; 2]) -> bool {
        self.get(position).is_some()
    }

    /// Whether the store can ever hold a tile at this cell
    fn accepts(&self, _position: [i32; 2]) -> bool {
        true
    }
}

impl<G: GridStore + ?Sized> GridStore for Box<G> {
    fn get(&self, position: [i32; 2]) -> Option<&Tile> {
        (**self).get(position)
    }

    fn set(&mut self, tile: Tile) -> Result<()> {
        (**self).set(tile)
    }

    fn filled_count(&self) -> usize {
        (**self).filled_count()
    }

    fn accepts(&self, position: [i32; 2]) -> bool {
        (**self).accepts(position)
    }
}

/// Unbounded grid backed by a hash map
#[derive(Debug, Clone, Default)]
pub struct SparseGrid {
    cells: HashMap<[i32; 2], Tile>,
}

impl SparseGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }
}

impl GridStore for SparseGrid {
    fn get(&self, position: [i32; 2]) -> Option<&Tile> {
        self.cells.get(&position)
    }

    fn set(&mut self, tile: Tile) -> Result<()> {
        match self.cells.entry(tile.position) {
            std::collections::hash_map::Entry::Occupied(_) => {
                Err(AlgorithmError::DuplicateResolution {
                    position: tile.position,
                })
            }
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(tile);
                Ok(())
            }
        }
    }

    fn filled_count(&self) -> usize {
        self.cells.len()
    }
}

/// Fixed-size grid covering `[0, columns) x [0, rows)`
///
/// Usually sized from a canvas and a cell edge length.
#[derive(Debug, Clone)]
pub struct BoundedGrid {
    /// Cells indexed by `[x, y]`
    cells: Array2<Option<Tile>>,
    filled: usize,
}

impl BoundedGrid {
    /// Create a grid with the given number of columns and rows
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            cells: Array2::from_elem((columns, rows), None),
            filled: 0,
        }
    }

    /// Create a grid that covers a canvas divided into square cells
    ///
    /// Partial cells at the right and bottom edges are included.
    pub fn for_canvas(width: usize, height: usize, scaling_factor: usize) -> Self {
        let scale = scaling_factor.max(1);
        Self::new(width.div_ceil(scale), height.div_ceil(scale))
    }

    /// Grid dimensions (columns, rows)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Whether a cell lies inside the allocated area
    pub fn in_bounds(&self, position: [i32; 2]) -> bool {
        self.index(position).is_some()
    }

    fn index(&self, position: [i32; 2]) -> Option<[usize; 2]> {
        let (columns, rows) = self.cells.dim();
        let x = usize::try_from(position[0]).ok()?;
        let y = usize::try_from(position[1]).ok()?;
        (x < columns && y < rows).then_some([x, y])
    }
}

impl GridStore for BoundedGrid {
    fn get(&self, position: [i32; 2]) -> Option<&Tile> {
        self.index(position)
            .and_then(|index| self.cells.get(index))
            .and_then(Option::as_ref)
    }

    fn set(&mut self, tile: Tile) -> Result<()> {
        let dimensions = self.dimensions();
        let cell = self
            .index(tile.position)
            .and_then(|index| self.cells.get_mut(index))
            .ok_or(AlgorithmError::CellOutOfBounds {
                position: tile.position,
                dimensions,
            })?;

        if cell.is_some() {
            return Err(AlgorithmError::DuplicateResolution {
                position: tile.position,
            });
        }

        *cell = Some(tile);
        self.filled += 1;
        Ok(())
    }

    fn filled_count(&self) -> usize {
        self.filled
    }

    fn accepts(&self, position: [i32; 2]) -> bool {
        self.in_bounds(position)
    }
}
