//! Tile resolution: deciding which part occupies a newly visited cell
//!
//! A resolver owns everything a walk mutates (grid, draw source, anchor) and
//! a read-only part catalog, so independent walks never share state.

use crate::algorithm::rng::RandomSource;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::{GridStore, PartCatalog, PartId, Tile, tiles::von_neumann_neighbors};

/// How a cell next to an existing anchor picks its part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SelectionPolicy {
    /// Pool the neighbor lists of the filled cells around the target, then
    /// index the pool with a bound taken from the anchor's neighbor count
    ///
    /// Picks whose index falls past the end of the pool fail and leave the
    /// cell unfilled.
    #[default]
    NeighborPool,
    /// Index the anchor's own neighbor list, ignoring the surroundings
    AnchorOnly,
}

/// Outcome of resolving one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The cell was already filled; nothing changed
    Existing(Tile),
    /// A new tile was placed and became the anchor
    Generated(Tile),
}

impl Resolution {
    /// Tile occupying the cell
    pub const fn tile(&self) -> Tile {
        match self {
            Self::Existing(tile) | Self::Generated(tile) => *tile,
        }
    }

    /// Whether this call placed the tile
    pub const fn is_newly_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }
}

/// Resolver context: catalog, grid, draw source, anchor, and policy
#[derive(Debug, Clone)]
pub struct TileResolver<G, R> {
    catalog: PartCatalog,
    grid: G,
    rng: R,
    anchor: Option<Tile>,
    policy: SelectionPolicy,
}

impl<G: GridStore, R: RandomSource> TileResolver<G, R> {
    /// Create a resolver with no anchor
    pub const fn new(catalog: PartCatalog, grid: G, rng: R, policy: SelectionPolicy) -> Self {
        Self {
            catalog,
            grid,
            rng,
            anchor: None,
            policy,
        }
    }

    /// Resolve the cell at `position`
    ///
    /// Filled cells are returned as they are. Otherwise a part is chosen,
    /// committed to the grid, and made the new anchor.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The catalog is empty and there is no anchor yet (`EmptyCatalog`)
    /// - No candidate could be picked next to the anchor (`NoCompatiblePart`);
    ///   the cell stays unfilled
    /// - The grid refuses the write (`DuplicateResolution`, `CellOutOfBounds`)
    pub fn resolve(&mut self, position: [i32; 2]) -> Result<Resolution> {
        if let Some(&tile) = self.grid.get(position) {
            return Ok(Resolution::Existing(tile));
        }

        let part = match self.anchor {
            None => self.pick_unconstrained()?,
            Some(anchor) => self.pick_constrained(anchor, position)?,
        };

        let tile = Tile::new(part, position);
        self.grid.set(tile)?;
        self.anchor = Some(tile);

        log::debug!(
            "generated part {part} at ({}, {}) [{} filled]",
            position[0],
            position[1],
            self.grid.filled_count()
        );

        Ok(Resolution::Generated(tile))
    }

    fn pick_unconstrained(&mut self) -> Result<PartId> {
        let index = self
            .rng
            .pick_index(self.catalog.len())
            .ok_or(AlgorithmError::EmptyCatalog)?;
        self.catalog
            .part_at(index)
            .map(|part| part.id)
            .ok_or(AlgorithmError::EmptyCatalog)
    }

    fn pick_constrained(&mut self, anchor: Tile, position: [i32; 2]) -> Result<PartId> {
        let anchor_neighbors = self
            .catalog
            .get(anchor.part)
            .map(|part| part.neighbors.as_slice())
            .unwrap_or_default();

        let pool = match self.policy {
            SelectionPolicy::NeighborPool => self.candidate_pool(position),
            SelectionPolicy::AnchorOnly => anchor_neighbors.to_vec(),
        };

        let Some(index) = self.rng.pick_index(anchor_neighbors.len()) else {
            return Err(AlgorithmError::NoCompatiblePart {
                position,
                candidates: pool.len(),
                index: None,
            });
        };

        pool.get(index)
            .copied()
            .ok_or(AlgorithmError::NoCompatiblePart {
                position,
                candidates: pool.len(),
                index: Some(index),
            })
    }

    /// Concatenated neighbor lists of the filled cells around `position`
    ///
    /// Cells are visited in (+x, -x, +y, -y) order. The result may repeat
    /// ids when two surrounding parts share a neighbor.
    pub fn candidate_pool(&self, position: [i32; 2]) -> Vec<PartId> {
        von_neumann_neighbors(position)
            .into_iter()
            .filter_map(|cell| self.grid.get(cell))
            .filter_map(|tile| self.catalog.get(tile.part))
            .flat_map(|part| part.neighbors.iter().copied())
            .collect()
    }

    /// Most recently generated tile
    pub const fn anchor(&self) -> Option<Tile> {
        self.anchor
    }

    /// Part catalog used for selection
    pub const fn catalog(&self) -> &PartCatalog {
        &self.catalog
    }

    /// Grid store holding placed tiles
    pub const fn grid(&self) -> &G {
        &self.grid
    }

    /// Draw source
    pub const fn rng(&self) -> &R {
        &self.rng
    }

    /// Active candidate policy
    pub const fn policy(&self) -> SelectionPolicy {
        self.policy
    }
}
