//! Walk sessions: moving the player and resolving the cells it reaches

use crate::algorithm::resolution::{Resolution, SelectionPolicy, TileResolver};
use crate::algorithm::rng::RandomSource;
use crate::io::error::Result;
use crate::spatial::{Cursor, Direction, GridStore, PartCatalog, Tile, tiles::von_neumann_neighbors};

/// Engine-facing settings of a walk
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    /// Candidate policy for cells next to the anchor
    pub policy: SelectionPolicy,
    /// Also resolve the four neighbors of every visited cell
    pub lookahead: bool,
    /// Starting cell of the player
    pub start: [i32; 2],
}

/// What happened during one start or move event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Player position after the event
    pub position: [i32; 2],
    /// Tile under the player, if the cell is filled
    pub current: Option<Tile>,
    /// Tiles generated by this event, in placement order
    pub generated: Vec<Tile>,
    /// Cells that could not be filled this time
    pub unresolved: Vec<[i32; 2]>,
}

/// A player walking an infinite grid that fills itself on first visit
pub struct WalkSession<G, R> {
    resolver: TileResolver<G, R>,
    cursor: Cursor,
    lookahead: bool,
    history: Vec<Tile>,
    steps: usize,
}

impl<G: GridStore, R: RandomSource> WalkSession<G, R> {
    /// Create a session; nothing is resolved until [`Self::start`]
    pub const fn new(catalog: PartCatalog, grid: G, rng: R, config: SessionConfig) -> Self {
        Self {
            resolver: TileResolver::new(catalog, grid, rng, config.policy),
            cursor: Cursor::new(config.start),
            lookahead: config.lookahead,
            history: Vec::new(),
            steps: 0,
        }
    }

    /// Resolve the starting cell
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is empty or the grid rejects the write
    pub fn start(&mut self) -> Result<StepReport> {
        log::info!(
            "starting walk at ({}, {}) with {} parts",
            self.cursor.position()[0],
            self.cursor.position()[1],
            self.resolver.catalog().len()
        );
        self.visit()
    }

    /// Move the player one cell and resolve what it reaches
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is empty or the grid rejects a write
    /// to the player's own cell. Cells without a compatible part are reported
    /// in [`StepReport::unresolved`] instead, and lookahead never writes past
    /// the edge of a bounded grid.
    pub fn move_player(&mut self, direction: Direction) -> Result<StepReport> {
        self.cursor.step(direction);
        self.steps += 1;
        log::trace!("move {direction} to {:?}", self.cursor.position());
        self.visit()
    }

    /// Run a sequence of moves, returning one report per move
    ///
    /// # Errors
    ///
    /// Stops at the first non-recoverable error
    pub fn walk<I>(&mut self, moves: I) -> Result<Vec<StepReport>>
    where
        I: IntoIterator<Item = Direction>,
    {
        moves
            .into_iter()
            .map(|direction| self.move_player(direction))
            .collect()
    }

    fn visit(&mut self) -> Result<StepReport> {
        let position = self.cursor.position();
        let mut report = StepReport {
            position,
            current: None,
            generated: Vec::new(),
            unresolved: Vec::new(),
        };

        report.current = self.resolve_into(position, &mut report)?;

        if self.lookahead {
            for cell in von_neumann_neighbors(position) {
                // Neighbors past the edge of a bounded store are never filled
                if !self.resolver.grid().accepts(cell) {
                    log::trace!("lookahead skips ({}, {}) outside the grid", cell[0], cell[1]);
                    continue;
                }
                self.resolve_into(cell, &mut report)?;
            }
        }

        Ok(report)
    }

    fn resolve_into(&mut self, cell: [i32; 2], report: &mut StepReport) -> Result<Option<Tile>> {
        match self.resolver.resolve(cell) {
            Ok(Resolution::Existing(tile)) => Ok(Some(tile)),
            Ok(Resolution::Generated(tile)) => {
                self.history.push(tile);
                report.generated.push(tile);
                Ok(Some(tile))
            }
            Err(error) if error.is_recoverable() => {
                log::debug!("leaving ({}, {}) unfilled: {error}", cell[0], cell[1]);
                report.unresolved.push(cell);
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    /// Current player position
    pub const fn position(&self) -> [i32; 2] {
        self.cursor.position()
    }

    /// Every generated tile, in placement order
    pub fn history(&self) -> &[Tile] {
        &self.history
    }

    /// Number of moves made since the start
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Underlying resolver
    pub const fn resolver(&self) -> &TileResolver<G, R> {
        &self.resolver
    }

    /// Part catalog in use
    pub const fn catalog(&self) -> &PartCatalog {
        self.resolver.catalog()
    }

    /// Grid store in use
    pub const fn grid(&self) -> &G {
        self.resolver.grid()
    }
}
