//! Weighted grid generation

use rand::distr::weighted::WeightedIndex;
use rand::prelude::*;

use crate::error::{SlotError, SlotResult};
use crate::grid::Grid;
use crate::symbols::SymbolCatalog;

/// Draws grids from a catalog's weights.
///
/// Each cell is an independent draw with replacement, so
/// P(symbol i) = weight_i / Σ weights.
#[derive(Debug, Clone)]
pub struct GridGenerator {
    ids: Vec<u32>,
    dist: WeightedIndex<u32>,
}

impl GridGenerator {
    /// Create a generator for `catalog`
    pub fn new(catalog: &SymbolCatalog) -> SlotResult<Self> {
        let dist = WeightedIndex::new(catalog.weights())
            .map_err(|e| SlotError::InvalidCatalog(e.to_string()))?;

        Ok(Self {
            ids: catalog.ids(),
            dist,
        })
    }

    /// Draw a single symbol id
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        self.ids[self.dist.sample(rng)]
    }

    /// Fresh random grid
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, rows: usize, cols: usize) -> Grid {
        let cells = (0..rows * cols).map(|_| self.draw(rng)).collect();
        Grid::from_cells(rows, cols, cells)
    }

    /// Random grid with row 0 overwritten by `winning_id`
    pub fn generate_forced_win<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        rows: usize,
        cols: usize,
        winning_id: u32,
    ) -> SlotResult<Grid> {
        if !self.ids.contains(&winning_id) {
            return Err(SlotError::UnknownSymbol(winning_id));
        }

        let mut grid = self.generate(rng, rows, cols);
        grid.fill_row(0, winning_id);
        Ok(grid)
    }
}
