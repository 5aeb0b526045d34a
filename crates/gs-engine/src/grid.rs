//! Symbol grid (rows × columns)

use serde::{Deserialize, Serialize};

use crate::error::{SlotError, SlotResult};

/// Reference grid size
pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 5;

/// A rows × cols grid of symbol ids, stored row-major.
///
/// There are no cell setters: a grid is built whole and replaced whole.
/// Deserialization goes through the same checks as [`Grid::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

/// Unchecked wire form of [`Grid`]
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = SlotError;

    fn try_from(raw: RawGrid) -> SlotResult<Self> {
        Self::new(raw.rows, raw.cols, raw.cells)
    }
}

impl Grid {
    /// Build from row-major cells. Both dimensions must be non-zero and
    /// `cells` must hold exactly `rows * cols` ids.
    pub fn new(rows: usize, cols: usize, cells: Vec<u32>) -> SlotResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(SlotError::InvalidConfig(format!(
                "grid must be at least 1x1, got {rows}x{cols}"
            )));
        }
        if rows.checked_mul(cols) != Some(cells.len()) {
            return Err(SlotError::InvalidConfig(format!(
                "{rows}x{cols} grid needs {} cells, got {}",
                rows.saturating_mul(cols),
                cells.len()
            )));
        }

        Ok(Self { rows, cols, cells })
    }

    /// Build from nested rows. All rows must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> SlotResult<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if rows.iter().any(|r| r.len() != width) {
            return Err(SlotError::InvalidConfig("grid rows have different lengths".into()));
        }

        Self::new(height, width, rows.into_iter().flatten().collect())
    }

    /// Grid where every cell holds `id`
    pub fn filled(rows: usize, cols: usize, id: u32) -> SlotResult<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or_else(|| SlotError::InvalidConfig(format!("{rows}x{cols} grid is too large")))?;
        Self::new(rows, cols, vec![id; len])
    }

    /// Generator fast path; dimensions come from a validated config.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Overwrite a whole row. Only the generator builds grids this way.
    pub(crate) fn fill_row(&mut self, row: usize, id: u32) {
        if row < self.rows {
            let start = row * self.cols;
            if let Some(cells) = self.cells.get_mut(start..start + self.cols) {
                cells.fill(id);
            }
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Symbol at (row, col), `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// One row as a slice, `None` when out of bounds
    pub fn row(&self, row: usize) -> Option<&[u32]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.cells.get(start..start + self.cols)
    }

    /// One column, top to bottom; `None` when out of bounds
    pub fn column(&self, col: usize) -> Option<Vec<u32>> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).map(|r| self.get(r, col)).collect()
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Nested rows, for display layers
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        (0..self.rows)
            .filter_map(|r| self.row(r).map(<[u32]>::to_vec))
            .collect()
    }
}
