//! Win pattern detection
//!
//! Runs are anchored at the first three offsets of each row and column.
//! Every offset is tested on its own, largest window first, so a uniform
//! five-cell row reports three runs (5 at offset 0, 4 at offset 1, 3 at
//! offset 2). Overlapping patterns are kept as-is and each one pays.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Run tiers: (last offset allowed, window size), tested in order
const RUN_TIERS: [(usize, usize); 3] = [(0, 5), (1, 4), (2, MIN_RUN)];

/// Shortest paying run
pub const MIN_RUN: usize = 3;

/// Offsets 0..RUN_START_LIMIT are tested for runs
const RUN_START_LIMIT: usize = 3;

/// Side of a square block pattern
pub const BLOCK_SIZE: usize = 2;

/// Kind of winning pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    /// Horizontal run along a row
    RowRun,
    /// Vertical run down a column
    ColumnRun,
    /// 2×2 square of one symbol
    Block,
}

impl PatternKind {
    pub fn is_run(self) -> bool {
        matches!(self, Self::RowRun | Self::ColumnRun)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::RowRun => "row-run",
            Self::ColumnRun => "column-run",
            Self::Block => "block",
        }
    }
}

/// A matched pattern, anchored at its first (top-left) cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinPattern {
    pub kind: PatternKind,
    pub row: usize,
    pub col: usize,
    /// Run length (3..=5) or block side (2)
    pub size: usize,
}

impl WinPattern {
    pub fn row_run(row: usize, col: usize, size: usize) -> Self {
        Self {
            kind: PatternKind::RowRun,
            row,
            col,
            size,
        }
    }

    pub fn column_run(row: usize, col: usize, size: usize) -> Self {
        Self {
            kind: PatternKind::ColumnRun,
            row,
            col,
            size,
        }
    }

    pub fn block(row: usize, col: usize) -> Self {
        Self {
            kind: PatternKind::Block,
            row,
            col,
            size: BLOCK_SIZE,
        }
    }

    /// Anchor cell (row, col)
    pub fn anchor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Cells covered by this pattern, for highlighting
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (row, col, size) = (self.row, self.col, self.size);
        match self.kind {
            PatternKind::RowRun => (0..size).map(|i| (row, col + i)).collect(),
            PatternKind::ColumnRun => (0..size).map(|i| (row + i, col)).collect(),
            PatternKind::Block => (0..size)
                .flat_map(|r| (0..size).map(move |c| (row + r, col + c)))
                .collect(),
        }
    }

    /// Does this pattern cover (row, col)?
    pub fn covers(&self, row: usize, col: usize) -> bool {
        let rows = self.row..self.row + self.size;
        let cols = self.col..self.col + self.size;
        match self.kind {
            PatternKind::RowRun => row == self.row && cols.contains(&col),
            PatternKind::ColumnRun => col == self.col && rows.contains(&row),
            PatternKind::Block => rows.contains(&row) && cols.contains(&col),
        }
    }
}

/// Scan a resolved grid for every winning pattern.
///
/// Order: row runs (row-major), column runs (column-major), blocks (row-major).
pub fn detect_wins(grid: &Grid) -> Vec<WinPattern> {
    let mut patterns = Vec::new();

    for row in 0..grid.rows() {
        if let Some(line) = grid.row(row) {
            for (col, size) in scan_line(line) {
                patterns.push(WinPattern::row_run(row, col, size));
            }
        }
    }

    for col in 0..grid.cols() {
        if let Some(line) = grid.column(col) {
            for (row, size) in scan_line(&line) {
                patterns.push(WinPattern::column_run(row, col, size));
            }
        }
    }

    patterns.extend(detect_blocks(grid));
    patterns
}

/// Runs along one line as (offset, size)
fn scan_line(line: &[u32]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();

    for start in 0..RUN_START_LIMIT.min(line.len()) {
        let hit = RUN_TIERS
            .iter()
            .find(|&&(max_start, size)| start <= max_start && is_uniform(line, start, size));
        if let Some(&(_, size)) = hit {
            runs.push((start, size));
        }
    }

    runs
}

/// Window [start, start + size) lies inside `line` and holds one symbol
fn is_uniform(line: &[u32], start: usize, size: usize) -> bool {
    match line.get(start..start + size) {
        Some(window) => window.iter().all(|&id| id == window[0]),
        None => false,
    }
}

fn detect_blocks(grid: &Grid) -> Vec<WinPattern> {
    let mut blocks = Vec::new();
    if grid.rows() < BLOCK_SIZE || grid.cols() < BLOCK_SIZE {
        return blocks;
    }

    for row in 0..=grid.rows() - BLOCK_SIZE {
        for col in 0..=grid.cols() - BLOCK_SIZE {
            let first = grid.get(row, col);
            let uniform = [(row, col + 1), (row + 1, col), (row + 1, col + 1)]
                .iter()
                .all(|&(r, c)| grid.get(r, c) == first);
            if uniform {
                blocks.push(WinPattern::block(row, col));
            }
        }
    }

    blocks
}
