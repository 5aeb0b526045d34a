//! Payout calculation

use serde::{Deserialize, Serialize};

use crate::detector::{PatternKind, WinPattern};
use crate::error::{SlotError, SlotResult};
use crate::grid::Grid;
use crate::symbols::SymbolCatalog;

impl PatternKind {
    /// Multiplier applied to the anchor symbol's base value
    pub fn multiplier(self, size: usize) -> u64 {
        match (self, size) {
            (Self::RowRun | Self::ColumnRun, 3) => 2,
            (Self::RowRun | Self::ColumnRun, 4) => 5,
            (Self::RowRun | Self::ColumnRun, 5) => 10,
            (Self::Block, _) => 3,
            _ => 1,
        }
    }
}

/// Payout for one pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternWin {
    pub pattern: WinPattern,
    /// Symbol at the pattern anchor
    pub symbol_id: u32,
    pub multiplier: u64,
    /// base × multiplier
    pub amount: u64,
}

/// Result of paying a set of patterns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub wins: Vec<PatternWin>,
    pub total: u64,
}

impl Evaluation {
    pub fn is_win(&self) -> bool {
        self.total > 0
    }

    pub fn win_count(&self) -> usize {
        self.wins.len()
    }
}

/// Price every pattern against the grid it was found on.
///
/// Fails with `UnknownSymbol` if an anchor holds an id the catalog does not
/// know, `PatternOutOfBounds` if an anchor is off the grid, and
/// `CreditOverflow` if an amount or the total does not fit in a u64.
pub fn evaluate(
    patterns: &[WinPattern],
    grid: &Grid,
    catalog: &SymbolCatalog,
) -> SlotResult<Evaluation> {
    let mut wins = Vec::with_capacity(patterns.len());

    for pattern in patterns {
        let symbol_id = grid
            .get(pattern.row, pattern.col)
            .ok_or(SlotError::PatternOutOfBounds {
                row: pattern.row,
                col: pattern.col,
            })?;
        let symbol = catalog.lookup(symbol_id)?;
        let multiplier = pattern.kind.multiplier(pattern.size);
        let amount = symbol.base.checked_mul(multiplier).ok_or_else(|| {
            SlotError::CreditOverflow(format!("{} x {multiplier}", symbol.base))
        })?;

        wins.push(PatternWin {
            pattern: *pattern,
            symbol_id,
            multiplier,
            amount,
        });
    }

    let total = wins
        .iter()
        .try_fold(0u64, |acc, w| acc.checked_add(w.amount))
        .ok_or_else(|| SlotError::CreditOverflow("payout total".into()))?;
    Ok(Evaluation { wins, total })
}

/// Total payout for `patterns`; 0 when there are none
pub fn calculate_payout(
    patterns: &[WinPattern],
    grid: &Grid,
    catalog: &SymbolCatalog,
) -> SlotResult<u64> {
    evaluate(patterns, grid, catalog).map(|e| e.total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::detect_wins;
    use crate::symbols::{CHERRY, DIAMOND, Symbol};

    /// Classic-catalog grid with no patterns
    fn quiet_rows() -> Vec<Vec<u32>> {
        (0..5)
            .map(|r| (0..5).map(|c| ((r * 2 + c) % 5 + 1) as u32).collect())
            .collect()
    }

    #[test]
    fn test_multiplier_table() {
        assert_eq!(PatternKind::RowRun.multiplier(3), 2);
        assert_eq!(PatternKind::ColumnRun.multiplier(4), 5);
        assert_eq!(PatternKind::RowRun.multiplier(5), 10);
        assert_eq!(PatternKind::Block.multiplier(2), 3);
        assert_eq!(PatternKind::RowRun.multiplier(7), 1);
    }

    #[test]
    fn test_empty_patterns_pay_nothing() {
        let grid = Grid::from_rows(quiet_rows()).unwrap();
        let catalog = SymbolCatalog::classic();
        assert_eq!(calculate_payout(&[], &grid, &catalog).unwrap(), 0);
        assert!(!evaluate(&[], &grid, &catalog).unwrap().is_win());
    }

    #[test]
    fn test_cherry_row_pays_85() {
        let mut rows = quiet_rows();
        rows[0] = vec![CHERRY; 5];
        let grid = Grid::from_rows(rows).unwrap();
        let catalog = SymbolCatalog::classic();

        let patterns = detect_wins(&grid);
        assert_eq!(patterns.len(), 3);

        let eval = evaluate(&patterns, &grid, &catalog).unwrap();
        let amounts: Vec<u64> = eval.wins.iter().map(|w| w.amount).collect();
        assert_eq!(amounts, vec![50, 25, 10]);
        assert_eq!(eval.total, 85);
    }

    #[test]
    fn test_diamond_block_pays_150() {
        let mut rows = quiet_rows();
        rows[1][3] = DIAMOND;
        rows[1][4] = DIAMOND;
        rows[2][3] = DIAMOND;
        rows[2][4] = DIAMOND;
        let grid = Grid::from_rows(rows).unwrap();
        let catalog = SymbolCatalog::classic();

        let patterns = detect_wins(&grid);
        assert_eq!(patterns, vec![WinPattern::block(1, 3)]);
        assert_eq!(calculate_payout(&patterns, &grid, &catalog).unwrap(), 150);
    }

    #[test]
    fn test_payout_is_pure() {
        let grid = Grid::filled(5, 5, 6).unwrap();
        let catalog = SymbolCatalog::classic();
        let patterns = detect_wins(&grid);

        let first = calculate_payout(&patterns, &grid, &catalog).unwrap();
        let second = calculate_payout(&patterns, &grid, &catalog).unwrap();
        assert_eq!(first, second);
        // Star (20): 10 rows+cols × (10+5+2) + 16 blocks × 3
        assert_eq!(first, 20 * (10 * 17 + 16 * 3));
    }

    #[test]
    fn test_unknown_anchor_symbol() {
        let grid = Grid::filled(3, 3, 42).unwrap();
        let patterns = detect_wins(&grid);
        assert!(!patterns.is_empty());
        assert!(matches!(
            calculate_payout(&patterns, &grid, &SymbolCatalog::classic()),
            Err(SlotError::UnknownSymbol(42))
        ));
    }

    #[test]
    fn test_anchor_outside_grid() {
        let grid = Grid::filled(2, 2, CHERRY).unwrap();
        let stray = [WinPattern::row_run(4, 0, 3)];
        assert!(matches!(
            evaluate(&stray, &grid, &SymbolCatalog::classic()),
            Err(SlotError::PatternOutOfBounds { row: 4, col: 0 })
        ));
    }

    #[test]
    fn test_amount_overflow_is_an_error() {
        let jackpot = Symbol::new(1, "Jackpot", "J", 1, u64::MAX / 4);
        let catalog = SymbolCatalog::new(vec![jackpot]).unwrap();
        let grid = Grid::filled(5, 5, 1).unwrap();

        // A 5-run multiplies by 10
        let run = [WinPattern::row_run(0, 0, 5)];
        let err = calculate_payout(&run, &grid, &catalog).unwrap_err();
        assert!(matches!(err, SlotError::CreditOverflow(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let jackpot = Symbol::new(1, "Jackpot", "J", 1, u64::MAX / 3);
        let catalog = SymbolCatalog::new(vec![jackpot]).unwrap();
        let grid = Grid::filled(2, 2, 1).unwrap();

        // Each block fits (×3 stays below u64::MAX); two of them do not
        let blocks = [WinPattern::block(0, 0), WinPattern::block(0, 0)];
        assert!(matches!(
            calculate_payout(&blocks[..1], &grid, &catalog),
            Ok(amount) if amount == u64::MAX / 3 * 3
        ));
        assert!(matches!(
            calculate_payout(&blocks, &grid, &catalog),
            Err(SlotError::CreditOverflow(_))
        ));
    }
}
