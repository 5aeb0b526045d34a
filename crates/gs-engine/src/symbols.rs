//! Symbol definitions and the symbol catalog

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::detector::PatternKind;
use crate::error::{SlotError, SlotResult};

/// Symbol id used by the reference catalog for Cherry
pub const CHERRY: u32 = 1;
/// Symbol id used by the reference catalog for Diamond
pub const DIAMOND: u32 = 7;

/// A symbol definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Unique symbol ID
    pub id: u32,
    /// Display name (e.g., "Cherry")
    pub name: String,
    /// Display glyph
    pub glyph: String,
    /// Relative sampling mass
    pub weight: u32,
    /// Base payout value, scaled by the pattern multiplier
    pub base: u64,
}

impl Symbol {
    /// Create a symbol
    pub fn new(
        id: u32,
        name: impl Into<String>,
        glyph: impl Into<String>,
        weight: u32,
        base: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            glyph: glyph.into(),
            weight,
            base,
        }
    }
}

/// Fixed, ordered list of symbols
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct SymbolCatalog {
    symbols: Vec<Symbol>,
}

impl SymbolCatalog {
    /// Build a catalog, rejecting empty lists, zero weights or bases and duplicate ids
    pub fn new(symbols: Vec<Symbol>) -> SlotResult<Self> {
        if symbols.is_empty() {
            return Err(SlotError::InvalidCatalog("catalog is empty".into()));
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        for symbol in &symbols {
            if symbol.weight == 0 {
                return Err(SlotError::InvalidCatalog(format!(
                    "symbol {} has zero weight",
                    symbol.name
                )));
            }
            if symbol.base == 0 {
                return Err(SlotError::InvalidCatalog(format!(
                    "symbol {} has zero base value",
                    symbol.name
                )));
            }
            if !seen.insert(symbol.id) {
                return Err(SlotError::InvalidCatalog(format!("duplicate symbol id {}", symbol.id)));
            }
        }

        Ok(Self { symbols })
    }

    /// The fruit-machine catalog: common fruit down to the rare diamond
    pub fn classic() -> Self {
        Self {
            symbols: vec![
                Symbol::new(CHERRY, "Cherry", "\u{1F352}", 40, 5),
                Symbol::new(2, "Lemon", "\u{1F34B}", 40, 5),
                Symbol::new(3, "Orange", "\u{1F34A}", 40, 5),
                Symbol::new(4, "Bell", "\u{1F514}", 15, 10),
                Symbol::new(5, "Watermelon", "\u{1F349}", 15, 10),
                Symbol::new(6, "Star", "\u{2B50}", 4, 20),
                Symbol::new(DIAMOND, "Diamond", "\u{1F48E}", 1, 50),
            ],
        }
    }

    /// All symbols, in catalog order
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Sampling weights, parallel to [`Self::symbols`]
    pub fn weights(&self) -> Vec<u32> {
        self.symbols.iter().map(|s| s.weight).collect()
    }

    /// Symbol ids, parallel to [`Self::symbols`]
    pub fn ids(&self) -> Vec<u32> {
        self.symbols.iter().map(|s| s.id).collect()
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> u64 {
        self.symbols.iter().map(|s| s.weight as u64).sum()
    }

    /// Get symbol by ID
    pub fn lookup(&self, id: u32) -> SlotResult<&Symbol> {
        self.symbols
            .iter()
            .find(|s| s.id == id)
            .ok_or(SlotError::UnknownSymbol(id))
    }

    /// Get symbol by name, ignoring case
    pub fn lookup_by_name(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn contains(&self, id: u32) -> bool {
        self.symbols.iter().any(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Paytable rows, highest-paying symbol first
    pub fn paytable(&self) -> Vec<PaytableRow> {
        self.symbols
            .iter()
            .rev()
            .map(|s| PaytableRow {
                symbol_id: s.id,
                name: s.name.clone(),
                glyph: s.glyph.clone(),
                base: s.base,
                run_3: s.base * PatternKind::RowRun.multiplier(3),
                run_4: s.base * PatternKind::RowRun.multiplier(4),
                run_5: s.base * PatternKind::RowRun.multiplier(5),
                block: s.base * PatternKind::Block.multiplier(2),
            })
            .collect()
    }
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        Self::classic()
    }
}

impl TryFrom<Vec<Symbol>> for SymbolCatalog {
    type Error = SlotError;

    fn try_from(symbols: Vec<Symbol>) -> SlotResult<Self> {
        Self::new(symbols)
    }
}

impl From<SymbolCatalog> for Vec<Symbol> {
    fn from(catalog: SymbolCatalog) -> Self {
        catalog.symbols
    }
}

/// One line of the displayed paytable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaytableRow {
    pub symbol_id: u32,
    pub name: String,
    pub glyph: String,
    pub base: u64,
    pub run_3: u64,
    pub run_4: u64,
    pub run_5: u64,
    pub block: u64,
}
