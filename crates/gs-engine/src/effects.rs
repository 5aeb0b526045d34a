//! Presentation effect requests emitted at spin resolution

use serde::{Deserialize, Serialize};

use crate::detector::{PatternKind, WinPattern};

/// Color class for a win effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorClass {
    /// Row and column runs
    Line,
    /// 2×2 blocks
    Block,
}

impl ColorClass {
    pub fn for_kind(kind: PatternKind) -> Self {
        if kind.is_run() {
            Self::Line
        } else {
            Self::Block
        }
    }

    /// Suggested RGB: green for lines, gold for blocks
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Line => (0, 255, 0),
            Self::Block => (255, 215, 0),
        }
    }
}

/// Request to burst particles over one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticleTrigger {
    pub row: usize,
    pub col: usize,
    pub color: ColorClass,
}

impl ParticleTrigger {
    /// Trigger at a pattern's anchor
    pub fn for_pattern(pattern: &WinPattern) -> Self {
        Self {
            row: pattern.row,
            col: pattern.col,
            color: ColorClass::for_kind(pattern.kind),
        }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

/// One trigger per pattern, in pattern order
pub fn triggers_for(patterns: &[WinPattern]) -> Vec<ParticleTrigger> {
    patterns.iter().map(ParticleTrigger::for_pattern).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_per_pattern() {
        let patterns = [
            WinPattern::row_run(0, 0, 5),
            WinPattern::column_run(1, 4, 3),
            WinPattern::block(2, 3),
        ];
        let triggers = triggers_for(&patterns);

        assert_eq!(triggers.len(), 3);
        assert_eq!(triggers[0].position(), (0, 0));
        assert_eq!(triggers[0].color, ColorClass::Line);
        assert_eq!(triggers[1].position(), (1, 4));
        assert_eq!(triggers[1].color, ColorClass::Line);
        assert_eq!(triggers[2].color, ColorClass::Block);
    }

    #[test]
    fn test_colors() {
        assert_eq!(ColorClass::Line.rgb(), (0, 255, 0));
        assert_eq!(ColorClass::Block.rgb(), (255, 215, 0));
    }
}
