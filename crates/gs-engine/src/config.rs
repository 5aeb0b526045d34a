//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::detector::MIN_RUN;
use crate::error::{SlotError, SlotResult};
use crate::grid::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::symbols::{CHERRY, SymbolCatalog};
use crate::timing::{TimingConfig, TimingProfile};

/// Credits deducted per spin
pub const DEFAULT_STAKE: u64 = 10;

/// Balance at process start
pub const DEFAULT_STARTING_CREDITS: u64 = 1000;

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Grid rows
    pub rows: usize,
    /// Grid columns
    pub cols: usize,
    /// Credits deducted at spin start
    pub stake: u64,
    /// Balance the controller starts with
    pub starting_credits: u64,
    /// Symbol written across row 0 on forced wins
    pub forced_symbol: u32,
    /// Symbol table
    #[serde(default)]
    pub catalog: SymbolCatalog,
    /// Spin timing
    #[serde(default)]
    pub timing: TimingConfig,
}

impl EngineConfig {
    /// Classic 5×5 fruit machine
    pub fn classic_5x5() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            stake: DEFAULT_STAKE,
            starting_credits: DEFAULT_STARTING_CREDITS,
            forced_symbol: CHERRY,
            catalog: SymbolCatalog::classic(),
            timing: TimingConfig::normal(),
        }
    }

    /// Instant spins, for tests and batch simulation
    pub fn studio() -> Self {
        Self {
            timing: TimingConfig::studio(),
            ..Self::classic_5x5()
        }
    }

    /// Builder: replace timing with a profile preset
    pub fn with_profile(mut self, profile: TimingProfile) -> Self {
        self.timing = TimingConfig::from_profile(profile);
        self
    }

    /// Builder: starting balance
    pub fn with_credits(mut self, credits: u64) -> Self {
        self.starting_credits = credits;
        self
    }

    /// Builder: grid dimensions
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Total grid positions
    pub fn total_positions(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether a forced row 0 is long enough to form a paying run
    pub fn supports_forced_win(&self) -> bool {
        self.cols >= MIN_RUN
    }

    /// Check the config can drive a controller
    pub fn validate(&self) -> SlotResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SlotError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.stake == 0 {
            return Err(SlotError::InvalidConfig("stake must be positive".into()));
        }
        if !self.catalog.contains(self.forced_symbol) {
            return Err(SlotError::InvalidConfig(format!(
                "forced symbol {} is not in the catalog",
                self.forced_symbol
            )));
        }
        Ok(())
    }

    /// Export as pretty JSON
    pub fn to_json(&self) -> SlotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Import from JSON and validate
    pub fn from_json(json: &str) -> SlotResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::classic_5x5()
    }
}
