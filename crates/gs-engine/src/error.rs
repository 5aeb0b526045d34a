//! Error types for the slot engine

use thiserror::Error;

/// Engine error type
#[derive(Error, Debug)]
pub enum SlotError {
    /// Spin requested with a balance below the stake. Recoverable.
    #[error("Insufficient credits: balance {balance}, stake {stake}")]
    InsufficientCredits { balance: u64, stake: u64 },

    /// A grid or pattern references a symbol the catalog does not know.
    /// Means the generator and catalog are out of sync.
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(u32),

    /// A pattern anchor lies outside the grid it is priced against
    #[error("Pattern anchor ({row}, {col}) is outside the grid")]
    PatternOutOfBounds { row: usize, col: usize },

    /// Payout or balance arithmetic does not fit in a u64
    #[error("Credit overflow: {0}")]
    CreditOverflow(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SlotError {
    /// Whether the caller can carry on after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InsufficientCredits { .. })
    }
}

/// Result type alias
pub type SlotResult<T> = Result<T, SlotError>;
