//! # gs-engine: GridSlot outcome engine
//!
//! Game logic for a single-player, grid-based slot machine: weighted symbol
//! draws, pattern detection, payouts, credits and the timed spin lifecycle.
//! Rendering, audio and input live elsewhere; they drive a [`SpinController`]
//! with `advance` ticks and read its state back.
//!
//! ## Features
//!
//! - **Weighted grids**: symbols drawn independently per cell by catalog weight
//! - **Pattern detection**: row/column runs of 5, 4 and 3 plus 2×2 blocks
//! - **Payouts**: base value × kind/size multiplier, summed per pattern
//! - **Forced wins**: diagnostic mode that guarantees a full top-row run
//! - **Timing Profiles**: Normal, Turbo, Studio (instant) timing modes
//!
//! ## Architecture
//!
//! ```text
//! SpinController
//!     │
//!     ├── EngineConfig (grid size, stake, credits, timing)
//!     ├── SymbolCatalog (weights, base values)
//!     └── GridGenerator (weighted draws, forced-win grids)
//!           │
//!           v
//!     Grid → detect_wins → evaluate → SpinOutcome + ParticleTrigger
//! ```

pub mod config;
pub mod controller;
pub mod detector;
pub mod effects;
pub mod error;
pub mod generator;
pub mod grid;
pub mod paytable;
pub mod stats;
pub mod symbols;
pub mod timing;

pub use config::*;
pub use controller::*;
pub use detector::*;
pub use effects::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use paytable::*;
pub use stats::*;
pub use symbols::*;
pub use timing::*;
