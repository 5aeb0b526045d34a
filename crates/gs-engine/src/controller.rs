//! Spin controller: owns credits, grid and the per-spin state machine
//!
//! ```text
//!   Idle ──request_spin──▶ Spinning ──advance (≥ duration)──▶ Resolved
//!    ▲                                                          │
//!    └────────────────────── next advance ──────────────────────┘
//! ```
//!
//! `Resolved` accepts a new spin straight away; the following tick settles
//! it back to `Idle`.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::detector::{WinPattern, detect_wins};
use crate::effects::{ParticleTrigger, triggers_for};
use crate::error::{SlotError, SlotResult};
use crate::generator::GridGenerator;
use crate::grid::Grid;
use crate::paytable::calculate_payout;
use crate::stats::SessionStats;
use crate::symbols::SymbolCatalog;

pub const MSG_INSUFFICIENT_CREDITS: &str = "Not enough credits!";
pub const MSG_TRY_AGAIN: &str = "Try again!";

/// Message shown after a paying spin
pub fn win_message(payout: u64) -> String {
    format!("You won {payout} credits!")
}

/// Per-spin state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpinState {
    #[default]
    Idle,
    Spinning,
    Resolved,
}

/// Answer to a spin request that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinAck {
    /// Stake taken, spin running
    Started,
    /// A spin is already running; request ignored
    AlreadySpinning,
}

/// Result of one resolved spin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub spin_id: String,
    pub grid: Grid,
    pub patterns: Vec<WinPattern>,
    pub payout: u64,
    /// Balance after the payout was credited
    pub balance: u64,
    /// Outcome came from the forced-win target
    pub forced: bool,
}

impl SpinOutcome {
    pub fn is_win(&self) -> bool {
        self.payout > 0
    }
}

/// Everything the presentation layer reads after a tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinSnapshot {
    pub state: SpinState,
    pub spinning: bool,
    pub grid: Grid,
    pub credits: u64,
    pub message: String,
    pub force_win: bool,
    pub win_patterns: Vec<WinPattern>,
    pub last_payout: u64,
    pub elapsed_ms: u64,
}

/// Single-owner spin state machine, driven by `advance` ticks
pub struct SpinController<R = ChaCha8Rng> {
    config: EngineConfig,
    generator: GridGenerator,
    rng: R,

    state: SpinState,
    elapsed_ms: u64,
    forced_target: Option<Grid>,
    force_win: bool,

    grid: Grid,
    win_patterns: Vec<WinPattern>,
    last_payout: u64,
    credits: u64,
    message: String,
    particles: Vec<ParticleTrigger>,

    spin_count: u64,
    stats: SessionStats,
}

impl SpinController<ChaCha8Rng> {
    /// Controller seeded from the OS
    pub fn new(config: EngineConfig) -> SlotResult<Self> {
        Self::with_rng(config, ChaCha8Rng::from_os_rng())
    }

    /// Controller with a reproducible seed
    pub fn seeded(config: EngineConfig, seed: u64) -> SlotResult<Self> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> SpinController<R> {
    /// Controller drawing from `rng`
    pub fn with_rng(config: EngineConfig, mut rng: R) -> SlotResult<Self> {
        config.validate()?;
        let generator = GridGenerator::new(&config.catalog)?;
        let grid = generator.generate(&mut rng, config.rows, config.cols);

        Ok(Self {
            credits: config.starting_credits,
            config,
            generator,
            rng,
            state: SpinState::Idle,
            elapsed_ms: 0,
            forced_target: None,
            force_win: false,
            grid,
            win_patterns: Vec::new(),
            last_payout: 0,
            message: String::new(),
            particles: Vec::new(),
            spin_count: 0,
            stats: SessionStats::default(),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // COMMANDS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Start a spin.
    ///
    /// Ignored while spinning. Below the stake, sets the credits message and
    /// returns `InsufficientCredits` without touching anything else.
    pub fn request_spin(&mut self) -> SlotResult<SpinAck> {
        if self.state == SpinState::Spinning {
            return Ok(SpinAck::AlreadySpinning);
        }

        let stake = self.config.stake;
        if self.credits < stake {
            log::warn!("Spin refused: balance {} below stake {}", self.credits, stake);
            self.message = MSG_INSUFFICIENT_CREDITS.to_string();
            return Err(SlotError::InsufficientCredits {
                balance: self.credits,
                stake,
            });
        }

        // Outcome is fixed before the animation runs
        let forced_target = if self.force_win {
            let target = self.generator.generate_forced_win(
                &mut self.rng,
                self.config.rows,
                self.config.cols,
                self.config.forced_symbol,
            )?;
            log::debug!("Forced-win target prepared (symbol {})", self.config.forced_symbol);
            Some(target)
        } else {
            None
        };

        self.credits -= stake;
        self.spin_count += 1;
        self.state = SpinState::Spinning;
        self.elapsed_ms = 0;
        self.forced_target = forced_target;
        self.win_patterns.clear();
        self.last_payout = 0;
        self.message.clear();
        self.particles.clear();

        log::debug!("{} started: stake {}, balance {}", self.spin_id(), stake, self.credits);
        Ok(SpinAck::Started)
    }

    /// Flip force-win mode. Ignored while spinning. Returns the current flag.
    pub fn toggle_force_win(&mut self) -> bool {
        self.set_force_win(!self.force_win);
        self.force_win
    }

    /// Set force-win mode directly. Ignored while spinning.
    pub fn set_force_win(&mut self, enabled: bool) {
        if self.state == SpinState::Spinning {
            return;
        }
        if enabled && !self.force_win && !self.config.supports_forced_win() {
            log::warn!(
                "Force-win enabled on a {}-column grid; row 0 is too short to pay",
                self.config.cols
            );
        }
        self.force_win = enabled;
    }

    /// Advance the clock by `elapsed_ms`.
    ///
    /// Returns the outcome on the tick that resolves a spin.
    pub fn advance(&mut self, elapsed_ms: u64) -> SlotResult<Option<SpinOutcome>> {
        match self.state {
            SpinState::Idle => Ok(None),
            SpinState::Resolved => {
                self.state = SpinState::Idle;
                Ok(None)
            }
            SpinState::Spinning => {
                let prev = self.elapsed_ms;
                self.elapsed_ms = prev.saturating_add(elapsed_ms);

                let timing = self.config.timing;
                if timing.is_complete(self.elapsed_ms) {
                    return self.resolve().map(Some);
                }

                if timing.reshuffle_due(prev, self.elapsed_ms) {
                    self.grid = self.random_grid();
                }
                Ok(None)
            }
        }
    }

    fn resolve(&mut self) -> SlotResult<SpinOutcome> {
        let forced = self.forced_target.is_some();
        let grid = match self.forced_target.take() {
            Some(target) => target,
            None => self.random_grid(),
        };

        let patterns = detect_wins(&grid);
        let payout = calculate_payout(&patterns, &grid, &self.config.catalog)?;
        let credits = self.credits.checked_add(payout).ok_or_else(|| {
            SlotError::CreditOverflow(format!("balance {} + payout {payout}", self.credits))
        })?;

        self.credits = credits;
        self.last_payout = payout;
        self.message = if payout > 0 {
            win_message(payout)
        } else {
            MSG_TRY_AGAIN.to_string()
        };
        self.particles = triggers_for(&patterns);
        self.stats.record(self.config.stake, payout, patterns.len(), forced);

        self.grid = grid;
        self.win_patterns = patterns;
        self.state = SpinState::Resolved;

        log::info!(
            "{} resolved: {} pattern(s), payout {}, balance {}{}",
            self.spin_id(),
            self.win_patterns.len(),
            payout,
            self.credits,
            if forced { " (forced)" } else { "" }
        );

        Ok(SpinOutcome {
            spin_id: self.spin_id(),
            grid: self.grid.clone(),
            patterns: self.win_patterns.clone(),
            payout,
            balance: self.credits,
            forced,
        })
    }

    fn random_grid(&mut self) -> Grid {
        self.generator
            .generate(&mut self.rng, self.config.rows, self.config.cols)
    }

    fn spin_id(&self) -> String {
        format!("spin-{:06}", self.spin_count)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // QUERIES
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn current_grid(&self) -> &Grid {
        &self.grid
    }

    pub fn credit_balance(&self) -> u64 {
        self.credits
    }

    pub fn current_message(&self) -> &str {
        &self.message
    }

    pub fn is_spinning(&self) -> bool {
        self.state == SpinState::Spinning
    }

    pub fn active_win_patterns(&self) -> &[WinPattern] {
        &self.win_patterns
    }

    pub fn state(&self) -> SpinState {
        self.state
    }

    pub fn force_win_enabled(&self) -> bool {
        self.force_win
    }

    pub fn last_payout(&self) -> u64 {
        self.last_payout
    }

    /// Time accumulated in the current (or last) spin
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Spins started so far
    pub fn spin_count(&self) -> u64 {
        self.spin_count
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &SymbolCatalog {
        &self.config.catalog
    }

    /// Drain the particle requests queued by the last resolution
    pub fn take_particle_triggers(&mut self) -> Vec<ParticleTrigger> {
        std::mem::take(&mut self.particles)
    }

    pub fn snapshot(&self) -> SpinSnapshot {
        SpinSnapshot {
            state: self.state,
            spinning: self.is_spinning(),
            grid: self.grid.clone(),
            credits: self.credits,
            message: self.message.clone(),
            force_win: self.force_win,
            win_patterns: self.win_patterns.clone(),
            last_payout: self.last_payout,
            elapsed_ms: self.elapsed_ms,
        }
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SessionStats::default();
    }
}
