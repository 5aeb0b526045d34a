//! GridSlot batch simulator
//!
//! Usage:
//!   gs-sim --spins 10000 --seed 42 --profile studio
//!   gs-sim --force-win --spins 20
//!   gs-sim --config machine.json --json
//!   gs-sim --paytable

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use gs_engine::{EngineConfig, SessionStats, SpinController, TimingProfile};

#[derive(Parser)]
#[command(name = "gs-sim", about = "Run GridSlot spins headlessly and report the session")]
struct Cli {
    /// Number of spins to attempt
    #[arg(short = 'n', long, default_value_t = 1000)]
    spins: u64,

    /// RNG seed (OS entropy when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Force every spin to win on the top row
    #[arg(long)]
    force_win: bool,

    /// Timing profile: normal, turbo or studio
    #[arg(short, long)]
    profile: Option<String>,

    /// Simulated frame length in milliseconds
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Engine config as JSON
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the paytable and exit
    #[arg(long)]
    paytable: bool,

    /// Print the session report as JSON
    #[arg(long)]
    json: bool,
}

/// End-of-run report
#[derive(Serialize)]
struct Report {
    spins_requested: u64,
    final_balance: u64,
    stopped_early: bool,
    rtp: f64,
    hit_rate: f64,
    stats: SessionStats,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.profile.as_deref())?;

    if cli.paytable {
        print_paytable(&config);
        return Ok(());
    }

    let mut ctrl = match cli.seed {
        Some(seed) => SpinController::seeded(config, seed)?,
        None => SpinController::new(config)?,
    };
    ctrl.set_force_win(cli.force_win);

    log::info!(
        "Simulating {} spins ({}x{}, stake {}, balance {})",
        cli.spins,
        ctrl.config().rows,
        ctrl.config().cols,
        ctrl.config().stake,
        ctrl.credit_balance()
    );

    let mut stopped_early = false;
    for _ in 0..cli.spins {
        if let Err(err) = ctrl.request_spin() {
            if err.is_recoverable() {
                log::info!("Stopping: {}", ctrl.current_message());
                stopped_early = true;
                break;
            }
            return Err(err.into());
        }

        let outcome = loop {
            if let Some(outcome) = ctrl.advance(cli.tick_ms)? {
                break outcome;
            }
        };
        log::debug!("{}: payout {}, balance {}", outcome.spin_id, outcome.payout, outcome.balance);

        // Settle Resolved -> Idle
        ctrl.advance(cli.tick_ms)?;
    }

    let stats = ctrl.stats().clone();
    let report = Report {
        spins_requested: cli.spins,
        final_balance: ctrl.credit_balance(),
        stopped_early,
        rtp: stats.rtp(),
        hit_rate: stats.hit_rate(),
        stats,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn load_config(path: Option<&Path>, profile: Option<&str>) -> Result<EngineConfig> {
    let mut config = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            EngineConfig::from_json(&json)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };

    if let Some(name) = profile {
        let profile: TimingProfile = name.parse().map_err(anyhow::Error::msg)?;
        if profile == TimingProfile::Custom {
            bail!("custom timing comes from --config, not --profile");
        }
        config = config.with_profile(profile);
    }

    Ok(config)
}

fn print_paytable(config: &EngineConfig) {
    println!(
        "{:<4} {:<12} {:>6} {:>6} {:>6} {:>6} {:>6}",
        "", "Symbol", "Base", "x3", "x4", "x5", "2x2"
    );
    for row in config.catalog.paytable() {
        println!(
            "{:<4} {:<12} {:>6} {:>6} {:>6} {:>6} {:>6}",
            row.glyph, row.name, row.base, row.run_3, row.run_4, row.run_5, row.block
        );
    }
}

fn print_report(report: &Report) {
    let stats = &report.stats;
    println!("Spins:        {} / {}", stats.total_spins, report.spins_requested);
    if report.stopped_early {
        println!("              stopped early: not enough credits");
    }
    println!("Forced:       {}", stats.forced_spins);
    println!("Staked:       {}", stats.total_staked);
    println!("Won:          {}", stats.total_won);
    println!("RTP:          {:.2}%", report.rtp);
    println!("Hit rate:     {:.2}%", report.hit_rate);
    println!("Patterns:     {}", stats.patterns_hit);
    println!("Max payout:   {}", stats.max_payout);
    println!("Balance:      {}", report.final_balance);
}
