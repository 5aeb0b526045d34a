//! Timing profiles for the spin animation

use serde::{Deserialize, Serialize};

/// Timing profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimingProfile {
    /// Normal gameplay timing
    Normal,
    /// Fast/Turbo mode
    Turbo,
    /// Studio mode (instant, for testing and simulation)
    Studio,
    /// Custom timing
    Custom,
}

impl Default for TimingProfile {
    fn default() -> Self {
        Self::Normal
    }
}

impl std::str::FromStr for TimingProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "turbo" => Ok(Self::Turbo),
            "studio" => Ok(Self::Studio),
            "custom" => Ok(Self::Custom),
            other => Err(format!("unknown timing profile: {other}")),
        }
    }
}

/// Spin timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Profile type
    pub profile: TimingProfile,

    /// Time from spin start to resolution (ms)
    pub spin_duration_ms: u64,

    /// Cosmetic grid churn interval while spinning (ms, 0 = no churn)
    pub reshuffle_interval_ms: u64,
}

impl TimingConfig {
    /// Normal gameplay timing: 2 s spin, churn every four 60 Hz frames
    pub fn normal() -> Self {
        Self {
            profile: TimingProfile::Normal,
            spin_duration_ms: 2000,
            reshuffle_interval_ms: 67,
        }
    }

    /// Turbo mode
    pub fn turbo() -> Self {
        Self {
            profile: TimingProfile::Turbo,
            spin_duration_ms: 800,
            reshuffle_interval_ms: 50,
        }
    }

    /// Studio mode: resolves on the first tick
    pub fn studio() -> Self {
        Self {
            profile: TimingProfile::Studio,
            spin_duration_ms: 0,
            reshuffle_interval_ms: 0,
        }
    }

    /// Get config for profile
    pub fn from_profile(profile: TimingProfile) -> Self {
        match profile {
            TimingProfile::Normal => Self::normal(),
            TimingProfile::Turbo => Self::turbo(),
            TimingProfile::Studio => Self::studio(),
            TimingProfile::Custom => Self::normal(),
        }
    }

    /// Scale timing by factor (< 1.0 = faster)
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |ms: u64| (ms as f64 * factor.max(0.0)).round() as u64;
        Self {
            profile: TimingProfile::Custom,
            spin_duration_ms: scale(self.spin_duration_ms),
            reshuffle_interval_ms: scale(self.reshuffle_interval_ms),
        }
    }

    /// Has the spin run its course?
    pub fn is_complete(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.spin_duration_ms
    }

    /// Did the clock cross a churn boundary going from `prev_ms` to `now_ms`?
    ///
    /// Pure function of accumulated time, so the cadence does not depend on
    /// how often the caller ticks. Several boundaries crossed in one tick
    /// still count once.
    pub fn reshuffle_due(&self, prev_ms: u64, now_ms: u64) -> bool {
        if self.reshuffle_interval_ms == 0 {
            return false;
        }
        now_ms / self.reshuffle_interval_ms > prev_ms / self.reshuffle_interval_ms
    }

    /// Number of churn boundaries in a full spin
    pub fn reshuffles_per_spin(&self) -> u64 {
        if self.reshuffle_interval_ms == 0 {
            return 0;
        }
        self.spin_duration_ms.saturating_sub(1) / self.reshuffle_interval_ms
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_profiles() {
        let normal = TimingConfig::normal();
        let turbo = TimingConfig::turbo();
        let studio = TimingConfig::studio();

        assert!(turbo.spin_duration_ms < normal.spin_duration_ms);
        assert_eq!(studio.spin_duration_ms, 0);
        assert_eq!(TimingConfig::from_profile(TimingProfile::Turbo), turbo);
        assert_eq!(TimingConfig::default(), normal);
    }

    #[test]
    fn test_scaled_is_custom() {
        let half = TimingConfig::normal().scaled(0.5);
        assert_eq!(half.profile, TimingProfile::Custom);
        assert_eq!(half.spin_duration_ms, 1000);
        assert_eq!(half.reshuffle_interval_ms, 34);
    }

    #[test]
    fn test_reshuffle_cadence_independent_of_tick_rate() {
        let timing = TimingConfig::normal();

        let count = |tick: u64| {
            let mut elapsed = 0;
            let mut hits = 0;
            while !timing.is_complete(elapsed + tick) {
                if timing.reshuffle_due(elapsed, elapsed + tick) {
                    hits += 1;
                }
                elapsed += tick;
            }
            hits
        };

        // Fine ticks see every boundary; coarse ticks collapse several into one
        assert_eq!(count(1), timing.reshuffles_per_spin());
        assert_eq!(count(16), timing.reshuffles_per_spin());
        assert!(count(500) < timing.reshuffles_per_spin());
    }

    #[test]
    fn test_no_churn_when_interval_zero() {
        let timing = TimingConfig::studio();
        assert!(!timing.reshuffle_due(0, 10_000));
        assert_eq!(timing.reshuffles_per_spin(), 0);
        assert!(timing.is_complete(0));
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!("Turbo".parse::<TimingProfile>(), Ok(TimingProfile::Turbo));
        assert!("warp".parse::<TimingProfile>().is_err());
    }
}
