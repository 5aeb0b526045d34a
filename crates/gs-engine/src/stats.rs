//! Session statistics

use serde::{Deserialize, Serialize};

/// Counters over every spin resolved since start or the last reset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_spins: u64,
    pub forced_spins: u64,
    pub total_staked: u64,
    pub total_won: u64,
    pub wins: u64,
    pub losses: u64,
    pub patterns_hit: u64,
    pub max_payout: u64,
}

impl SessionStats {
    /// Record one resolved spin. Totals saturate rather than wrap.
    pub fn record(&mut self, stake: u64, payout: u64, patterns: usize, forced: bool) {
        self.total_spins += 1;
        self.total_staked = self.total_staked.saturating_add(stake);
        self.total_won = self.total_won.saturating_add(payout);
        self.patterns_hit = self.patterns_hit.saturating_add(patterns as u64);

        if forced {
            self.forced_spins += 1;
        }
        if payout > 0 {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.max_payout = self.max_payout.max(payout);
    }

    /// Calculate RTP
    pub fn rtp(&self) -> f64 {
        if self.total_staked > 0 {
            (self.total_won as f64 / self.total_staked as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Calculate hit rate
    pub fn hit_rate(&self) -> f64 {
        if self.total_spins > 0 {
            (self.wins as f64 / self.total_spins as f64) * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = SessionStats::default();
        assert_eq!(stats.rtp(), 0.0);
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_record() {
        let mut stats = SessionStats::default();
        stats.record(10, 85, 3, true);
        stats.record(10, 0, 0, false);
        stats.record(10, 0, 0, false);
        stats.record(10, 15, 1, false);

        assert_eq!(stats.total_spins, 4);
        assert_eq!(stats.forced_spins, 1);
        assert_eq!(stats.total_staked, 40);
        assert_eq!(stats.total_won, 100);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 2);
        assert_eq!(stats.patterns_hit, 4);
        assert_eq!(stats.max_payout, 85);
        assert_eq!(stats.rtp(), 250.0);
        assert_eq!(stats.hit_rate(), 50.0);
    }

    #[test]
    fn test_totals_saturate() {
        let mut stats = SessionStats::default();
        stats.record(10, u64::MAX - 5, 1, false);
        stats.record(10, 100, 1, false);

        assert_eq!(stats.total_won, u64::MAX);
        assert_eq!(stats.max_payout, u64::MAX - 5);
    }
}
