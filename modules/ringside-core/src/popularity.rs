//! Display heuristics for the dashboard leaderboard.
//!
//! `popularity_score` is a deterministic blend of mention volume and
//! sentiment. `SyntheticChangeEstimator` produces a placeholder "24h change"
//! with no measured data behind it; its output type says so, and callers
//! must present it as an estimate.

use rand::Rng;
use serde::Serialize;

use ringside_common::{Trend, WrestlerAnalysis};

const MENTION_WEIGHT: f64 = 10.0;
const SENTIMENT_WEIGHT: f64 = 0.5;

/// `round(total_mentions * 10 + sentiment_score * 0.5)`, halves rounding up.
pub fn popularity_score(analysis: &WrestlerAnalysis) -> i64 {
    let raw = f64::from(analysis.total_mentions) * MENTION_WEIGHT
        + analysis.sentiment_score * SENTIMENT_WEIGHT;
    (raw + 0.5).floor() as i64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub wrestler_name: String,
    pub trend: Trend,
    pub total_mentions: u32,
    pub popularity: i64,
    pub change_24h: Option<SyntheticChange>,
}

/// Analyses ordered by popularity score (descending, stable), first `k`.
pub fn popularity_rankings(analyses: &[WrestlerAnalysis], k: usize) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = analyses
        .iter()
        .map(|a| LeaderboardEntry {
            wrestler_name: a.wrestler_name.clone(),
            trend: a.trend,
            total_mentions: a.total_mentions,
            popularity: popularity_score(a),
            change_24h: None,
        })
        .collect();

    entries.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    entries.truncate(k);
    entries
}

/// Placeholder day-over-day change. Not derived from any time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SyntheticChange {
    pub estimate: f64,
    pub synthetic: bool,
}

impl SyntheticChange {
    fn new(estimate: f64) -> Self {
        Self {
            estimate,
            synthetic: true,
        }
    }
}

pub struct SyntheticChangeEstimator<R> {
    rng: R,
}

impl<R: Rng> SyntheticChangeEstimator<R> {
    pub const NOISE: f64 = 5.0;

    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn base(trend: Trend) -> f64 {
        match trend {
            Trend::Push => 15.0,
            Trend::Burial => -12.0,
            Trend::Neutral => 3.0,
        }
    }

    /// Trend base plus uniform noise in `[-5, 5)`.
    pub fn estimate(&mut self, trend: Trend) -> SyntheticChange {
        let noise = self.rng.random_range(-Self::NOISE..Self::NOISE);
        SyntheticChange::new(Self::base(trend) + noise)
    }

    pub fn annotate(&mut self, entries: &mut [LeaderboardEntry]) {
        for entry in entries.iter_mut() {
            entry.change_24h = Some(self.estimate(entry.trend));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn analysis(name: &str, trend: Trend, mentions: u32, sentiment: f64) -> WrestlerAnalysis {
        WrestlerAnalysis {
            wrestler_name: name.to_string(),
            total_mentions: mentions,
            trend,
            momentum_score: 0.0,
            burial_score: 0.0,
            sentiment_score: sentiment,
        }
    }

    #[test]
    fn popularity_blends_mentions_and_sentiment() {
        assert_eq!(popularity_score(&analysis("x", Trend::Push, 10, 4.0)), 102);
        assert_eq!(popularity_score(&analysis("x", Trend::Push, 0, 0.0)), 0);
    }

    #[test]
    fn popularity_rounds_halves_up() {
        // 1 * 10 + 1 * 0.5 = 10.5
        assert_eq!(popularity_score(&analysis("x", Trend::Push, 1, 1.0)), 11);
        // 0 + -5 * 0.5 = -2.5
        assert_eq!(popularity_score(&analysis("x", Trend::Burial, 0, -5.0)), -2);
    }

    #[test]
    fn leaderboard_orders_by_popularity() {
        let input = vec![
            analysis("mid", Trend::Neutral, 5, 0.0),
            analysis("top", Trend::Push, 20, 10.0),
            analysis("low", Trend::Burial, 1, -40.0),
        ];
        let board = popularity_rankings(&input, 2);
        let names: Vec<&str> = board.iter().map(|e| e.wrestler_name.as_str()).collect();
        assert_eq!(names, vec!["top", "mid"]);
        assert_eq!(board[0].popularity, 205);
        assert!(board.iter().all(|e| e.change_24h.is_none()));
    }

    #[test]
    fn synthetic_change_stays_within_noise_band() {
        let mut estimator = SyntheticChangeEstimator::new(StdRng::seed_from_u64(7));
        for trend in [Trend::Push, Trend::Burial, Trend::Neutral] {
            let base = SyntheticChangeEstimator::<StdRng>::base(trend);
            for _ in 0..200 {
                let change = estimator.estimate(trend);
                assert!(change.synthetic);
                assert!(change.estimate >= base - 5.0 && change.estimate < base + 5.0);
            }
        }
    }

    #[test]
    fn same_seed_reproduces_estimates() {
        let mut a = SyntheticChangeEstimator::new(StdRng::seed_from_u64(42));
        let mut b = SyntheticChangeEstimator::new(StdRng::seed_from_u64(42));
        for _ in 0..20 {
            assert_eq!(a.estimate(Trend::Push), b.estimate(Trend::Push));
        }
    }
}
