use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use ringside_common::config::DEFAULT_TOP_K;
use ringside_common::types::parse_non_negative;
use ringside_common::{Config, RingsideResult, Trend, WrestlerAnalysis};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankerConfig {
    pub top_k: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self { top_k: DEFAULT_TOP_K }
    }
}

impl RankerConfig {
    pub fn from_config(config: &Config) -> Self {
        Self { top_k: config.top_k }
    }

    /// Parse `k` from user-facing text; negative or non-numeric input is rejected.
    pub fn parse(raw_k: &str) -> RingsideResult<Self> {
        let top_k = parse_non_negative(raw_k, "k")? as usize;
        Ok(Self { top_k })
    }
}

/// Top pushes and worst burials computed from one analysis snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rankings {
    pub top_push: Vec<WrestlerAnalysis>,
    pub worst_burial: Vec<WrestlerAnalysis>,
}

pub struct WrestlerRanker {
    config: RankerConfig,
}

impl WrestlerRanker {
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    pub fn top_push(&self, analyses: &[WrestlerAnalysis]) -> Vec<WrestlerAnalysis> {
        top_push(analyses, self.config.top_k)
    }

    pub fn worst_burial(&self, analyses: &[WrestlerAnalysis]) -> Vec<WrestlerAnalysis> {
        worst_burial(analyses, self.config.top_k)
    }

    pub fn rank(&self, analyses: &[WrestlerAnalysis]) -> Rankings {
        Rankings {
            top_push: self.top_push(analyses),
            worst_burial: self.worst_burial(analyses),
        }
    }
}

/// Most-mentioned wrestlers trending up, ties broken by momentum.
pub fn top_push(analyses: &[WrestlerAnalysis], k: usize) -> Vec<WrestlerAnalysis> {
    top_k_by_trend(analyses, Trend::Push, |a| a.momentum_score, k)
}

/// Most-mentioned wrestlers trending down, ties broken by burial score.
pub fn worst_burial(analyses: &[WrestlerAnalysis], k: usize) -> Vec<WrestlerAnalysis> {
    top_k_by_trend(analyses, Trend::Burial, |a| a.burial_score, k)
}

/// Filter to `trend` with at least one mention, order by mentions then
/// `tiebreak` (both descending), keep the first `k`. The sort is stable so
/// full ties keep their input order.
fn top_k_by_trend(
    analyses: &[WrestlerAnalysis],
    trend: Trend,
    tiebreak: impl Fn(&WrestlerAnalysis) -> f64,
    k: usize,
) -> Vec<WrestlerAnalysis> {
    let mut ranked: Vec<&WrestlerAnalysis> = analyses
        .iter()
        .filter(|a| a.trend == trend && a.total_mentions > 0)
        .collect();

    ranked.sort_by(|a, b| {
        b.total_mentions
            .cmp(&a.total_mentions)
            .then_with(|| descending(tiebreak(a), tiebreak(b)))
    });
    ranked.truncate(k);

    debug!(
        %trend,
        candidates = analyses.len(),
        ranked = ranked.len(),
        k,
        "rankings: selected top-k"
    );

    ranked.into_iter().cloned().collect()
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
