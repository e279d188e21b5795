use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use ringside_common::{
    Config, NewsItem, RecencyWindow, RingsideError, RingsideResult, Wrestler,
};

use crate::news_filter::filter_by_recency_at;
use crate::popularity::{popularity_rankings, LeaderboardEntry, SyntheticChangeEstimator};
use crate::ranker::{RankerConfig, Rankings, WrestlerRanker};
use crate::sources::{AnalysisSource, NewsSource, RosterSource};
use crate::wrestler_filter::{filter_by_promotion, filter_out_non_wrestlers, WrestlerFilterConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSettings {
    pub news_window: RecencyWindow,
    pub promotion: String,
    pub roster_filter: WrestlerFilterConfig,
    pub ranker: RankerConfig,
    /// When set, leaderboard entries carry a seeded synthetic 24h change.
    pub synthetic_change_seed: Option<u64>,
}

impl DashboardSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            news_window: config.news_window,
            promotion: config.promotion.clone(),
            roster_filter: WrestlerFilterConfig::from_config(config),
            ranker: RankerConfig::from_config(config),
            synthetic_change_seed: None,
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Everything the dashboard renders for one refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub generated_at: DateTime<Utc>,
    pub news: Vec<NewsItem>,
    pub roster: Vec<Wrestler>,
    #[serde(flatten)]
    pub rankings: Rankings,
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Pulls one snapshot from the collaborators and runs the filter/rank
/// pipeline over it. Holds no per-refresh state.
pub struct Dashboard {
    news: Arc<dyn NewsSource>,
    roster: Arc<dyn RosterSource>,
    analysis: Arc<dyn AnalysisSource>,
    settings: DashboardSettings,
}

impl Dashboard {
    pub fn new(
        news: Arc<dyn NewsSource>,
        roster: Arc<dyn RosterSource>,
        analysis: Arc<dyn AnalysisSource>,
        settings: DashboardSettings,
    ) -> Self {
        Self {
            news,
            roster,
            analysis,
            settings,
        }
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub async fn refresh(&self) -> RingsideResult<DashboardView> {
        self.refresh_at(Utc::now()).await
    }

    pub async fn refresh_at(&self, now: DateTime<Utc>) -> RingsideResult<DashboardView> {
        let (news, roster, analyses) = tokio::try_join!(
            self.news.latest_news(),
            self.roster.wrestlers(),
            self.analysis.wrestler_analyses(),
        )
        .map_err(|e| RingsideError::Snapshot(format!("{e:#}")))?;

        let settings = &self.settings;

        let news = filter_by_recency_at(&news, settings.news_window, now);

        let roster = filter_by_promotion(&roster, &settings.promotion);
        let roster = filter_out_non_wrestlers(&roster, &settings.roster_filter);

        let rankings = WrestlerRanker::new(settings.ranker).rank(&analyses);

        let mut leaderboard = popularity_rankings(&analyses, settings.ranker.top_k);
        if let Some(seed) = settings.synthetic_change_seed {
            SyntheticChangeEstimator::new(StdRng::seed_from_u64(seed)).annotate(&mut leaderboard);
        }

        info!(
            news = news.len(),
            roster = roster.len(),
            analyses = analyses.len(),
            top_push = rankings.top_push.len(),
            worst_burial = rankings.worst_burial.len(),
            "Dashboard refreshed"
        );

        Ok(DashboardView {
            generated_at: now,
            news,
            roster,
            rankings,
            leaderboard,
        })
    }
}
