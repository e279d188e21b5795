pub mod dashboard;
pub mod news_filter;
pub mod popularity;
pub mod ranker;
pub mod sources;
pub mod wrestler_filter;

pub use dashboard::{Dashboard, DashboardSettings, DashboardView};
pub use news_filter::{filter_by_recency, filter_by_recency_at};
pub use popularity::{
    popularity_rankings, popularity_score, LeaderboardEntry, SyntheticChange,
    SyntheticChangeEstimator,
};
pub use ranker::{top_push, worst_burial, RankerConfig, Rankings, WrestlerRanker};
pub use sources::{AnalysisSource, JsonSnapshot, NewsSource, RosterSource, StaticSnapshot};
pub use wrestler_filter::{
    filter_by_promotion, filter_out_non_wrestlers, PromotionFilter, WrestlerFilterConfig,
};
