use crate::error::{RingsideError, RingsideResult};
use crate::file_config::FileConfig;
use crate::types::{parse_non_negative, RecencyWindow};

/// Role keywords that mark a roster entry as staff rather than talent.
pub const DEFAULT_NON_WRESTLER_ROLES: &[&str] = &[
    "referee",
    "announcer",
    "commentator",
    "road agent",
    "music group",
];

/// Names shorter than this are treated as noise ("Ace", "TBA").
pub const DEFAULT_MIN_NAME_LENGTH: usize = 4;

pub const DEFAULT_TOP_K: usize = 10;

pub const ALL_PROMOTIONS: &str = "all";

/// Dashboard configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // News
    pub news_window: RecencyWindow,

    // Roster
    pub promotion: String,
    pub denylist: Vec<String>,
    pub min_name_length: usize,

    // Rankings
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            news_window: RecencyWindow::default(),
            promotion: ALL_PROMOTIONS.to_string(),
            denylist: DEFAULT_NON_WRESTLER_ROLES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env` if present).
    pub fn from_env() -> RingsideResult<Self> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.log_values();
        Ok(config)
    }

    /// Build a config from an arbitrary key lookup. Unset keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> RingsideResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("RINGSIDE_NEWS_WINDOW_DAYS") {
            config.news_window = RecencyWindow::parse(&raw)?;
        }
        if let Some(raw) = lookup("RINGSIDE_PROMOTION") {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                config.promotion = trimmed.to_string();
            }
        }
        if let Some(raw) = lookup("RINGSIDE_DENYLIST") {
            config.denylist = split_list(&raw);
        }
        if let Some(raw) = lookup("RINGSIDE_MIN_NAME_LENGTH") {
            config.min_name_length = parse_non_negative(&raw, "RINGSIDE_MIN_NAME_LENGTH")? as usize;
        }
        if let Some(raw) = lookup("RINGSIDE_TOP_K") {
            config.top_k = parse_non_negative(&raw, "RINGSIDE_TOP_K")? as usize;
        }

        Ok(config)
    }

    /// Overlay values present in a TOML file on top of this config.
    pub fn merge_file(mut self, file: &FileConfig) -> RingsideResult<Self> {
        if let Some(news) = &file.news {
            if let Some(days) = news.window_days {
                if days < 0 {
                    return Err(RingsideError::Config(format!(
                        "news.window_days must not be negative, got {days}"
                    )));
                }
                let days = u32::try_from(days).map_err(|_| {
                    RingsideError::Config(format!("news.window_days is too large, got {days}"))
                })?;
                self.news_window = RecencyWindow::days(days);
            }
        }
        if let Some(roster) = &file.roster {
            if let Some(promotion) = &roster.promotion {
                let trimmed = promotion.trim();
                if !trimmed.is_empty() {
                    self.promotion = trimmed.to_string();
                }
            }
            if let Some(denylist) = &roster.denylist {
                self.denylist = denylist.iter().map(|s| s.trim().to_lowercase()).collect();
            }
            if let Some(min) = roster.min_name_length {
                self.min_name_length = min;
            }
        }
        if let Some(ranking) = &file.ranking {
            if let Some(k) = ranking.top_k {
                self.top_k = k;
            }
        }
        Ok(self)
    }

    pub fn log_values(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  RINGSIDE_NEWS_WINDOW_DAYS: {}", self.news_window.as_days());
        tracing::info!("  RINGSIDE_PROMOTION: {}", self.promotion);
        tracing::info!("  RINGSIDE_DENYLIST: {} keywords", self.denylist.len());
        tracing::info!("  RINGSIDE_MIN_NAME_LENGTH: {}", self.min_name_length);
        tracing::info!("  RINGSIDE_TOP_K: {}", self.top_k);
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
