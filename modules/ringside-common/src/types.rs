use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{RingsideError, RingsideResult};

// --- News ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    #[serde(default)]
    pub content_snippet: Option<String>,
    pub pub_date: DateTime<Utc>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// Number of days back from "now" that a news item stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecencyWindow(u32);

impl RecencyWindow {
    pub const DEFAULT_DAYS: u32 = 7;

    pub fn days(days: u32) -> Self {
        Self(days)
    }

    /// Parse a window from user-facing text ("7", " 30 ").
    /// Non-numeric and negative values are rejected.
    pub fn parse(raw: &str) -> RingsideResult<Self> {
        parse_non_negative(raw, "recency window").map(Self)
    }

    pub fn as_days(&self) -> u32 {
        self.0
    }

    /// Earliest publication instant still inside the window. Windows that
    /// reach past the earliest representable date keep everything.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        TimeDelta::try_days(i64::from(self.0))
            .and_then(|window| now.checked_sub_signed(window))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self(Self::DEFAULT_DAYS)
    }
}

impl std::fmt::Display for RecencyWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.0)
    }
}

// --- Roster ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wrestler {
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub promotion_id: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Wrestler {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brand: None,
            promotion_id: None,
            image_url: None,
            status: None,
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }
}

// --- Analysis ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Push,
    Burial,
    #[default]
    Neutral,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Push => write!(f, "push"),
            Trend::Burial => write!(f, "burial"),
            Trend::Neutral => write!(f, "neutral"),
        }
    }
}

/// Per-wrestler metrics produced by the analysis service on each refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrestlerAnalysis {
    pub wrestler_name: String,
    pub total_mentions: u32,
    #[serde(default)]
    pub trend: Trend,
    #[serde(default)]
    pub momentum_score: f64,
    #[serde(default)]
    pub burial_score: f64,
    #[serde(default)]
    pub sentiment_score: f64,
}

/// Parse a non-negative integer from user-facing text.
pub fn parse_non_negative(raw: &str, field: &str) -> RingsideResult<u32> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| {
        RingsideError::InvalidArgument(format!("{field} must be a whole number, got {raw:?}"))
    })?;
    if value < 0 {
        return Err(RingsideError::InvalidArgument(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    u32::try_from(value)
        .map_err(|_| RingsideError::InvalidArgument(format!("{field} is too large: {value}")))
}
