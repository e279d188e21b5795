// Collaborator seams.
//
// News ingestion, roster data and wrestler analysis all live outside this
// crate. The dashboard only sees them through these traits, so tests can run
// against in-memory snapshots with no network and no files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::info;

use ringside_common::{NewsItem, Wrestler, WrestlerAnalysis};

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Latest batch of news items from the ingestion service.
    async fn latest_news(&self) -> Result<Vec<NewsItem>>;
}

#[async_trait]
pub trait RosterSource: Send + Sync {
    async fn wrestlers(&self) -> Result<Vec<Wrestler>>;
}

#[async_trait]
pub trait AnalysisSource: Send + Sync {
    /// Per-wrestler analysis recomputed by the analysis service.
    async fn wrestler_analyses(&self) -> Result<Vec<WrestlerAnalysis>>;
}

// ---------------------------------------------------------------------------
// JsonSnapshot — collaborator exports on disk
// ---------------------------------------------------------------------------

/// Reads each collection from a JSON array file. A collection whose path is
/// not set is treated as empty.
#[derive(Debug, Clone, Default)]
pub struct JsonSnapshot {
    pub news_path: Option<PathBuf>,
    pub roster_path: Option<PathBuf>,
    pub analyses_path: Option<PathBuf>,
}

impl JsonSnapshot {
    async fn load<T: DeserializeOwned>(path: Option<&Path>, what: &str) -> Result<Vec<T>> {
        let Some(path) = path else {
            return Ok(Vec::new());
        };
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {what} snapshot: {}", path.display()))?;
        let items: Vec<T> = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse {what} snapshot: {}", path.display()))?;
        info!(path = %path.display(), items = items.len(), "snapshot: loaded {what}");
        Ok(items)
    }
}

#[async_trait]
impl NewsSource for JsonSnapshot {
    async fn latest_news(&self) -> Result<Vec<NewsItem>> {
        Self::load(self.news_path.as_deref(), "news").await
    }
}

#[async_trait]
impl RosterSource for JsonSnapshot {
    async fn wrestlers(&self) -> Result<Vec<Wrestler>> {
        Self::load(self.roster_path.as_deref(), "roster").await
    }
}

#[async_trait]
impl AnalysisSource for JsonSnapshot {
    async fn wrestler_analyses(&self) -> Result<Vec<WrestlerAnalysis>> {
        Self::load(self.analyses_path.as_deref(), "analysis").await
    }
}

// ---------------------------------------------------------------------------
// StaticSnapshot — data the caller already holds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct StaticSnapshot {
    pub news: Vec<NewsItem>,
    pub roster: Vec<Wrestler>,
    pub analyses: Vec<WrestlerAnalysis>,
}

#[async_trait]
impl NewsSource for StaticSnapshot {
    async fn latest_news(&self) -> Result<Vec<NewsItem>> {
        Ok(self.news.clone())
    }
}

#[async_trait]
impl RosterSource for StaticSnapshot {
    async fn wrestlers(&self) -> Result<Vec<Wrestler>> {
        Ok(self.roster.clone())
    }
}

#[async_trait]
impl AnalysisSource for StaticSnapshot {
    async fn wrestler_analyses(&self) -> Result<Vec<WrestlerAnalysis>> {
        Ok(self.analyses.clone())
    }
}
