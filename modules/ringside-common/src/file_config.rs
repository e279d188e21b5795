use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// TOML-backed dashboard configuration. Every table and key is optional;
/// whatever is present overrides the environment-derived [`crate::Config`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub news: Option<NewsConfig>,
    pub roster: Option<RosterConfig>,
    pub ranking: Option<RankingConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewsConfig {
    pub window_days: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterConfig {
    pub promotion: Option<String>,
    pub denylist: Option<Vec<String>>,
    pub min_name_length: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankingConfig {
    pub top_k: Option<usize>,
}

/// Load and parse a TOML config file.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}
