use std::collections::BTreeSet;

use tracing::debug;

use ringside_common::config::{
    ALL_PROMOTIONS, DEFAULT_MIN_NAME_LENGTH, DEFAULT_NON_WRESTLER_ROLES,
};
use ringside_common::{Config, Wrestler};

/// Which promotion a roster view is restricted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromotionFilter {
    All,
    /// Lower-cased brand fragment matched as a substring.
    Brand(String),
}

impl PromotionFilter {
    pub fn parse(selected: &str) -> Self {
        if selected.trim().eq_ignore_ascii_case(ALL_PROMOTIONS) {
            PromotionFilter::All
        } else {
            PromotionFilter::Brand(selected.to_lowercase())
        }
    }

    pub fn matches(&self, wrestler: &Wrestler) -> bool {
        match self {
            PromotionFilter::All => true,
            PromotionFilter::Brand(fragment) => wrestler
                .brand
                .as_deref()
                .is_some_and(|brand| brand.to_lowercase().contains(fragment.as_str())),
        }
    }
}

/// Restrict a roster to one promotion. `"all"` returns the roster unchanged.
pub fn filter_by_promotion(wrestlers: &[Wrestler], selected_promotion: &str) -> Vec<Wrestler> {
    let filter = PromotionFilter::parse(selected_promotion);
    let kept: Vec<Wrestler> = wrestlers
        .iter()
        .filter(|w| filter.matches(w))
        .cloned()
        .collect();

    debug!(
        total = wrestlers.len(),
        kept = kept.len(),
        promotion = selected_promotion,
        "roster: filtered by promotion"
    );
    kept
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrestlerFilterConfig {
    /// Lower-cased role keywords; a name containing any of them is not talent.
    pub denylist: BTreeSet<String>,
    /// Names with fewer characters than this are dropped.
    pub min_name_length: usize,
}

impl Default for WrestlerFilterConfig {
    fn default() -> Self {
        Self {
            denylist: DEFAULT_NON_WRESTLER_ROLES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
        }
    }
}

impl WrestlerFilterConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            denylist: config.denylist.iter().map(|s| s.to_lowercase()).collect(),
            min_name_length: config.min_name_length,
        }
    }

    pub fn is_wrestler(&self, name: &str) -> bool {
        if name.chars().count() < self.min_name_length {
            return false;
        }
        let lower = name.to_lowercase();
        !self.denylist.iter().any(|role| lower.contains(role.as_str()))
    }
}

/// Drop referees, announcers and other staff entries plus too-short names.
pub fn filter_out_non_wrestlers(
    wrestlers: &[Wrestler],
    config: &WrestlerFilterConfig,
) -> Vec<Wrestler> {
    let kept: Vec<Wrestler> = wrestlers
        .iter()
        .filter(|w| config.is_wrestler(&w.name))
        .cloned()
        .collect();

    debug!(
        total = wrestlers.len(),
        removed = wrestlers.len() - kept.len(),
        "roster: removed non-wrestlers"
    );
    kept
}
