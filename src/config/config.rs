use crate::config::{CategoryRule, RepoId};
use anyhow::{Context, Result, bail};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Category name used for items that match no configured rule.
pub const OTHER_CATEGORY: &str = "other";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The project being tracked for activity signals
    #[serde(default)]
    pub upstream: Option<RepoId>,

    /// The fork whose sync tasks are measured against upstream activity
    #[serde(default)]
    pub downstream: Option<RepoId>,

    /// Label marking downstream issues that track an upstream change
    #[serde(default = "default_sync_label")]
    pub sync_label: String,

    /// Labels whose downstream issues count toward daily sync activity
    ///
    /// An issue carrying several of these labels counts once per label.
    #[serde(default = "default_sync_activity_labels")]
    pub sync_activity_labels: Vec<String>,

    /// Number of calendar days in the daily series, ending today
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Number of most recent issues and pull requests sampled for trends
    #[serde(default = "default_trend_sample_size")]
    pub trend_sample_size: usize,

    /// Number of entries kept in the contributor ranking
    #[serde(default = "default_top_contributors")]
    pub top_contributors: usize,

    /// Issue categories in priority order
    #[serde(default)]
    pub issue_categories: Vec<CategoryRule>,

    /// Pull request categories in priority order
    #[serde(default)]
    pub pr_categories: Vec<CategoryRule>,
}

fn default_sync_label() -> String {
    "upstream-sync".to_string()
}

fn default_sync_activity_labels() -> Vec<String> {
    ["upstream-sync", "upstream-pr", "upstream-release"].map(String::from).to_vec()
}

const fn default_window_days() -> u32 {
    30
}

const fn default_trend_sample_size() -> usize {
    100
}

const fn default_top_contributors() -> usize {
    10
}

impl Config {
    /// Load configuration from a file or use the embedded defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(config_path: Option<&Utf8Path>) -> Result<Self> {
        let Some(path) = config_path else {
            return Self::parse(DEFAULT_CONFIG_TOML).context("parsing the built-in configuration");
        };

        let text = fs::read_to_string(path).with_context(|| format!("reading configuration file '{path}'"))?;
        Self::parse(&text).with_context(|| format!("parsing configuration file '{path}'"))
    }

    fn parse(text: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(text)?;

        // A file that doesn't mention categories inherits the built-in keyword sets
        if config.issue_categories.is_empty() || config.pr_categories.is_empty() {
            let defaults: Self = toml::from_str(DEFAULT_CONFIG_TOML)?;
            if config.issue_categories.is_empty() {
                config.issue_categories = defaults.issue_categories;
            }
            if config.pr_categories.is_empty() {
                config.pr_categories = defaults.pr_categories;
            }
        }

        Ok(config)
    }

    /// The upstream repository, once validated.
    ///
    /// # Errors
    ///
    /// Returns an error if no upstream repository was configured
    pub fn upstream(&self) -> Result<&RepoId> {
        self.upstream
            .as_ref()
            .context("no upstream repository configured (use --upstream or the 'upstream' config key)")
    }

    /// The downstream repository, once validated.
    ///
    /// # Errors
    ///
    /// Returns an error if no downstream repository was configured
    pub fn downstream(&self) -> Result<&RepoId> {
        self.downstream
            .as_ref()
            .context("no downstream repository configured (use --downstream or the 'downstream' config key)")
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a value is missing, out of range, or inconsistent
    pub fn validate(&self) -> Result<()> {
        let _ = self.upstream()?;
        let _ = self.downstream()?;

        if self.sync_label.trim().is_empty() {
            bail!("sync_label must not be empty");
        }

        if self.sync_activity_labels.iter().any(|label| label.trim().is_empty()) {
            bail!("sync_activity_labels must not contain empty labels");
        }

        if self.window_days == 0 {
            bail!("window_days must be at least 1");
        }

        if self.trend_sample_size == 0 {
            bail!("trend_sample_size must be at least 1");
        }

        if self.top_contributors == 0 {
            bail!("top_contributors must be at least 1");
        }

        validate_rules("issue_categories", &self.issue_categories)?;
        validate_rules("pr_categories", &self.pr_categories)
    }
}

fn validate_rules(field: &str, rules: &[CategoryRule]) -> Result<()> {
    let mut seen = HashSet::new();

    for rule in rules {
        if rule.name.trim().is_empty() {
            bail!("{field}: category names must not be empty");
        }

        if rule.name == OTHER_CATEGORY {
            bail!("{field}: '{OTHER_CATEGORY}' is reserved for unmatched items");
        }

        if !seen.insert(rule.name.as_str()) {
            bail!("{field}: category '{}' is defined more than once", rule.name);
        }

        if rule.keywords.is_empty() || rule.keywords.iter().any(|k| k.is_empty()) {
            bail!("{field}: category '{}' needs at least one non-empty keyword", rule.name);
        }

        if let Some(keyword) = rule.keywords.iter().find(|k| k.to_lowercase() != **k) {
            bail!("{field}: keyword '{keyword}' in category '{}' must be lower case", rule.name);
        }
    }

    Ok(())
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
