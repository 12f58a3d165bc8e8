use crate::metrics::Tally;
use serde::Serialize;

/// Trend statistics derived from the most recent issues, pull requests and releases.
#[derive(Debug, Clone, Serialize)]
pub struct Trends {
    /// Issue count per category, in classifier priority order.
    pub issue_categories: Tally,

    /// Pull request count per category, in classifier priority order.
    pub pr_categories: Tally,

    /// Approximate releases per 30-day period; 0 with fewer than two releases.
    pub release_frequency: f64,

    /// Most active authors across issues and pull requests, highest count first.
    pub top_contributors: Tally,
}
