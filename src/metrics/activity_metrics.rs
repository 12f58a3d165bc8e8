use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Activity counted for a single calendar day.
///
/// Built once by the daily aggregator and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityMetrics {
    /// The calendar day, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,

    pub upstream_issues_opened: u32,
    pub upstream_issues_closed: u32,
    pub upstream_prs_opened: u32,
    pub upstream_prs_merged: u32,

    /// Releases published on this day (drafts excluded).
    pub upstream_releases: u32,

    pub downstream_sync_tasks_created: u32,
    pub downstream_sync_tasks_completed: u32,

    /// Downstream issues last touched on this day, counted once per sync activity label they carry.
    pub sync_activity: u32,
}

impl ActivityMetrics {
    /// An all-zero record for the given day.
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            upstream_issues_opened: 0,
            upstream_issues_closed: 0,
            upstream_prs_opened: 0,
            upstream_prs_merged: 0,
            upstream_releases: 0,
            downstream_sync_tasks_created: 0,
            downstream_sync_tasks_completed: 0,
            sync_activity: 0,
        }
    }
}
