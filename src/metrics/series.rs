use crate::metrics::ActivityMetrics;
use strum::{Display, EnumIter};

/// One column of the daily activity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Series {
    #[strum(serialize = "Issues opened")]
    IssuesOpened,

    #[strum(serialize = "Issues closed")]
    IssuesClosed,

    #[strum(serialize = "PRs opened")]
    PrsOpened,

    #[strum(serialize = "PRs merged")]
    PrsMerged,

    #[strum(serialize = "Releases")]
    Releases,

    #[strum(serialize = "Sync tasks created")]
    SyncTasksCreated,

    #[strum(serialize = "Sync tasks completed")]
    SyncTasksCompleted,

    #[strum(serialize = "Sync activity")]
    SyncActivity,
}

impl Series {
    #[must_use]
    pub const fn value(self, metrics: &ActivityMetrics) -> u32 {
        match self {
            Self::IssuesOpened => metrics.upstream_issues_opened,
            Self::IssuesClosed => metrics.upstream_issues_closed,
            Self::PrsOpened => metrics.upstream_prs_opened,
            Self::PrsMerged => metrics.upstream_prs_merged,
            Self::Releases => metrics.upstream_releases,
            Self::SyncTasksCreated => metrics.downstream_sync_tasks_created,
            Self::SyncTasksCompleted => metrics.downstream_sync_tasks_completed,
            Self::SyncActivity => metrics.sync_activity,
        }
    }

    /// Sum of this series over a run of days.
    #[must_use]
    pub fn total(self, days: &[ActivityMetrics]) -> u64 {
        days.iter().map(|m| u64::from(self.value(m))).sum()
    }

    /// Running sum of this series, one entry per day.
    #[must_use]
    pub fn cumulative(self, days: &[ActivityMetrics]) -> Vec<u64> {
        days.iter()
            .scan(0u64, |acc, m| {
                *acc += u64::from(self.value(m));
                Some(*acc)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use strum::IntoEnumIterator;

    fn day(d: u32, opened: u32) -> ActivityMetrics {
        ActivityMetrics {
            upstream_issues_opened: opened,
            ..ActivityMetrics::empty(NaiveDate::from_ymd_opt(2025, 1, d).unwrap())
        }
    }

    #[test]
    fn test_total_and_cumulative() {
        let days = [day(1, 2), day(2, 0), day(3, 5)];
        assert_eq!(Series::IssuesOpened.total(&days), 7);
        assert_eq!(Series::IssuesOpened.cumulative(&days), vec![2, 2, 7]);
        assert_eq!(Series::PrsOpened.cumulative(&days), vec![0, 0, 0]);
    }

    #[test]
    fn test_empty_days() {
        assert_eq!(Series::Releases.total(&[]), 0);
        assert!(Series::Releases.cumulative(&[]).is_empty());
    }

    #[test]
    fn test_every_series_reads_its_own_field() {
        let metrics = ActivityMetrics {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            upstream_issues_opened: 1,
            upstream_issues_closed: 2,
            upstream_prs_opened: 3,
            upstream_prs_merged: 4,
            upstream_releases: 5,
            downstream_sync_tasks_created: 6,
            downstream_sync_tasks_completed: 7,
            sync_activity: 8,
        };

        let values: Vec<u32> = Series::iter().map(|s| s.value(&metrics)).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Series::PrsMerged.to_string(), "PRs merged");
        assert_eq!(Series::SyncTasksCreated.to_string(), "Sync tasks created");
    }
}
