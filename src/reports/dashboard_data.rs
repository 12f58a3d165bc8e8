use crate::metrics::{ActivityMetrics, Series, Trends};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Shown in place of a last-sync timestamp when no sync task was ever completed.
pub const NEVER_SYNCED: &str = "Never";

/// Status label for a repository that was reachable during the run.
pub const ACTIVE_STATUS: &str = "Active";

/// Totals over the whole daily window.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_issues: u64,
    pub total_prs: u64,
    pub total_releases: u64,
    pub total_sync_tasks: u64,

    /// Downstream sync tasks created per upstream issue opened, as a percentage.
    pub sync_efficiency: f64,

    pub date_range: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentStatus {
    pub last_sync: String,
    pub upstream_status: String,
    pub downstream_status: String,
}

/// Everything a dashboard shows, as written to the JSON snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub generated_at: DateTime<Utc>,
    pub summary: Summary,
    pub trends: Trends,
    pub daily_metrics: Vec<ActivityMetrics>,
    pub current_status: CurrentStatus,
}

impl DashboardData {
    #[must_use]
    pub fn new(
        generated_at: DateTime<Utc>,
        daily_metrics: Vec<ActivityMetrics>,
        trends: Trends,
        last_sync: Option<DateTime<Utc>>,
    ) -> Self {
        let total_issues = Series::IssuesOpened.total(&daily_metrics);
        let total_sync_tasks = Series::SyncTasksCreated.total(&daily_metrics);

        let summary = Summary {
            total_issues,
            total_prs: Series::PrsOpened.total(&daily_metrics),
            total_releases: Series::Releases.total(&daily_metrics),
            total_sync_tasks,
            sync_efficiency: sync_efficiency(total_sync_tasks, total_issues),
            date_range: date_range(&daily_metrics),
        };

        let current_status = CurrentStatus {
            last_sync: last_sync.map_or_else(|| NEVER_SYNCED.to_string(), |t| t.format("%Y-%m-%d %H:%M UTC").to_string()),
            upstream_status: ACTIVE_STATUS.to_string(),
            downstream_status: ACTIVE_STATUS.to_string(),
        };

        Self {
            generated_at,
            summary,
            trends,
            daily_metrics,
            current_status,
        }
    }
}

/// Sync tasks created as a percentage of issues opened, rounded to two decimals; 0 when no issues were opened.
#[must_use]
pub fn sync_efficiency(sync_tasks_created: u64, issues_opened: u64) -> f64 {
    if issues_opened == 0 {
        return 0.0;
    }

    #[expect(clippy::cast_precision_loss, reason = "Precision loss acceptable for a percentage")]
    let ratio = sync_tasks_created as f64 / issues_opened as f64;
    (ratio * 100.0 * 100.0).round() / 100.0
}

fn date_range(days: &[ActivityMetrics]) -> String {
    match (days.first(), days.last()) {
        (Some(first), Some(last)) => format!("{} to {}", first.date, last.date),
        _ => "No data".to_string(),
    }
}
