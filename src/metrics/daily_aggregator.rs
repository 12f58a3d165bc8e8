//! Buckets fetched activity into per-day records.

use crate::facts::RepoActivity;
use crate::metrics::ActivityMetrics;
use anyhow::{Context, Result};
use chrono::{DateTime, Days, NaiveDate, Utc};

/// Log target for the metrics stage
pub(crate) const LOG_TARGET: &str = "metrics";

fn on_day(timestamp: DateTime<Utc>, date: NaiveDate) -> bool {
    timestamp.date_naive() == date
}

fn maybe_on_day(timestamp: Option<DateTime<Utc>>, date: NaiveDate) -> bool {
    timestamp.is_some_and(|t| on_day(t, date))
}

fn count<T>(items: &[T], date: NaiveDate, what: &str, timestamp: impl Fn(&T) -> Option<DateTime<Utc>>) -> Result<u32> {
    let n = items.iter().filter(|item| maybe_on_day(timestamp(item), date)).count();
    u32::try_from(n).with_context(|| format!("{n} {what} on a single day does not fit the counter"))
}

/// Count the activity that happened on one calendar day.
///
/// Items with a null timestamp never count toward the matching bucket.
pub fn metrics_for_day(date: NaiveDate, activity: &RepoActivity) -> Result<ActivityMetrics> {
    let issues = &activity.upstream_issues;
    let pulls = &activity.upstream_pulls;
    let tasks = &activity.sync_tasks;

    Ok(ActivityMetrics {
        date,
        upstream_issues_opened: count(issues, date, "issues opened", |i| Some(i.created_at))?,
        upstream_issues_closed: count(issues, date, "issues closed", |i| i.closed_at)?,
        upstream_prs_opened: count(pulls, date, "pull requests opened", |p| Some(p.created_at))?,
        upstream_prs_merged: count(pulls, date, "pull requests merged", |p| p.merged_at)?,
        upstream_releases: count(&activity.upstream_releases, date, "releases", |r| {
            if r.draft { None } else { r.published_at }
        })?,
        downstream_sync_tasks_created: count(tasks, date, "sync tasks created", |t| Some(t.created_at))?,
        downstream_sync_tasks_completed: count(tasks, date, "sync tasks completed", |t| t.closed_at)?,
        sync_activity: sync_activity(date, activity)?,
    })
}

/// Issues updated on `date`, summed over every sync activity label.
fn sync_activity(date: NaiveDate, activity: &RepoActivity) -> Result<u32> {
    activity.labeled_updates.iter().try_fold(0_u32, |total, labeled| {
        let what = format!("'{}' updates", labeled.label);
        let n = count(&labeled.issues, date, &what, |i| Some(i.updated_at))?;
        total
            .checked_add(n)
            .with_context(|| format!("sync activity on {date} does not fit the counter"))
    })
}

/// Build the daily series for `today` and the `days - 1` days before it, oldest first.
///
/// A day that fails to collect is logged and left out of the series; the
/// remaining days are still returned.
pub fn collect_window(today: NaiveDate, days: u32, activity: &RepoActivity) -> Vec<ActivityMetrics> {
    collect_window_with(today, days, |date| metrics_for_day(date, activity))
}

fn collect_window_with<F>(today: NaiveDate, days: u32, mut collect_day: F) -> Vec<ActivityMetrics>
where
    F: FnMut(NaiveDate) -> Result<ActivityMetrics>,
{
    let mut series = Vec::with_capacity(days as usize);

    for offset in (0..days).rev() {
        let result = today
            .checked_sub_days(Days::new(offset.into()))
            .with_context(|| format!("{offset} days before {today} is out of range"))
            .and_then(|date| collect_day(date).with_context(|| format!("collecting metrics for {date}")));

        match result {
            Ok(metrics) => series.push(metrics),
            Err(e) => log::warn!(target: LOG_TARGET, "Skipping day: {e:#}"),
        }
    }

    log::debug!(target: LOG_TARGET, "Collected {} of {days} daily records ending {today}", series.len());
    series
}
