use super::{GitHubClient, Issue, LabeledIssues, PullRequest, Release};
use crate::config::Config;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything fetched for one run, newest first within each collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepoActivity {
    pub upstream_issues: Vec<Issue>,
    pub upstream_pulls: Vec<PullRequest>,
    pub upstream_releases: Vec<Release>,

    /// Downstream issues carrying the sync label.
    pub sync_tasks: Vec<Issue>,

    /// Downstream issues per sync activity label, most recently updated first.
    pub labeled_updates: Vec<LabeledIssues>,
}

impl RepoActivity {
    /// Fetch the upstream listings followed by the downstream sync tasks and labeled updates.
    pub async fn collect(client: &GitHubClient, config: &Config) -> Result<Self> {
        let upstream = config.upstream()?;
        let downstream = config.downstream()?;

        let upstream_issues = client.fetch_issues(upstream, None).await?;
        let upstream_pulls = client.fetch_pull_requests(upstream).await?;
        let upstream_releases = client.fetch_releases(upstream).await?;
        let sync_tasks = client.fetch_issues(downstream, Some(&config.sync_label)).await?;

        let mut labeled_updates = Vec::with_capacity(config.sync_activity_labels.len());
        for label in &config.sync_activity_labels {
            labeled_updates.push(LabeledIssues {
                label: label.clone(),
                issues: client.fetch_recently_updated(downstream, label).await?,
            });
        }

        Ok(Self {
            upstream_issues,
            upstream_pulls,
            upstream_releases,
            sync_tasks,
            labeled_updates,
        })
    }

    /// The most recent update to a sync task, open or closed.
    #[must_use]
    pub fn last_sync(&self) -> Option<DateTime<Utc>> {
        self.sync_tasks.iter().map(|task| task.updated_at).max()
    }
}
