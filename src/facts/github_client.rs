use super::{Issue, ProgressReporter, PullRequest, Release};
use crate::config::RepoId;
use anyhow::{Context, Result};
use octocrab::{Octocrab, Page};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Instant;

/// Log target for the GitHub fetcher
pub(crate) const LOG_TARGET: &str = "github";

/// Largest page size the REST API accepts.
const PER_PAGE: u8 = 100;

/// Query parameters shared by the issue and pull request listings.
#[derive(Debug, Serialize)]
struct ListParams<'a> {
    state: &'static str,
    sort: &'static str,
    direction: &'static str,
    per_page: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<&'a str>,
}

impl<'a> ListParams<'a> {
    const fn newest_first(labels: Option<&'a str>) -> Self {
        Self {
            state: "all",
            sort: "created",
            direction: "desc",
            per_page: PER_PAGE,
            labels,
        }
    }

    const fn recently_updated(label: &'a str) -> Self {
        Self {
            sort: "updated",
            ..Self::newest_first(Some(label))
        }
    }
}

#[derive(Debug, Serialize)]
struct PageParams {
    per_page: u8,
}

/// Read-only access to the repository listings of the hosting API.
///
/// Every listing follows pagination to the end. Requests are issued one at a
/// time and errors are returned as-is; there is no retry.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
    progress: ProgressReporter,
}

impl GitHubClient {
    /// Create a client authenticated with a bearer token.
    ///
    /// `api_url` replaces the public API endpoint, e.g. for an enterprise server.
    pub fn new(token: &str, api_url: Option<&str>, progress: ProgressReporter) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());
        if let Some(url) = api_url {
            builder = builder.base_uri(url).with_context(|| format!("invalid API URL '{url}'"))?;
        }

        let octocrab = builder.build().context("creating the GitHub client")?;
        Ok(Self { octocrab, progress })
    }

    /// List every issue of a repository, newest first, optionally restricted to a label.
    ///
    /// Pull requests, which the issues endpoint also returns, are left out.
    pub async fn fetch_issues(&self, repo: &RepoId, label: Option<&str>) -> Result<Vec<Issue>> {
        let what = label.map_or_else(|| "issues".to_string(), |l| format!("'{l}' issues"));
        let route = format!("/repos/{}/{}/issues", repo.owner(), repo.name());
        let mut issues: Vec<Issue> = self.list_all(repo, &what, &route, &ListParams::newest_first(label)).await?;

        issues.retain(|issue| !issue.is_pull_request());
        issues.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(issues)
    }

    /// List every issue carrying `label`, most recently updated first.
    ///
    /// Pull requests are left out as in [`Self::fetch_issues`].
    pub async fn fetch_recently_updated(&self, repo: &RepoId, label: &str) -> Result<Vec<Issue>> {
        let what = format!("recently updated '{label}' issues");
        let route = format!("/repos/{}/{}/issues", repo.owner(), repo.name());
        let mut issues: Vec<Issue> = self.list_all(repo, &what, &route, &ListParams::recently_updated(label)).await?;

        issues.retain(|issue| !issue.is_pull_request());
        issues.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(issues)
    }

    /// List every pull request of a repository, newest first.
    pub async fn fetch_pull_requests(&self, repo: &RepoId) -> Result<Vec<PullRequest>> {
        let route = format!("/repos/{}/{}/pulls", repo.owner(), repo.name());
        let mut pulls: Vec<PullRequest> = self.list_all(repo, "pull requests", &route, &ListParams::newest_first(None)).await?;

        pulls.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(pulls)
    }

    /// List every release of a repository, newest first.
    pub async fn fetch_releases(&self, repo: &RepoId) -> Result<Vec<Release>> {
        let route = format!("/repos/{}/{}/releases", repo.owner(), repo.name());
        let mut releases: Vec<Release> = self.list_all(repo, "releases", &route, &PageParams { per_page: PER_PAGE }).await?;

        releases.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(releases)
    }

    async fn list_all<T, P>(&self, repo: &RepoId, what: &str, route: &str, params: &P) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        P: Serialize + Sync,
    {
        let start_time = Instant::now();
        log::info!(target: LOG_TARGET, "Fetching {what} for '{repo}'");
        self.progress.set_message(format!("{what} for {repo}"));

        let first: Page<T> = self
            .octocrab
            .get(route, Some(params))
            .await
            .with_context(|| format!("fetching {what} for '{repo}'"))?;

        let items = self
            .octocrab
            .all_pages(first)
            .await
            .with_context(|| format!("fetching further pages of {what} for '{repo}'"))?;

        log::debug!(
            target: LOG_TARGET,
            "Fetched {} {what} for '{repo}' in {:.3}s",
            items.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(items)
    }
}
