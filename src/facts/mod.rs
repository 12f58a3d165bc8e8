mod author;
mod github_client;
mod issue;
mod labeled_issues;
mod progress_reporter;
mod pull_request;
mod release;
mod repo_activity;

pub use author::Author;
pub use github_client::GitHubClient;
pub use issue::Issue;
pub use labeled_issues::LabeledIssues;
pub use progress_reporter::ProgressReporter;
pub use pull_request::PullRequest;
pub use release::Release;
pub use repo_activity::RepoActivity;
