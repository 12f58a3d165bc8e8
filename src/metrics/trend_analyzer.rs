//! Category, contributor and release cadence statistics.

use super::daily_aggregator::LOG_TARGET;
use crate::config::Config;
use crate::facts::{Release, RepoActivity};
use crate::metrics::{Classifier, Tally, Trends};

/// Length of the period release cadence is expressed in.
const CADENCE_PERIOD_DAYS: f64 = 30.0;

/// Analyze the most recent `config.trend_sample_size` issues and pull requests and all releases.
///
/// Collections are expected newest first, as returned by the fetcher.
#[must_use]
pub fn analyze(activity: &RepoActivity, config: &Config) -> Trends {
    let sample = config.trend_sample_size;
    let issues = activity.upstream_issues.iter().take(sample);
    let pulls = activity.upstream_pulls.iter().take(sample);

    let issue_classifier = Classifier::new(&config.issue_categories);
    let pr_classifier = Classifier::new(&config.pr_categories);

    let mut issue_categories = Tally::with_keys(issue_classifier.categories());
    let mut pr_categories = Tally::with_keys(pr_classifier.categories());
    let mut contributors = Tally::new();

    for issue in issues {
        issue_categories.increment(issue_classifier.classify(&issue.title, issue.body.as_deref()));
        if let Some(author) = issue.author() {
            contributors.increment(author);
        }
    }

    for pull in pulls {
        pr_categories.increment(pr_classifier.classify(&pull.title, pull.body.as_deref()));
        if let Some(author) = pull.author() {
            contributors.increment(author);
        }
    }

    let release_frequency = release_frequency(&activity.upstream_releases);

    log::debug!(
        target: LOG_TARGET,
        "Analyzed {} issue(s), {} pull request(s), {} release(s) from {} contributor(s)",
        issue_categories.total(),
        pr_categories.total(),
        activity.upstream_releases.len(),
        contributors.len()
    );

    Trends {
        issue_categories,
        pr_categories,
        release_frequency,
        top_contributors: contributors.top(config.top_contributors),
    }
}

/// Approximate number of releases per 30 days.
///
/// Computed as `count / max(days_between_oldest_and_newest / 30, 1)` and
/// rounded to two decimals. Fewer than two releases yield 0.
#[must_use]
pub fn release_frequency(releases: &[Release]) -> f64 {
    if releases.len() < 2 {
        return 0.0;
    }

    let (Some(oldest), Some(newest)) = (
        releases.iter().map(|r| r.created_at).min(),
        releases.iter().map(|r| r.created_at).max(),
    ) else {
        return 0.0;
    };

    #[expect(clippy::cast_precision_loss, reason = "Precision loss acceptable for cadence calculation")]
    let days = (newest - oldest).num_days() as f64;
    let periods = (days / CADENCE_PERIOD_DAYS).max(1.0);

    #[expect(clippy::cast_precision_loss, reason = "Precision loss acceptable for cadence calculation")]
    let cadence = releases.len() as f64 / periods;
    (cadence * 100.0).round() / 100.0
}
