use crate::config::{CategoryRule, OTHER_CATEGORY};

/// Keyword classifier with first-match-wins priority.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    rules: &'a [CategoryRule],
}

/// The text an item is classified by: lower-cased title and body joined by a space.
#[must_use]
pub fn classification_text(title: &str, body: Option<&str>) -> String {
    format!("{title} {}", body.unwrap_or_default()).to_lowercase()
}

impl<'a> Classifier<'a> {
    #[must_use]
    pub const fn new(rules: &'a [CategoryRule]) -> Self {
        Self { rules }
    }

    /// Every category this classifier can produce, in priority order, ending with the fallback.
    pub fn categories(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.rules.iter().map(|rule| rule.name.as_str()).chain(core::iter::once(OTHER_CATEGORY))
    }

    #[must_use]
    pub fn classify(&self, title: &str, body: Option<&str>) -> &'a str {
        let text = classification_text(title, body);
        self.rules
            .iter()
            .find(|rule| rule.matches(&text))
            .map_or(OTHER_CATEGORY, |rule| rule.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_classification_text_without_body() {
        assert_eq!(classification_text("Crash On Start", None), "crash on start ");
        assert_eq!(classification_text("Title", Some("BODY")), "title body");
    }

    #[test]
    fn test_missing_body_does_not_fail() {
        let config = Config::default();
        let classifier = Classifier::new(&config.issue_categories);
        assert_eq!(classifier.classify("Crash when saving", None), "bug");
    }

    #[test]
    fn test_bug_beats_feature() {
        let config = Config::default();
        let classifier = Classifier::new(&config.issue_categories);
        assert_eq!(classifier.classify("Feature request: dark mode", Some("it also has a bug")), "bug");
    }

    #[test]
    fn test_issue_priority_order() {
        let config = Config::default();
        let classifier = Classifier::new(&config.issue_categories);
        assert_eq!(classifier.classify("Add enhancement", None), "feature");
        assert_eq!(classifier.classify("Update the README", None), "documentation");
        assert_eq!(classifier.classify("Improve startup speed", None), "performance");
        assert_eq!(classifier.classify("Question about licensing", None), "other");
    }

    #[test]
    fn test_keyword_match_uses_body() {
        let config = Config::default();
        let classifier = Classifier::new(&config.issue_categories);
        assert_eq!(classifier.classify("Weird behaviour", Some("The process CRASHED twice")), "bug");
    }

    #[test]
    fn test_pr_priority_order() {
        let config = Config::default();
        let classifier = Classifier::new(&config.pr_categories);
        assert_eq!(classifier.classify("Fix panic and add test", None), "fix");
        assert_eq!(classifier.classify("feat: add retries", None), "feature");
        assert_eq!(classifier.classify("Refactor parser", None), "refactor");
        assert_eq!(classifier.classify("Update docs", None), "documentation");
        assert_eq!(classifier.classify("Bump version", None), "other");
    }

    #[test]
    fn test_default_issue_keywords() {
        let config = Config::default();
        let classifier = Classifier::new(&config.issue_categories);
        assert_eq!(classifier.classify("Fix login redirect", None), "bug");
        assert_eq!(classifier.classify("Add dark mode", None), "feature");
        assert_eq!(classifier.classify("Docker image too large", None), "other");
        assert_eq!(classifier.classify("Pull request template", None), "other");
    }

    #[test]
    fn test_default_pr_keywords() {
        let config = Config::default();
        let classifier = Classifier::new(&config.pr_categories);
        assert_eq!(classifier.classify("Refactor: add helper", None), "refactor");
        assert_eq!(classifier.classify("Bugfix for the loader", None), "fix");
        assert_eq!(classifier.classify("Add docker image", None), "other");
    }

    #[test]
    fn test_classification_is_deterministic() {
        let config = Config::default();
        let classifier = Classifier::new(&config.pr_categories);
        let first = classifier.classify("Refactor docs", Some("cleanup"));
        for _ in 0..10 {
            assert_eq!(classifier.classify("Refactor docs", Some("cleanup")), first);
        }
        assert_eq!(first, "refactor");
    }

    #[test]
    fn test_categories_end_with_other() {
        let config = Config::default();
        let classifier = Classifier::new(&config.issue_categories);
        let categories: Vec<_> = classifier.categories().collect();
        assert_eq!(categories, ["bug", "feature", "documentation", "performance", "other"]);
    }

    #[test]
    fn test_no_rules_means_everything_is_other() {
        let classifier = Classifier::new(&[]);
        assert_eq!(classifier.classify("Crash", Some("bug")), "other");
    }
}
