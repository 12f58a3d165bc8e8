use serde::{Deserialize, Serialize};

/// A named category and the keywords that select it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryRule {
    pub name: String,

    /// Lower-case substrings; any one of them appearing in the item text selects the category.
    pub keywords: Vec<String>,
}

impl CategoryRule {
    #[must_use]
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }

    /// Check whether the already lower-cased text contains any of this rule's keywords.
    #[must_use]
    pub fn matches(&self, lowered_text: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered_text.contains(keyword.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_substring() {
        let rule = CategoryRule::new("bug", &["crash", "error"]);
        assert!(rule.matches("app crashes on start"));
        assert!(rule.matches("internal error"));
        assert!(!rule.matches("add dark mode"));
    }

    #[test]
    fn test_empty_text_never_matches() {
        let rule = CategoryRule::new("bug", &["bug"]);
        assert!(!rule.matches(""));
    }
}
