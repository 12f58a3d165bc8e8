use super::Author;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An issue as returned by the repository issues listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,

    pub title: String,

    /// Free-form description; absent or null when the author left it empty.
    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub user: Option<Author>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,

    /// Present only when the listed entry is really a pull request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<serde_json::Value>,
}

impl Issue {
    #[must_use]
    pub const fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.login.as_str())
    }
}
