use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub tag_name: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub draft: bool,

    pub created_at: DateTime<Utc>,

    /// Null until the release is published; drafts never have one.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}
