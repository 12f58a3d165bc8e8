use super::Issue;
use serde::{Deserialize, Serialize};

/// The downstream issues carrying one label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledIssues {
    pub label: String,
    pub issues: Vec<Issue>,
}
