use crate::reports::DashboardData;
use anyhow::{Context, Result};

/// Serialize the full dashboard data, pretty printed with two-space indentation.
pub fn generate(data: &DashboardData) -> Result<String> {
    serde_json::to_string_pretty(data).context("serializing dashboard data")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{ActivityMetrics, Tally, Trends};
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_generate_is_indented_and_complete() {
        let mut contributors = Tally::new();
        contributors.increment("alice");
        let trends = Trends {
            issue_categories: Tally::with_keys(["bug", "other"]),
            pr_categories: Tally::with_keys(["fix", "other"]),
            release_frequency: 2.0,
            top_contributors: contributors,
        };
        let days = vec![ActivityMetrics::empty(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())];
        let data = DashboardData::new(Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap(), days, trends, None);

        let text = generate(&data).unwrap();
        assert!(text.starts_with("{\n  \"generated_at\""));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["trends"]["top_contributors"]["alice"], 1);
        assert_eq!(value["trends"]["release_frequency"], 2.0);
        assert_eq!(value["daily_metrics"].as_array().unwrap().len(), 1);
        assert_eq!(value["summary"]["date_range"], "2025-03-01 to 2025-03-01");
    }
}
