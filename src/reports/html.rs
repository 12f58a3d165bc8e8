//! Self-contained HTML dashboard.
//!
//! Charts are inlined as base64 `data:` URIs so the page has no external assets.

use crate::reports::{DashboardData, RenderedCharts};
use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use camino::Utf8Path;
use core::fmt::Write as _;
use std::fs;

/// Render the dashboard page for the given data and chart files.
pub fn generate(data: &DashboardData, charts: &RenderedCharts) -> Result<String> {
    let activity_chart = chart_figure("Daily activity", Some(charts.activity.as_path()))?;
    let category_chart = chart_figure("Issue categories", charts.categories.as_deref())?;
    let contributor_chart = chart_figure("Top contributors", charts.contributors.as_deref())?;

    let summary = &data.summary;
    let status = &data.current_status;

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Fork Sync Dashboard</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <header>
            <h1>Fork Sync Dashboard</h1>
            <p class="meta">Generated {generated_at} &middot; {date_range}</p>
        </header>
        <section class="summary">
            {issues_card}
            {prs_card}
            {tasks_card}
            {efficiency_card}
        </section>
        <section class="section">
            <h2>Status</h2>
            <table>
                <tbody>
                    <tr><th>Last sync</th><td>{last_sync}</td></tr>
                    <tr><th>Upstream</th><td class="status">{upstream_status}</td></tr>
                    <tr><th>Downstream</th><td class="status">{downstream_status}</td></tr>
                    <tr><th>Release cadence</th><td>{release_frequency:.2} per month</td></tr>
                    <tr><th>Releases in window</th><td>{total_releases}</td></tr>
                </tbody>
            </table>
        </section>
        <section class="section">
            {activity_chart}
        </section>
        <section class="section charts">
            {category_chart}
            {contributor_chart}
        </section>
        <section class="section">
            <h2>Pull request categories</h2>
            {pr_table}
        </section>
        <footer>fork-pulse</footer>
    </div>
</body>
</html>
"#,
        css = inline_css(),
        generated_at = data.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        date_range = escape_html(&summary.date_range),
        issues_card = summary_card("Upstream issues opened", &summary.total_issues.to_string()),
        prs_card = summary_card("Upstream PRs opened", &summary.total_prs.to_string()),
        tasks_card = summary_card("Downstream sync tasks", &summary.total_sync_tasks.to_string()),
        efficiency_card = summary_card("Sync efficiency", &format!("{:.2}%", summary.sync_efficiency)),
        last_sync = escape_html(&status.last_sync),
        upstream_status = escape_html(&status.upstream_status),
        downstream_status = escape_html(&status.downstream_status),
        release_frequency = data.trends.release_frequency,
        total_releases = summary.total_releases,
        pr_table = count_table(data.trends.pr_categories.iter()),
    ))
}

fn summary_card(title: &str, value: &str) -> String {
    format!(
        r#"<div class="summary-card"><h3>{}</h3><div class="value">{}</div></div>"#,
        escape_html(title),
        escape_html(value)
    )
}

fn chart_figure(title: &str, path: Option<&Utf8Path>) -> Result<String> {
    let Some(path) = path else {
        return Ok(format!(
            r#"<figure class="chart"><h2>{}</h2><p class="empty">No data to chart.</p></figure>"#,
            escape_html(title)
        ));
    };

    let bytes = fs::read(path).with_context(|| format!("reading chart '{path}'"))?;
    Ok(format!(
        r#"<figure class="chart"><h2>{title}</h2><img alt="{title}" src="data:image/png;base64,{data}"></figure>"#,
        title = escape_html(title),
        data = BASE64.encode(bytes)
    ))
}

fn count_table<'a>(rows: impl Iterator<Item = (&'a str, u64)>) -> String {
    let mut html = String::from("<table><thead><tr><th>Category</th><th>Count</th></tr></thead><tbody>");
    for (name, count) in rows {
        let _ = write!(html, "<tr><td>{}</td><td>{count}</td></tr>", escape_html(name));
    }
    html.push_str("</tbody></table>");
    html
}

/// Escape text for safe inclusion in element content and quoted attributes.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn inline_css() -> &'static str {
    r"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; line-height: 1.6; color: #111827; background: #f3f4f6; }
.container { max-width: 1400px; margin: 0 auto; padding: 2rem; }
header { margin-bottom: 2rem; padding-bottom: 1rem; border-bottom: 2px solid #e5e7eb; }
header h1 { font-size: 2rem; font-weight: 700; }
header .meta { color: #6b7280; font-size: 0.875rem; }
.summary { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1rem; margin-bottom: 2rem; }
.summary-card { background: #ffffff; padding: 1rem; border-radius: 0.5rem; border-left: 4px solid #3b82f6; }
.summary-card h3 { font-size: 0.875rem; font-weight: 600; color: #6b7280; }
.summary-card .value { font-size: 1.75rem; font-weight: 700; }
.section { margin-bottom: 2rem; }
.section h2 { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.75rem; }
.charts { display: grid; grid-template-columns: repeat(auto-fit, minmax(480px, 1fr)); gap: 1rem; }
.chart { background: #ffffff; padding: 1rem; border-radius: 0.5rem; }
.chart img { width: 100%; height: auto; }
.chart .empty { color: #6b7280; }
table { width: 100%; border-collapse: collapse; background: #ffffff; border-radius: 0.5rem; overflow: hidden; }
th, td { padding: 0.6rem 0.75rem; text-align: left; border-bottom: 1px solid #e5e7eb; font-size: 0.875rem; }
th { color: #374151; width: 14rem; }
.status { color: #16a34a; font-weight: 600; }
footer { color: #9ca3af; font-size: 0.75rem; text-align: center; }
"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{Tally, Trends};
    use camino::Utf8PathBuf;
    use chrono::{TimeZone, Utc};

    fn data() -> DashboardData {
        let mut pr_categories = Tally::with_keys(["fix", "other"]);
        pr_categories.increment("fix");
        let trends = Trends {
            issue_categories: Tally::with_keys(["bug", "other"]),
            pr_categories,
            release_frequency: 1.5,
            top_contributors: Tally::new(),
        };
        DashboardData::new(Utc.with_ymd_and_hms(2025, 2, 3, 4, 5, 6).unwrap(), vec![], trends, None)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_generate_inlines_chart_and_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let chart = Utf8PathBuf::try_from(tmp.path().join("activity_trends.png")).unwrap();
        fs::write(&chart, b"not really a png").unwrap();

        let charts = RenderedCharts {
            activity: chart,
            categories: None,
            contributors: None,
        };

        let html = generate(&data(), &charts).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(&format!("data:image/png;base64,{}", BASE64.encode(b"not really a png"))));
        assert!(html.contains("Generated 2025-02-03 04:05:06 UTC"));
        assert!(html.contains("No data"));
        assert!(html.contains("<td>Never</td>"));
        assert_eq!(html.matches(r#"<td class="status">Active</td>"#).count(), 2);
        assert!(html.contains("1.50 per month"));
        assert!(html.contains(r#"<div class="value">0.00%</div>"#));
        assert!(html.contains("<tr><td>fix</td><td>1</td></tr>"));
        assert_eq!(html.matches("No data to chart.").count(), 2);
        assert!(!html.contains("http://"));
        assert!(!html.contains("https://"));
    }

    #[test]
    fn test_generate_fails_when_chart_missing() {
        let charts = RenderedCharts {
            activity: Utf8PathBuf::from("/definitely/not/here.png"),
            categories: None,
            contributors: None,
        };
        assert!(generate(&data(), &charts).is_err());
    }
}
