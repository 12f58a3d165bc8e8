//! Plain-text run summary for the terminal.

use crate::reports::{DashboardData, OutputFiles, RenderedCharts};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;

fn heading(text: &str, colored: bool) -> String {
    if colored { text.bold().cyan().to_string() } else { text.to_string() }
}

fn value(text: &str, colored: bool) -> String {
    if colored { text.bold().to_string() } else { text.to_string() }
}

fn field(out: &mut impl Write, label: &str, text: &str) -> Result<()> {
    writeln!(out, "  {:<23}{text}", format!("{label}:"))?;
    Ok(())
}

/// Write the final summary: totals, trends and the paths of every file produced.
pub fn generate(
    data: &DashboardData,
    charts: &RenderedCharts,
    files: &OutputFiles,
    colored: bool,
    out: &mut impl Write,
) -> Result<()> {
    let summary = &data.summary;

    writeln!(out)?;
    writeln!(out, "{}", heading("Dashboard summary", colored))?;
    field(out, "Period", &summary.date_range)?;
    field(out, "Upstream issues", &value(&summary.total_issues.to_string(), colored))?;
    field(out, "Upstream PRs", &value(&summary.total_prs.to_string(), colored))?;
    field(out, "Upstream releases", &value(&summary.total_releases.to_string(), colored))?;
    field(out, "Downstream sync tasks", &value(&summary.total_sync_tasks.to_string(), colored))?;
    field(out, "Sync efficiency", &value(&format!("{:.2}%", summary.sync_efficiency), colored))?;
    field(out, "Release cadence", &format!("{:.2} per month", data.trends.release_frequency))?;
    field(out, "Last sync", &data.current_status.last_sync)?;

    if let Some((login, count)) = data.trends.top_contributors.iter().next() {
        field(out, "Top contributor", &format!("{login} ({count})"))?;
    }

    writeln!(out)?;
    writeln!(out, "{}", heading("Files", colored))?;
    writeln!(out, "  {}", files.html)?;
    writeln!(out, "  {}", files.json)?;
    for chart in core::iter::once(&charts.activity).chain(&charts.categories).chain(&charts.contributors) {
        writeln!(out, "  {chart}")?;
    }

    Ok(())
}
