//! PNG chart rendering.

use crate::metrics::{ActivityMetrics, Series, Tally};
use crate::reports::DashboardData;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;

/// Log target for report generation
pub(crate) const LOG_TARGET: &str = "reports";

pub const ACTIVITY_CHART_FILE: &str = "activity_trends.png";
pub const CATEGORY_CHART_FILE: &str = "issue_categories.png";
pub const CONTRIBUTOR_CHART_FILE: &str = "top_contributors.png";

const FONT: &str = "sans-serif";

const PALETTE: [RGBColor; 8] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
];

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Paths of the charts written by [`render_all`].
///
/// Optional charts are `None` when there was nothing to plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCharts {
    pub activity: Utf8PathBuf,
    pub categories: Option<Utf8PathBuf>,
    pub contributors: Option<Utf8PathBuf>,
}

/// Render all three charts into `output_dir`, overwriting earlier runs.
pub fn render_all(data: &DashboardData, output_dir: &Utf8Path) -> Result<RenderedCharts> {
    let activity = output_dir.join(ACTIVITY_CHART_FILE);
    render_activity(&data.daily_metrics, &activity).with_context(|| format!("rendering '{activity}'"))?;

    let categories = if data.trends.issue_categories.has_counts() {
        let path = output_dir.join(CATEGORY_CHART_FILE);
        render_categories(&data.trends.issue_categories, &path).with_context(|| format!("rendering '{path}'"))?;
        Some(path)
    } else {
        log::info!(target: LOG_TARGET, "No categorized issues, skipping the category chart");
        None
    };

    let contributors = if data.trends.top_contributors.is_empty() {
        log::info!(target: LOG_TARGET, "No contributors, skipping the contributor chart");
        None
    } else {
        let path = output_dir.join(CONTRIBUTOR_CHART_FILE);
        render_contributors(&data.trends.top_contributors, &path).with_context(|| format!("rendering '{path}'"))?;
        Some(path)
    };

    Ok(RenderedCharts {
        activity,
        categories,
        contributors,
    })
}

struct Line {
    label: String,
    values: Vec<u64>,
    color: RGBColor,
}

impl Line {
    fn daily(series: Series, days: &[ActivityMetrics], color: RGBColor) -> Self {
        Self {
            label: series.to_string(),
            values: days.iter().map(|m| u64::from(series.value(m))).collect(),
            color,
        }
    }

    fn cumulative(series: Series, days: &[ActivityMetrics], color: RGBColor) -> Self {
        Self {
            label: format!("{series} (cumulative)"),
            values: series.cumulative(days),
            color,
        }
    }
}

fn render_activity(days: &[ActivityMetrics], path: &Utf8Path) -> Result<()> {
    let root = BitMapBackend::new(path.as_std_path(), (1600, 1000)).into_drawing_area();
    root.fill(&WHITE)?;

    let dates: Vec<NaiveDate> = days.iter().map(|m| m.date).collect();
    let panels = root.split_evenly((2, 2));
    let [opened, tasks, sync, cumulative] = panels.as_slice() else {
        anyhow::bail!("expected a 2x2 grid of panels");
    };

    draw_lines(
        opened,
        "Upstream issues and PRs opened",
        &dates,
        &[
            Line::daily(Series::IssuesOpened, days, PALETTE[0]),
            Line::daily(Series::PrsOpened, days, PALETTE[1]),
        ],
    )?;

    draw_lines(
        tasks,
        "Downstream sync tasks",
        &dates,
        &[
            Line::daily(Series::SyncTasksCreated, days, PALETTE[2]),
            Line::daily(Series::SyncTasksCompleted, days, PALETTE[3]),
        ],
    )?;

    draw_lines(sync, "Sync activity", &dates, &[Line::daily(Series::SyncActivity, days, PALETTE[4])])?;

    draw_lines(
        cumulative,
        "Cumulative issues and PRs opened",
        &dates,
        &[
            Line::cumulative(Series::IssuesOpened, days, PALETTE[0]),
            Line::cumulative(Series::PrsOpened, days, PALETTE[1]),
        ],
    )?;

    root.present()?;
    log::debug!(target: LOG_TARGET, "Wrote '{path}'");
    Ok(())
}

fn draw_lines(area: &Area<'_>, caption: &str, dates: &[NaiveDate], lines: &[Line]) -> Result<()> {
    let max_y = lines.iter().flat_map(|line| line.values.iter().copied()).max().unwrap_or(0).max(1);
    let max_x = dates.len().saturating_sub(1).max(1);

    let mut chart = ChartBuilder::on(area)
        .caption(caption, (FONT, 24))
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(48)
        .build_cartesian_2d(0..max_x, 0..max_y + max_y / 10 + 1)?;

    chart
        .configure_mesh()
        .x_labels(8)
        .x_label_formatter(&|i| dates.get(*i).map(|d| d.format("%m-%d").to_string()).unwrap_or_default())
        .y_desc("Count")
        .draw()?;

    for line in lines {
        let color = line.color;
        let _ = chart
            .draw_series(LineSeries::new(
                line.values.iter().enumerate().map(|(i, v)| (i, *v)),
                color.stroke_width(2),
            ))?
            .label(line.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn render_categories(categories: &Tally, path: &Utf8Path) -> Result<()> {
    let root = BitMapBackend::new(path.as_std_path(), (900, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let area = root.titled("Issue categories", (FONT, 30))?;

    let slices: Vec<(&str, u64)> = categories.iter().filter(|(_, count)| *count > 0).collect();

    #[expect(clippy::cast_precision_loss, reason = "Precision loss acceptable for slice sizes")]
    let sizes: Vec<f64> = slices.iter().map(|(_, count)| *count as f64).collect();
    let labels: Vec<String> = slices.iter().map(|(name, count)| format!("{name} ({count})")).collect();
    let colors: Vec<RGBColor> = PALETTE.iter().cycle().take(slices.len()).copied().collect();

    let (width, height) = area.dim_in_pixel();
    let center = (i32::try_from(width / 2)?, i32::try_from(height / 2)?);
    let radius = f64::from(width.min(height)) * 0.35;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(90.0);
    pie.label_style((FONT, 20).into_font().color(&BLACK));
    pie.percentages((FONT, 16).into_font().color(&WHITE));
    area.draw(&pie)?;

    root.present()?;
    log::debug!(target: LOG_TARGET, "Wrote '{path}'");
    Ok(())
}

fn render_contributors(contributors: &Tally, path: &Utf8Path) -> Result<()> {
    let root = BitMapBackend::new(path.as_std_path(), (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let entries: Vec<(u32, &str, u64)> = (0u32..).zip(contributors.iter()).map(|(i, (login, count))| (i, login, count)).collect();
    let bars = u32::try_from(entries.len())?;
    let max_y = entries.iter().map(|(_, _, count)| *count).max().unwrap_or(0).max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption("Top contributors", (FONT, 30))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(50)
        .build_cartesian_2d((0..bars).into_segmented(), 0..max_y + max_y / 5 + 1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(entries.len())
        .x_label_style((FONT, 14))
        .x_label_formatter(&|value| match value {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => entries
                .iter()
                .find(|(index, _, _)| index == i)
                .map(|(_, login, _)| (*login).to_string())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .y_desc("Issues and pull requests")
        .draw()?;

    let _ = chart.draw_series(
        Histogram::vertical(&chart)
            .style(PALETTE[0].filled())
            .margin(12)
            .data(entries.iter().map(|(i, _, count)| (*i, *count))),
    )?;

    let _ = chart.draw_series(
        entries
            .iter()
            .map(|(i, _, count)| Text::new(count.to_string(), (SegmentValue::CenterOf(*i), *count), (FONT, 16).into_font())),
    )?;

    root.present()?;
    log::debug!(target: LOG_TARGET, "Wrote '{path}'");
    Ok(())
}
