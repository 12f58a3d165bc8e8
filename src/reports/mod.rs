mod charts;
mod console;
mod dashboard_data;
mod html;
mod json;
mod output_files;

pub use charts::{ACTIVITY_CHART_FILE, CATEGORY_CHART_FILE, CONTRIBUTOR_CHART_FILE, RenderedCharts, render_all as render_charts};
pub use console::generate as generate_console;
pub use dashboard_data::{ACTIVE_STATUS, CurrentStatus, DashboardData, NEVER_SYNCED, Summary, sync_efficiency};
pub use html::generate as generate_html;
pub use json::generate as generate_json;
pub use output_files::OutputFiles;
