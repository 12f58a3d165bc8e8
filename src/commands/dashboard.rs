use super::{Host, RunStage};
use crate::config::{Config, RepoId};
use crate::facts::{GitHubClient, ProgressReporter, RepoActivity};
use crate::metrics::{daily_aggregator, trend_analyzer};
use crate::misc::ColorMode;
use crate::reports::{DashboardData, OutputFiles, generate_console, generate_html, generate_json, render_charts};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::{ArgAction, Parser};
use std::fs;
use std::io::{IsTerminal, Write};

const LOG_TARGET: &str = "run";

#[derive(Parser, Debug)]
#[command(name = "fork-pulse", version, about = "Track how a fork keeps up with its upstream project")]
pub struct DashboardArgs {
    /// Upstream repository as `owner/name`
    #[arg(long, value_name = "REPO")]
    pub upstream: Option<RepoId>,

    /// Downstream (fork) repository as `owner/name`
    #[arg(long, value_name = "REPO")]
    pub downstream: Option<RepoId>,

    /// Label that marks downstream sync tasks
    #[arg(long, value_name = "LABEL")]
    pub sync_label: Option<String>,

    /// Number of days in the daily activity window
    #[arg(long, value_name = "DAYS")]
    pub days: Option<u32>,

    /// Directory for the charts, JSON snapshot and HTML dashboard [default: system temp directory]
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output_dir: Option<Utf8PathBuf>,

    /// Path to a configuration file
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Base URL of the hosting API, e.g. for an enterprise server
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Whether to use colors in the summary
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Don't show the progress spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Increase logging verbosity (-v for info, -vv for debug)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Everything a run needs once the command line and configuration are resolved.
#[derive(Debug)]
pub struct Settings {
    pub config: Config,
    pub output_dir: Utf8PathBuf,
    pub api_url: Option<String>,
    pub show_progress: bool,
    pub colored: bool,
}

impl Settings {
    /// Load the configuration file and apply command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid
    pub fn resolve(args: &DashboardArgs) -> Result<Self> {
        let mut config = Config::load(args.config.as_deref())?;

        if let Some(repo) = &args.upstream {
            config.upstream = Some(repo.clone());
        }

        if let Some(repo) = &args.downstream {
            config.downstream = Some(repo.clone());
        }

        if let Some(label) = &args.sync_label {
            config.sync_label.clone_from(label);
        }

        if let Some(days) = args.days {
            config.window_days = days;
        }

        config.validate()?;

        let output_dir = match &args.output_dir {
            Some(dir) => dir.clone(),
            None => Utf8PathBuf::try_from(std::env::temp_dir()).context("the system temp directory is not valid UTF-8")?,
        };

        Ok(Self {
            config,
            output_dir,
            api_url: args.api_url.clone(),
            show_progress: !args.no_progress,
            colored: args.color.resolve(std::io::stdout().is_terminal()),
        })
    }
}

/// Drive one run from `Start` to `Done`, keeping `stage` current so a failure can be attributed.
pub async fn generate_dashboard<H: Host>(host: &mut H, settings: &Settings, token: &str, stage: &mut RunStage) -> Result<()> {
    let config = &settings.config;

    advance(host, stage)?;
    let progress = ProgressReporter::new(settings.show_progress);
    progress.set_prefix("Fetching");
    progress.enable_indeterminate_mode();

    let client = GitHubClient::new(token, settings.api_url.as_deref(), progress.clone())?;
    let activity = RepoActivity::collect(&client, config).await;
    progress.finish_and_clear();
    let activity = activity?;

    let generated_at = Utc::now();
    let daily_metrics = daily_aggregator::collect_window(generated_at.date_naive(), config.window_days, &activity);

    advance(host, stage)?;
    let trends = trend_analyzer::analyze(&activity, config);
    let data = DashboardData::new(generated_at, daily_metrics, trends, activity.last_sync());

    advance(host, stage)?;
    ensure_dir(&settings.output_dir)?;
    let charts = render_charts(&data, &settings.output_dir)?;

    advance(host, stage)?;
    let json = generate_json(&data)?;
    let html = generate_html(&data, &charts)?;

    advance(host, stage)?;
    let files = OutputFiles::for_run(&settings.output_dir, generated_at);
    files.write(&json, &html)?;

    advance(host, stage)?;
    generate_console(&data, &charts, &files, settings.colored, &mut host.output())
}

fn advance<H: Host>(host: &mut H, stage: &mut RunStage) -> Result<()> {
    *stage = stage.next();
    log::debug!(target: LOG_TARGET, "Entering stage '{stage}'");

    if let Some(step) = stage.step() {
        writeln!(host.output(), "[{step}/{}] {stage}...", RunStage::WORK_STAGES)?;
    }

    Ok(())
}

fn ensure_dir(dir: &Utf8Path) -> Result<()> {
    if !dir.is_dir() {
        log::info!(target: LOG_TARGET, "Creating output directory '{dir}'");
        fs::create_dir_all(dir).with_context(|| format!("creating output directory '{dir}'"))?;
    }

    Ok(())
}
