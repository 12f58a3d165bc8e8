use super::dashboard::{DashboardArgs, Settings, generate_dashboard};
use super::{Host, RunStage};
use clap::Parser;
use log::LevelFilter;
use std::ffi::OsString;
use std::io::Write;

const LOG_TARGET: &str = "run";

/// Environment variable holding the API bearer token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Parse the command line, generate the dashboard and report the outcome through `host`.
///
/// Exits with 0 on success, 1 on a missing token or any failure, and clap's code for usage errors.
pub async fn run<H, I, T>(host: &mut H, args: I)
where
    H: Host,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match DashboardArgs::try_parse_from(args) {
        Ok(args) => args,
        Err(e) => {
            let code = e.exit_code();
            let _ = if e.use_stderr() {
                write!(host.error(), "{}", e.render())
            } else {
                write!(host.output(), "{}", e.render())
            };
            host.exit(code);
            return;
        }
    };

    init_logging(args.verbose);

    let Some(token) = host.env_var(TOKEN_ENV_VAR).filter(|token| !token.trim().is_empty()) else {
        let _ = writeln!(host.error(), "Error: the {TOKEN_ENV_VAR} environment variable is not set");
        host.exit(1);
        return;
    };

    let settings = match Settings::resolve(&args) {
        Ok(settings) => settings,
        Err(e) => {
            let _ = writeln!(host.error(), "Error: invalid configuration: {e:#}");
            host.exit(1);
            return;
        }
    };

    let mut stage = RunStage::Start;
    match generate_dashboard(host, &settings, &token, &mut stage).await {
        Ok(()) => {
            log::info!(target: LOG_TARGET, "Dashboard written to '{}'", settings.output_dir);
            host.exit(0);
        }
        Err(e) => {
            let failed_in = stage;
            stage = RunStage::Failed;
            log::debug!(target: LOG_TARGET, "Run moved to '{stage}' from '{failed_in}'");

            let _ = writeln!(host.error(), "Error: {failed_in} failed: {e:#}");
            host.exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    // A second run in the same process (tests) keeps the first logger
    let _ = env_logger::Builder::new().filter_level(level).parse_default_env().try_init();
}
