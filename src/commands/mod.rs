mod dashboard;
mod host;
mod run;
mod run_stage;

pub use dashboard::{DashboardArgs, Settings, generate_dashboard};
pub use host::Host;
pub use run::{TOKEN_ENV_VAR, run};
pub use run_stage::RunStage;
