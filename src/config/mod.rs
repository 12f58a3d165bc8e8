mod category_rule;
#[expect(clippy::module_inception, reason = "I like it this way")]
mod config;
mod repo_id;

pub use category_rule::CategoryRule;
pub use config::{Config, DEFAULT_CONFIG_TOML, OTHER_CATEGORY};
pub use repo_id::RepoId;
