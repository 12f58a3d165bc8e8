//! Generate a fork sync dashboard from upstream and downstream repository activity.

use fork_pulse::{Host, run};
use std::io::{Write, stderr, stdout};

/// Default host backed by the real process.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }

    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    run(&mut RealHost, std::env::args_os()).await;
}
