use std::io::Write;

/// The process environment `run` talks to.
///
/// The binary supplies the real stdout, stderr, environment and process exit; tests supply
/// in-memory buffers and a controlled environment.
pub trait Host {
    fn output(&mut self) -> impl Write;
    fn error(&mut self) -> impl Write;
    fn exit(&mut self, code: i32);

    /// Read an environment variable, returning `None` if it is unset or not valid Unicode.
    fn env_var(&self, name: &str) -> Option<String>;
}
