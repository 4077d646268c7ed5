pub mod playground;

use anyhow::Result;

/// The outermost boundary. main.rs and the REPL only know this trait.
pub trait Engine: Send {
    /// Run the code once and return what was displayed.
    fn run(&mut self, code: &str) -> Result<String>;
}

/// Counters for one playground session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub runs: u64,
    pub echoed: u64,
    pub prompted: u64,
}
