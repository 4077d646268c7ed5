//! Project-wide constants.

use std::path::PathBuf;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Shown when the submitted code is empty or only whitespace.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter Soutk code to run.";

/// Prefix of every echoed program. The code follows on the next line.
pub const SIMULATED_OUTPUT_HEADER: &str = "Output (simulated):\n";

/// File extension of Soutk programs.
pub const PROGRAM_EXTENSION: &str = "stk";

/// Default REPL prompt.
pub const DEFAULT_PROMPT: &str = "soutk> ";

/// Default directory scanned by `soutk examples`.
pub const DEFAULT_PROGRAMS_DIR: &str = "examples";

/// Default settings path: `~/.soutk/config.json`.
/// Falls back to the working directory when there is no home.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".soutk")
        .join("config.json")
}

/// Format a number with comma separators (e.g. 1,234,567).
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}
