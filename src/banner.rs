//! Startup banner and session summary display.

use std::path::Path;

use crate::consts::{AUTHOR, HOMEPAGE, REPO, format_number};
use crate::engine::SessionStats;

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub handler: &'a str,
    pub config: &'a Path,
}

/// Print the startup banner with session info.
pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║              S O U T K                ║
   ║        playground, simulated run      ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   home      {}
   repo      {}
   handler   {}
   config    {}

   type code, then /run. /help lists commands.
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        HOMEPAGE,
        REPO,
        info.handler,
        info.config.display(),
    );
}

/// Print the session summary (run counts + farewell).
pub fn print_session_summary(stats: SessionStats) {
    if stats.runs > 0 {
        println!(
            "session: {} run(s), {} echoed, {} empty",
            format_number(stats.runs),
            format_number(stats.echoed),
            format_number(stats.prompted),
        );
    }
    println!("goodbye.");
}
