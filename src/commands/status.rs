use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::consts::format_number;

pub struct StatusCommand;

#[async_trait]
impl Command for StatusCommand {
    fn name(&self) -> &str {
        "/status"
    }

    fn description(&self) -> &str {
        "show handler, editor size, and run counts"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        println!("  handler   {}", info.handler);
        println!("  editor    {} line(s)", info.editor.len());
        println!(
            "  runs      {} ({} echoed, {} empty)",
            format_number(info.stats.runs),
            format_number(info.stats.echoed),
            format_number(info.stats.prompted),
        );
        CommandResult::Handled
    }
}
