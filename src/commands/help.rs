use async_trait::async_trait;

use super::{Action, Command, CommandResult, SessionInfo};

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "/help"
    }

    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }

    fn description(&self) -> &str {
        "list available commands"
    }

    // The REPL prints the listing: only the registry knows every command.
    async fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
        CommandResult::Action(Action::ListCommands)
    }
}
