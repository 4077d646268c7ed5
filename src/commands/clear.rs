use async_trait::async_trait;

use super::{Action, Command, CommandResult, SessionInfo};

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &str {
        "/clear"
    }

    fn aliases(&self) -> &[&str] {
        &["/c"]
    }

    fn description(&self) -> &str {
        "empty the editor"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        println!("  ✓ cleared {} line(s)", info.editor.len());
        CommandResult::Action(Action::ClearEditor)
    }
}
