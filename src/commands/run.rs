use async_trait::async_trait;

use super::{Action, Command, CommandResult, SessionInfo};

pub struct RunCommand;

#[async_trait]
impl Command for RunCommand {
    fn name(&self) -> &str {
        "/run"
    }

    fn aliases(&self) -> &[&str] {
        &["/r"]
    }

    fn description(&self) -> &str {
        "run the code in the editor"
    }

    async fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
        CommandResult::Action(Action::Run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_info;

    #[tokio::test]
    async fn requests_run_even_when_editor_empty() {
        assert!(matches!(
            RunCommand.execute(&test_info()).await,
            CommandResult::Action(Action::Run)
        ));
    }
}
