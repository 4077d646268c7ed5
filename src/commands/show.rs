use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub struct ShowCommand;

#[async_trait]
impl Command for ShowCommand {
    fn name(&self) -> &str {
        "/show"
    }

    fn description(&self) -> &str {
        "print the editor with line numbers"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        print!("{}", numbered(info.editor));
        CommandResult::Handled
    }
}

fn numbered(lines: &[String]) -> String {
    if lines.is_empty() {
        return "  (editor is empty)\n".to_string();
    }
    let width = lines.len().to_string().len();
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("  {:>width$} │ {line}\n", i + 1))
        .collect()
}
