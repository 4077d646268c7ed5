use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

/// Leaves the REPL. The editor is not saved anywhere, so say what is lost.
pub struct QuitCommand;

#[async_trait]
impl Command for QuitCommand {
    fn name(&self) -> &str {
        "/quit"
    }

    fn aliases(&self) -> &[&str] {
        &["quit", "exit", "/exit"]
    }

    fn description(&self) -> &str {
        "leave the playground (the editor is discarded)"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        if let Some(note) = discard_note(info.editor) {
            println!("{note}");
        }
        CommandResult::Quit
    }
}

fn discard_note(editor: &[String]) -> Option<String> {
    match editor.len() {
        0 => None,
        1 => Some("  discarding 1 editor line".to_string()),
        n => Some(format!("  discarding {n} editor lines")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_info;

    #[tokio::test]
    async fn quits_with_code_in_editor() {
        let editor = vec!["chant 1".to_string(), "chant 2".to_string()];
        let info = SessionInfo {
            editor: &editor,
            ..test_info()
        };
        assert!(matches!(
            QuitCommand.execute(&info).await,
            CommandResult::Quit
        ));
    }

    #[test]
    fn discard_note_counts_lines() {
        assert_eq!(discard_note(&[]), None);
        assert_eq!(
            discard_note(&["x".to_string()]).as_deref(),
            Some("  discarding 1 editor line")
        );
        let three = vec![String::new(); 3];
        assert_eq!(
            discard_note(&three).as_deref(),
            Some("  discarding 3 editor lines")
        );
    }
}
