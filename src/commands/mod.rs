//! REPL commands prefixed with `/`.
//!
//! A line is a command only when it names one exactly (after trimming), or
//! when it is a single `/word` token, which gets an "unknown command"
//! notice. Everything else, `// comments` included, is Soutk code and
//! belongs in the editor.

mod clear;
mod help;
mod quit;
mod run;
mod show;
mod status;

use async_trait::async_trait;
use std::sync::Arc;

use crate::engine::SessionStats;

/// Session info available to commands during execution.
pub struct SessionInfo<'a> {
    pub handler: &'a str,
    /// Lines currently in the editor.
    pub editor: &'a [String],
    pub stats: SessionStats,
}

/// Work a command hands back to the REPL, which owns the editor and
/// the playground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run the editor contents through the handler.
    Run,
    /// Empty the editor.
    ClearEditor,
    /// Print the command listing.
    ListCommands,
}

/// What the REPL should do with a line.
#[derive(Debug)]
pub enum CommandResult {
    /// The line is code for the editor.
    NotACommand,
    /// Command done, nothing else to do.
    Handled,
    Action(Action),
    /// Exit the REPL.
    Quit,
}

#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name, e.g. `"/run"`.
    fn name(&self) -> &str;

    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description for `/help`.
    fn description(&self) -> &str;

    fn matches(&self, word: &str) -> bool {
        word == self.name() || self.aliases().contains(&word)
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult;
}

pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: vec![
                Arc::new(run::RunCommand),
                Arc::new(clear::ClearCommand),
                Arc::new(show::ShowCommand),
                Arc::new(status::StatusCommand),
                Arc::new(help::HelpCommand),
                Arc::new(quit::QuitCommand),
            ],
        }
    }

    /// Add a command. Earlier registrations win on name clashes.
    pub fn register(&mut self, command: Arc<dyn Command>) {
        self.commands.push(command);
    }

    pub async fn dispatch(&self, line: &str, info: &SessionInfo<'_>) -> CommandResult {
        let word = line.trim();

        if let Some(command) = self.commands.iter().find(|c| c.matches(word)) {
            tracing::debug!(command = command.name(), "dispatching");
            return command.execute(info).await;
        }

        if looks_like_command(word) {
            println!("unknown command: {word}");
            println!("type /help for available commands");
            return CommandResult::Handled;
        }

        CommandResult::NotACommand
    }

    /// One line per command: label (with aliases) padded, then description.
    pub fn help_text(&self) -> String {
        let labels: Vec<String> = self
            .commands
            .iter()
            .map(|c| match c.aliases() {
                [] => c.name().to_string(),
                aliases => format!("{} ({})", c.name(), aliases.join(", ")),
            })
            .collect();
        let width = labels.iter().map(String::len).max().unwrap_or(0);

        labels
            .iter()
            .zip(&self.commands)
            .map(|(label, c)| format!("  {label:<width$}  {}\n", c.description()))
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A lone `/word`. `//` starts a Soutk comment, and anything with spaces
/// in it is code.
fn looks_like_command(word: &str) -> bool {
    word.len() > 1
        && word.starts_with('/')
        && !word.starts_with("//")
        && !word.contains(char::is_whitespace)
}
