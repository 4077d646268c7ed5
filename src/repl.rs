//! The interactive playground: type code, `/run` it, see the output.
//!
//! Reading stdin is left to the caller so the loop can be driven by a
//! terminal, a test, or anything else that produces lines.

use anyhow::Result;

use crate::commands::{Action, CommandRegistry, CommandResult, SessionInfo};
use crate::engine::playground::Playground;
use crate::engine::{Engine, SessionStats};
use crate::source::editor::Editor;

/// Whether the REPL wants more input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Repl {
    playground: Playground,
    commands: CommandRegistry,
    editor: Editor,
}

impl Repl {
    pub fn new(playground: Playground, commands: CommandRegistry) -> Self {
        Self {
            playground,
            commands,
            editor: Editor::new(),
        }
    }

    /// Feed one line typed at the prompt (without its newline).
    pub async fn feed(&mut self, line: &str) -> Result<Flow> {
        let info = SessionInfo {
            handler: self.playground.handler_name(),
            editor: self.editor.lines(),
            stats: self.playground.stats(),
        };

        match self.commands.dispatch(line, &info).await {
            CommandResult::NotACommand => {
                self.editor.push_line(line);
            }
            CommandResult::Handled => {}
            CommandResult::Action(action) => self.apply(action)?,
            CommandResult::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Run => {
                self.playground.run(&self.editor.contents())?;
            }
            Action::ClearEditor => self.editor.clear(),
            Action::ListCommands => print!("{}", self.commands.help_text()),
        }
        Ok(())
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn stats(&self) -> SessionStats {
        self.playground.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::echo::EchoHandler;
    use crate::surface::buffer::BufferSurface;

    fn repl() -> Repl {
        let playground = Playground::new(Box::new(EchoHandler), Box::new(BufferSurface::new()));
        Repl::new(playground, CommandRegistry::new())
    }

    #[tokio::test]
    async fn code_lines_fill_editor() {
        let mut repl = repl();
        assert_eq!(repl.feed("cast x = 1").await.unwrap(), Flow::Continue);
        assert_eq!(repl.feed("").await.unwrap(), Flow::Continue);
        assert_eq!(repl.editor().contents(), "cast x = 1\n");
    }

    #[tokio::test]
    async fn run_keeps_editor() {
        let mut repl = repl();
        repl.feed("chant 1").await.unwrap();
        repl.feed("/run").await.unwrap();
        assert_eq!(repl.editor().len(), 1);
        assert_eq!(repl.stats().echoed, 1);
    }

    #[tokio::test]
    async fn run_on_empty_editor_prompts() {
        let mut repl = repl();
        repl.feed("   ").await.unwrap();
        repl.feed("/run").await.unwrap();
        assert_eq!(repl.stats().prompted, 1);
        assert_eq!(repl.stats().echoed, 0);
    }

    #[tokio::test]
    async fn clear_empties_editor() {
        let mut repl = repl();
        repl.feed("x").await.unwrap();
        repl.feed("/clear").await.unwrap();
        assert!(repl.editor().is_empty());
    }

    #[tokio::test]
    async fn quit_stops() {
        let mut repl = repl();
        assert_eq!(repl.feed("exit").await.unwrap(), Flow::Quit);
    }

    #[tokio::test]
    async fn comment_lines_reach_editor() {
        let mut repl = repl();
        repl.feed("// greet the user").await.unwrap();
        repl.feed("chant \"hi\"").await.unwrap();
        assert_eq!(repl.editor().contents(), "// greet the user\nchant \"hi\"");
    }

    #[tokio::test]
    async fn slash_led_code_reaches_editor() {
        let mut repl = repl();
        for line in ["  //run", "/ 2", "/run later"] {
            assert_eq!(repl.feed(line).await.unwrap(), Flow::Continue);
        }
        assert_eq!(repl.editor().len(), 3);
        assert_eq!(repl.stats().runs, 0);
    }

    #[tokio::test]
    async fn quit_words_only_alone() {
        let mut repl = repl();
        assert_eq!(repl.feed("quit the loop").await.unwrap(), Flow::Continue);
        assert_eq!(repl.feed("exit(0)").await.unwrap(), Flow::Continue);
        assert_eq!(repl.editor().contents(), "quit the loop\nexit(0)");
        assert_eq!(repl.feed("  quit  ").await.unwrap(), Flow::Quit);
    }

    #[tokio::test]
    async fn help_leaves_editor_alone() {
        let mut repl = repl();
        repl.feed("x").await.unwrap();
        repl.feed("/?").await.unwrap();
        assert_eq!(repl.editor().contents(), "x");
    }

    #[tokio::test]
    async fn unknown_command_is_not_code() {
        let mut repl = repl();
        repl.feed("/nope").await.unwrap();
        assert!(repl.editor().is_empty());
    }
}
