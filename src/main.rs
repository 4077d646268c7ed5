use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use soutk::banner::{BannerInfo, print_banner, print_session_summary};
use soutk::commands::CommandRegistry;
use soutk::config::Settings;
use soutk::consts::default_config_path;
use soutk::engine::Engine;
use soutk::engine::playground::Playground;
use soutk::handler::echo::EchoHandler;
use soutk::logging;
use soutk::repl::{Flow, Repl};
use soutk::source::Source;
use soutk::source::catalog::list_programs;
use soutk::surface::terminal::TerminalSurface;

#[derive(Parser)]
#[command(
    name = "soutk",
    version,
    about = "Soutk playground: write code, run it, see the output.",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Program file to run (`-` reads standard input). A file named
    /// `examples` must be given as `./examples`.
    file: Option<PathBuf>,

    /// Run this code instead of a file
    #[arg(short, long)]
    eval: Option<String>,

    /// Settings file (default: ~/.soutk/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Don't print the banner when the REPL starts
    #[arg(long, default_value_t = false)]
    no_banner: bool,

    /// Debug logging on stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List the Soutk programs in a directory
    Examples {
        /// Directory to scan (default: programs_dir from settings)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let settings = Settings::load_from(&config_path)?;

    if let Some(Command::Examples { dir }) = &cli.command {
        let dir = dir.clone().unwrap_or_else(|| settings.programs_dir.clone());
        return handle_examples(&dir);
    }

    let mut playground = Playground::new(Box::new(EchoHandler), Box::new(TerminalSurface::stdout()));

    // One-shot: --eval, a file, or piped stdin
    let source = Source::from_args(cli.eval, cli.file).or_else(|| {
        if io::stdin().is_terminal() {
            None
        } else {
            Some(Source::Stdin)
        }
    });
    if let Some(source) = source {
        tracing::debug!(source = %source.label(), "running one-shot");
        let code = source.read()?;
        playground.run(&code)?;
        return Ok(());
    }

    if settings.show_banner && !cli.no_banner {
        print_banner(&BannerInfo {
            handler: playground.handler_name(),
            config: &config_path,
        });
    }

    let mut repl = Repl::new(playground, CommandRegistry::new());

    // REPL: async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("{}", settings.prompt);
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "failed to read input");
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        if repl.feed(&line).await? == Flow::Quit {
            break;
        }
    }

    print_session_summary(repl.stats());
    Ok(())
}

fn handle_examples(dir: &std::path::Path) -> anyhow::Result<()> {
    let programs = list_programs(dir).context("cannot list programs")?;

    if programs.is_empty() {
        println!("no programs in {}", dir.display());
        return Ok(());
    }

    println!("Available programs:");
    println!("{}", "=".repeat(40));
    for program in &programs {
        if let Some(name) = program.file_name() {
            println!("  • {}", name.to_string_lossy());
        }
    }
    println!("\nRun one with:");
    println!("  soutk {}", programs[0].display());
    Ok(())
}
