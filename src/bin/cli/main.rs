mod app;
mod commands;
mod render;
#[cfg(feature = "tui")]
mod tui;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kana-cli", about = "Hiragana flashcard quiz", version)]
struct Cli {
    /// Directory holding the saved score (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Quiz config file (default: platform config dir, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Keep the score in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Show score, level, progress and the current penalty
    Status,

    /// List levels with their thresholds and characters
    Levels,

    /// Reset the saved score to zero
    Reset,

    /// Launch the interactive quiz
    #[cfg(feature = "tui")]
    Tui,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let options = app::AppOptions {
        data_dir: cli.data_dir,
        config: cli.config,
        ephemeral: cli.ephemeral,
    };

    match cli.command {
        None => {
            // No subcommand → launch TUI
            #[cfg(feature = "tui")]
            {
                tui::run(&options)?;
            }
            #[cfg(not(feature = "tui"))]
            {
                eprintln!("TUI not available (built without 'tui' feature). Use a subcommand.");
                eprintln!("Run with --help for usage.");
                std::process::exit(1);
            }
        }
        Some(Command::Status) => {
            let app = app::App::new(&options)?;
            commands::status::run(&app, &cli.format, use_color)?;
        }
        Some(Command::Levels) => {
            let app = app::App::new(&options)?;
            commands::levels::run(&app, &cli.format, use_color)?;
        }
        Some(Command::Reset) => {
            let app = app::App::new(&options)?;
            commands::reset::run(&app, &cli.format, use_color)?;
        }
        #[cfg(feature = "tui")]
        Some(Command::Tui) => {
            tui::run(&options)?;
        }
    }

    Ok(())
}
