//! CLI frontend for the Swoon dating-sim engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "swoon",
    about = "Swoon — a tiny dating-sim engine for the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the demo script as a JSON template to start a new game from
    Init {
        /// Path of the script file to create
        path: PathBuf,
    },

    /// Load a script and check that it is playable
    Check {
        /// Script file
        script: PathBuf,
    },

    /// List the cast of a script
    Cast {
        /// Script file
        script: PathBuf,
    },

    /// Play a script in the terminal, line by line
    Play {
        /// Script file (bundled demo when omitted)
        script: Option<PathBuf>,
    },

    /// Launch the full-screen TUI
    Tui {
        /// Script file (bundled demo when omitted)
        script: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { path } => commands::init::run(&path),
        Commands::Check { script } => commands::check::run(&script),
        Commands::Cast { script } => commands::cast::run(&script),
        Commands::Play { script } => commands::play::run(script.as_deref()),
        Commands::Tui { script } => commands::tui::run(script.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
