//! Standalone TUI binary for Swoon.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use swoon_core::Script;
use swoon_engine::Session;

#[derive(Parser)]
#[command(
    name = "swoon-tui",
    about = "Terminal front-end for the Swoon dating-sim engine",
    version
)]
struct Args {
    /// JSON script file (bundled demo when omitted)
    #[arg(long)]
    script: Option<PathBuf>,

    /// Gallery panel to show first on the opening screen (1-based)
    #[arg(long, default_value = "1")]
    panel: usize,

    /// Skip the opening screen and go straight to play
    #[arg(long)]
    skip_opening: bool,
}

fn main() {
    let args = Args::parse();

    let script = match &args.script {
        Some(path) => match Script::from_path(path) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        },
        None => swoon_core::demo(),
    };

    let session = match Session::new(script) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let app = swoon_tui::app::App::new(session, args.panel, args.skip_opening);

    if let Err(e) = swoon_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
