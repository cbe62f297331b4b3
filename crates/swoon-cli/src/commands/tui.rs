//! Launch the swoon-tui standalone binary.

use std::path::Path;

pub fn run(script: Option<&Path>) -> Result<(), String> {
    let mut command = std::process::Command::new("swoon-tui");
    if let Some(script) = script {
        command.arg("--script").arg(script);
    }

    match command.status() {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(format!("swoon-tui exited with {s}")),
        Err(_) => Err(
            "swoon-tui binary not found. Install with: cargo install --path crates/swoon-tui"
                .into(),
        ),
    }
}
