pub mod cast;
pub mod check;
pub mod init;
pub mod play;
pub mod tui;

use std::path::Path;

use swoon_core::Script;

/// Load a script from a file, or fall back to the bundled demo.
fn load_script(path: Option<&Path>) -> Result<Script, String> {
    match path {
        Some(path) => Script::from_path(path).map_err(|e| e.to_string()),
        None => Ok(swoon_core::demo()),
    }
}
