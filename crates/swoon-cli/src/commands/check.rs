use std::path::Path;

use swoon_core::Script;

pub fn run(path: &Path) -> Result<(), String> {
    let script = Script::from_path(path).map_err(|e| e.to_string())?;
    script.validate().map_err(|e| e.to_string())?;

    let dialogues: usize = script
        .cast
        .iter()
        .map(|character| character.dialogues.len())
        .sum();
    println!("  Script OK: '{}'", script.title);
    println!("  {} characters, {} dialogues", script.cast.len(), dialogues);

    Ok(())
}
