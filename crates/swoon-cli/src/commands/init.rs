use std::fs;
use std::path::Path;

pub fn run(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Err(format!("'{}' already exists", path.display()));
    }

    let json = swoon_core::demo()
        .to_json_string()
        .map_err(|e| e.to_string())?;
    fs::write(path, json).map_err(|e| format!("cannot write script: {e}"))?;

    println!("Created script '{}'", path.display());
    println!();
    println!("Get started:");
    println!("  swoon check {}   # Validate after editing", path.display());
    println!("  swoon cast {}    # List the cast", path.display());
    println!("  swoon play {}    # Play it", path.display());

    Ok(())
}
