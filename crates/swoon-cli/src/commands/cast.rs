use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use swoon_core::Script;

pub fn run(path: &Path) -> Result<(), String> {
    let script = Script::from_path(path).map_err(|e| e.to_string())?;

    if script.cast.is_empty() {
        println!("  The cast is empty.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Portrait", "Dialogues", "Finale"]);

    for character in &script.cast {
        let finale = if character.finale.is_empty() {
            "—".to_string()
        } else {
            let mut finale = character.finale.clone();
            if finale.chars().count() > 40 {
                finale = format!("{}...", finale.chars().take(37).collect::<String>());
            }
            finale
        };

        table.add_row(vec![
            character.name.clone(),
            character.portrait.clone(),
            character.dialogues.len().to_string(),
            finale,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} characters", script.cast.len());

    Ok(())
}
