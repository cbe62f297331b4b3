use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use swoon_core::{Character, Dialogue};
use swoon_engine::{Session, Stage, Step};

/// Stage adapter that prints each display region as colored text.
struct TextStage;

impl Stage for TextStage {
    fn show_character(&mut self, character: &Character) {
        println!("{}", character.name.as_str().bold().magenta());
    }

    fn show_affinity(&mut self, _name: &str, affinity: i32) {
        println!("{}", format!("Affinity: {affinity}").dimmed());
    }

    fn show_dialogue(&mut self, dialogue: &Dialogue) {
        println!("\n{}", dialogue.prompt.as_str().cyan().italic());
        for (i, option) in dialogue.options.iter().enumerate() {
            println!("  {}) {}", (i + 1).to_string().yellow(), option.label);
        }
    }

    fn show_finale(&mut self, character: &Character) {
        println!(
            "{}",
            format!("Final Dialogue with {}", character.name)
                .bold()
                .magenta()
        );
        println!("{}", character.finale.as_str().cyan().italic());
    }
}

pub fn run(path: Option<&Path>) -> Result<(), String> {
    let script = super::load_script(path)?;
    let mut session = Session::new(script).map_err(|e| e.to_string())?;

    println!("  {} '{}'", "Playing".bold(), session.title());
    println!("  Answer with option numbers; 'quit' to leave.\n");
    session.start().map_err(|e| e.to_string())?;

    let mut stage = TextStage;
    session.present(&mut stage);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("\n> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        let Ok(number) = input.parse::<usize>() else {
            println!("{}", "Answer with an option number.".yellow());
            continue;
        };
        if number == 0 {
            println!("{}", "Options start at 1.".yellow());
            continue;
        }

        match session.choose(number - 1) {
            Ok(Step::Finale) => {
                println!();
                session.present(&mut stage);
                break;
            }
            Ok(_) => {
                println!();
                session.present(&mut stage);
            }
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }

    Ok(())
}
