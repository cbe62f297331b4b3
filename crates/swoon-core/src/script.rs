//! The script document: a titled cast walked in order by a play session.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::error::{ScriptError, ScriptResult};

/// A complete game script.
///
/// Scripts are plain JSON documents; see [`demo`](crate::demo::demo) for the
/// bundled example. A script that passes [`validate`](Script::validate) is
/// safe for a session to walk without further checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    /// Display title shown on the opening screen.
    #[serde(default)]
    pub title: String,
    /// The cast, in play order.
    pub cast: Vec<Character>,
}

impl Script {
    /// Create a new script with the given title and an empty cast.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cast: Vec::new(),
        }
    }

    /// Add a cast member.
    pub fn with_character(mut self, character: Character) -> Self {
        self.cast.push(character);
        self
    }

    /// Parse a script from a JSON string.
    pub fn from_json_str(json: &str) -> ScriptResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a script from a JSON file.
    pub fn from_path(path: &Path) -> ScriptResult<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Serialize the script to pretty-printed JSON.
    pub fn to_json_string(&self) -> ScriptResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the script is playable.
    ///
    /// Requires a non-empty cast with unique names, at least one dialogue
    /// per character, and at least one option per dialogue.
    pub fn validate(&self) -> ScriptResult<()> {
        if self.cast.is_empty() {
            return Err(ScriptError::EmptyCast);
        }

        let mut names = HashSet::new();
        for character in &self.cast {
            if !names.insert(character.name.as_str()) {
                return Err(ScriptError::DuplicateCharacter(character.name.clone()));
            }
            if character.dialogues.is_empty() {
                return Err(ScriptError::NoDialogues(character.name.clone()));
            }
            for (index, dialogue) in character.dialogues.iter().enumerate() {
                if dialogue.options.is_empty() {
                    return Err(ScriptError::NoOptions {
                        character: character.name.clone(),
                        index,
                    });
                }
            }
        }

        Ok(())
    }
}
