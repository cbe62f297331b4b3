use serde::{Deserialize, Serialize};

use crate::affinity::Affinity;
use crate::dialogue::Dialogue;

/// A cast member the player courts over the course of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Display name.
    pub name: String,
    /// Reference to the character's portrait artwork.
    #[serde(default)]
    pub portrait: String,
    /// Accumulated affinity toward the player.
    #[serde(default)]
    pub affinity: Affinity,
    /// Ordered dialogues played while this character holds the scene.
    #[serde(default)]
    pub dialogues: Vec<Dialogue>,
    /// Line delivered by this character if it wins the ending.
    #[serde(default)]
    pub finale: String,
}

impl Character {
    /// Create a new character with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            portrait: String::new(),
            affinity: Affinity::default(),
            dialogues: Vec::new(),
            finale: String::new(),
        }
    }

    /// Set the portrait reference.
    pub fn with_portrait(mut self, portrait: impl Into<String>) -> Self {
        self.portrait = portrait.into();
        self
    }

    /// Add a dialogue.
    pub fn with_dialogue(mut self, dialogue: Dialogue) -> Self {
        self.dialogues.push(dialogue);
        self
    }

    /// Set the finale line.
    pub fn with_finale(mut self, finale: impl Into<String>) -> Self {
        self.finale = finale.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::DialogueOption;

    #[test]
    fn character_builder() {
        let character = Character::new("Taylor (Flirty)")
            .with_portrait("portraits/taylor.png")
            .with_dialogue(
                Dialogue::new("Hey there, cutie. What brings you here today?")
                    .with_option(DialogueOption::new("Just wanted to see you.", 10)),
            )
            .with_finale("So, how about that date?");

        assert_eq!(character.name, "Taylor (Flirty)");
        assert_eq!(character.portrait, "portraits/taylor.png");
        assert_eq!(character.affinity.value(), 0);
        assert_eq!(character.dialogues.len(), 1);
        assert_eq!(character.finale, "So, how about that date?");
    }

    #[test]
    fn deserialize_with_defaults() {
        let character: Character = serde_json::from_str(r#"{"name": "Alex"}"#).unwrap();
        assert_eq!(character.name, "Alex");
        assert_eq!(character.affinity.value(), 0);
        assert!(character.dialogues.is_empty());
        assert!(character.portrait.is_empty());
    }

    #[test]
    fn deserialize_carries_starting_affinity() {
        let character: Character =
            serde_json::from_str(r#"{"name": "Alex", "affinity": 3}"#).unwrap();
        assert_eq!(character.affinity.value(), 3);
    }
}
