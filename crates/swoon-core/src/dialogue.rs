use serde::{Deserialize, Serialize};

/// A single player response to a dialogue prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueOption {
    /// The response text shown to the player.
    pub label: String,
    /// Affinity change applied to the speaking character when chosen.
    pub effect: i32,
}

impl DialogueOption {
    /// Create a new option with the given label and affinity effect.
    pub fn new(label: impl Into<String>, effect: i32) -> Self {
        Self {
            label: label.into(),
            effect,
        }
    }
}

/// A dialogue prompt plus the ordered responses the player may pick from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dialogue {
    /// The prompt text spoken by the character.
    pub prompt: String,
    /// Available responses, in display order.
    #[serde(default)]
    pub options: Vec<DialogueOption>,
}

impl Dialogue {
    /// Create a new dialogue with the given prompt and no options yet.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options: Vec::new(),
        }
    }

    /// Add a response option.
    pub fn with_option(mut self, option: DialogueOption) -> Self {
        self.options.push(option);
        self
    }
}
