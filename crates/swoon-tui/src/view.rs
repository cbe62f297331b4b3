//! View model rebuilt from the engine before each draw.
//!
//! The screens never reach into the session; the engine hands over plain
//! data through its `Stage` capability and the screens draw from that.

use swoon_core::{Character, Dialogue};
use swoon_engine::{Phase, Session, Stage};

/// The character card on the opening and play screens.
#[derive(Debug, Clone)]
pub struct CharacterCard {
    /// Display name.
    pub name: String,
    /// Portrait artwork reference.
    pub portrait: String,
}

/// The dialogue block: prompt plus option labels in display order.
///
/// Option effects stay hidden from the player, as on the original page.
#[derive(Debug, Clone)]
pub struct DialogueCard {
    /// The prompt spoken by the character.
    pub prompt: String,
    /// Option labels, in order.
    pub options: Vec<String>,
}

/// The ending block.
#[derive(Debug, Clone)]
pub struct FinaleCard {
    /// The winning character's name.
    pub name: String,
    /// Their finale line.
    pub line: String,
}

/// Plain-data snapshot of what the engine wants on screen.
#[derive(Debug, Clone)]
pub struct ViewModel {
    /// Which screen to show.
    pub phase: Phase,
    /// Character card, when a character holds the scene.
    pub character: Option<CharacterCard>,
    /// Affinity readout for the active character.
    pub affinity: Option<i32>,
    /// Current dialogue, when one is on screen.
    pub dialogue: Option<DialogueCard>,
    /// Ending block, once the session is over.
    pub finale: Option<FinaleCard>,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self {
            phase: Phase::Opening,
            character: None,
            affinity: None,
            dialogue: None,
            finale: None,
        }
    }
}

impl ViewModel {
    /// Build a fresh snapshot from the session.
    pub fn snapshot(session: &Session) -> Self {
        let mut view = Self::default();
        session.present(&mut view);
        view
    }
}

impl Stage for ViewModel {
    fn show_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    fn show_character(&mut self, character: &Character) {
        self.character = Some(CharacterCard {
            name: character.name.clone(),
            portrait: character.portrait.clone(),
        });
    }

    fn show_affinity(&mut self, _name: &str, affinity: i32) {
        self.affinity = Some(affinity);
    }

    fn show_dialogue(&mut self, dialogue: &Dialogue) {
        self.dialogue = Some(DialogueCard {
            prompt: dialogue.prompt.clone(),
            options: dialogue
                .options
                .iter()
                .map(|option| option.label.clone())
                .collect(),
        });
    }

    fn show_finale(&mut self, character: &Character) {
        self.finale = Some(FinaleCard {
            name: character.name.clone(),
            line: character.finale.clone(),
        });
    }
}
