//! Play session management: the dialogue walk.
//!
//! A `Session` owns the cast and a monotonically advancing cursor
//! `(character index, dialogue index)`. Choosing an option applies its
//! affinity effect to the active character and advances the cursor; once
//! every dialogue of every character is exhausted the session ends and the
//! character with the highest affinity delivers the finale.

use swoon_core::{Character, Dialogue, Script};

use crate::error::{EngineError, EngineResult};
use crate::stage::Stage;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Title screen; the walk has not begun.
    Opening,
    /// The player is working through the cast.
    Playing,
    /// Every dialogue has been exhausted; the ending is available.
    Ended,
}

/// What a successful choice advanced past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved to the next dialogue of the same character.
    NextDialogue,
    /// Exhausted the character's dialogues; moved to the next character.
    NextCharacter,
    /// Exhausted the whole cast; the session is over.
    Finale,
}

/// An interactive play session walking a script's cast in order.
pub struct Session {
    title: String,
    cast: Vec<Character>,
    character_index: usize,
    dialogue_index: usize,
    phase: Phase,
}

impl Session {
    /// Create a session from a script.
    ///
    /// The script is validated up front, so the walk never has to guard
    /// against an empty cast or a dialogue with nothing to choose.
    pub fn new(script: Script) -> EngineResult<Self> {
        script.validate()?;
        Ok(Self {
            title: script.title,
            cast: script.cast,
            character_index: 0,
            dialogue_index: 0,
            phase: Phase::Opening,
        })
    }

    /// The script title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The full cast in play order.
    pub fn cast(&self) -> &[Character] {
        &self.cast
    }

    /// The cursor as `(character index, dialogue index)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.character_index, self.dialogue_index)
    }

    /// The character holding the scene, or `None` once the walk is exhausted.
    pub fn current_character(&self) -> Option<&Character> {
        self.cast.get(self.character_index)
    }

    /// The dialogue on screen, or `None` once the walk is exhausted.
    pub fn current_dialogue(&self) -> Option<&Dialogue> {
        self.current_character()
            .and_then(|character| character.dialogues.get(self.dialogue_index))
    }

    /// Dismiss the opening screen and begin playing.
    pub fn start(&mut self) -> EngineResult<()> {
        match self.phase {
            Phase::Opening => {
                self.phase = Phase::Playing;
                Ok(())
            }
            Phase::Playing => Err(EngineError::AlreadyStarted),
            Phase::Ended => Err(EngineError::AlreadyOver),
        }
    }

    /// Choose a response option (zero-based) in the current dialogue.
    ///
    /// Applies the option's effect to the active character's affinity, then
    /// advances: to the next dialogue, to the next character once this
    /// one's dialogues are exhausted, or to the ending once the whole cast
    /// is done. The cursor never moves backwards.
    pub fn choose(&mut self, option: usize) -> EngineResult<Step> {
        match self.phase {
            Phase::Opening => return Err(EngineError::NotStarted),
            Phase::Ended => return Err(EngineError::AlreadyOver),
            Phase::Playing => {}
        }

        // Both indices are in range: validation guarantees every character
        // has a dialogue, and the phase check keeps the cursor bounded.
        let character = &mut self.cast[self.character_index];
        let dialogue = &character.dialogues[self.dialogue_index];
        let effect = match dialogue.options.get(option) {
            Some(picked) => picked.effect,
            None => {
                return Err(EngineError::InvalidOption {
                    index: option,
                    available: dialogue.options.len(),
                });
            }
        };

        character.affinity.apply(effect);

        self.dialogue_index += 1;
        if self.dialogue_index >= character.dialogues.len() {
            self.dialogue_index = 0;
            self.character_index += 1;
            if self.character_index >= self.cast.len() {
                self.phase = Phase::Ended;
                return Ok(Step::Finale);
            }
            return Ok(Step::NextCharacter);
        }
        Ok(Step::NextDialogue)
    }

    /// The ending character: maximal affinity, first occurrence winning ties.
    ///
    /// `None` until the session has ended.
    pub fn winner(&self) -> Option<&Character> {
        if self.phase != Phase::Ended {
            return None;
        }
        self.cast.iter().reduce(|best, challenger| {
            if challenger.affinity > best.affinity {
                challenger
            } else {
                best
            }
        })
    }

    /// Render the current state through a [`Stage`].
    ///
    /// Valid in every phase. In `Opening` the first character is already
    /// rendered behind the title, matching the original page behavior of
    /// loading the scene before the start button is pressed.
    pub fn present(&self, stage: &mut dyn Stage) {
        stage.show_phase(self.phase);
        match self.phase {
            Phase::Opening | Phase::Playing => {
                if let Some(character) = self.current_character() {
                    stage.show_character(character);
                    stage.show_affinity(&character.name, character.affinity.value());
                    if let Some(dialogue) = self.current_dialogue() {
                        stage.show_dialogue(dialogue);
                    }
                }
            }
            Phase::Ended => {
                if let Some(winner) = self.winner() {
                    stage.show_finale(winner);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use swoon_core::{DialogueOption, ScriptError};

    use super::*;

    fn character(name: &str, effects: &[&[i32]]) -> Character {
        let mut character = Character::new(name).with_finale(format!("{name} finale"));
        for effects in effects {
            let mut dialogue = Dialogue::new(format!("{name} speaks"));
            for (i, effect) in effects.iter().enumerate() {
                dialogue = dialogue.with_option(DialogueOption::new(format!("option {i}"), *effect));
            }
            character = character.with_dialogue(dialogue);
        }
        character
    }

    fn session(cast: Vec<Character>) -> Session {
        let mut script = Script::new("Test");
        for character in cast {
            script = script.with_character(character);
        }
        Session::new(script).unwrap()
    }

    #[test]
    fn new_session_is_at_the_opening() {
        let s = session(vec![character("Alex", &[&[5]])]);
        assert_eq!(s.phase(), Phase::Opening);
        assert_eq!(s.cursor(), (0, 0));
        assert_eq!(s.current_character().unwrap().name, "Alex");
        assert!(s.current_dialogue().is_some());
    }

    #[test]
    fn empty_cast_is_rejected() {
        let result = Session::new(Script::new("Empty"));
        assert!(matches!(
            result,
            Err(EngineError::Script(ScriptError::EmptyCast))
        ));
    }

    #[test]
    fn start_transitions_to_playing() {
        let mut s = session(vec![character("Alex", &[&[5]])]);
        s.start().unwrap();
        assert_eq!(s.phase(), Phase::Playing);
    }

    #[test]
    fn start_twice_is_an_error() {
        let mut s = session(vec![character("Alex", &[&[5]])]);
        s.start().unwrap();
        assert!(matches!(s.start(), Err(EngineError::AlreadyStarted)));
    }

    #[test]
    fn choose_before_start_is_an_error() {
        let mut s = session(vec![character("Alex", &[&[5]])]);
        assert!(matches!(s.choose(0), Err(EngineError::NotStarted)));
    }

    #[test]
    fn effects_accumulate_on_the_active_character() {
        let mut s = session(vec![character("Alex", &[&[7], &[-3]]), character("Sam", &[&[1]])]);
        s.start().unwrap();

        assert_eq!(s.choose(0).unwrap(), Step::NextDialogue);
        assert_eq!(s.choose(0).unwrap(), Step::NextCharacter);

        assert_eq!(s.cast()[0].affinity.value(), 4);
        assert_eq!(s.cast()[1].affinity.value(), 0);
        assert_eq!(s.cursor(), (1, 0));
    }

    #[test]
    fn dialogue_index_resets_between_characters() {
        let mut s = session(vec![
            character("Alex", &[&[0], &[0]]),
            character("Sam", &[&[0], &[0]]),
        ]);
        s.start().unwrap();
        s.choose(0).unwrap();
        s.choose(0).unwrap();
        assert_eq!(s.cursor(), (1, 0));
        assert_eq!(s.current_character().unwrap().name, "Sam");
    }

    #[test]
    fn exhausting_the_cast_ends_the_session() {
        let mut s = session(vec![character("Alex", &[&[5]]), character("Sam", &[&[10]])]);
        s.start().unwrap();

        assert_eq!(s.choose(0).unwrap(), Step::NextCharacter);
        assert_eq!(s.choose(0).unwrap(), Step::Finale);

        assert_eq!(s.phase(), Phase::Ended);
        assert!(s.current_character().is_none());
        assert!(s.current_dialogue().is_none());
        assert!(matches!(s.choose(0), Err(EngineError::AlreadyOver)));
    }

    #[test]
    fn winner_is_hidden_until_the_end() {
        let mut s = session(vec![character("Alex", &[&[5]])]);
        assert!(s.winner().is_none());
        s.start().unwrap();
        assert!(s.winner().is_none());
        s.choose(0).unwrap();
        assert_eq!(s.winner().unwrap().name, "Alex");
    }

    #[test]
    fn first_maximum_wins_ties() {
        let mut s = session(vec![
            character("A", &[&[5]]),
            character("B", &[&[10]]),
            character("C", &[&[10]]),
        ]);
        s.start().unwrap();
        s.choose(0).unwrap();
        s.choose(0).unwrap();
        s.choose(0).unwrap();

        assert_eq!(s.winner().unwrap().name, "B");
    }

    #[test]
    fn higher_affinity_takes_the_finale() {
        // Two characters, one dialogue and one option each: +5 then +10.
        let mut s = session(vec![character("First", &[&[5]]), character("Second", &[&[10]])]);
        s.start().unwrap();
        s.choose(0).unwrap();
        s.choose(0).unwrap();

        let winner = s.winner().unwrap();
        assert_eq!(winner.name, "Second");
        assert_eq!(winner.finale, "Second finale");
    }

    #[test]
    fn negative_scores_still_produce_a_winner() {
        let mut s = session(vec![character("A", &[&[-10]]), character("B", &[&[-5]])]);
        s.start().unwrap();
        s.choose(0).unwrap();
        s.choose(0).unwrap();
        assert_eq!(s.winner().unwrap().name, "B");
    }

    #[test]
    fn out_of_range_option_is_an_error() {
        let mut s = session(vec![character("Alex", &[&[5, -5]])]);
        s.start().unwrap();
        let result = s.choose(2);
        assert!(matches!(
            result,
            Err(EngineError::InvalidOption {
                index: 2,
                available: 2
            })
        ));
        // The failed choice must not have advanced or scored anything.
        assert_eq!(s.cursor(), (0, 0));
        assert_eq!(s.cast()[0].affinity.value(), 0);
    }

    #[derive(Default)]
    struct Recording {
        phases: Vec<Phase>,
        characters: Vec<String>,
        affinities: Vec<i32>,
        dialogues: Vec<String>,
        finales: Vec<String>,
    }

    impl Stage for Recording {
        fn show_phase(&mut self, phase: Phase) {
            self.phases.push(phase);
        }
        fn show_character(&mut self, character: &Character) {
            self.characters.push(character.name.clone());
        }
        fn show_affinity(&mut self, _name: &str, affinity: i32) {
            self.affinities.push(affinity);
        }
        fn show_dialogue(&mut self, dialogue: &Dialogue) {
            self.dialogues.push(dialogue.prompt.clone());
        }
        fn show_finale(&mut self, character: &Character) {
            self.finales.push(character.finale.clone());
        }
    }

    #[test]
    fn present_renders_the_scene_before_start() {
        let s = session(vec![character("Alex", &[&[5]])]);
        let mut stage = Recording::default();
        s.present(&mut stage);

        assert_eq!(stage.phases, vec![Phase::Opening]);
        assert_eq!(stage.characters, vec!["Alex"]);
        assert_eq!(stage.affinities, vec![0]);
        assert_eq!(stage.dialogues, vec!["Alex speaks"]);
        assert!(stage.finales.is_empty());
    }

    #[test]
    fn present_renders_the_finale_after_the_end() {
        let mut s = session(vec![character("Alex", &[&[5]])]);
        s.start().unwrap();
        s.choose(0).unwrap();

        let mut stage = Recording::default();
        s.present(&mut stage);

        assert_eq!(stage.phases, vec![Phase::Ended]);
        assert!(stage.characters.is_empty());
        assert_eq!(stage.finales, vec!["Alex finale"]);
    }

    #[test]
    fn a_partial_stage_skips_unimplemented_regions() {
        struct PhaseOnly(Vec<Phase>);
        impl Stage for PhaseOnly {
            fn show_phase(&mut self, phase: Phase) {
                self.0.push(phase);
            }
        }

        let s = session(vec![character("Alex", &[&[5]])]);
        let mut stage = PhaseOnly(Vec::new());
        s.present(&mut stage);
        assert_eq!(stage.0, vec![Phase::Opening]);
    }
}
