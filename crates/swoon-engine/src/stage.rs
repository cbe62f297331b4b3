//! Presentation capability trait for play sessions.

use swoon_core::{Character, Dialogue};

use crate::session::Phase;

/// Receives render calls from [`Session::present`](crate::Session::present).
///
/// Every method has a default empty body: an adapter with no display region
/// for a piece of state leaves its method unimplemented and that piece is
/// simply not rendered.
pub trait Stage {
    /// The session is in the given phase; show the matching view.
    fn show_phase(&mut self, _phase: Phase) {}

    /// Render the character currently holding the scene.
    fn show_character(&mut self, _character: &Character) {}

    /// Refresh the affinity readout for the named character.
    fn show_affinity(&mut self, _name: &str, _affinity: i32) {}

    /// Render the current dialogue prompt and its options.
    fn show_dialogue(&mut self, _dialogue: &Dialogue) {}

    /// Render the ending: the winning character and their finale line.
    fn show_finale(&mut self, _character: &Character) {}
}
