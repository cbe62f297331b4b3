//! Affinity tracking for play sessions.
//!
//! Affinity measures how much a character has warmed to the player. It
//! starts at zero and moves only when the player picks a dialogue option;
//! option effects may be negative.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A character's accumulated affinity toward the player.
///
/// The only mutation path is [`apply`](Affinity::apply), called by the
/// session when an option is chosen. The value is never reset within a
/// playthrough.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Affinity {
    value: i32,
}

impl Affinity {
    /// Create an affinity with the given starting value.
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    /// Get the current value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Apply a dialogue option's effect (positive or negative).
    pub fn apply(&mut self, effect: i32) {
        self.value = self.value.saturating_add(effect);
    }
}

impl fmt::Display for Affinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Affinity::default().value(), 0);
    }

    #[test]
    fn accumulates_effects() {
        let mut a = Affinity::default();
        a.apply(10);
        a.apply(-5);
        a.apply(0);
        assert_eq!(a.value(), 5);
    }

    #[test]
    fn negative_totals_allowed() {
        let mut a = Affinity::default();
        a.apply(-5);
        a.apply(-10);
        assert_eq!(a.value(), -15);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let mut a = Affinity::new(i32::MAX);
        a.apply(1);
        assert_eq!(a.value(), i32::MAX);
    }

    #[test]
    fn round_trip_serde() {
        let a = Affinity::new(7);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "7");
        let a2: Affinity = serde_json::from_str(&json).unwrap();
        assert_eq!(a2.value(), 7);
    }
}
