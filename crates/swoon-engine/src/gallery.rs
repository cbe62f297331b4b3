//! Gallery carousel: a bounded, wrapping panel cycler.
//!
//! The panel set is fixed at construction; the active 1-based position is
//! the only mutable state. Wraparound applies a single correction against
//! the raw target position rather than a modulo reduction, so a jump
//! further than one wrap away lands on the first or last panel. This
//! matches the original page widget and is kept deliberately.

/// Receives render calls from [`Carousel::present`].
///
/// A deck adapter keeps its panels and its indicator dots in lockstep:
/// everything is deactivated, then the one active position is activated.
/// Both methods default to no-ops, so an adapter without one of the
/// regions simply skips that part of the render.
pub trait Deck {
    /// Deactivate every panel and indicator.
    fn deactivate_all(&mut self) {}

    /// Activate the panel and indicator at the given 1-based position.
    fn activate(&mut self, _position: usize) {}
}

/// A wrapping carousel over a fixed number of display panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    /// Create a carousel over `len` panels, starting at position 1.
    pub fn new(len: usize) -> Self {
        Self::starting_at(len, 1)
    }

    /// Create a carousel starting at the given 1-based position.
    ///
    /// An out-of-range start wraps the same way navigation does.
    pub fn starting_at(len: usize, start: usize) -> Self {
        let mut carousel = Self { len, active: 1 };
        carousel.apply(start as i64);
        carousel
    }

    /// Number of panels. Fixed for the carousel's lifetime.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the carousel has no panels.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The active 1-based position.
    pub fn current(&self) -> usize {
        self.active
    }

    /// Move by `delta` panels (negative for backwards), wrapping at the ends.
    pub fn step(&mut self, delta: i64) {
        self.apply(self.active as i64 + delta);
    }

    /// Jump to the given 1-based position, wrapping if out of range.
    pub fn select(&mut self, position: usize) {
        self.apply(position as i64);
    }

    // Both bounds are checked against the raw target, so an out-of-range
    // target is corrected exactly once, not reduced modulo the length.
    fn apply(&mut self, target: i64) {
        let mut corrected = target;
        if target > self.len as i64 {
            corrected = 1;
        }
        if target < 1 {
            corrected = self.len as i64;
        }
        self.active = corrected as usize;
    }

    /// Render through a [`Deck`]: deactivate everything, then activate the
    /// current position. With no panel at that position (an empty
    /// carousel) the activation is skipped rather than faulting.
    pub fn present(&self, deck: &mut dyn Deck) {
        deck.deactivate_all();
        if (1..=self.len).contains(&self.active) {
            deck.activate(self.active);
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// Deck that records the exact call sequence.
    #[derive(Default)]
    struct Tracking {
        clears: usize,
        active: Vec<usize>,
    }

    impl Deck for Tracking {
        fn deactivate_all(&mut self) {
            self.clears += 1;
            self.active.clear();
        }
        fn activate(&mut self, position: usize) {
            self.active.push(position);
        }
    }

    #[test]
    fn starts_at_one() {
        let c = Carousel::new(5);
        assert_eq!(c.current(), 1);
        assert_eq!(c.len(), 5);
    }

    #[test]
    fn custom_start_position() {
        assert_eq!(Carousel::starting_at(5, 3).current(), 3);
        // Out-of-range starts wrap like navigation.
        assert_eq!(Carousel::starting_at(3, 9).current(), 1);
        assert_eq!(Carousel::starting_at(3, 0).current(), 3);
    }

    #[test]
    fn steps_forward_and_back() {
        let mut c = Carousel::new(3);
        c.step(1);
        assert_eq!(c.current(), 2);
        c.step(-1);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn wraps_at_both_ends() {
        let mut c = Carousel::starting_at(3, 3);
        c.step(1);
        assert_eq!(c.current(), 1);
        c.step(-1);
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn select_past_the_end_wraps_to_first() {
        let mut c = Carousel::new(3);
        c.select(4);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn select_zero_wraps_to_last() {
        let mut c = Carousel::new(3);
        c.select(0);
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn large_jumps_are_corrected_once_not_reduced() {
        let mut c = Carousel::starting_at(3, 2);
        c.step(7); // raw target 9: one correction lands on 1, not 9 mod 3
        assert_eq!(c.current(), 1);

        let mut c = Carousel::starting_at(3, 1);
        c.step(-7); // raw target -6: one correction lands on 3
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn length_never_changes() {
        let mut c = Carousel::new(4);
        c.step(9);
        c.select(0);
        c.step(-2);
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn present_activates_exactly_one_panel() {
        let mut c = Carousel::new(4);
        c.step(1);

        let mut deck = Tracking::default();
        c.present(&mut deck);
        assert_eq!(deck.clears, 1);
        assert_eq!(deck.active, vec![2]);
    }

    #[test]
    fn empty_carousel_never_activates() {
        let mut c = Carousel::new(0);
        c.step(1);
        c.step(-1);
        c.select(5);

        let mut deck = Tracking::default();
        c.present(&mut deck);
        assert_eq!(deck.clears, 1);
        assert!(deck.active.is_empty());
    }

    proptest! {
        #[test]
        fn stepping_forward_len_times_returns_to_start(
            (len, start) in (1usize..=16).prop_flat_map(|len| (Just(len), 1..=len))
        ) {
            let mut c = Carousel::starting_at(len, start);
            for _ in 0..len {
                c.step(1);
            }
            prop_assert_eq!(c.current(), start);
        }

        #[test]
        fn active_position_stays_in_bounds(
            (len, deltas) in (1usize..=8).prop_flat_map(|len| {
                (Just(len), proptest::collection::vec(-3i64..=3, 0..32))
            })
        ) {
            let mut c = Carousel::new(len);
            for delta in deltas {
                c.step(delta);
                prop_assert!((1..=len).contains(&c.current()));
            }
        }
    }
}
