//! Guard predicates over the current phase.
//!
//! Guards are pure boolean functions deciding whether an external event is
//! allowed to act on the game. A rejected event is not an error, it is
//! simply ignored by the engine.

use super::phase::Phase;
use std::fmt;

/// Pure predicate evaluated against the current [`Phase`].
///
/// # Example
///
/// ```rust
/// use simon::core::{Guard, Phase};
///
/// let presses = Guard::input_window();
///
/// assert!(presses.check(&Phase::InputWait));
/// assert!(!presses.check(&Phase::Playback));
/// assert!(!presses.check(&Phase::GameOver));
/// ```
pub struct Guard {
    predicate: Box<dyn Fn(&Phase) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Phase) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard admitting pad presses only while the player has the board.
    pub fn input_window() -> Self {
        Self::new(Phase::accepts_input)
    }

    /// Check if the guard lets an event through in this phase.
    pub fn check(&self, phase: &Phase) -> bool {
        (self.predicate)(phase)
    }
}

impl Default for Guard {
    fn default() -> Self {
        Self::input_window()
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
