//! Phase transition history.
//!
//! Every phase change of a game is recorded with the epoch it belongs to,
//! the clock time it happened at and the wall-clock timestamp.

use super::epoch::Epoch;
use super::phase::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
///
/// # Example
///
/// ```rust
/// use simon::core::{Epoch, Phase, PhaseTransition};
/// use chrono::Utc;
/// use std::time::Duration;
///
/// let transition = PhaseTransition {
///     from: Phase::Idle,
///     to: Phase::Playback,
///     epoch: Epoch::new(1),
///     at: Duration::ZERO,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, Phase::Playback);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// The phase being left
    pub from: Phase,
    /// The phase being entered
    pub to: Phase,
    /// The game run this transition belongs to
    pub epoch: Epoch,
    /// Clock time of the transition, as reported by the engine's clock
    pub at: Duration,
    /// Wall-clock time of the transition
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of phase transitions.
///
/// `record` returns a new history with the transition added and leaves the
/// original untouched; `push` appends in place.
///
/// # Example
///
/// ```rust
/// use simon::core::{Epoch, Phase, PhaseHistory, PhaseTransition};
/// use chrono::Utc;
/// use std::time::Duration;
///
/// let step = |from, to| PhaseTransition {
///     from,
///     to,
///     epoch: Epoch::new(1),
///     at: Duration::ZERO,
///     timestamp: Utc::now(),
/// };
///
/// let history = PhaseHistory::new()
///     .record(step(Phase::Idle, Phase::Playback))
///     .record(step(Phase::Playback, Phase::InputWait));
///
/// assert_eq!(
///     history.path(),
///     vec![&Phase::Idle, &Phase::Playback, &Phase::InputWait]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseHistory {
    transitions: Vec<PhaseTransition>,
}

impl PhaseHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub fn push(&mut self, transition: PhaseTransition) {
        self.transitions.push(transition);
    }

    /// Get the path of phases traversed.
    ///
    /// Returns the first transition's source phase, then the target phase of
    /// each transition in order.
    pub fn path(&self) -> Vec<&Phase> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Clock time elapsed between the first and last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        match (self.transitions.first(), self.transitions.last()) {
            (Some(first), Some(last)) => Some(last.at.saturating_sub(first.at)),
            _ => None,
        }
    }

    /// Transitions that belong to the given epoch.
    pub fn in_epoch(&self, epoch: Epoch) -> impl Iterator<Item = &PhaseTransition> + '_ {
        self.transitions.iter().filter(move |t| t.epoch == epoch)
    }

    /// The most recent transition.
    pub fn last(&self) -> Option<&PhaseTransition> {
        self.transitions.last()
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }
}
