//! Turn phases of a game and the legal moves between them.
//!
//! The phase decides who is in control of the board: the engine while a
//! sequence is replayed, the player while their attempt is being captured.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The single active phase of a game.
///
/// ```text
///  Idle ──▶ Playback ──▶ InputWait ──▶ GameOver
///             ▲              │
///             └──────────────┘ (round complete)
/// ```
///
/// Every phase may also move back to `Idle`; that edge is only taken by a
/// restart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No sequence has been generated yet.
    #[default]
    Idle,
    /// The engine owns the board and replays the sequence.
    Playback,
    /// The player is reproducing the sequence.
    InputWait,
    /// A wrong pad was pressed. Terminal until the next start.
    GameOver,
}

/// A phase change that is not an edge of the phase graph.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("illegal phase transition from {from} to {to}")]
pub struct IllegalTransition {
    pub from: Phase,
    pub to: Phase,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Playback => "Playback",
            Self::InputWait => "InputWait",
            Self::GameOver => "GameOver",
        }
    }

    /// Only a restart leaves this phase.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::GameOver)
    }

    /// Whether pad presses are taken into account in this phase.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::InputWait)
    }

    /// Check that moving from `self` to `to` follows the phase graph.
    ///
    /// ```rust
    /// use simon::core::Phase;
    ///
    /// assert!(Phase::Playback.check_transition(Phase::InputWait).is_ok());
    /// assert!(Phase::GameOver.check_transition(Phase::Playback).is_err());
    /// assert!(Phase::GameOver.check_transition(Phase::Idle).is_ok());
    /// ```
    pub fn check_transition(self, to: Phase) -> Result<(), IllegalTransition> {
        use Phase::*;

        let legal = matches!(
            (self, to),
            (_, Idle)
                | (Idle, Playback)
                | (Playback, InputWait)
                | (InputWait, Playback)
                | (InputWait, GameOver)
        );

        if legal {
            Ok(())
        } else {
            Err(IllegalTransition { from: self, to })
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Phase; 4] = [Phase::Idle, Phase::Playback, Phase::InputWait, Phase::GameOver];

    #[test]
    fn phase_name_returns_correct_value() {
        assert_eq!(Phase::Idle.name(), "Idle");
        assert_eq!(Phase::Playback.name(), "Playback");
        assert_eq!(Phase::InputWait.name(), "InputWait");
        assert_eq!(Phase::GameOver.name(), "GameOver");
    }

    #[test]
    fn only_input_wait_accepts_input() {
        for phase in ALL {
            assert_eq!(phase.accepts_input(), phase == Phase::InputWait);
        }
    }

    #[test]
    fn only_game_over_is_terminal() {
        for phase in ALL {
            assert_eq!(phase.is_terminal(), phase == Phase::GameOver);
        }
    }

    #[test]
    fn every_phase_can_restart() {
        for phase in ALL {
            assert!(phase.check_transition(Phase::Idle).is_ok());
        }
    }

    #[test]
    fn game_over_cannot_resume_play() {
        let err = Phase::GameOver
            .check_transition(Phase::InputWait)
            .unwrap_err();

        assert_eq!(err.from, Phase::GameOver);
        assert_eq!(err.to, Phase::InputWait);
        assert_eq!(
            err.to_string(),
            "illegal phase transition from GameOver to InputWait"
        );
    }

    #[test]
    fn playback_cannot_skip_to_game_over() {
        assert!(Phase::Playback.check_transition(Phase::GameOver).is_err());
        assert!(Phase::Idle.check_transition(Phase::InputWait).is_err());
    }

    #[test]
    fn default_is_idle() {
        assert_eq!(Phase::default(), Phase::Idle);
    }
}
