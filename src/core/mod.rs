//! Core game types.
//!
//! This module contains the pure data of a game, with no timers and no
//! presentation:
//! - The colour palette and sequence generation distribution
//! - Phases and the legal transitions between them
//! - The target sequence and the player's attempt
//! - Input guards and phase history

mod color;
mod epoch;
mod guard;
mod history;
mod phase;
mod sequence;

pub use color::Color;
pub use epoch::Epoch;
pub use guard::Guard;
pub use history::{PhaseHistory, PhaseTransition};
pub use phase::{IllegalTransition, Phase};
pub use sequence::{Attempt, Judgement, Sequence};
