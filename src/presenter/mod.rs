//! Output side of the engine.
//!
//! The engine describes what the player should see and hear as a stream of
//! fire-and-forget commands. It never reads presentation state back, so any
//! front end (a DOM, a terminal, an LED board, a test recorder) can sit
//! behind the [`Presenter`] trait.

mod recording;

pub use recording::{Command, RecordingPresenter};

use crate::core::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status line shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// No game has been started yet.
    Ready,
    /// A new game started; the first playback is about to run.
    Watch,
    /// Playback finished; the player has the board.
    YourTurn,
    /// The player reproduced the whole sequence.
    RoundSuccess,
    /// The player pressed a wrong pad.
    GameOver,
}

impl Status {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Ready => "Click Start to Play!",
            Self::Watch => "Watch the sequence...",
            Self::YourTurn => "Your turn! Repeat the sequence.",
            Self::RoundSuccess => "Good job! Watch the next sequence.",
            Self::GameOver => "Game Over! Click Start to try again.",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Receiver of the engine's presentation commands.
pub trait Presenter {
    /// Light up a pad.
    fn highlight(&mut self, color: Color);

    /// Turn a pad's light off again.
    fn unhighlight(&mut self, color: Color);

    /// Play the tone of a pad from its beginning.
    fn play_sound(&mut self, color: Color);

    /// Replace the status line.
    fn set_status(&mut self, status: Status);

    /// Show or hide the game-over state of the board.
    fn set_game_over(&mut self, game_over: bool);

    /// Allow or forbid starting a new game.
    fn set_start_enabled(&mut self, enabled: bool);
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn highlight(&mut self, color: Color) {
        (**self).highlight(color)
    }

    fn unhighlight(&mut self, color: Color) {
        (**self).unhighlight(color)
    }

    fn play_sound(&mut self, color: Color) {
        (**self).play_sound(color)
    }

    fn set_status(&mut self, status: Status) {
        (**self).set_status(status)
    }

    fn set_game_over(&mut self, game_over: bool) {
        (**self).set_game_over(game_over)
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        (**self).set_start_enabled(enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_messages_match_display() {
        for status in [
            Status::Ready,
            Status::Watch,
            Status::YourTurn,
            Status::RoundSuccess,
            Status::GameOver,
        ] {
            assert_eq!(status.to_string(), status.message());
        }
    }

    #[test]
    fn boxed_presenter_forwards_commands() {
        let mut boxed: Box<dyn Presenter> = Box::new(RecordingPresenter::new());

        boxed.highlight(Color::Red);
        boxed.set_status(Status::Watch);
        boxed.set_start_enabled(false);
    }
}
