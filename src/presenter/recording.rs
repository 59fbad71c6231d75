use super::{Presenter, Status};
use crate::core::Color;
use serde::{Deserialize, Serialize};

/// A single presentation command, as received by a [`Presenter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Highlight(Color),
    Unhighlight(Color),
    PlaySound(Color),
    Status(Status),
    GameOver(bool),
    StartEnabled(bool),
}

/// Presenter that keeps every command it receives.
///
/// Lets the engine run headless: tests and replay tools inspect the command
/// log instead of a screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingPresenter {
    commands: Vec<Command>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands received so far, oldest first.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Drain the command log.
    pub fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// The most recent status line, if any was set.
    pub fn last_status(&self) -> Option<Status> {
        self.commands.iter().rev().find_map(|command| match command {
            Command::Status(status) => Some(*status),
            _ => None,
        })
    }

    /// Pads highlighted so far, in order.
    pub fn highlighted(&self) -> Vec<Color> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                Command::Highlight(color) => Some(*color),
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, command: Command) {
        self.commands.push(command);
    }
}

impl Presenter for RecordingPresenter {
    fn highlight(&mut self, color: Color) {
        self.push(Command::Highlight(color));
    }

    fn unhighlight(&mut self, color: Color) {
        self.push(Command::Unhighlight(color));
    }

    fn play_sound(&mut self, color: Color) {
        self.push(Command::PlaySound(color));
    }

    fn set_status(&mut self, status: Status) {
        self.push(Command::Status(status));
    }

    fn set_game_over(&mut self, game_over: bool) {
        self.push(Command::GameOver(game_over));
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        self.push(Command::StartEnabled(enabled));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_order() {
        let mut presenter = RecordingPresenter::new();

        presenter.highlight(Color::Green);
        presenter.play_sound(Color::Green);
        presenter.unhighlight(Color::Green);

        assert_eq!(
            presenter.commands(),
            &[
                Command::Highlight(Color::Green),
                Command::PlaySound(Color::Green),
                Command::Unhighlight(Color::Green),
            ]
        );
    }

    #[test]
    fn last_status_skips_other_commands() {
        let mut presenter = RecordingPresenter::new();

        presenter.set_status(Status::Watch);
        presenter.set_status(Status::YourTurn);
        presenter.set_game_over(false);

        assert_eq!(presenter.last_status(), Some(Status::YourTurn));
    }

    #[test]
    fn take_empties_the_log() {
        let mut presenter = RecordingPresenter::new();
        presenter.highlight(Color::Red);
        presenter.highlight(Color::Blue);

        assert_eq!(presenter.highlighted(), vec![Color::Red, Color::Blue]);
        assert_eq!(presenter.take().len(), 2);
        assert!(presenter.commands().is_empty());
        assert_eq!(presenter.last_status(), None);
    }
}
