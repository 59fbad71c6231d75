//! Errors raised while assembling an engine.

use thiserror::Error;

/// Errors in a [`Timing`](super::Timing) configuration.
#[derive(Debug, Error)]
pub enum TimingError {
    #[error("Beat interval must be greater than zero")]
    ZeroBeat,

    #[error("Flash ({flash:?}) must be shorter than the beat ({beat:?})")]
    FlashTooLong {
        flash: std::time::Duration,
        beat: std::time::Duration,
    },

    #[error("Invalid timing configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur when building an engine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Presenter not specified. Call .presenter(presenter) before .build()")]
    MissingPresenter,

    #[error("Clock not specified. Call .clock(clock) before .build()")]
    MissingClock,

    #[error(transparent)]
    InvalidTiming(#[from] TimingError),
}
