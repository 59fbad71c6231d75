//! Builder for assembling an engine.

use super::config::Timing;
use super::error::BuildError;
use super::machine::Engine;
use super::session::SessionId;
use crate::presenter::Presenter;
use crate::timing::Clock;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// Builder for constructing engines with a fluent API.
///
/// # Example
///
/// ```rust
/// use simon::engine::{EngineBuilder, Timing};
/// use simon::presenter::RecordingPresenter;
/// use simon::timing::ManualClock;
/// use std::time::Duration;
///
/// let engine = EngineBuilder::new()
///     .presenter(RecordingPresenter::new())
///     .clock(ManualClock::new())
///     .timing(Timing {
///         beat: Duration::from_millis(300),
///         flash: Duration::from_millis(200),
///         ..Timing::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.timing().beat, Duration::from_millis(300));
/// ```
pub struct EngineBuilder<P: Presenter, C: Clock> {
    presenter: Option<P>,
    clock: Option<C>,
    timing: Timing,
    rng: Option<Box<dyn RngCore>>,
    session: Option<SessionId>,
}

impl<P: Presenter, C: Clock> EngineBuilder<P, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            presenter: None,
            clock: None,
            timing: Timing::default(),
            rng: None,
            session: None,
        }
    }

    /// Set the presenter (required).
    pub fn presenter(mut self, presenter: P) -> Self {
        self.presenter = Some(presenter);
        self
    }

    /// Set the clock (required).
    pub fn clock(mut self, clock: C) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Override the default playback timing.
    pub fn timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Use a specific random source for colour generation.
    ///
    /// Defaults to a small fast generator seeded from the thread RNG.
    pub fn rng<R: RngCore + 'static>(mut self, rng: R) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Reuse an existing session id instead of generating one.
    pub fn session(mut self, session: SessionId) -> Self {
        self.session = Some(session);
        self
    }

    /// Build the engine.
    /// Returns an error if required fields are missing or the timing is
    /// invalid.
    pub fn build(self) -> Result<Engine<P, C>, BuildError> {
        let presenter = self.presenter.ok_or(BuildError::MissingPresenter)?;
        let clock = self.clock.ok_or(BuildError::MissingClock)?;
        self.timing.validate()?;

        let rng: Box<dyn RngCore> = match self.rng {
            Some(rng) => rng,
            None => Box::new(SmallRng::from_rng(&mut rand::rng())),
        };

        Ok(Engine::from_parts(
            self.session.unwrap_or_default(),
            presenter,
            clock,
            self.timing,
            rng,
        ))
    }
}

impl<P: Presenter, C: Clock> Default for EngineBuilder<P, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use crate::engine::TimingError;
    use crate::presenter::RecordingPresenter;
    use crate::timing::ManualClock;
    use std::time::Duration;

    #[test]
    fn builder_requires_presenter() {
        let result = EngineBuilder::<RecordingPresenter, ManualClock>::new()
            .clock(ManualClock::new())
            .build();

        assert!(matches!(result, Err(BuildError::MissingPresenter)));
    }

    #[test]
    fn builder_requires_clock() {
        let result = EngineBuilder::<_, ManualClock>::new()
            .presenter(RecordingPresenter::new())
            .build();

        assert!(matches!(result, Err(BuildError::MissingClock)));
    }

    #[test]
    fn builder_rejects_invalid_timing() {
        let result = EngineBuilder::new()
            .presenter(RecordingPresenter::new())
            .clock(ManualClock::new())
            .timing(Timing {
                flash: Duration::from_secs(1),
                ..Timing::default()
            })
            .build();

        assert!(matches!(
            result,
            Err(BuildError::InvalidTiming(TimingError::FlashTooLong { .. }))
        ));
    }

    #[test]
    fn builder_keeps_given_session() {
        let session = SessionId::new();
        let engine = EngineBuilder::new()
            .presenter(RecordingPresenter::new())
            .clock(ManualClock::new())
            .session(session)
            .build()
            .unwrap();

        assert_eq!(engine.session(), session);
    }

    #[test]
    fn seeded_rng_drives_generation() {
        let build = || {
            EngineBuilder::new()
                .presenter(RecordingPresenter::new())
                .clock(ManualClock::new())
                .rng(SmallRng::seed_from_u64(42))
                .build()
                .unwrap()
        };
        let mut first = build();
        let mut second = build();

        first.start();
        second.start();

        assert_eq!(first.sequence(), second.sequence());
        assert!(Color::ALL.contains(&first.sequence()[0]));
    }
}
