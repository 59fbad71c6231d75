//! The game engine: a four-phase state machine driven by player input and
//! fired timers.

use super::config::Timing;
use super::session::SessionId;
use crate::core::{
    Attempt, Color, Epoch, Guard, Judgement, Phase, PhaseHistory, PhaseTransition, Sequence,
};
use crate::presenter::{Presenter, Status};
use crate::timing::{Clock, ManualClock, Timer, TimerHandle, TimerKind};
use chrono::Utc;
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Read-only view of a game at one point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub session: SessionId,
    pub phase: Phase,
    pub epoch: Epoch,
    pub cursor: usize,
    pub sequence: Sequence,
    pub attempt: Attempt,
}

/// Timers of the current epoch that may still be pending.
#[derive(Debug, Default)]
struct PendingTimers {
    beat: Option<TimerHandle>,
    /// The pad currently lit, with the timer that turns it off.
    flash: Option<(TimerHandle, Color)>,
    pause: Option<TimerHandle>,
}

impl PendingTimers {
    /// Cancel everything still pending.
    ///
    /// Returns the number of cancelled timers and the pad left lit by an
    /// interrupted flash, if any.
    fn cancel_all<C: Clock>(&mut self, clock: &mut C) -> (usize, Option<Color>) {
        let (flash, lit) = match self.flash.take() {
            Some((handle, color)) => (Some(handle), Some(color)),
            None => (None, None),
        };
        let cancelled = [self.beat.take(), flash, self.pause.take()]
            .into_iter()
            .flatten()
            .filter(|&handle| clock.cancel(handle))
            .count();
        (cancelled, lit)
    }
}

/// A single Simon Says game session.
///
/// The engine owns the sequence, the player's attempt, the phase and the
/// playback cursor. It talks to the outside world only through its
/// [`Presenter`] and [`Clock`]. Every entry point (`start`,
/// `on_color_pressed`, `fire`) runs to completion before returning.
///
/// # Example
///
/// ```rust
/// use simon::core::Phase;
/// use simon::engine::Engine;
/// use simon::presenter::RecordingPresenter;
/// use simon::timing::ManualClock;
/// use std::time::Duration;
///
/// let mut engine = Engine::new(RecordingPresenter::new(), ManualClock::new());
/// engine.start();
/// assert_eq!(engine.phase(), Phase::Playback);
///
/// // One beat shows the colour, the next hands the board to the player.
/// engine.advance(Duration::from_millis(1200));
/// assert_eq!(engine.phase(), Phase::InputWait);
///
/// let first = engine.sequence()[0];
/// engine.on_color_pressed(first);
/// assert_eq!(engine.phase(), Phase::Playback);
///
/// engine.advance(Duration::from_millis(1000));
/// assert_eq!(engine.sequence().len(), 2);
/// ```
pub struct Engine<P: Presenter, C: Clock> {
    session: SessionId,
    presenter: P,
    clock: C,
    timing: Timing,
    rng: Box<dyn RngCore>,
    input_guard: Guard,
    phase: Phase,
    sequence: Sequence,
    attempt: Attempt,
    cursor: usize,
    epoch: Epoch,
    pending: PendingTimers,
    history: PhaseHistory,
}

impl<P: Presenter, C: Clock> Engine<P, C> {
    /// Create an idle engine with default timing.
    pub fn new(presenter: P, clock: C) -> Self {
        Self::from_parts(
            SessionId::new(),
            presenter,
            clock,
            Timing::default(),
            Box::new(SmallRng::from_rng(&mut rand::rng())),
        )
    }

    pub(crate) fn from_parts(
        session: SessionId,
        presenter: P,
        clock: C,
        timing: Timing,
        rng: Box<dyn RngCore>,
    ) -> Self {
        let mut engine = Self {
            session,
            presenter,
            clock,
            timing,
            rng,
            input_guard: Guard::input_window(),
            phase: Phase::Idle,
            sequence: Sequence::new(),
            attempt: Attempt::new(),
            cursor: 0,
            epoch: Epoch::default(),
            pending: PendingTimers::default(),
            history: PhaseHistory::new(),
        };

        engine.presenter.set_status(Status::Ready);
        engine.presenter.set_game_over(false);
        engine.presenter.set_start_enabled(true);
        log::debug!("[{}] session created", engine.session);
        engine
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn attempt(&self) -> &Attempt {
        &self.attempt
    }

    /// Index of the next sequence element the playback will show.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Phase transitions of the current game, starting with its restart.
    pub fn history(&self) -> &PhaseHistory {
        &self.history
    }

    /// Whether a pad press would currently be taken into account.
    pub fn accepts_input(&self) -> bool {
        self.input_guard.check(&self.phase)
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            session: self.session,
            phase: self.phase,
            epoch: self.epoch,
            cursor: self.cursor,
            sequence: self.sequence.clone(),
            attempt: self.attempt.clone(),
        }
    }

    /// Start a new game, abandoning whatever was in progress.
    ///
    /// Moves to a new epoch, so every timer scheduled by the previous game is
    /// ignored even if the clock still delivers it.
    pub fn start(&mut self) {
        let (cancelled, lit) = self.pending.cancel_all(&mut self.clock);
        if let Some(color) = lit {
            self.presenter.unhighlight(color);
        }
        self.epoch = self.epoch.next();
        self.history = PhaseHistory::new();
        log::info!(
            "[{}] starting game in epoch {} ({} pending timers cancelled)",
            self.session,
            self.epoch,
            cancelled
        );

        self.sequence.clear();
        self.attempt.clear();
        self.cursor = 0;
        self.transition(Phase::Idle);

        self.presenter.set_status(Status::Watch);
        self.presenter.set_game_over(false);
        self.presenter.set_start_enabled(false);

        self.extend_sequence();
    }

    /// Handle a pad press from the player.
    ///
    /// Presses outside [`Phase::InputWait`] are ignored.
    pub fn on_color_pressed(&mut self, color: Color) {
        if !self.input_guard.check(&self.phase) {
            log::debug!(
                "[{}] ignoring {} press during {}",
                self.session,
                color,
                self.phase
            );
            return;
        }

        let Some(judgement) = self.attempt.press(color, &self.sequence) else {
            log::debug!("[{}] ignoring {} press past sequence end", self.session, color);
            return;
        };
        self.presenter.play_sound(color);

        match judgement {
            Judgement::Mismatch {
                index,
                expected,
                pressed,
            } => {
                log::info!(
                    "[{}] game over at round {}: expected {} at position {}, got {}",
                    self.session,
                    self.sequence.len(),
                    expected,
                    index,
                    pressed
                );
                self.transition(Phase::GameOver);
                self.presenter.set_status(Status::GameOver);
                self.presenter.set_game_over(true);
                self.presenter.set_start_enabled(true);
            }
            Judgement::Complete => {
                log::debug!(
                    "[{}] round {} complete",
                    self.session,
                    self.sequence.len()
                );
                self.presenter.set_status(Status::RoundSuccess);
                self.transition(Phase::Playback);
                let handle = self.schedule(self.timing.success_pause, TimerKind::NextRound);
                self.pending.pause = Some(handle);
            }
            Judgement::Partial => {}
        }
    }

    /// Handle a timer delivered by the clock.
    ///
    /// Timers from an earlier epoch have no effect.
    pub fn fire(&mut self, timer: Timer) {
        if timer.epoch != self.epoch {
            log::debug!(
                "[{}] dropping stale {:?} timer from epoch {} (current {})",
                self.session,
                timer.kind,
                timer.epoch,
                self.epoch
            );
            return;
        }

        match timer.kind {
            TimerKind::Beat => {
                self.pending.beat = None;
                self.on_beat();
            }
            TimerKind::Unhighlight(color) => {
                self.pending.flash = None;
                self.presenter.unhighlight(color);
            }
            TimerKind::NextRound => {
                self.pending.pause = None;
                if self.phase == Phase::Playback {
                    self.extend_sequence();
                }
            }
        }
    }

    /// Dispatch every timer that is due on the clock.
    ///
    /// Returns the number of timers delivered, stale ones included.
    pub fn pump(&mut self) -> usize {
        let mut fired = 0;
        while let Some(timer) = self.clock.poll_due() {
            self.fire(timer);
            fired += 1;
        }
        fired
    }

    fn extend_sequence(&mut self) {
        let color: Color = self.rng.random();
        self.sequence.push(color);
        self.attempt.clear();
        self.cursor = 0;
        self.transition(Phase::Playback);
        log::debug!(
            "[{}] sequence extended with {} to length {}",
            self.session,
            color,
            self.sequence.len()
        );

        let handle = self.schedule(self.timing.beat, TimerKind::Beat);
        self.pending.beat = Some(handle);
    }

    fn on_beat(&mut self) {
        if self.phase != Phase::Playback {
            log::warn!("[{}] beat fired during {}", self.session, self.phase);
            return;
        }

        match self.sequence.get(self.cursor) {
            Some(color) => {
                self.presenter.highlight(color);
                self.presenter.play_sound(color);
                let flash = self.schedule(self.timing.flash, TimerKind::Unhighlight(color));
                self.pending.flash = Some((flash, color));

                self.cursor += 1;
                let beat = self.schedule(self.timing.beat, TimerKind::Beat);
                self.pending.beat = Some(beat);
            }
            None => {
                self.transition(Phase::InputWait);
                self.presenter.set_status(Status::YourTurn);
            }
        }
    }

    fn schedule(&mut self, delay: Duration, kind: TimerKind) -> TimerHandle {
        self.clock.after(delay, Timer::new(self.epoch, kind))
    }

    fn transition(&mut self, to: Phase) {
        let from = self.phase;
        if from == to {
            return;
        }
        if let Err(violation) = from.check_transition(to) {
            log::warn!("[{}] {}", self.session, violation);
        }

        self.history.push(PhaseTransition {
            from,
            to,
            epoch: self.epoch,
            at: self.clock.now(),
            timestamp: Utc::now(),
        });
        self.phase = to;
        log::debug!("[{}] {} -> {}", self.session, from, to);
    }
}

impl<P: Presenter> Engine<P, ManualClock> {
    /// Move virtual time forward by `delta`, dispatching every timer that
    /// falls due on the way in deadline order.
    ///
    /// Returns the number of timers delivered.
    pub fn advance(&mut self, delta: Duration) -> usize {
        let target = self.clock.now() + delta;
        let mut fired = 0;
        while let Some(timer) = self.clock.step_until(target) {
            self.fire(timer);
            fired += 1;
        }
        fired
    }
}

impl<P, C> fmt::Debug for Engine<P, C>
where
    P: Presenter + fmt::Debug,
    C: Clock + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("session", &self.session)
            .field("phase", &self.phase)
            .field("epoch", &self.epoch)
            .field("cursor", &self.cursor)
            .field("sequence", &self.sequence)
            .field("attempt", &self.attempt)
            .field("timing", &self.timing)
            .field("presenter", &self.presenter)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
