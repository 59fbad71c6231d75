//! Clock abstraction and the timers the engine schedules on it.

use crate::core::{Color, Epoch};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What the engine should do when a timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// Show the next element of the sequence, or hand the board to the
    /// player once every element has been shown.
    Beat,
    /// End the flash of a highlighted pad.
    Unhighlight(Color),
    /// The pause after a completed round is over; grow the sequence.
    NextRound,
}

/// A unit of deferred work, tagged with the game run that scheduled it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timer {
    pub epoch: Epoch,
    pub kind: TimerKind,
}

impl Timer {
    pub const fn new(epoch: Epoch, kind: TimerKind) -> Self {
        Self { epoch, kind }
    }
}

/// Handle returned by [`Clock::after`], used to cancel a pending timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub(crate) u64);

/// Source of time and delayed callbacks.
///
/// A clock only stores timers; it never calls into the engine itself. The
/// host drains due timers with [`Clock::poll_due`] and dispatches them, so
/// each fired timer is handled to completion before the next one.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;

    /// Schedule `timer` to become due `delay` from now.
    fn after(&mut self, delay: Duration, timer: Timer) -> TimerHandle;

    /// Drop a pending timer. Returns `false` if it already fired or was
    /// cancelled before.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Take the earliest timer whose deadline has passed.
    fn poll_due(&mut self) -> Option<Timer>;
}
