//! Deferred execution for the engine.
//!
//! The engine never sleeps. It hands [`Timer`] values to a [`Clock`], and the
//! host loop feeds every fired timer back through `Engine::fire`. Each timer
//! carries the [`Epoch`](crate::core::Epoch) it was scheduled in so that the
//! engine can drop timers left over from an earlier game.
//!
//! Two clocks are provided:
//! - [`ManualClock`] - virtual time, advanced explicitly (tests, replays of
//!   input scripts, headless hosts)
//! - [`SystemClock`] - monotonic wall time for interactive hosts

mod clock;
mod manual;
mod queue;
mod system;

pub use clock::{Clock, Timer, TimerHandle, TimerKind};
pub use manual::ManualClock;
pub use queue::TimerQueue;
pub use system::SystemClock;
