use super::clock::{Clock, Timer, TimerHandle};
use super::queue::TimerQueue;
use std::time::Duration;

/// Clock driven by hand.
///
/// Time only moves when the owner advances it. While stepping towards a
/// target time the clock stops at each due deadline, so timers scheduled by a
/// fired timer are measured from that timer's deadline.
///
/// # Example
///
/// ```rust
/// use simon::core::Epoch;
/// use simon::timing::{Clock, ManualClock, Timer, TimerKind};
/// use std::time::Duration;
///
/// let mut clock = ManualClock::new();
/// clock.after(Duration::from_millis(600), Timer::new(Epoch::new(1), TimerKind::Beat));
///
/// let target = Duration::from_millis(1000);
/// let fired = clock.step_until(target);
///
/// assert_eq!(fired.map(|t| t.kind), Some(TimerKind::Beat));
/// assert_eq!(clock.now(), Duration::from_millis(600));
/// assert_eq!(clock.step_until(target), None);
/// assert_eq!(clock.now(), target);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Duration,
    queue: TimerQueue,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move towards `target`, stopping at the next due timer.
    ///
    /// Returns that timer, or `None` once the clock has reached `target` with
    /// nothing left due.
    pub fn step_until(&mut self, target: Duration) -> Option<Timer> {
        match self.queue.next_deadline() {
            Some(deadline) if deadline <= target => {
                self.now = self.now.max(deadline);
                self.queue.pop_due(self.now).map(|(_, timer)| timer)
            }
            _ => {
                self.now = self.now.max(target);
                None
            }
        }
    }

    /// Number of timers waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Deadline of the earliest pending timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.next_deadline()
    }

    /// Pending timers with their deadlines, earliest first.
    pub fn timers(&self) -> impl Iterator<Item = (Duration, &Timer)> + '_ {
        self.queue.timers()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn after(&mut self, delay: Duration, timer: Timer) -> TimerHandle {
        self.queue.schedule(self.now + delay, timer)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.queue.cancel(handle)
    }

    fn poll_due(&mut self) -> Option<Timer> {
        self.queue.pop_due(self.now).map(|(_, timer)| timer)
    }
}
