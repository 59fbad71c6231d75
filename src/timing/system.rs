use super::clock::{Clock, Timer, TimerHandle};
use super::queue::TimerQueue;
use std::time::{Duration, Instant};

/// Clock backed by the monotonic system clock.
///
/// Meant for interactive hosts: poll [`Clock::poll_due`] from the event loop,
/// and sleep for [`SystemClock::until_next`] when nothing is due.
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
    queue: TimerQueue,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            queue: TimerQueue::new(),
        }
    }

    /// Time left until the earliest pending timer is due, `None` when idle.
    pub fn until_next(&self) -> Option<Duration> {
        self.queue
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(self.now()))
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn after(&mut self, delay: Duration, timer: Timer) -> TimerHandle {
        let deadline = self.now() + delay;
        self.queue.schedule(deadline, timer)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.queue.cancel(handle)
    }

    fn poll_due(&mut self) -> Option<Timer> {
        let now = self.now();
        self.queue.pop_due(now).map(|(_, timer)| timer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Epoch;
    use crate::timing::TimerKind;

    #[test]
    fn zero_delay_timer_is_due_immediately() {
        let mut clock = SystemClock::new();
        let timer = Timer::new(Epoch::new(1), TimerKind::NextRound);
        clock.after(Duration::ZERO, timer);

        assert_eq!(clock.poll_due(), Some(timer));
        assert_eq!(clock.until_next(), None);
    }

    #[test]
    fn far_timer_is_not_due_yet() {
        let mut clock = SystemClock::new();
        clock.after(
            Duration::from_secs(3600),
            Timer::new(Epoch::new(1), TimerKind::Beat),
        );

        assert_eq!(clock.poll_due(), None);
        assert_eq!(clock.pending(), 1);
        assert!(clock.until_next().is_some_and(|left| left > Duration::from_secs(3000)));
    }
}
