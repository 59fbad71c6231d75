use super::clock::{Timer, TimerHandle};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Pending timers ordered by deadline.
///
/// Timers sharing a deadline come out in the order they were scheduled.
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    pending: BTreeMap<(Duration, u64), Timer>,
    deadlines: HashMap<TimerHandle, Duration>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, deadline: Duration, timer: Timer) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;

        let handle = TimerHandle(id);
        self.pending.insert((deadline, id), timer);
        self.deadlines.insert(handle, deadline);
        handle
    }

    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle) {
            Some(deadline) => self.pending.remove(&(deadline, handle.0)).is_some(),
            None => false,
        }
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|&(deadline, _)| deadline)
    }

    /// Remove and return the earliest timer if it is due at `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, Timer)> {
        let entry = self.pending.first_entry()?;
        let (deadline, id) = *entry.key();
        if deadline > now {
            return None;
        }

        let timer = entry.remove();
        self.deadlines.remove(&TimerHandle(id));
        Some((deadline, timer))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn timers(&self) -> impl Iterator<Item = (Duration, &Timer)> + '_ {
        self.pending.iter().map(|(&(deadline, _), timer)| (deadline, timer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Epoch;
    use crate::timing::TimerKind;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn timer(kind: TimerKind) -> Timer {
        Timer::new(Epoch::new(1), kind)
    }

    #[test]
    fn pops_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(600), timer(TimerKind::Beat));
        queue.schedule(ms(400), timer(TimerKind::NextRound));

        assert_eq!(queue.next_deadline(), Some(ms(400)));
        assert_eq!(
            queue.pop_due(ms(1000)),
            Some((ms(400), timer(TimerKind::NextRound)))
        );
        assert_eq!(queue.pop_due(ms(1000)), Some((ms(600), timer(TimerKind::Beat))));
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_deadlines_keep_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(100), timer(TimerKind::Beat));
        queue.schedule(ms(100), timer(TimerKind::NextRound));

        assert_eq!(queue.pop_due(ms(100)).map(|(_, t)| t.kind), Some(TimerKind::Beat));
        assert_eq!(
            queue.pop_due(ms(100)).map(|(_, t)| t.kind),
            Some(TimerKind::NextRound)
        );
    }

    #[test]
    fn nothing_pops_before_its_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(600), timer(TimerKind::Beat));

        assert_eq!(queue.pop_due(ms(599)), None);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn cancel_removes_pending_timer_once() {
        let mut queue = TimerQueue::new();
        let handle = queue.schedule(ms(600), timer(TimerKind::Beat));

        assert!(queue.cancel(handle));
        assert!(!queue.cancel(handle));
        assert_eq!(queue.pop_due(ms(600)), None);
    }

    #[test]
    fn cancel_after_fire_is_a_no_op() {
        let mut queue = TimerQueue::new();
        let handle = queue.schedule(ms(10), timer(TimerKind::Beat));

        assert!(queue.pop_due(ms(10)).is_some());
        assert!(!queue.cancel(handle));
    }
}
