//! Deterministic timer queue for deferred UI work.
//!
//! Time is a `Duration` since the console started, supplied by the caller.
//! Nothing here reads a clock, so frontends drive it from `Instant::elapsed`
//! and tests drive it from constants.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Single-threaded timer queue.
///
/// Timers fire in due order; timers with the same due time fire in the order
/// they were scheduled. While a timer is being handled the queue's clock sits
/// at that timer's due time, so follow-up timers scheduled from a handler are
/// spaced from the previous one rather than from the polling tick.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    timers: BTreeMap<(Duration, u64), T>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            timers: BTreeMap::new(),
        }
    }

    /// Current queue time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `task` to fire `delay` after the current queue time.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert((self.now + delay, seq), task);
        TimerId(seq)
    }

    /// Pop the earliest timer due at or before `now`.
    ///
    /// Returns `None` once nothing else is due, leaving the queue clock at
    /// `now`. The clock never moves backwards.
    pub fn pop_due(&mut self, now: Duration) -> Option<T> {
        let key = match self.timers.keys().next() {
            Some(&key) if key.0 <= now => key,
            _ => {
                self.now = self.now.max(now);
                return None;
            }
        };
        self.now = self.now.max(key.0);
        self.timers.remove(&key)
    }

    /// Cancel a single timer.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let key = self.timers.keys().find(|(_, seq)| *seq == id.0).copied()?;
        self.timers.remove(&key)
    }

    /// Drop every pending timer for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.timers.retain(|_, task| keep(task));
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Due time of the next pending timer.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.keys().next().map(|(due, _)| *due)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn drain(s: &mut Scheduler<&'static str>, now: Duration) -> Vec<&'static str> {
        std::iter::from_fn(|| s.pop_due(now)).collect()
    }

    #[test]
    fn fires_in_due_order() {
        let mut s = Scheduler::new();
        s.schedule(ms(30), "c");
        s.schedule(ms(10), "a");
        s.schedule(ms(20), "b");

        assert_eq!(drain(&mut s, ms(25)), vec!["a", "b"]);
        assert_eq!(drain(&mut s, ms(30)), vec!["c"]);
        assert!(s.is_empty());
    }

    #[test]
    fn ties_keep_schedule_order() {
        let mut s = Scheduler::new();
        s.schedule(ms(10), "first");
        s.schedule(ms(10), "second");
        assert_eq!(drain(&mut s, ms(10)), vec!["first", "second"]);
    }

    #[test]
    fn nothing_fires_early() {
        let mut s = Scheduler::new();
        s.schedule(ms(10), "a");
        assert!(s.pop_due(ms(9)).is_none());
        assert_eq!(s.now(), ms(9));
        assert_eq!(s.next_due(), Some(ms(10)));
    }

    #[test]
    fn rescheduling_from_a_handler_is_spaced_from_due_time() {
        let mut s = Scheduler::new();
        s.schedule(ms(800), "step");

        // Polled late: the step was due at 800 but observed at 850.
        assert_eq!(s.pop_due(ms(850)), Some("step"));
        s.schedule(ms(800), "next");
        assert_eq!(s.next_due(), Some(ms(1600)));
    }

    #[test]
    fn clock_is_monotonic() {
        let mut s: Scheduler<()> = Scheduler::new();
        s.pop_due(ms(100));
        s.pop_due(ms(50));
        assert_eq!(s.now(), ms(100));
    }

    #[test]
    fn cancel_and_retain() {
        let mut s = Scheduler::new();
        let a = s.schedule(ms(10), "a");
        s.schedule(ms(10), "b");
        s.schedule(ms(10), "c");

        assert_eq!(s.cancel(a), Some("a"));
        assert_eq!(s.cancel(a), None);
        s.retain(|t| *t != "b");
        assert_eq!(drain(&mut s, ms(10)), vec!["c"]);
    }
}
