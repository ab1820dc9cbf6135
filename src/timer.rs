//! Repeating timers that drive tool redraws.
//!
//! Timers do not carry callbacks: when one fires, the host routes the tick to
//! the active tool with the [`TimerId`] that fired. A tool only reacts to the
//! id it currently owns, so a tick that was already queued when the timer got
//! cancelled is dropped on the floor.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle of a running repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Scheduler for repeating timers.
pub trait TimerService {
    /// Starts a timer firing every `interval` until cancelled.
    fn start_repeating(&mut self, interval: Duration) -> TimerId;

    /// Stops a timer. Unknown or already-cancelled ids are ignored.
    fn cancel(&mut self, id: TimerId);

    /// Ids of the timers still running, oldest first.
    fn active_timers(&self) -> Vec<TimerId>;

    fn active_count(&self) -> usize {
        self.active_timers().len()
    }
}

/// Timer service without a clock; the caller decides when timers fire.
///
/// Used by tests and by hosts that already own a frame loop and want to tick
/// tools at their own pace.
#[derive(Debug, Default)]
pub struct ManualTimers {
    next_id: u64,
    running: BTreeMap<TimerId, Duration>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interval a running timer was started with.
    pub fn interval(&self, id: TimerId) -> Option<Duration> {
        self.running.get(&id).copied()
    }
}

impl TimerService for ManualTimers {
    fn start_repeating(&mut self, interval: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.running.insert(id, interval);
        log::trace!("timer {:?} started ({:?})", id, interval);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if self.running.remove(&id).is_some() {
            log::trace!("timer {:?} cancelled", id);
        }
    }

    fn active_timers(&self) -> Vec<TimerId> {
        self.running.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_cancel_is_idempotent() {
        let mut timers = ManualTimers::new();
        let a = timers.start_repeating(Duration::from_millis(10));
        let b = timers.start_repeating(Duration::from_millis(20));
        assert_ne!(a, b);
        assert_eq!(timers.active_timers(), vec![a, b]);
        assert_eq!(timers.interval(b), Some(Duration::from_millis(20)));

        timers.cancel(a);
        timers.cancel(a);
        assert_eq!(timers.active_count(), 1);
        assert_eq!(timers.interval(a), None);
    }

    #[test]
    fn cancelled_ids_are_not_reused() {
        let mut timers = ManualTimers::new();
        let a = timers.start_repeating(Duration::from_millis(10));
        timers.cancel(a);
        let b = timers.start_repeating(Duration::from_millis(10));
        assert_ne!(a, b);
    }
}
