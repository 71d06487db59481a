//! Cancellable scheduled tasks on a virtual clock.
//!
//! Every scheduling call returns a [`TimerHandle`]. The queue never sleeps: a
//! host either fires handles as its own timers elapse ([`TimerQueue::take`]) or
//! steps the clock forward and drains what became due
//! ([`TimerQueue::pop_due`]). Tests use the second form to trigger pending
//! work deterministically.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::collections::BTreeMap;
use std::time::Duration;

/// Longest delay a host timer can hold (2^31-1 ms, about 24.8 days).
pub const MAX_TIMER_DELAY: Duration = Duration::from_millis(MAX_TIMER_MILLIS);
const MAX_TIMER_MILLIS: u64 = 2_147_483_647;

/// Convert a millisecond count from script into a timer delay.
///
/// NaN and non-positive values run immediately. Anything longer than
/// [`MAX_TIMER_DELAY`], including infinity, waits for [`MAX_TIMER_DELAY`].
#[must_use]
pub fn delay_from_millis(ms: f64) -> Duration {
    if ms.is_nan() || ms <= 0.0 {
        return Duration::ZERO;
    }
    #[allow(clippy::cast_precision_loss)]
    let cap = MAX_TIMER_MILLIS as f64;
    if ms >= cap {
        return MAX_TIMER_DELAY;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let millis = ms as u64;
    Duration::from_millis(millis)
}

/// Handle for one scheduled task. Handles are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct Pending<T> {
    due: Duration,
    task: T,
}

#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<TimerHandle, Pending<T>>,
    scheduled: Vec<(TimerHandle, Duration)>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self { now: Duration::ZERO, next_id: 0, pending: BTreeMap::new(), scheduled: Vec::new() }
    }
}

impl<T> TimerQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position of the virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&handle)
    }

    /// Due time of a pending handle.
    #[must_use]
    pub fn due(&self, handle: TimerHandle) -> Option<Duration> {
        self.pending.get(&handle).map(|p| p.due)
    }

    /// Schedule `task` to run `delay` after the current clock.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending.insert(handle, Pending { due: self.now.saturating_add(delay), task });
        self.scheduled.push((handle, delay));
        handle
    }

    /// Drop a pending task. Returns `false` if it already ran or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&handle).is_some()
    }

    /// Remove `handle` for execution, moving the clock up to its due time.
    pub fn take(&mut self, handle: TimerHandle) -> Option<T> {
        let pending = self.pending.remove(&handle)?;
        self.now = self.now.max(pending.due);
        Some(pending.task)
    }

    /// Remove the earliest task due at or before `until`.
    ///
    /// Ties run in scheduling order. The clock moves to the task's due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, T)> {
        let handle = self
            .pending
            .iter()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(handle, p)| (p.due, **handle))
            .map(|(handle, _)| *handle)?;
        self.take(handle).map(|task| (handle, task))
    }

    /// Move the clock forward without running anything.
    pub fn advance_clock(&mut self, to: Duration) {
        self.now = self.now.max(to);
    }

    /// Handles scheduled since the last call, with their relative delays.
    pub fn take_scheduled(&mut self) -> Vec<(TimerHandle, Duration)> {
        std::mem::take(&mut self.scheduled)
    }
}
