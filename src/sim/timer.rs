// Deterministic timer scheduling
//
// One-shot and periodic timers driven by an explicit simulated clock.
// Nothing here sleeps or spawns: callers advance time by passing `now`
// to `pop_due` and dispatch whatever comes back.

use std::time::Duration;
use tracing::debug;

/// Opaque handle to a scheduled timer. Handles are never reused, so a
/// stale handle can never match a newer timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// A timer that has come due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub handle: TimerHandle,
    /// The instant the timer was due, which may be earlier than `now`
    pub at: Duration,
}

#[derive(Debug, Clone)]
struct Entry {
    handle: TimerHandle,
    due: Duration,
    period: Option<Duration>,
}

/// Pending timers, fired in due order
#[derive(Debug, Clone, Default)]
pub struct Timers {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a timer that fires once at `due`
    pub fn schedule_once(&mut self, due: Duration) -> TimerHandle {
        self.insert(due, None)
    }

    /// Schedule a timer that fires at `first_due` and every `period` after.
    /// A zero period is rounded up to one millisecond.
    pub fn schedule_every(&mut self, first_due: Duration, period: Duration) -> TimerHandle {
        let period = period.max(Duration::from_millis(1));
        self.insert(first_due, Some(period))
    }

    fn insert(&mut self, due: Duration, period: Option<Duration>) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        debug!(?handle, ?due, ?period, "timer scheduled");
        self.entries.push(Entry {
            handle,
            due,
            period,
        });
        handle
    }

    /// Cancel a timer. Returns `false` if it had already fired (one-shot)
    /// or been cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        let removed = self.entries.len() != before;
        if removed {
            debug!(?handle, "timer cancelled");
        }
        removed
    }

    /// Drop every pending timer
    pub fn cancel_all(&mut self) {
        if !self.is_empty() {
            debug!(count = self.entries.len(), "all timers cancelled");
        }
        self.entries.clear();
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and return the earliest timer due at or before `now`.
    ///
    /// Periodic timers are re-armed one period later, so calling this in a
    /// loop replays every missed period in order. Ties are broken by
    /// scheduling order.
    pub fn pop_due(&mut self, now: Duration) -> Option<Fired> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= now)
            .min_by_key(|(_, e)| (e.due, e.handle))
            .map(|(i, _)| i)?;

        let entry = &mut self.entries[idx];
        let fired = Fired {
            handle: entry.handle,
            at: entry.due,
        };
        match entry.period {
            Some(period) => entry.due += period,
            None => {
                self.entries.swap_remove(idx);
            }
        }
        Some(fired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_once_fires_exactly_once() {
        let mut timers = Timers::new();
        let h = timers.schedule_once(ms(100));

        assert_eq!(timers.pop_due(ms(99)), None);
        assert_eq!(timers.pop_due(ms(100)), Some(Fired { handle: h, at: ms(100) }));
        assert_eq!(timers.pop_due(ms(1000)), None);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_periodic_replays_missed_periods_in_order() {
        let mut timers = Timers::new();
        let h = timers.schedule_every(ms(10), ms(10));

        let mut fired_at = Vec::new();
        while let Some(f) = timers.pop_due(ms(35)) {
            assert_eq!(f.handle, h);
            fired_at.push(f.at);
        }
        assert_eq!(fired_at, vec![ms(10), ms(20), ms(30)]);
        assert_eq!(timers.pop_due(ms(39)), None);
        assert_eq!(timers.pop_due(ms(40)).map(|f| f.at), Some(ms(40)));
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut timers = Timers::new();
        let a = timers.schedule_once(ms(5));
        let b = timers.schedule_every(ms(5), ms(5));

        assert!(timers.cancel(a));
        assert!(!timers.cancel(a));
        assert!(timers.cancel(b));
        assert_eq!(timers.pop_due(ms(100)), None);
    }

    #[test]
    fn test_handles_are_never_reused() {
        let mut timers = Timers::new();
        let a = timers.schedule_once(ms(5));
        timers.cancel(a);
        let b = timers.schedule_once(ms(5));
        assert_ne!(a, b);
        assert!(!timers.is_pending(a));
        assert!(timers.is_pending(b));
    }

    #[test]
    fn test_due_order_across_timers() {
        let mut timers = Timers::new();
        let late = timers.schedule_once(ms(30));
        let early = timers.schedule_once(ms(10));
        let tick = timers.schedule_every(ms(20), ms(20));

        let order: Vec<_> = std::iter::from_fn(|| timers.pop_due(ms(45)))
            .map(|f| f.handle)
            .collect();
        assert_eq!(order, vec![early, tick, late, tick]);
    }

    #[test]
    fn test_zero_period_does_not_spin() {
        let mut timers = Timers::new();
        timers.schedule_every(ms(0), Duration::ZERO);
        let count = std::iter::from_fn(|| timers.pop_due(ms(3))).count();
        assert_eq!(count, 4);
    }
}
