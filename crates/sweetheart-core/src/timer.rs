//! Fire-once timer queue driven by an explicit elapsed-time value.
//!
//! State machines never sleep. They record deadlines (measured from the
//! moment their screen mounted) in a [`TimerQueue`], and whoever drives them
//! asks for [`TimerQueue::next_deadline`], waits that long, then pops the due
//! events. Dropping the queue drops every pending timer with it, so a
//! discarded state machine can never be called back.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle for a scheduled timer, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Pending fire-once timers ordered by deadline, ties broken by schedule order.
#[derive(Debug, Clone)]
pub struct TimerQueue<E> {
    next_id: u64,
    pending: BTreeMap<(Duration, TimerId), E>,
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Schedule `event` to fire once `deadline` has elapsed.
    pub fn schedule(&mut self, deadline: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert((deadline, id), event);
        id
    }

    /// Cancel a single timer. Returns `false` if it already fired or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let key = self.pending.keys().find(|(_, tid)| *tid == id).copied();
        match key {
            Some(key) => self.pending.remove(&key).is_some(),
            None => false,
        }
    }

    /// Cancel everything.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Remove and return the earliest event due at `now`, if any.
    pub fn pop_due(&mut self, now: Duration) -> Option<E> {
        let key = *self.pending.keys().next()?;
        if key.0 > now {
            return None;
        }
        self.pending.remove(&key)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(800), "float");
        queue.schedule(ms(500), "settle");
        queue.schedule(ms(2500), "intro");

        assert_eq!(queue.next_deadline(), Some(ms(500)));
        assert_eq!(queue.pop_due(ms(900)), Some("settle"));
        assert_eq!(queue.pop_due(ms(900)), Some("float"));
        assert_eq!(queue.pop_due(ms(900)), None);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(500), 1);
        queue.schedule(ms(500), 2);
        queue.schedule(ms(500), 3);

        let fired: Vec<_> = std::iter::from_fn(|| queue.pop_due(ms(500))).collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn test_not_due_yet() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(300), ());
        assert_eq!(queue.pop_due(ms(299)), None);
        assert_eq!(queue.pop_due(ms(300)), Some(()));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut queue = TimerQueue::new();
        let first = queue.schedule(ms(100), "a");
        queue.schedule(ms(200), "b");

        assert!(queue.cancel(first));
        assert!(!queue.cancel(first));
        assert_eq!(queue.next_deadline(), Some(ms(200)));
    }

    #[test]
    fn test_clear() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(100), "float");
        queue.schedule(ms(200), "settle");
        assert_eq!(queue.len(), 2);

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.next_deadline(), None);
    }
}
