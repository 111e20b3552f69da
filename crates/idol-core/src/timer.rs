//! Cancellable one-shot timers on the session clock.
//!
//! Deadlines are `Duration`s since session start. Timers with the same
//! deadline fire in the order they were scheduled.

use fnv::FnvHashMap;
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, PartialEq)]
pub struct Expired<T> {
    pub id: TimerId,
    pub due: Duration,
    pub task: T,
}

pub struct TimerQueue<T> {
    next_id: u64,
    pending: BTreeMap<(Duration, u64), T>,
    deadlines: FnvHashMap<u64, Duration>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pending: BTreeMap::new(),
            deadlines: FnvHashMap::default(),
        }
    }

    pub fn schedule(&mut self, now: Duration, delay: Duration, task: T) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        let due = now + delay;
        self.pending.insert((due, id), task);
        self.deadlines.insert(id, due);
        TimerId(id)
    }

    /// Returns the task if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let due = self.deadlines.remove(&id.0)?;
        self.pending.remove(&(due, id.0))
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id.0)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    /// Pop the earliest timer whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Expired<T>> {
        let (due, id) = *self.pending.keys().next()?;
        if due > now {
            return None;
        }
        let task = self.pending.remove(&(due, id))?;
        self.deadlines.remove(&id);
        Some(Expired {
            id: TimerId(id),
            due,
            task,
        })
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
