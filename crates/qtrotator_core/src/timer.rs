//! Millisecond timer queue
//!
//! Deferred tasks keyed by [`TimerId`]. The host owns the clock: it calls
//! [`TimerQueue::pop_due`] with the current time and runs whatever comes out.
//! Handles are slotmap keys, so a cancelled or already-fired id simply no
//! longer resolves and cancelling it again does nothing.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a scheduled task
    pub struct TimerId;
}

/// Host clock time in milliseconds
pub type Millis = u64;

struct TimerEntry<T> {
    deadline: Millis,
    /// Insertion order, breaks ties between equal deadlines
    seq: u64,
    task: T,
}

/// Pending deferred tasks, fired in deadline order
pub struct TimerQueue<T> {
    timers: SlotMap<TimerId, TimerEntry<T>>,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            next_seq: 0,
        }
    }

    /// Schedule `task` to fire at the absolute time `deadline`
    pub fn schedule(&mut self, deadline: Millis, task: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(TimerEntry {
            deadline,
            seq,
            task,
        })
    }

    /// Schedule `task` to fire `delay` milliseconds after `now`
    pub fn schedule_after(&mut self, now: Millis, delay: Millis, task: T) -> TimerId {
        self.schedule(now.saturating_add(delay), task)
    }

    /// Cancel a pending task, returning it if it had not fired yet
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        self.timers.remove(id).map(|entry| entry.task)
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    pub fn deadline(&self, id: TimerId) -> Option<Millis> {
        self.timers.get(id).map(|entry| entry.deadline)
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.values().map(|entry| entry.deadline).min()
    }

    /// Remove and return the earliest task due at or before `now`
    ///
    /// Returns the task's id and its deadline alongside it; the deadline is the
    /// time the task should observe as "now" when it runs.
    pub fn pop_due(&mut self, now: Millis) -> Option<(TimerId, Millis, T)> {
        let (id, deadline) = self
            .timers
            .iter()
            .filter(|(_, entry)| entry.deadline <= now)
            .min_by_key(|(_, entry)| (entry.deadline, entry.seq))
            .map(|(id, entry)| (id, entry.deadline))?;

        tracing::trace!(deadline, now, "timer due");
        self.timers.remove(id).map(|entry| (id, deadline, entry.task))
    }

    /// Drop every pending task
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
