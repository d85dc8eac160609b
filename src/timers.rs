//! Deadline-ordered deferred tasks for the single-threaded event loop.
//!
//! Animation sequencing (reveal after open, removal after close, toast
//! expiry) is expressed as typed tasks pushed here and drained by the owner
//! on every tick. Nothing runs on its own; the owner decides when `now` is.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Scheduled<T> {
    deadline: Instant,
    seq: u64,
    task: T,
}

#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    pending: Vec<Scheduled<T>>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) {
        let seq = self.next_seq;
        self.next_seq = seq.saturating_add(1);
        self.pending.push(Scheduled {
            deadline: now + delay,
            seq,
            task,
        });
    }

    /// Remove and return every task whose deadline is at or before `now`,
    /// earliest first. Tasks sharing a deadline keep scheduling order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        let mut idx = 0;
        while idx < self.pending.len() {
            if self.pending[idx].deadline <= now {
                due.push(self.pending.swap_remove(idx));
            } else {
                idx += 1;
            }
        }
        due.sort_by_key(|s| (s.deadline, s.seq));
        due.into_iter().map(|s| s.task).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|s| s.deadline).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.pending.retain(|s| keep(&s.task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_only_due_tasks_in_deadline_order() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        q.schedule(t0, Duration::from_millis(300), "late");
        q.schedule(t0, Duration::from_millis(100), "early");
        q.schedule(t0, Duration::from_millis(100), "early-second");
        assert_eq!(q.len(), 3);

        assert!(q.drain_due(t0 + Duration::from_millis(50)).is_empty());
        assert_eq!(
            q.drain_due(t0 + Duration::from_millis(150)),
            vec!["early", "early-second"]
        );
        assert_eq!(q.next_deadline(), Some(t0 + Duration::from_millis(300)));
        assert_eq!(q.drain_due(t0 + Duration::from_secs(1)), vec!["late"]);
        assert!(q.is_empty());
    }

    #[test]
    fn retain_drops_cancelled_tasks() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        q.schedule(t0, Duration::ZERO, 1);
        q.schedule(t0, Duration::ZERO, 2);
        q.retain(|task| *task != 1);
        assert_eq!(q.drain_due(t0), vec![2]);
    }
}
