use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::foundation::core::Millis;

/// Cancellation token for one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// How a task was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fixed delay from the scheduling instant.
    Timeout,
    /// Next frame boundary.
    Frame,
}

/// A task whose deadline has been reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<T> {
    /// Token returned when the task was scheduled.
    pub id: TimerId,
    /// Deadline the task was due at.
    pub at: Millis,
    /// Timeout or frame request.
    pub kind: TimerKind,
    /// Scheduled payload.
    pub task: T,
}

#[derive(Debug)]
struct Entry<T> {
    at: Millis,
    kind: TimerKind,
    task: T,
}

/// Single-threaded timer facility over a virtual monotonic clock.
///
/// Determinism rule: due tasks fire in deadline order, ties in scheduling order. Cancelled tasks
/// leave a stale heap slot that is skipped when it surfaces; the heap is rebuilt from the live set
/// once stale slots outnumber live ones.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Millis,
    frame_interval: Millis,
    next_id: u64,
    queue: BinaryHeap<Reverse<(Millis, u64)>>,
    live: BTreeMap<u64, Entry<T>>,
}

impl<T> Scheduler<T> {
    /// Create a scheduler at t=0 whose frame boundaries are `frame_interval` apart.
    pub fn new(frame_interval: Millis) -> Self {
        Self {
            now: Millis::ZERO,
            frame_interval,
            next_id: 0,
            queue: BinaryHeap::new(),
            live: BTreeMap::new(),
        }
    }

    /// Current clock reading.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Spacing of frame boundaries.
    pub fn frame_interval(&self) -> Millis {
        self.frame_interval
    }

    /// Number of tasks that are scheduled and not cancelled.
    pub fn pending(&self) -> usize {
        self.live.len()
    }

    /// `true` while `id` is scheduled and not yet fired or cancelled.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.live.contains_key(&id.0)
    }

    /// Run `task` once `delay` has elapsed from now.
    pub fn set_timeout(&mut self, delay: Millis, task: T) -> TimerId {
        self.insert(self.now + delay, TimerKind::Timeout, task)
    }

    /// Run `task` at the next frame boundary strictly after now.
    pub fn request_frame(&mut self, task: T) -> TimerId {
        let at = self.now.next_multiple_of(self.frame_interval);
        self.insert(at, TimerKind::Frame, task)
    }

    fn insert(&mut self, at: Millis, kind: TimerKind, task: T) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.queue.push(Reverse((at, id)));
        self.live.insert(id, Entry { at, kind, task });
        tracing::trace!(id, at = at.0, ?kind, "timer scheduled");
        TimerId(id)
    }

    /// Cancel a scheduled task. Returns `false` if it already fired or was never scheduled here.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let removed = self.live.remove(&id.0).is_some();
        if removed {
            tracing::trace!(id = id.0, "timer cancelled");
            if self.queue.len() > 2 * self.live.len() {
                self.compact();
            }
        }
        removed
    }

    fn compact(&mut self) {
        let before = self.queue.len();
        self.queue = self
            .live
            .iter()
            .map(|(id, entry)| Reverse((entry.at, *id)))
            .collect();
        tracing::trace!(before, after = self.queue.len(), "timer queue compacted");
    }

    /// Cancel everything still pending; returns how many tasks were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.live.len();
        self.live.clear();
        self.queue.clear();
        n
    }

    /// Pop the earliest task due at or before `until`, moving the clock to its deadline.
    pub fn pop_due(&mut self, until: Millis) -> Option<Fired<T>> {
        loop {
            let Reverse((at, id)) = *self.queue.peek()?;
            if at > until {
                return None;
            }
            self.queue.pop();
            let Some(entry) = self.live.remove(&id) else {
                continue;
            };
            self.now = self.now.max(entry.at);
            return Some(Fired {
                id: TimerId(id),
                at: entry.at,
                kind: entry.kind,
                task: entry.task,
            });
        }
    }

    /// Move the clock forward to `until`. The clock never runs backwards.
    pub fn settle(&mut self, until: Millis) {
        if until < self.now {
            tracing::debug!(now = self.now.0, until = until.0, "ignoring backwards clock");
            return;
        }
        self.now = until;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scheduler.rs"]
mod tests;
