//! One-shot task scheduling on simulated time.
//!
//! This stands in for a UI toolkit's "run this once after N ms" primitive.
//! Tasks are plain data; the controller decides what they mean when they
//! come due. There are no cancellation handles: a task that should no longer
//! act carries a stale generation and is ignored by its receiver.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::data::entity::EntityId;

/// Work item delivered back to the controller when due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Periodic sample for an entity's tick loop.
    Tick { entity: EntityId, generation: u64 },
    /// End of a touch: return the entity to baseline.
    ReturnToBaseline { entity: EntityId, generation: u64 },
    /// Global battery/flywheel accumulation step.
    BatteryTick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scheduled {
    due_ms: u64,
    seq: u64,
    task: Task,
}

// Earlier due time first; ties run in scheduling order.
impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due_ms, self.seq).cmp(&(other.due_ms, other.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Queue of pending one-shot tasks on a millisecond clock.
#[derive(Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Scheduled>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time. While a task runs this is its due time.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Run `task` once, `delay_ms` after now.
    pub fn schedule_once(&mut self, delay_ms: u64, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Scheduled {
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq,
            task,
        }));
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Pop the earliest task due at or before `until_ms`, moving the clock to
    /// its due time.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Task> {
        match self.queue.peek() {
            Some(Reverse(s)) if s.due_ms <= until_ms => {}
            _ => return None,
        }
        let Reverse(s) = self.queue.pop()?;
        self.now_ms = self.now_ms.max(s.due_ms);
        Some(s.task)
    }

    /// Move every task due before `until_ms` to `until_ms`. Moved tasks run
    /// in scheduling order. Returns how many tasks were moved.
    pub fn postpone_until(&mut self, until_ms: u64) -> usize {
        let mut moved = 0;
        self.queue = std::mem::take(&mut self.queue)
            .into_iter()
            .map(|Reverse(mut s)| {
                if s.due_ms < until_ms {
                    s.due_ms = until_ms;
                    moved += 1;
                }
                Reverse(s)
            })
            .collect();
        moved
    }

    /// Move the clock forward to `now_ms` (never backwards).
    pub fn advance_clock(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_due_order_then_fifo() {
        let mut s = Scheduler::new();
        s.schedule_once(20, Task::BatteryTick);
        s.schedule_once(
            10,
            Task::Tick {
                entity: EntityId::Custom,
                generation: 1,
            },
        );
        s.schedule_once(
            10,
            Task::Tick {
                entity: EntityId::SinglePlant,
                generation: 1,
            },
        );

        assert_eq!(s.pop_due(5), None);
        assert_eq!(
            s.pop_due(30),
            Some(Task::Tick {
                entity: EntityId::Custom,
                generation: 1
            })
        );
        assert_eq!(s.now_ms(), 10);
        assert_eq!(
            s.pop_due(30),
            Some(Task::Tick {
                entity: EntityId::SinglePlant,
                generation: 1
            })
        );
        assert_eq!(s.pop_due(30), Some(Task::BatteryTick));
        assert_eq!(s.now_ms(), 20);
        assert_eq!(s.pop_due(30), None);
    }

    #[test]
    fn postponed_tasks_run_in_scheduling_order() {
        let mut s = Scheduler::new();
        s.schedule_once(10, Task::BatteryTick);
        s.schedule_once(
            5,
            Task::Tick {
                entity: EntityId::Custom,
                generation: 1,
            },
        );
        s.schedule_once(
            500,
            Task::ReturnToBaseline {
                entity: EntityId::Custom,
                generation: 1,
            },
        );

        assert_eq!(s.postpone_until(100), 2);
        assert_eq!(s.pop_due(99), None);
        // Equal due times fall back to scheduling order.
        assert_eq!(s.pop_due(100), Some(Task::BatteryTick));
        assert_eq!(
            s.pop_due(100),
            Some(Task::Tick {
                entity: EntityId::Custom,
                generation: 1
            })
        );
        assert_eq!(s.now_ms(), 100);
        assert_eq!(s.pop_due(499), None);
        assert_eq!(s.pending(), 1);
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut s = Scheduler::new();
        s.advance_clock(100);
        s.advance_clock(50);
        assert_eq!(s.now_ms(), 100);
    }
}
