//! One-shot deferred callbacks on a virtual clock
//!
//! The board never runs closures later. It schedules a [`Deferred`] task and
//! the tick driver hands due tasks back to the board in order.

use std::time::Duration;

use super::card::CardId;

/// Work the board asks to run after a delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Start flipping a card (mismatched cards turning back)
    Flip(CardId),
    /// A flip reached its midpoint
    FlipHalf(CardId),
    /// A flip finished
    FlipComplete(CardId),
    /// The pending comparison/animation is over, accept input again
    ClearBusy,
    /// Every pair has been found
    Won,
}

/// Anything that can run a task once after a delay
pub trait Scheduler {
    fn schedule_once(&mut self, delay: Duration, task: Deferred);
}

#[derive(Debug, Clone)]
struct Timer {
    due: Duration,
    seq: u64,
    task: Deferred,
}

/// Deterministic timer queue driven by explicit clock advances.
///
/// Tasks due at the same instant fire in the order they were scheduled.
/// While draining, the clock stands at the due time of the task just popped,
/// so work scheduled from inside a task is timed from when it fired.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now: Duration,
    /// Where the clock settles once nothing else is due
    target: Duration,
    next_seq: u64,
    /// Sorted by (due, seq)
    pending: Vec<Timer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move the clock forward; due tasks are collected with [`pop_due`](Self::pop_due)
    pub fn advance(&mut self, dt: Duration) {
        self.target += dt;
        if self.pending.first().is_none_or(|t| t.due > self.target) {
            self.now = self.target;
        }
    }

    /// Next task whose time has come. The clock moves to its due time.
    pub fn pop_due(&mut self) -> Option<Deferred> {
        match self.pending.first() {
            Some(timer) if timer.due <= self.target => {
                let timer = self.pending.remove(0);
                self.now = self.now.max(timer.due);
                Some(timer.task)
            }
            _ => {
                self.now = self.target;
                None
            }
        }
    }

    /// Time until the earliest pending task, zero if already due
    pub fn next_due_in(&self) -> Option<Duration> {
        self.pending
            .first()
            .map(|t| t.due.saturating_sub(self.now))
    }

    /// Drop every pending task (board refill)
    pub fn clear(&mut self) {
        if !self.pending.is_empty() {
            log::debug!("Memory: dropping {} pending timers", self.pending.len());
        }
        self.pending.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Scheduler for TimerQueue {
    fn schedule_once(&mut self, delay: Duration, task: Deferred) {
        let timer = Timer {
            due: self.now + delay,
            seq: self.next_seq,
            task,
        };
        self.next_seq += 1;

        let at = self
            .pending
            .partition_point(|t| (t.due, t.seq) <= (timer.due, timer.seq));
        self.pending.insert(at, timer);
    }
}
