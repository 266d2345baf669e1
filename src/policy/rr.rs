use std::collections::VecDeque;

use super::{Policy, QUANTUM};
use crate::core::{Process, Ticks};

/// Round Robin with a fixed quantum and an explicit FIFO ready queue.
/// Arrivals that land inside a span cut ahead of the process that just used
/// its quantum.
pub struct RoundRobin {
    queue: VecDeque<usize>,
    // Indices awaiting admission, sorted by (arrival, index).
    pending: VecDeque<usize>,
    primed: bool,
}

impl RoundRobin {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            pending: VecDeque::new(),
            primed: false,
        }
    }

    fn prime(&mut self, procs: &[Process]) {
        let mut order: Vec<usize> = (0..procs.len()).collect();
        order.sort_by_key(|&i| (procs[i].arrival, i));
        self.pending = order.into();
        self.queue = VecDeque::with_capacity(procs.len());
    }

    // Move every process that has arrived by `now` onto the ready queue.
    fn admit_up_to(&mut self, procs: &[Process], now: Ticks) {
        while let Some(&i) = self.pending.front() {
            if procs[i].arrival > now {
                break;
            }
            self.pending.pop_front();
            self.queue.push_back(i);
        }
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn select(&mut self, procs: &[Process], now: Ticks) -> Option<usize> {
        if !self.primed {
            self.prime(procs);
            self.primed = true;
        }
        self.admit_up_to(procs, now);
        self.queue.pop_front()
    }

    fn slice(&self, _procs: &[Process], _idx: usize, _now: Ticks) -> Ticks {
        QUANTUM
    }

    fn charge(&mut self, procs: &mut [Process], idx: usize, _ran: Ticks, now: Ticks) {
        // Span-interior arrivals enqueue before the preempted process.
        self.admit_up_to(procs, now);
        if procs[idx].remaining > 0 {
            self.queue.push_back(idx);
        }
    }

    // Each dispatch stays its own timeline record.
    fn coalesce(&self) -> bool {
        false
    }
}
