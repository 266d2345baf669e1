use super::{scan_min, scan_min_sticky, Policy};
use crate::core::{Process, Ticks};

/// Non-preemptive priority: lowest priority value among the ready set wins
/// and runs to completion.
pub struct PriorityNonPreemptive;

impl Policy for PriorityNonPreemptive {
    fn name(&self) -> &'static str {
        "Priority (non-preemptive)"
    }

    fn select(&mut self, procs: &[Process], now: Ticks) -> Option<usize> {
        scan_min(procs, now, |p| p.priority)
    }

    fn slice(&self, procs: &[Process], idx: usize, _now: Ticks) -> Ticks {
        procs[idx].remaining
    }
}

/// Preemptive priority, reselected every tick with the same sticky tie-break
/// as [`super::ShortestRemainingTime`].
pub struct PriorityPreemptive {
    last: Option<usize>,
}

impl PriorityPreemptive {
    pub fn new() -> Self {
        Self { last: None }
    }
}

impl Default for PriorityPreemptive {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for PriorityPreemptive {
    fn name(&self) -> &'static str {
        "Priority (preemptive)"
    }

    fn select(&mut self, procs: &[Process], now: Ticks) -> Option<usize> {
        let pick = scan_min_sticky(procs, now, self.last, |p| p.priority);
        self.last = pick;
        pick
    }

    fn slice(&self, _procs: &[Process], _idx: usize, _now: Ticks) -> Ticks {
        1
    }
}
