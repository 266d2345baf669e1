use super::{scan_min, Policy};
use crate::core::{Process, Ticks};

/// First-come-first-served: earliest arrival wins, runs to completion.
pub struct Fcfs;

impl Policy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn select(&mut self, procs: &[Process], now: Ticks) -> Option<usize> {
        scan_min(procs, now, |p| p.arrival)
    }

    fn slice(&self, procs: &[Process], idx: usize, _now: Ticks) -> Ticks {
        procs[idx].remaining
    }
}
