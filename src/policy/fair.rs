use super::{scan_min, Policy};
use crate::core::{Process, Ticks};

pub const MIN_GRANULARITY: Ticks = 1;
pub const BASE_WEIGHT: u64 = 1000;

/// Proportional-share scheduling in the CFS mold: the least-served ready
/// process (smallest vruntime) runs for a slice sized by its share of the
/// ready set's total weight, then is charged virtual time inversely
/// proportional to its weight.
pub struct FairShare;

impl FairShare {
    // Ready-set weight total, recomputed at every decision point.
    fn total_weight(procs: &[Process], now: Ticks) -> u64 {
        procs
            .iter()
            .filter(|p| p.ready(now))
            .map(|p| p.weight)
            .sum()
    }
}

impl Policy for FairShare {
    fn name(&self) -> &'static str {
        "Fair Share"
    }

    fn select(&mut self, procs: &[Process], now: Ticks) -> Option<usize> {
        scan_min(procs, now, |p| p.vruntime)
    }

    fn slice(&self, procs: &[Process], idx: usize, now: Ticks) -> Ticks {
        let total = Self::total_weight(procs, now);
        debug_assert!(total > 0, "selected from a weightless ready set");

        // Everyone gets a share of the latency window each cycle.
        let target_latency = 2 * procs.len() as Ticks;
        (target_latency * procs[idx].weight / total).max(MIN_GRANULARITY)
    }

    fn charge(&mut self, procs: &mut [Process], idx: usize, ran: Ticks, _now: Ticks) {
        let p = &mut procs[idx];
        p.vruntime += ran * BASE_WEIGHT / p.weight;
    }
}
