pub mod fair;
pub mod fcfs;
pub mod lottery;
pub mod priority;
pub mod rr;
pub mod sjf;

pub use fair::FairShare;
pub use fcfs::Fcfs;
pub use lottery::Lottery;
pub use priority::{PriorityNonPreemptive, PriorityPreemptive};
pub use rr::RoundRobin;
pub use sjf::{ShortestJobFirst, ShortestRemainingTime};

use crate::core::{Process, Ticks};

// Fixed dispatch quantum shared by Round Robin and Lottery.
pub const QUANTUM: Ticks = 4;

/// Per-policy decision strategy driven by the generic tick loop in
/// [`crate::core::SimCore`]. A policy only decides *who* runs and for *how
/// long*; the driver owns the clock, the timeline, and completion
/// bookkeeping.
pub trait Policy {
    fn name(&self) -> &'static str;

    /// Picks the ready process to run next, or `None` to idle for one tick.
    fn select(&mut self, procs: &[Process], now: Ticks) -> Option<usize>;

    /// Ticks the selection may hold the CPU. The driver clamps the grant to
    /// the process's remaining burst.
    fn slice(&self, procs: &[Process], idx: usize, now: Ticks) -> Ticks;

    /// Post-span bookkeeping: virtual-runtime accrual, queue maintenance.
    /// `now` is the clock after the span executed.
    fn charge(&mut self, _procs: &mut [Process], _idx: usize, _ran: Ticks, _now: Ticks) {}

    /// Whether adjacent spans of one process coalesce into a single timeline
    /// entry. Round Robin keeps each dispatch as its own record.
    fn coalesce(&self) -> bool {
        true
    }
}

// First-found minimum over the ready set; ties keep the smallest index.
pub(crate) fn scan_min<K: Ord + Copy>(
    procs: &[Process],
    now: Ticks,
    key: impl Fn(&Process) -> K,
) -> Option<usize> {
    scan_min_sticky(procs, now, None, key)
}

// Same scan, seeded with the previously running process so that only a
// strictly better candidate takes the CPU from it.
pub(crate) fn scan_min_sticky<K: Ord + Copy>(
    procs: &[Process],
    now: Ticks,
    last: Option<usize>,
    key: impl Fn(&Process) -> K,
) -> Option<usize> {
    let mut best: Option<(usize, K)> = last
        .filter(|&i| procs[i].ready(now))
        .map(|i| (i, key(&procs[i])));

    for (i, p) in procs.iter().enumerate() {
        if !p.ready(now) {
            continue;
        }
        let k = key(p);
        match best {
            Some((_, bk)) if k >= bk => {}
            _ => best = Some((i, k)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Process;

    fn procs() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5, 2),
            Process::new(2, 1, 3, 1),
            Process::new(3, 2, 8, 3),
        ]
    }

    #[test]
    fn scan_min_skips_unarrived_processes() {
        let procs = procs();
        assert_eq!(scan_min(&procs, 0, |p| p.priority), Some(0));
        assert_eq!(scan_min(&procs, 1, |p| p.priority), Some(1));
    }

    #[test]
    fn scan_min_breaks_ties_by_index() {
        let procs = vec![Process::new(1, 0, 4, 5), Process::new(2, 0, 4, 5)];
        assert_eq!(scan_min(&procs, 0, |p| p.burst), Some(0));
    }

    #[test]
    fn sticky_seed_survives_an_exact_tie() {
        let procs = vec![Process::new(1, 0, 4, 5), Process::new(2, 0, 4, 5)];
        assert_eq!(
            scan_min_sticky(&procs, 0, Some(1), |p| p.remaining),
            Some(1)
        );
    }

    #[test]
    fn sticky_seed_loses_to_a_strictly_better_candidate() {
        let mut procs = vec![Process::new(1, 0, 4, 5), Process::new(2, 0, 4, 5)];
        procs[1].remaining = 2;
        assert_eq!(
            scan_min_sticky(&procs, 0, Some(0), |p| p.remaining),
            Some(1)
        );
    }

    #[test]
    fn empty_ready_set_yields_none() {
        let procs = vec![Process::new(1, 5, 4, 5)];
        assert_eq!(scan_min(&procs, 0, |p| p.burst), None);
    }
}
