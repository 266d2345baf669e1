use average::{Estimate, Mean};

use crate::core::{Pid, Process, SimError, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: u8,
    pub started: Ticks,
    pub completion: Ticks,
    pub waiting: Ticks,
    pub turnaround: Ticks,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub rows: Vec<ProcessMetrics>,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
}

/// Derives per-process and average metrics from a completed run. Pure
/// function: the process records were already fixed by the engine.
pub fn summarize(procs: &[Process]) -> Result<Summary, SimError> {
    if procs.is_empty() {
        return Err(SimError::EmptyWorkload);
    }

    let rows: Vec<ProcessMetrics> = procs
        .iter()
        .map(|p| {
            debug_assert!(p.finished, "metrics derived from an unfinished process");
            ProcessMetrics {
                pid: p.pid,
                arrival: p.arrival,
                burst: p.burst,
                priority: p.priority,
                started: p.started.expect("finished process was never dispatched"),
                completion: p.completion,
                waiting: p.waiting().expect("finished process lacks waiting time"),
                turnaround: p
                    .turnaround()
                    .expect("finished process lacks turnaround time"),
            }
        })
        .collect();

    let avg_waiting = rows
        .iter()
        .map(|r| r.waiting as f64)
        .collect::<Mean>()
        .estimate();
    let avg_turnaround = rows
        .iter()
        .map(|r| r.turnaround as f64)
        .collect::<Mean>()
        .estimate();

    Ok(Summary {
        rows,
        avg_waiting,
        avg_turnaround,
    })
}
