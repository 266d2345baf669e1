use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::{Process, SimCore, SimError, SimRun};
use crate::policy::{
    FairShare, Fcfs, Lottery, PriorityNonPreemptive, PriorityPreemptive, RoundRobin,
    ShortestJobFirst, ShortestRemainingTime,
};

/// Runs every policy over an isolated copy of the canonical process set,
/// strictly sequentially. `seed` drives the Lottery draws; everything else
/// is deterministic given the template.
pub fn run_all(template: &[Process], seed: u64) -> Result<Vec<SimRun>, SimError> {
    let runs = vec![
        SimCore::new(template, Fcfs)?.run()?,
        SimCore::new(template, ShortestJobFirst)?.run()?,
        SimCore::new(template, ShortestRemainingTime::new())?.run()?,
        SimCore::new(template, PriorityNonPreemptive)?.run()?,
        SimCore::new(template, PriorityPreemptive::new())?.run()?,
        SimCore::new(template, RoundRobin::new())?.run()?,
        SimCore::new(template, Lottery::new(StdRng::seed_from_u64(seed)))?.run()?,
        SimCore::new(template, FairShare)?.run()?,
    ];

    for run in &runs {
        info!(
            "{}: makespan {}, idle {}",
            run.name,
            run.timeline.makespan(),
            run.timeline.idle_ticks()
        );
    }
    Ok(runs)
}
