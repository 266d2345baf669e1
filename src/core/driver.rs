use log::debug;

use super::observer::Observer;
use super::process::{Process, Ticks};
use super::timeline::{Subject, Timeline};
use super::{SimError, MAX_PROCESSES};
use crate::policy::Policy;

/// Outcome of one policy run: the mutated process records plus the timeline.
#[derive(Debug, Clone)]
pub struct SimRun {
    pub name: &'static str,
    pub procs: Vec<Process>,
    pub timeline: Timeline,
}

/// Generic tick loop shared by every policy. Owns an isolated copy of the
/// canonical process set; the policy only answers "who runs" and "for how
/// long".
pub struct SimCore<P: Policy> {
    procs: Vec<Process>,
    timeline: Timeline,
    now: Ticks,
    completed: usize,
    policy: P,
    observer: Observer,
}

impl<P: Policy> SimCore<P> {
    pub fn new(template: &[Process], policy: P) -> Result<Self, SimError> {
        if template.len() > MAX_PROCESSES {
            return Err(SimError::ProcessCapacity {
                requested: template.len(),
                max: MAX_PROCESSES,
            });
        }

        let mut procs = template.to_vec();
        for p in &mut procs {
            p.reset();
        }

        Ok(Self {
            procs,
            timeline: Timeline::new(),
            now: 0,
            completed: 0,
            policy,
            observer: Observer::new(),
        })
    }

    /// Runs the policy until every process has finished.
    pub fn run(mut self) -> Result<SimRun, SimError> {
        while self.completed < self.procs.len() {
            self.step()?;
        }
        debug!(
            "{}: run complete, makespan {}",
            self.policy.name(),
            self.timeline.makespan()
        );
        Ok(SimRun {
            name: self.policy.name(),
            procs: self.procs,
            timeline: self.timeline,
        })
    }

    // One decision point: select, execute the granted span, settle the books.
    fn step(&mut self) -> Result<(), SimError> {
        match self.policy.select(&self.procs, self.now) {
            Some(idx) => self.dispatch(idx)?,
            None => self.idle()?,
        }
        self.observer.observe(&self.procs, &self.timeline, self.now);
        Ok(())
    }

    fn dispatch(&mut self, idx: usize) -> Result<(), SimError> {
        debug_assert!(
            self.procs[idx].ready(self.now),
            "P{} selected while not ready at tick {}",
            self.procs[idx].pid,
            self.now
        );

        let slice = self.policy.slice(&self.procs, idx, self.now);
        debug_assert!(slice > 0, "policy granted an empty slice");
        let ran = slice.min(self.procs[idx].remaining);

        let start = self.now;
        let end = start + ran;
        let subject = Subject::Proc(self.procs[idx].pid);

        {
            let p = &mut self.procs[idx];
            if p.started.is_none() {
                p.started = Some(start);
            }
            p.remaining -= ran;
        }

        if self.policy.coalesce() {
            self.timeline.record_adjacent(subject, start, end)?;
        } else {
            self.timeline.record(subject, start, end)?;
        }
        self.now = end;

        self.policy.charge(&mut self.procs, idx, ran, self.now);

        let p = &mut self.procs[idx];
        if p.remaining == 0 {
            p.finished = true;
            p.completion = end;
            self.completed += 1;
            debug!("{}: P{} finished at tick {}", self.policy.name(), p.pid, end);
        }
        Ok(())
    }

    // Empty ready set: burn exactly one tick and re-evaluate.
    fn idle(&mut self) -> Result<(), SimError> {
        debug_assert!(
            !self.procs.iter().any(|p| p.ready(self.now)),
            "policy idled at tick {} with ready processes",
            self.now
        );
        self.timeline.record(Subject::Idle, self.now, self.now + 1)?;
        self.now += 1;
        Ok(())
    }
}
