use super::{scan_min, scan_min_sticky, Policy};
use crate::core::{Process, Ticks};

/// Shortest-job-first, non-preemptive: smallest total burst among the ready
/// set; once dispatched it runs to completion.
pub struct ShortestJobFirst;

impl Policy for ShortestJobFirst {
    fn name(&self) -> &'static str {
        "SJF (non-preemptive)"
    }

    fn select(&mut self, procs: &[Process], now: Ticks) -> Option<usize> {
        scan_min(procs, now, |p| p.burst)
    }

    fn slice(&self, procs: &[Process], idx: usize, _now: Ticks) -> Ticks {
        procs[idx].remaining
    }
}

/// Shortest-remaining-time-first: reselected every tick. The running process
/// keeps the CPU on an exact tie so equal candidates do not churn.
pub struct ShortestRemainingTime {
    last: Option<usize>,
}

impl ShortestRemainingTime {
    pub fn new() -> Self {
        Self { last: None }
    }
}

impl Default for ShortestRemainingTime {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for ShortestRemainingTime {
    fn name(&self) -> &'static str {
        "SJF (preemptive)"
    }

    fn select(&mut self, procs: &[Process], now: Ticks) -> Option<usize> {
        let pick = scan_min_sticky(procs, now, self.last, |p| p.remaining);
        self.last = pick;
        pick
    }

    fn slice(&self, _procs: &[Process], _idx: usize, _now: Ticks) -> Ticks {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Segment, SimCore, Subject};

    fn template() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5, 2),
            Process::new(2, 1, 3, 1),
            Process::new(3, 2, 8, 3),
        ]
    }

    #[test]
    fn non_preemptive_ignores_shorter_late_arrivals() {
        // P2 is shorter but P1 already holds the CPU.
        let run = SimCore::new(&template(), ShortestJobFirst)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(
            run.timeline.segments(),
            &[
                Segment {
                    subject: Subject::Proc(1),
                    start: 0,
                    end: 5
                },
                Segment {
                    subject: Subject::Proc(2),
                    start: 5,
                    end: 8
                },
                Segment {
                    subject: Subject::Proc(3),
                    start: 8,
                    end: 16
                },
            ]
        );
    }

    #[test]
    fn preemptive_switches_to_shorter_remaining() {
        let run = SimCore::new(&template(), ShortestRemainingTime::new())
            .unwrap()
            .run()
            .unwrap();
        // P2 (burst 3) preempts P1 (remaining 4) at tick 1.
        assert_eq!(
            run.timeline.segments(),
            &[
                Segment {
                    subject: Subject::Proc(1),
                    start: 0,
                    end: 1
                },
                Segment {
                    subject: Subject::Proc(2),
                    start: 1,
                    end: 4
                },
                Segment {
                    subject: Subject::Proc(1),
                    start: 4,
                    end: 8
                },
                Segment {
                    subject: Subject::Proc(3),
                    start: 8,
                    end: 16
                },
            ]
        );
        let waiting: Vec<_> = run.procs.iter().map(|p| p.waiting().unwrap()).collect();
        assert_eq!(waiting, [3, 0, 6]);
    }

    #[test]
    fn exact_tie_does_not_preempt() {
        // At tick 2 both have remaining 3; P1 keeps the CPU.
        let template = vec![Process::new(1, 0, 5, 5), Process::new(2, 2, 3, 5)];
        let run = SimCore::new(&template, ShortestRemainingTime::new())
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(run.timeline.segments().len(), 2);
        assert_eq!(run.procs[0].completion, 5);
        assert_eq!(run.procs[1].completion, 8);
    }
}
