use super::process::{Process, Ticks};
use super::timeline::{Subject, Timeline};

/// Cross-checks engine state after every decision point. All checks are
/// `debug_assert!`s: a violation is a programming error, never a runtime
/// condition.
#[derive(Debug)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn observe(&mut self, procs: &[Process], timeline: &Timeline, now: Ticks) {
        self.step += 1;

        let mut cursor = 0;
        for seg in timeline.segments() {
            debug_assert_eq!(
                seg.start, cursor,
                "timeline gap before segment starting at {}",
                seg.start
            );
            debug_assert!(seg.end > seg.start, "empty timeline segment");
            cursor = seg.end;

            if let Subject::Proc(pid) = seg.subject {
                let p = procs
                    .iter()
                    .find(|p| p.pid == pid)
                    .expect("timeline references an unknown pid");
                debug_assert!(
                    seg.start >= p.arrival,
                    "P{pid} dispatched at {} before its arrival {}",
                    seg.start,
                    p.arrival
                );
            }
        }
        debug_assert_eq!(cursor, now, "timeline does not reach the clock");

        for p in procs {
            debug_assert!(
                p.remaining <= p.burst,
                "P{} remaining {} exceeds burst {}",
                p.pid,
                p.remaining,
                p.burst
            );
            debug_assert_eq!(
                p.finished,
                p.remaining == 0 && p.started.is_some(),
                "P{} finished flag out of sync with remaining",
                p.pid
            );
            if p.finished {
                debug_assert!(
                    p.completion <= now,
                    "P{} completed at {} in the future of tick {}",
                    p.pid,
                    p.completion,
                    now
                );
            }
        }
    }
}
