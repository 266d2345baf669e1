use super::process::{Pid, Ticks};
use super::SimError;

pub const MAX_SEGMENTS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Idle,
    Proc(Pid),
}

// Half-open interval [start, end) of CPU occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub subject: Subject,
    pub start: Ticks,
    pub end: Ticks,
}

impl Segment {
    pub fn len(&self) -> Ticks {
        self.end - self.start
    }
}

/// Append-only record of what occupied the CPU over a single policy run.
/// Segments are contiguous and cover [0, makespan) with no gaps.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a span as a fresh segment.
    pub fn record(&mut self, subject: Subject, start: Ticks, end: Ticks) -> Result<(), SimError> {
        debug_assert!(start < end, "empty span [{start}, {end})");
        debug_assert!(
            self.segments.last().map_or(start == 0, |s| s.end == start),
            "span [{start}, {end}) leaves a gap in the timeline"
        );

        if self.segments.len() == MAX_SEGMENTS {
            return Err(SimError::TimelineCapacity { max: MAX_SEGMENTS });
        }
        self.segments.push(Segment {
            subject,
            start,
            end,
        });
        Ok(())
    }

    /// Appends a span, extending the last segment in place when the subject
    /// matches and the span is contiguous. Per-tick engines and Lottery log
    /// repeated selections of one process through this path.
    pub fn record_adjacent(
        &mut self,
        subject: Subject,
        start: Ticks,
        end: Ticks,
    ) -> Result<(), SimError> {
        if let Some(last) = self.segments.last_mut() {
            if last.subject == subject && last.end == start {
                last.end = end;
                return Ok(());
            }
        }
        self.record(subject, start, end)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Completion tick of the run; 0 for an empty timeline.
    pub fn makespan(&self) -> Ticks {
        self.segments.last().map_or(0, |s| s.end)
    }

    /// Total ticks spent executing processes (everything that is not idle).
    pub fn busy_ticks(&self) -> Ticks {
        self.segments
            .iter()
            .filter(|s| matches!(s.subject, Subject::Proc(_)))
            .map(Segment::len)
            .sum()
    }

    pub fn idle_ticks(&self) -> Ticks {
        self.makespan() - self.busy_ticks()
    }

    /// Reporting transform: collapses consecutive same-subject segments into
    /// one. Leaves the underlying record untouched.
    pub fn merged(&self) -> Vec<Segment> {
        let mut out: Vec<Segment> = Vec::with_capacity(self.segments.len());
        for &seg in &self.segments {
            match out.last_mut() {
                Some(last) if last.subject == seg.subject && last.end == seg.start => {
                    last.end = seg.end;
                }
                _ => out.push(seg),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_and_tracks_makespan() {
        let mut t = Timeline::new();
        t.record(Subject::Proc(1), 0, 5).unwrap();
        t.record(Subject::Proc(2), 5, 8).unwrap();
        assert_eq!(t.segments().len(), 2);
        assert_eq!(t.makespan(), 8);
        assert_eq!(t.busy_ticks(), 8);
        assert_eq!(t.idle_ticks(), 0);
    }

    #[test]
    fn record_adjacent_extends_matching_subject() {
        let mut t = Timeline::new();
        t.record_adjacent(Subject::Proc(1), 0, 1).unwrap();
        t.record_adjacent(Subject::Proc(1), 1, 2).unwrap();
        t.record_adjacent(Subject::Proc(2), 2, 3).unwrap();
        assert_eq!(
            t.segments(),
            &[
                Segment {
                    subject: Subject::Proc(1),
                    start: 0,
                    end: 2
                },
                Segment {
                    subject: Subject::Proc(2),
                    start: 2,
                    end: 3
                },
            ]
        );
    }

    #[test]
    fn merged_collapses_idle_runs() {
        let mut t = Timeline::new();
        t.record(Subject::Idle, 0, 1).unwrap();
        t.record(Subject::Idle, 1, 2).unwrap();
        t.record(Subject::Proc(1), 2, 6).unwrap();
        t.record(Subject::Proc(1), 6, 7).unwrap();

        let merged = t.merged();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].subject, Subject::Idle);
        assert_eq!((merged[0].start, merged[0].end), (0, 2));
        assert_eq!((merged[1].start, merged[1].end), (2, 7));
        // The raw record is untouched.
        assert_eq!(t.segments().len(), 4);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut t = Timeline::new();
        for i in 0..MAX_SEGMENTS as Ticks {
            let pid = (i % 2) as Pid + 1;
            t.record(Subject::Proc(pid), i, i + 1).unwrap();
        }
        let over = t.record(Subject::Proc(1), MAX_SEGMENTS as Ticks, MAX_SEGMENTS as Ticks + 1);
        assert_eq!(over, Err(SimError::TimelineCapacity { max: MAX_SEGMENTS }));
    }

    #[test]
    fn merged_of_empty_timeline_is_empty() {
        assert!(Timeline::new().merged().is_empty());
    }
}
