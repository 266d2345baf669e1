pub type Pid = u32;
pub type Ticks = u64;

// Priorities are drawn from [0, 10); lower value = higher priority.
pub const MIN_PRIORITY: u8 = 0;
pub const MAX_PRIORITY: u8 = 9;

const BASE_SHARE: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: u8,
    pub remaining: Ticks,
    pub started: Option<Ticks>,
    pub finished: bool,
    // Valid only once `finished` is set.
    pub completion: Ticks,
    // Fair-share bookkeeping; Lottery reuses `weight` as its ticket count.
    pub weight: u64,
    pub vruntime: u64,
}

impl Process {
    pub fn new(pid: Pid, arrival: Ticks, burst: Ticks, priority: u8) -> Self {
        debug_assert!(priority <= MAX_PRIORITY, "priority {priority} out of range");
        Self {
            pid,
            arrival,
            burst,
            priority,
            remaining: burst,
            started: None,
            finished: false,
            completion: 0,
            weight: (10 - priority as u64) * BASE_SHARE,
            vruntime: 0,
        }
    }

    // Clear all run state so a cloned set starts a policy run fresh.
    pub fn reset(&mut self) {
        self.remaining = self.burst;
        self.started = None;
        self.finished = false;
        self.completion = 0;
        self.weight = (10 - self.priority as u64) * BASE_SHARE;
        self.vruntime = 0;
    }

    pub fn ready(&self, now: Ticks) -> bool {
        self.arrival <= now && !self.finished
    }

    pub fn turnaround(&self) -> Option<Ticks> {
        self.finished.then(|| self.completion - self.arrival)
    }

    pub fn waiting(&self) -> Option<Ticks> {
        self.turnaround().map(|t| t - self.burst)
    }
}
