use std::time::Duration;

/// Most steps a single `advance` call may fire. Backlog beyond this is dropped
/// so a stalled frame doesn't replay a burst of generations.
pub const MAX_CATCH_UP: u32 = 4;

/// StepTimer turns elapsed frame time into whole step invocations
/// at a fixed, reconfigurable interval.
#[derive(Clone, Debug)]
pub struct StepTimer {
    interval: Duration,
    accumulated: Duration,
    active: bool,
}

impl StepTimer {
    /// Create a stopped timer
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
            active: false,
        }
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    /// Stop firing and forget any partial interval
    pub fn stop(&mut self) {
        self.active = false;
        self.accumulated = Duration::ZERO;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the interval without touching the active flag.
    /// Time already accumulated is capped just below the new interval,
    /// so shortening it fires at most one step on the next advance.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
        self.accumulated = self
            .accumulated
            .min(interval.saturating_sub(Duration::from_nanos(1)));
    }

    /// Feed elapsed time; returns how many intervals fired
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.active || self.interval.is_zero() {
            return 0;
        }

        self.accumulated += elapsed;
        let mut fired = 0;
        while self.accumulated >= self.interval && fired < MAX_CATCH_UP {
            self.accumulated -= self.interval;
            fired += 1;
        }

        if self.accumulated >= self.interval {
            // Keep phase, drop the rest
            self.accumulated = Duration::from_nanos(
                (self.accumulated.as_nanos() % self.interval.as_nanos()) as u64,
            );
        }

        fired
    }
}
