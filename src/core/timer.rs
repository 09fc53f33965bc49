//! Tick pacing.
//!
//! `TickTimer` is the explicit handle for the periodic tick: created by
//! `start`, carried by the owner while the loop is live, and dropped to stop
//! it. The host polls `timeout` to sleep until the next deadline and calls
//! `due` to consume elapsed ticks.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    next_deadline: Instant,
}

impl TickTimer {
    /// Start a periodic schedule; the first tick is due one full interval
    /// from now.
    pub fn start(interval: Duration) -> Self {
        Self {
            interval,
            next_deadline: Instant::now() + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time remaining until the next tick, zero if already due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next_deadline.saturating_duration_since(now)
    }

    /// True if a tick is due; advances the deadline by one interval from
    /// `now` so a stalled host does not burst a backlog of ticks.
    pub fn due(&mut self, now: Instant) -> bool {
        if now >= self.next_deadline {
            self.next_deadline = now + self.interval;
            true
        } else {
            false
        }
    }
}
