//! Simulation clock and repeating timers.
//!
//! All timing is driven by the host's frame dispatch: the clock advances at
//! the top of each tick and timers are polled afterwards, so within one tick
//! perception always runs before any timer callback scheduled for the same
//! boundary.

/// Global game time clock (in seconds)
#[derive(Debug, Clone)]
pub struct GameClock {
    /// Current game time in seconds (simulation time, not real time)
    pub time: f32,
}

impl GameClock {
    pub fn new() -> Self {
        Self { time: 0.0 }
    }

    /// Advance time to the given timestamp
    pub fn advance_to(&mut self, time: f32) {
        debug_assert!(
            time >= self.time,
            "Cannot go backwards in time: {} -> {}",
            self.time,
            time
        );
        self.time = time;
    }

    /// Advance time by a frame delta
    pub fn advance_by(&mut self, dt: f32) {
        self.advance_to(self.time + dt);
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// A repeating deferred task slot.
///
/// Single-flight by construction: `fire_if_due` reports at most one firing
/// per poll and reschedules relative to the poll time, so a long frame never
/// produces a burst of catch-up firings.
#[derive(Debug, Clone, Default)]
pub struct RepeatingTimer {
    interval: f32,
    next_due: Option<f32>,
}

impl RepeatingTimer {
    pub fn new() -> Self {
        Self {
            interval: 0.0,
            next_due: None,
        }
    }

    /// Start (or restart) the timer at the given cadence
    pub fn start(&mut self, interval: f32, now: f32) {
        self.interval = interval;
        self.next_due = Some(now + interval);
    }

    /// Deactivate the timer without firing
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Poll the timer: fire at most once and reschedule
    pub fn fire_if_due(&mut self, now: f32) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}
