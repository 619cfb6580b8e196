//! Fixed-rate tick clock
//!
//! Redraws arrive at whatever rate the display runs; the simulation always
//! advances at a fixed number of ticks per second.

use std::time::{Duration, Instant};

pub struct TickClock {
    tick: Duration,
    max_ticks_per_frame: u32,
    accumulator: Duration,
    last: Option<Instant>,
}

impl TickClock {
    pub fn new(ticks_per_second: u32, max_ticks_per_frame: u32) -> Self {
        Self {
            tick: Duration::from_secs(1) / ticks_per_second.max(1),
            max_ticks_per_frame,
            accumulator: Duration::ZERO,
            last: None,
        }
    }

    /// Ticks owed since the previous call. The first call primes the clock and
    /// returns one tick.
    pub fn ticks_due(&mut self, now: Instant) -> u32 {
        let elapsed = match self.last.replace(now) {
            Some(last) => now.saturating_duration_since(last),
            None => self.tick,
        };
        self.advance(elapsed)
    }

    /// Add `elapsed` to the accumulator and drain it in whole ticks.
    /// After a stall the backlog is dropped rather than replayed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.tick && ticks < self.max_ticks_per_frame {
            self.accumulator -= self.tick;
            ticks += 1;
        }
        if ticks == self.max_ticks_per_frame && self.accumulator >= self.tick {
            log::warn!("Dropping {:?} of simulation backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }
        ticks
    }
}
