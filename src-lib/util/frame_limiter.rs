// This file is part of draw-bench and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 draw-bench contributors

use std::thread;
use std::time::{Duration, Instant};

/// Caps how often a loop iterates by sleeping until the next frame deadline. Never used for
/// measurement.
#[derive(Debug)]
pub struct FrameLimiter {
    interval: Duration,
    next_frame: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(interval: Duration) -> Self {
        FrameLimiter {
            interval,
            next_frame: None,
        }
    }

    /// Sleep until one interval has passed since the previous tick. If the loop fell behind, the
    /// schedule restarts from now instead of trying to catch up with a burst of frames.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.next_frame = match self.next_frame {
            Some(deadline) if deadline > now => {
                thread::sleep(deadline - now);
                Some(deadline + self.interval)
            }
            _ => Some(now + self.interval),
        };
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn first_tick_does_not_sleep() {
        let mut limiter = FrameLimiter::new(Duration::from_secs(10));
        let start = Instant::now();
        limiter.tick();
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn ticks_are_spaced_by_interval() {
        let interval = Duration::from_millis(20);
        let mut limiter = FrameLimiter::new(interval);
        let start = Instant::now();
        for _ in 0..4 {
            limiter.tick();
        }
        // the first tick is free, the next three wait a full interval each
        assert!(start.elapsed() >= interval * 3);
    }
}
