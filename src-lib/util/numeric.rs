// This file is part of draw-bench and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 draw-bench contributors

//! Numeric utilities

use std::time::Duration;

/// Length of one frame at the given rate. A rate of 0 is treated as 1 FPS.
pub fn fps_to_tick_interval(fps: u32) -> Duration {
    let micros = 1_000_000u32.div_ceil(fps.max(1));
    Duration::from_micros(micros as u64)
}

/// Number of guard frames needed to fill `delay` at `fps`. A zero delay needs no frames at all. A rate
/// of 0 is treated as 1 FPS, matching [`fps_to_tick_interval`].
pub fn frames_for_delay(delay: Duration, fps: u32) -> u64 {
    let frames = delay.as_micros() * fps.max(1) as u128 / 1_000_000;
    u64::try_from(frames).unwrap_or(u64::MAX)
}

/// `numerator * percentage / 100` without intermediate overflow
pub fn percent_of(numerator: u32, percentage: u32) -> u32 {
    let scaled = numerator as u64 * percentage as u64 / 100;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod test_numeric {
    use super::*;

    #[test]
    fn tick_interval_at_30_fps() {
        assert_eq!(fps_to_tick_interval(30), Duration::from_micros(33_334));
    }

    #[test]
    fn tick_interval_rounds_up() {
        assert_eq!(fps_to_tick_interval(3), Duration::from_micros(333_334));
    }

    #[test]
    fn tick_interval_zero_fps() {
        assert_eq!(fps_to_tick_interval(0), Duration::from_secs(1));
    }

    #[test]
    fn no_frames_for_no_delay() {
        assert_eq!(frames_for_delay(Duration::ZERO, 30), 0);
    }

    #[test]
    fn frames_for_whole_seconds() {
        assert_eq!(frames_for_delay(Duration::from_secs(5), 30), 150);
        assert_eq!(frames_for_delay(Duration::from_secs(1), 30), 30);
    }

    #[test]
    fn frames_for_fractional_delay_round_down() {
        assert_eq!(frames_for_delay(Duration::from_millis(50), 30), 1);
        assert_eq!(frames_for_delay(Duration::from_millis(10), 30), 0);
    }

    #[test]
    fn frames_for_delay_zero_fps() {
        assert_eq!(frames_for_delay(Duration::from_secs(2), 0), 2);
        assert_eq!(frames_for_delay(Duration::ZERO, 0), 0);
    }

    #[test]
    fn percent_of_large_values() {
        assert_eq!(percent_of(1920, 50), 960);
        assert_eq!(percent_of(u32::MAX, 100), u32::MAX);
        assert_eq!(percent_of(u32::MAX, 200), u32::MAX);
    }
}
