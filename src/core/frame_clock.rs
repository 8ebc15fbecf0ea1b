//! Frame-rate throttle for the main loop.

use std::thread;
use std::time::{Duration, Instant};

/// Caps the loop at a fixed number of frames per second.
///
/// Sleeps away whatever is left of the frame budget; a slow frame is never
/// compensated for, so the rate has an upper bound only.
#[derive(Debug)]
pub struct FrameClock {
    budget: Duration,
    last_frame: Instant,
}

impl FrameClock {
    pub fn new(frames_per_second: u32) -> Self {
        Self {
            budget: frame_budget(frames_per_second),
            last_frame: Instant::now(),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Block until the current frame's budget is spent. Returns the time
    /// since the previous call.
    pub fn tick(&mut self) -> Duration {
        if let Some(wait) = remaining_budget(self.budget, self.last_frame.elapsed()) {
            thread::sleep(wait);
        }
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;
        delta
    }
}

/// Duration of one frame at the given rate. A zero rate is treated as 1.
pub fn frame_budget(frames_per_second: u32) -> Duration {
    Duration::from_secs(1) / frames_per_second.max(1)
}

/// Time left to sleep, or `None` if the frame already used its budget.
pub fn remaining_budget(budget: Duration, elapsed: Duration) -> Option<Duration> {
    budget.checked_sub(elapsed).filter(|d| !d.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_budget_thirty_fps() {
        let budget = frame_budget(30);
        assert_eq!(budget.as_micros(), 33_333);
    }

    #[test]
    fn test_frame_budget_zero_rate() {
        assert_eq!(frame_budget(0), Duration::from_secs(1));
    }

    #[test]
    fn test_remaining_budget_fast_frame() {
        let budget = Duration::from_millis(33);
        assert_eq!(
            remaining_budget(budget, Duration::from_millis(10)),
            Some(Duration::from_millis(23))
        );
    }

    #[test]
    fn test_remaining_budget_slow_frame_never_sleeps() {
        let budget = Duration::from_millis(33);
        assert_eq!(remaining_budget(budget, Duration::from_millis(50)), None);
        assert_eq!(remaining_budget(budget, budget), None);
    }

    #[test]
    fn test_tick_enforces_minimum_spacing() {
        let mut clock = FrameClock::new(100);
        clock.tick();
        let delta = clock.tick();
        assert!(delta >= Duration::from_millis(9), "delta was {:?}", delta);
    }
}
