//! Score-driven difficulty speed.

use serde::{Deserialize, Serialize};

/// Shared scroll speed that rises each time the score crosses a new
/// multiple of `step`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Difficulty {
    pub speed: f64,
    next_threshold: f64,
    step: f64,
    fraction: f64,
}

impl Difficulty {
    pub fn new(base_speed: f64, step: f64, fraction: f64) -> Self {
        Self {
            speed: base_speed,
            next_threshold: step,
            step,
            fraction,
        }
    }

    /// Score at which the next speed-up happens.
    pub fn next_threshold(&self) -> f64 {
        self.next_threshold
    }

    /// Apply every speed-up earned by `score`. Returns how many happened.
    pub fn observe(&mut self, score: f64) -> u32 {
        if self.step <= 0.0 {
            return 0;
        }
        let mut steps = 0;
        while score >= self.next_threshold {
            self.speed += self.speed * self.fraction;
            self.next_threshold += self.step;
            steps += 1;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_exactly_one_hundred_gives_eleven() {
        let mut d = Difficulty::new(10.0, 100.0, 0.1);
        assert_eq!(d.observe(99.5), 0);
        assert_eq!(d.speed, 10.0);
        assert_eq!(d.observe(100.0), 1);
        assert!(approx(d.speed, 11.0), "speed {}", d.speed);
    }

    #[test]
    fn test_scripted_boundaries() {
        let mut d = Difficulty::new(10.0, 100.0, 0.1);
        let mut expected = 10.0;
        let mut score = 0.0;
        while score <= 320.0 {
            let before = d.speed;
            let steps = d.observe(score);
            let crossed = score > 0.0 && score % 100.0 == 0.0;
            if crossed {
                assert_eq!(steps, 1, "score {}", score);
                expected *= 1.1;
                assert!(approx(d.speed, expected), "score {}", score);
            } else {
                assert_eq!(steps, 0, "score {}", score);
                assert_eq!(d.speed, before);
            }
            score += 0.5;
        }
        assert!(approx(d.speed, 13.31));
    }

    #[test]
    fn test_multiple_boundaries_in_one_jump() {
        let mut d = Difficulty::new(10.0, 100.0, 0.1);
        assert_eq!(d.observe(250.0), 2);
        assert!(approx(d.speed, 12.1));
        assert_eq!(d.next_threshold(), 300.0);
    }

    #[test]
    fn test_no_repeat_at_same_score() {
        let mut d = Difficulty::new(10.0, 100.0, 0.1);
        d.observe(100.0);
        let speed = d.speed;
        for _ in 0..10 {
            assert_eq!(d.observe(100.0), 0);
        }
        assert_eq!(d.speed, speed);
    }
}
