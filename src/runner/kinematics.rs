//! Jump-arc kinematics.

use serde::{Deserialize, Serialize};

use crate::core::constants::{ASCENT_BOOST, GRAVITY_COEFF, MAX_FALL_DISPLACEMENT};

/// Coefficients of the per-tick vertical displacement curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    /// Downward acceleration coefficient (per tick squared).
    pub gravity: f64,
    /// Displacement ceiling while falling.
    pub max_fall: f64,
    /// Extra upward displacement on ascending ticks.
    pub ascent_boost: f64,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY_COEFF,
            max_fall: MAX_FALL_DISPLACEMENT,
            ascent_boost: ASCENT_BOOST,
        }
    }
}

impl Kinematics {
    /// Vertical displacement for one tick, `ticks` ticks after the jump.
    ///
    /// `gravity * t^2 + v0 * t`, capped at `max_fall` on the way down and
    /// pushed a further `ascent_boost` upward on the way up. Positive is
    /// downward.
    pub fn displacement(&self, ticks: u32, initial_velocity: f64) -> f64 {
        let t = ticks as f64;
        let raw = self.gravity * t * t + initial_velocity * t;
        if raw > self.max_fall {
            self.max_fall
        } else if raw < 0.0 {
            raw - self.ascent_boost
        } else {
            raw
        }
    }
}
