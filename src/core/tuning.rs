//! Owned gameplay configuration.
//!
//! Every field defaults to the matching constant in [`super::constants`].
//! Tests and the simulator tweak individual fields with struct-update
//! syntax rather than editing constants.

use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::runner::kinematics::Kinematics;

/// When a jump trigger is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpRule {
    /// Only while the actor is grounded.
    GroundedOnly,
    /// Always, including mid-air (restarts the arc).
    Anytime,
}

/// How new obstacles are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnPolicy {
    /// Spawn when the newest obstacle drifts left of a randomly chosen
    /// fraction of the screen, at a randomly jittered arrival position.
    Randomized,
    /// Spawn at the right edge the tick an obstacle is passed.
    OnPass,
}

/// Complete set of gameplay tunables for a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub screen_width: f64,
    pub screen_height: f64,
    pub actor_x: f64,
    pub actor_rest_y: f64,
    pub ground_y: f64,
    pub obstacle_y: f64,
    pub base_speed: f64,
    pub jump_impulse: f64,
    pub kinematics: Kinematics,
    pub jump_rule: JumpRule,
    pub spawn_policy: SpawnPolicy,
    pub run_animation_ticks: u32,
    pub score_per_tick: f64,
    pub pass_bonus: f64,
    pub speedup_every: f64,
    pub speedup_fraction: f64,
    pub spawn_divisors: Vec<f64>,
    pub spawn_offset_fractions: Vec<f64>,
    /// Actors created at round start and on restart.
    pub starting_actors: usize,
    /// Show speed and obstacle count next to the score.
    pub detailed_status: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            actor_x: ACTOR_START_X,
            actor_rest_y: ACTOR_REST_Y,
            ground_y: GROUND_Y,
            obstacle_y: OBSTACLE_Y,
            base_speed: BASE_SPEED,
            jump_impulse: JUMP_IMPULSE,
            kinematics: Kinematics::default(),
            jump_rule: JumpRule::GroundedOnly,
            spawn_policy: SpawnPolicy::Randomized,
            run_animation_ticks: RUN_ANIMATION_TICKS,
            score_per_tick: SCORE_PER_TICK,
            pass_bonus: PASS_BONUS,
            speedup_every: SPEEDUP_EVERY,
            speedup_fraction: SPEEDUP_FRACTION,
            spawn_divisors: SPAWN_DIVISORS.to_vec(),
            spawn_offset_fractions: SPAWN_OFFSET_FRACTIONS.to_vec(),
            starting_actors: 1,
            detailed_status: true,
        }
    }
}

impl Tuning {
    /// Simple rules: jump any time, respawn
    /// deterministically on pass, score-only status line.
    pub fn simple() -> Self {
        Self {
            jump_impulse: SIMPLE_JUMP_IMPULSE,
            jump_rule: JumpRule::Anytime,
            spawn_policy: SpawnPolicy::OnPass,
            detailed_status: false,
            ..Default::default()
        }
    }
}
