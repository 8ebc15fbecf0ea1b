//! The player-controlled runner.

use serde::{Deserialize, Serialize};

use super::collision::Footprint;
use super::kinematics::Kinematics;
use super::sprites::{SpriteId, SpriteSheet};
use crate::core::tuning::{JumpRule, Tuning};

/// Which sprite family the actor is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pose {
    /// Freshly spawned, not yet animated.
    Idle,
    Running,
    Airborne,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    /// Initial velocity of the current arc.
    pub velocity: f64,
    /// Ticks since the last jump; zero while grounded.
    pub jump_ticks: u32,
    /// y the actor snaps to when grounded.
    pub rest_y: f64,
    /// Ground line; the actor is grounded once its feet pass it.
    pub ground_y: f64,
    pub pose: Pose,
    pub anim_frame: usize,
    pub anim_counter: u32,
}

impl Actor {
    pub fn new(id: u32, tuning: &Tuning) -> Self {
        Self {
            id,
            x: tuning.actor_x,
            y: tuning.actor_rest_y,
            velocity: 0.0,
            jump_ticks: 0,
            rest_y: tuning.actor_rest_y,
            ground_y: tuning.ground_y,
            pose: Pose::Idle,
            anim_frame: 0,
            anim_counter: 0,
        }
    }

    pub fn is_airborne(&self) -> bool {
        self.pose == Pose::Airborne
    }

    /// Start a new arc unconditionally.
    pub fn jump(&mut self, impulse: f64) {
        self.velocity = impulse;
        self.jump_ticks = 0;
        self.pose = Pose::Airborne;
    }

    /// Jump if `rule` allows it right now. Returns whether it did.
    pub fn try_jump(&mut self, rule: JumpRule, impulse: f64, sprites: &SpriteSheet) -> bool {
        let allowed = match rule {
            JumpRule::GroundedOnly => self.is_grounded(sprites),
            JumpRule::Anytime => true,
        };
        if allowed {
            self.jump(impulse);
        }
        allowed
    }

    /// Integrate one tick of the arc. Runs every tick, grounded or not.
    pub fn tick(&mut self, kinematics: &Kinematics) {
        self.jump_ticks += 1;
        self.y += kinematics.displacement(self.jump_ticks, self.velocity);
    }

    pub fn sprite_id(&self) -> SpriteId {
        match self.pose {
            Pose::Idle => SpriteId::DinoIdle,
            Pose::Airborne => SpriteId::DinoJump,
            Pose::Running if self.anim_frame == 0 => SpriteId::DinoRun1,
            Pose::Running => SpriteId::DinoRun2,
        }
    }

    pub fn sprite_height(&self, sprites: &SpriteSheet) -> f64 {
        sprites.get(self.sprite_id()).height()
    }

    /// Feet are past the ground line.
    pub fn is_grounded(&self, sprites: &SpriteSheet) -> bool {
        self.y + self.sprite_height(sprites) > self.ground_y
    }

    /// Snap a grounded actor back to its resting y and end any arc.
    /// Returns true on the tick an airborne actor lands.
    pub fn settle(&mut self, sprites: &SpriteSheet) -> bool {
        if !self.is_grounded(sprites) {
            return false;
        }
        let landed = self.is_airborne();
        self.y = self.rest_y;
        self.velocity = 0.0;
        self.jump_ticks = 0;
        if landed {
            self.pose = Pose::Running;
            self.anim_counter = 0;
            self.anim_frame = 0;
        }
        landed
    }

    /// Step the two-frame run cycle. Airborne actors hold the jump frame.
    pub fn advance_animation(&mut self, frame_ticks: u32) {
        if self.is_airborne() {
            return;
        }
        self.pose = Pose::Running;
        self.anim_counter += 1;
        if self.anim_counter < frame_ticks {
            self.anim_frame = 0;
        } else if self.anim_counter < frame_ticks * 2 {
            self.anim_frame = 1;
        } else if self.anim_counter > frame_ticks * 2 {
            self.anim_frame = 0;
            self.anim_counter = 0;
        }
    }

    /// Current sprite mask placed at the actor's rounded position.
    pub fn footprint<'a>(&self, sprites: &'a SpriteSheet) -> Footprint<'a> {
        Footprint::new(
            sprites.get(self.sprite_id()).mask(),
            self.x.round() as i32,
            self.y.round() as i32,
        )
    }
}
