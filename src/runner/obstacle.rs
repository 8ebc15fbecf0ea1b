//! Obstacles scrolling in from the right.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Footprint;
use super::sprites::{SpriteId, SpriteSheet};

/// Cactus variants. All share a height and sit on the same row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CactusKind {
    Small,
    Large,
    Cluster,
}

impl CactusKind {
    pub const ALL: [CactusKind; 3] = [CactusKind::Small, CactusKind::Large, CactusKind::Cluster];

    pub fn sprite_id(&self) -> SpriteId {
        match self {
            Self::Small => SpriteId::CactusSmall,
            Self::Large => SpriteId::CactusLarge,
            Self::Cluster => SpriteId::CactusCluster,
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    /// Difficulty speed captured at spawn; never changes afterwards.
    pub speed: f64,
    pub passed: bool,
    pub kind: CactusKind,
}

impl Obstacle {
    pub fn new(x: f64, y: f64, speed: f64, kind: CactusKind) -> Self {
        Self {
            x,
            y,
            speed,
            passed: false,
            kind,
        }
    }

    pub fn tick(&mut self) {
        self.x -= self.speed;
    }

    pub fn width(&self, sprites: &SpriteSheet) -> f64 {
        sprites.get(self.kind.sprite_id()).width()
    }

    /// Fully scrolled off the left edge.
    pub fn has_expired(&self, sprites: &SpriteSheet) -> bool {
        self.x + self.width(sprites) < 0.0
    }

    /// One-shot: true only on the first call where `actor_x` is past this
    /// obstacle's left edge.
    pub fn check_passed(&mut self, actor_x: f64) -> bool {
        if self.passed || actor_x <= self.x {
            return false;
        }
        self.passed = true;
        true
    }

    pub fn footprint<'a>(&self, sprites: &'a SpriteSheet) -> Footprint<'a> {
        Footprint::new(
            sprites.get(self.kind.sprite_id()).mask(),
            self.x.round() as i32,
            self.y.round() as i32,
        )
    }
}
