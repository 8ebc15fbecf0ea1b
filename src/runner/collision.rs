//! Pixel-exact collision between actors and obstacles.

use super::actor::Actor;
use super::mask::Mask;
use super::obstacle::Obstacle;
use super::sprites::SpriteSheet;

/// A sprite mask placed at an integer world position.
#[derive(Debug, Clone, Copy)]
pub struct Footprint<'a> {
    pub mask: &'a Mask,
    pub x: i32,
    pub y: i32,
}

impl<'a> Footprint<'a> {
    pub fn new(mask: &'a Mask, x: i32, y: i32) -> Self {
        Self { mask, x, y }
    }

    /// Any opaque pixel shared with `other`.
    pub fn overlaps(&self, other: &Footprint<'_>) -> bool {
        self.mask
            .overlap(other.mask, (other.x - self.x, other.y - self.y))
    }
}

/// Whether `actor` currently touches `obstacle`, judged on the opaque
/// pixels of their current sprites rather than their bounding boxes.
pub fn collides(actor: &Actor, obstacle: &Obstacle, sprites: &SpriteSheet) -> bool {
    actor
        .footprint(sprites)
        .overlaps(&obstacle.footprint(sprites))
}
