//! Two-tile scrolling ground strip.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ground {
    pub y: f64,
    pub tile_width: f64,
    /// Left edges of the two tile copies.
    pub offsets: [f64; 2],
}

impl Ground {
    pub fn new(y: f64, tile_width: f64) -> Self {
        Self {
            y,
            tile_width,
            offsets: [0.0, tile_width],
        }
    }

    /// Scroll both tiles left; a tile fully past x=0 re-attaches behind
    /// the other one.
    pub fn tick(&mut self, speed: f64) {
        self.offsets[0] -= speed;
        self.offsets[1] -= speed;

        if self.offsets[0] + self.tile_width < 0.0 {
            self.offsets[0] = self.offsets[1] + self.tile_width;
        }
        if self.offsets[1] + self.tile_width < 0.0 {
            self.offsets[1] = self.offsets[0] + self.tile_width;
        }
    }

    /// Leftmost tile edge and rightmost tile end.
    pub fn span(&self) -> (f64, f64) {
        let left = self.offsets[0].min(self.offsets[1]);
        let right = self.offsets[0].max(self.offsets[1]) + self.tile_width;
        (left, right)
    }
}
