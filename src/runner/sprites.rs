//! Built-in sprite art and the sprite sheet that owns it.
//!
//! Art is drawn at one character per `PIXEL_SCALE` world pixels; masks are
//! computed once here and shared by every collision test.

use serde::{Deserialize, Serialize};

use super::mask::Mask;
use crate::core::constants::PIXEL_SCALE;

/// Every sprite the game draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    DinoIdle,
    DinoRun1,
    DinoRun2,
    DinoJump,
    CactusSmall,
    CactusLarge,
    CactusCluster,
    Ground,
}

impl SpriteId {
    pub const ALL: [SpriteId; 8] = [
        SpriteId::DinoIdle,
        SpriteId::DinoRun1,
        SpriteId::DinoRun2,
        SpriteId::DinoJump,
        SpriteId::CactusSmall,
        SpriteId::CactusLarge,
        SpriteId::CactusCluster,
        SpriteId::Ground,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

// ── Dino (12 x 19) ──────────────────────────────────────────────────

#[rustfmt::skip]
const DINO_BODY: [&str; 15] = [
    "      ##### ",
    "     ## ####",
    "     #######",
    "     #######",
    "     ####   ",
    "     ###### ",
    "#    ####   ",
    "#   #####   ",
    "##  ######  ",
    "### ##### # ",
    "#########   ",
    " ########   ",
    "  #######   ",
    "   #####    ",
    "    ####    ",
];

#[rustfmt::skip]
const DINO_LEGS_IDLE: [&str; 4] = [
    "    ## ##   ",
    "    #   #   ",
    "    #   #   ",
    "    ##  ##  ",
];

#[rustfmt::skip]
const DINO_LEGS_RUN1: [&str; 4] = [
    "    ## ##   ",
    "    #   ##  ",
    "    ##      ",
    "            ",
];

#[rustfmt::skip]
const DINO_LEGS_RUN2: [&str; 4] = [
    "    ## ##   ",
    "   ##   #   ",
    "        #   ",
    "        ##  ",
];

#[rustfmt::skip]
const DINO_LEGS_JUMP: [&str; 4] = [
    "    ## ##   ",
    "    #   #   ",
    "    ##  ##  ",
    "            ",
];

// ── Cacti (16 rows, shared height) ──────────────────────────────────

#[rustfmt::skip]
const CACTUS_SMALL: [&str; 16] = [
    "  ##  ",
    " #### ",
    " #### ",
    " #### #",
    "# ### #",
    "# ### #",
    "# #####",
    "# #### ",
    "#####  ",
    "  ###  ",
    "  ###  ",
    "  ###  ",
    "  ###  ",
    "  ###  ",
    "  ###  ",
    "  ###  ",
];

#[rustfmt::skip]
const CACTUS_LARGE: [&str; 16] = [
    "   ###   ",
    "  #####  ",
    "  #####  ",
    "# ##### #",
    "# ##### #",
    "# ##### #",
    "# ##### #",
    "#########",
    " ####### ",
    "  #####  ",
    "  #####  ",
    "  #####  ",
    "  #####  ",
    "  #####  ",
    "  #####  ",
    "  #####  ",
];

#[rustfmt::skip]
const CACTUS_CLUSTER: [&str; 16] = [
    "  ##          ##  ",
    " ####   ##   #### ",
    " ####  ####  #### ",
    " #### #####  #### #",
    "# ### ##### # ### #",
    "# ### ##### # ### #",
    "# ########### #####",
    "# ########### #### ",
    "######### ######   ",
    "  ###  ###   ###   ",
    "  ###  ###   ###   ",
    "  ###  ###   ###   ",
    "  ###  ###   ###   ",
    "  ###  ###   ###   ",
    "  ###  ###   ###   ",
    "  ###  ###   ###   ",
];

/// Ground tile width in art columns. Wider than the screen so two tiles
/// always cover it.
pub const GROUND_TILE_COLUMNS: usize = 330;
const GROUND_TILE_ROWS: usize = 6;

fn dino_art(legs: &[&'static str; 4]) -> Vec<&'static str> {
    DINO_BODY.iter().chain(legs.iter()).copied().collect()
}

/// Horizon line with a sparse pebble pattern underneath.
fn ground_art() -> Vec<String> {
    (0..GROUND_TILE_ROWS)
        .map(|row| {
            (0..GROUND_TILE_COLUMNS)
                .map(|col| {
                    if row == 0 {
                        '#'
                    } else if (col * 7 + row * 13) % 23 == 0 {
                        '.'
                    } else {
                        ' '
                    }
                })
                .collect()
        })
        .collect()
}

/// One drawable image with its precomputed opaque-pixel mask.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub id: SpriteId,
    mask: Mask,
}

impl Sprite {
    pub fn from_art<S: AsRef<str>>(id: SpriteId, rows: &[S], scale: usize) -> Self {
        Self {
            id,
            mask: Mask::from_art(rows, scale),
        }
    }

    pub fn width(&self) -> f64 {
        self.mask.width() as f64
    }

    pub fn height(&self) -> f64 {
        self.mask.height() as f64
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Whether the pixel at sprite-local `(x, y)` is opaque.
    pub fn is_opaque(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y)
    }
}

/// Owned handle to every sprite the round needs, built once per process.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    sprites: Vec<Sprite>,
}

impl SpriteSheet {
    pub fn new() -> Self {
        Self::with_scale(PIXEL_SCALE)
    }

    pub fn with_scale(scale: usize) -> Self {
        let sprites = SpriteId::ALL
            .iter()
            .map(|&id| match id {
                SpriteId::DinoIdle => Sprite::from_art(id, &dino_art(&DINO_LEGS_IDLE), scale),
                SpriteId::DinoRun1 => Sprite::from_art(id, &dino_art(&DINO_LEGS_RUN1), scale),
                SpriteId::DinoRun2 => Sprite::from_art(id, &dino_art(&DINO_LEGS_RUN2), scale),
                SpriteId::DinoJump => Sprite::from_art(id, &dino_art(&DINO_LEGS_JUMP), scale),
                SpriteId::CactusSmall => Sprite::from_art(id, &CACTUS_SMALL, scale),
                SpriteId::CactusLarge => Sprite::from_art(id, &CACTUS_LARGE, scale),
                SpriteId::CactusCluster => Sprite::from_art(id, &CACTUS_CLUSTER, scale),
                SpriteId::Ground => Sprite::from_art(id, &ground_art(), scale),
            })
            .collect();
        Self { sprites }
    }

    pub fn get(&self, id: SpriteId) -> &Sprite {
        &self.sprites[id.index()]
    }
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self::new()
    }
}
