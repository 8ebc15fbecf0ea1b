//! Game model: sprites, motion, collision and the round controller.
//!
//! Everything here is deterministic given a seeded RNG and knows nothing
//! about terminals. Drawing goes through [`render::Canvas`].

pub mod actor;
pub mod collision;
pub mod difficulty;
pub mod events;
pub mod ground;
pub mod kinematics;
pub mod mask;
pub mod obstacle;
pub mod render;
pub mod round;
pub mod sprites;

pub use actor::{Actor, Pose};
pub use events::{InputEvent, RoundEvent};
pub use obstacle::{CactusKind, Obstacle};
pub use render::Canvas;
pub use round::{Round, RoundPhase};
pub use sprites::{SpriteId, SpriteSheet};
