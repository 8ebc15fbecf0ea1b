//! Configuration and loop plumbing shared by the game and the simulator.

pub mod constants;
pub mod frame_clock;
pub mod tuning;

pub use frame_clock::FrameClock;
pub use tuning::{JumpRule, SpawnPolicy, Tuning};
