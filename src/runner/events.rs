//! Input events consumed by the round and events it reports back.

use super::obstacle::CactusKind;

/// Discrete per-tick input, already decoupled from any key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Jump,
    Restart,
    Quit,
}

/// Something that happened during a step of the round.
///
/// The binary logs these; tests assert on them. The round itself never
/// acts on its own events.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundEvent {
    Jumped { actor: u32 },
    Landed { actor: u32 },
    ObstacleSpawned { kind: CactusKind, x: f64, speed: f64 },
    ObstaclePassed { total: u32 },
    ActorCrashed { actor: u32, kind: CactusKind },
    SpeedIncreased { speed: f64 },
    GameOver { score: f64, obstacles: u32 },
    Restarted { run: u32 },
}
