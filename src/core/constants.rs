//! Compile-time tunables for the runner.
//!
//! Units are world pixels and simulation ticks. The world is a fixed
//! 1280x500 plane with a top-left origin; the terminal front end scales it
//! to whatever size the terminal happens to be.

// ── World ───────────────────────────────────────────────────────────
pub const SCREEN_WIDTH: f64 = 1280.0;
pub const SCREEN_HEIGHT: f64 = 500.0;

/// Target simulation rate. One tick per frame.
pub const FRAME_RATE: u32 = 30;

/// World pixels per sprite-art character (both axes).
pub const PIXEL_SCALE: usize = 4;

// ── Placement ───────────────────────────────────────────────────────
/// Fixed horizontal lane of every actor.
pub const ACTOR_START_X: f64 = 120.0;

/// Resting y of a grounded actor. Landing snaps to this.
pub const ACTOR_REST_Y: f64 = 405.0;

/// Top of the ground plane; also the grounded reference line.
pub const GROUND_Y: f64 = 475.0;

/// Fixed y of every obstacle.
pub const OBSTACLE_Y: f64 = 424.0;

// ── Motion ──────────────────────────────────────────────────────────
/// Difficulty speed at the start of a round (pixels per tick).
pub const BASE_SPEED: f64 = 10.0;

/// Initial jump velocity; the simple rules use the stronger impulse.
pub const JUMP_IMPULSE: f64 = -13.5;
pub const SIMPLE_JUMP_IMPULSE: f64 = -14.0;

/// Downward acceleration coefficient (per tick squared).
pub const GRAVITY_COEFF: f64 = 1.5;

/// Per-tick displacement cap while falling.
pub const MAX_FALL_DISPLACEMENT: f64 = 16.0;

/// Extra upward displacement applied on every ascending tick.
pub const ASCENT_BOOST: f64 = 2.0;

/// Ticks each run-cycle frame stays on screen.
pub const RUN_ANIMATION_TICKS: u32 = 4;

// ── Scoring ─────────────────────────────────────────────────────────
pub const SCORE_PER_TICK: f64 = 0.5;
pub const PASS_BONUS: f64 = 5.0;

/// Speed rises every time the score crosses a multiple of this.
pub const SPEEDUP_EVERY: f64 = 100.0;
pub const SPEEDUP_FRACTION: f64 = 0.1;

// ── Spawning ────────────────────────────────────────────────────────
/// Next obstacle spawns once the newest one is left of `SCREEN_WIDTH / r`.
pub const SPAWN_DIVISORS: [f64; 4] = [1.5, 2.0, 2.5, 3.0];

/// New obstacles appear at `SCREEN_WIDTH + SCREEN_WIDTH * f`.
pub const SPAWN_OFFSET_FRACTIONS: [f64; 4] = [0.0, 0.1, 0.25, 0.5];

// ── HUD ─────────────────────────────────────────────────────────────
/// Gap between the status line and the top-right corner.
pub const STATUS_MARGIN: f64 = 10.0;
