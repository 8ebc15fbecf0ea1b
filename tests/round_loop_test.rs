//! Integration test: Round loop
//!
//! Drives `Round` through its public API the way the game loop does:
//! inputs in, events out, one tick per step.

use dino_run::core::constants::{ACTOR_REST_Y, SCREEN_WIDTH, SPAWN_OFFSET_FRACTIONS};
use dino_run::core::Tuning;
use dino_run::runner::render::RecordingCanvas;
use dino_run::runner::{
    CactusKind, InputEvent, Obstacle, Round, RoundEvent, RoundPhase, SpriteSheet,
};
use dino_run::ui::TerminalCanvas;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn new_round(tuning: Tuning) -> Round<ChaCha8Rng> {
    Round::new(SpriteSheet::new(), tuning, ChaCha8Rng::seed_from_u64(12345))
}

/// Move every obstacle out of reach so the actor can run undisturbed.
fn clear_track(round: &mut Round<ChaCha8Rng>) {
    for obstacle in &mut round.obstacles {
        obstacle.x = 1_000_000.0;
        obstacle.speed = 0.0;
    }
}

fn idle_ticks(round: &mut Round<ChaCha8Rng>, count: usize) -> Vec<RoundEvent> {
    let mut events = Vec::new();
    for _ in 0..count {
        events.extend(round.step(&[]));
    }
    events
}

fn crash(round: &mut Round<ChaCha8Rng>) {
    let x = round.actors[0].x;
    let y = round.tuning().obstacle_y;
    round
        .obstacles
        .push(Obstacle::new(x, y, 0.0, CactusKind::Cluster));
    round.step(&[]);
    assert_eq!(round.phase(), RoundPhase::GameOver);
}

// =============================================================================
// Actor motion
// =============================================================================

#[test]
fn test_resting_actor_stays_pinned() {
    let mut round = new_round(Tuning::default());
    clear_track(&mut round);
    for _ in 0..200 {
        round.step(&[]);
        let actor = &round.actors[0];
        assert_eq!(actor.y, ACTOR_REST_Y);
        assert!(actor.is_grounded(round.sprites()));
    }
}

#[test]
fn test_jump_arc_rises_then_returns_to_rest() {
    let mut round = new_round(Tuning::default());
    clear_track(&mut round);

    let events = round.step(&[InputEvent::Jump]);
    assert!(events.contains(&RoundEvent::Jumped { actor: 1 }));

    let mut heights = vec![round.actors[0].y];
    let mut landed_at = None;
    for tick in 2..60 {
        let events = round.step(&[]);
        heights.push(round.actors[0].y);
        if events.contains(&RoundEvent::Landed { actor: 1 }) {
            landed_at = Some(tick);
            break;
        }
        assert!(
            !round.actors[0].is_grounded(round.sprites()),
            "grounded mid-air at tick {}",
            tick
        );
    }

    let landed_at = landed_at.expect("actor never landed");
    assert!(landed_at > 10 && landed_at < 40, "landed at {}", landed_at);

    // Rising for the first several ticks
    for pair in heights[..6].windows(2) {
        assert!(pair[1] < pair[0], "not rising: {:?}", heights);
    }
    assert!(heights[0] < ACTOR_REST_Y);

    // Motion reverses before landing
    let apex = heights.iter().cloned().fold(f64::INFINITY, f64::min);
    assert!(apex < heights[0]);
    assert_eq!(*heights.last().expect("heights"), ACTOR_REST_Y);

    // Back to pinned
    idle_ticks(&mut round, 10);
    assert_eq!(round.actors[0].y, ACTOR_REST_Y);
}

#[test]
fn test_jump_clears_incoming_cactus() {
    let mut round = new_round(Tuning::default());
    let front = round.actors[0].x + 48.0;
    round.obstacles = vec![Obstacle::new(
        front + 30.0,
        round.tuning().obstacle_y,
        10.0,
        CactusKind::Large,
    )];

    let mut events = round.step(&[InputEvent::Jump]);
    events.extend(idle_ticks(&mut round, 30));

    assert_eq!(round.phase(), RoundPhase::Running);
    assert_eq!(round.obstacles_passed, 1);
    assert!(!events
        .iter()
        .any(|e| matches!(e, RoundEvent::ActorCrashed { .. })));
}

// =============================================================================
// Scoring and difficulty
// =============================================================================

#[test]
fn test_score_reaching_hundred_raises_speed_to_eleven() {
    let mut round = new_round(Tuning::default());
    clear_track(&mut round);
    assert_eq!(round.speed(), 10.0);

    idle_ticks(&mut round, 199);
    assert_eq!(round.score, 99.5);
    assert_eq!(round.speed(), 10.0);

    let events = round.step(&[]);
    assert_eq!(round.score, 100.0);
    assert!((round.speed() - 11.0).abs() < 1e-9);
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, RoundEvent::SpeedIncreased { .. }))
            .count(),
        1
    );

    // No further increase until the next hundred
    idle_ticks(&mut round, 199);
    assert!((round.speed() - 11.0).abs() < 1e-9);
    idle_ticks(&mut round, 1);
    assert!((round.speed() - 12.1).abs() < 1e-9);
}

#[test]
fn test_obstacles_keep_their_spawn_speed() {
    let mut round = new_round(Tuning::default());
    clear_track(&mut round);
    idle_ticks(&mut round, 200);
    assert!((round.speed() - 11.0).abs() < 1e-9);

    round.obstacles = vec![Obstacle::new(5_000.0, 424.0, 10.0, CactusKind::Small)];
    let mut last = 5_000.0;
    for _ in 0..20 {
        round.step(&[]);
        let x = round.obstacles[0].x;
        assert!((last - x - 10.0).abs() < 1e-9);
        last = x;
    }
}

// =============================================================================
// Game over and restart
// =============================================================================

#[test]
fn test_collision_ends_round() {
    let mut round = new_round(Tuning::default());
    let x = round.actors[0].x;
    round.obstacles = vec![Obstacle::new(
        x + 20.0,
        round.tuning().obstacle_y,
        10.0,
        CactusKind::Small,
    )];

    let events = round.step(&[]);
    assert_eq!(round.phase(), RoundPhase::GameOver);
    assert!(round.actors.is_empty());
    assert!(events.iter().any(|e| matches!(
        e,
        RoundEvent::ActorCrashed {
            actor: 1,
            kind: CactusKind::Small
        }
    )));
    assert!(events
        .iter()
        .any(|e| matches!(e, RoundEvent::GameOver { .. })));
}

#[test]
fn test_restart_ignored_while_running() {
    let mut round = new_round(Tuning::default());
    clear_track(&mut round);
    idle_ticks(&mut round, 30);

    let score = round.score;
    let passed = round.obstacles_passed;
    let speed = round.speed();
    let obstacles = round.obstacles.len();

    assert!(!round.restart());
    assert_eq!(round.score, score);
    assert_eq!(round.obstacles_passed, passed);
    assert_eq!(round.speed(), speed);
    assert_eq!(round.actors.len(), 1);
    assert_eq!(round.obstacles.len(), obstacles);
    assert_eq!(round.run_number, 1);
}

#[test]
fn test_world_scrolls_after_game_over_but_score_freezes() {
    let mut round = new_round(Tuning::default());
    clear_track(&mut round);
    idle_ticks(&mut round, 40);
    crash(&mut round);

    let score = round.score;
    let ground_before = round.ground.offsets;
    idle_ticks(&mut round, 100);
    assert_eq!(round.score, score);
    assert_ne!(round.ground.offsets, ground_before);
}

#[test]
fn test_restart_after_game_over() {
    let mut round = new_round(Tuning::default());
    clear_track(&mut round);
    idle_ticks(&mut round, 40);
    crash(&mut round);

    let events = round.step(&[InputEvent::Restart]);
    assert!(events.contains(&RoundEvent::Restarted { run: 2 }));
    assert_eq!(round.phase(), RoundPhase::Running);
    assert_eq!(round.actors.len(), 1);
    assert_eq!(round.speed(), 10.0);
    assert_eq!(round.obstacles_passed, 0);
    // The restart step also ticked once
    assert_eq!(round.score, 0.5);
    assert_eq!(round.best_score, 20.0);
}

#[test]
fn test_quit_stops_without_ticking() {
    let mut round = new_round(Tuning::default());
    idle_ticks(&mut round, 3);
    let events = round.step(&[InputEvent::Jump, InputEvent::Quit]);
    assert!(round.quit_requested());
    assert_eq!(round.tick_count, 3);
    // The jump before the quit was still applied
    assert_eq!(events, vec![RoundEvent::Jumped { actor: 1 }]);
}

// =============================================================================
// Spawning
// =============================================================================

#[test]
fn test_randomized_spawns_use_candidate_positions() {
    let mut round = new_round(Tuning::default());
    crash(&mut round);

    let allowed: Vec<f64> = SPAWN_OFFSET_FRACTIONS
        .iter()
        .map(|f| SCREEN_WIDTH + SCREEN_WIDTH * f)
        .collect();
    let mut spawned = 0;
    for event in idle_ticks(&mut round, 3_000) {
        if let RoundEvent::ObstacleSpawned { x, speed, .. } = event {
            assert!(allowed.contains(&x), "unexpected spawn x {}", x);
            assert_eq!(speed, round.speed());
            spawned += 1;
        }
    }
    assert!(spawned > 10, "only {} spawns", spawned);
}

#[test]
fn test_simple_rules_respawn_on_pass() {
    let mut round = new_round(Tuning::simple());
    let front = round.actors[0].x + 48.0;
    round.obstacles = vec![Obstacle::new(
        front + 30.0,
        round.tuning().obstacle_y,
        10.0,
        CactusKind::Small,
    )];

    let mut events = round.step(&[InputEvent::Jump]);
    events.extend(idle_ticks(&mut round, 19));

    assert_eq!(round.phase(), RoundPhase::Running);
    assert_eq!(round.obstacles_passed, 1);
    let spawns: Vec<f64> = events
        .iter()
        .filter_map(|e| match e {
            RoundEvent::ObstacleSpawned { x, .. } => Some(*x),
            _ => None,
        })
        .collect();
    assert_eq!(spawns, vec![SCREEN_WIDTH]);
    assert_eq!(round.score, 20.0 * 0.5 + 5.0);
}

#[test]
fn test_same_seed_replays_identically() {
    let play = || {
        let mut round = new_round(Tuning::default());
        let mut events = Vec::new();
        for tick in 0..600 {
            let inputs = if tick % 25 == 0 {
                vec![InputEvent::Jump]
            } else {
                Vec::new()
            };
            events.extend(round.step(&inputs));
        }
        events
    };
    assert_eq!(play(), play());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_simple_status_shows_score_only() {
    let mut round = new_round(Tuning::simple());
    clear_track(&mut round);
    idle_ticks(&mut round, 10);
    let mut canvas = RecordingCanvas::new(10.0);
    round.render(&mut canvas).expect("render");
    assert_eq!(canvas.texts(), vec!["Score: 5"]);
}

#[test]
fn test_round_renders_to_terminal() {
    let mut terminal = Terminal::new(TestBackend::new(160, 50)).expect("terminal");
    let round = new_round(Tuning::default());
    {
        let mut canvas = TerminalCanvas::new(&mut terminal, SCREEN_WIDTH, 500.0).expect("canvas");
        round.render(&mut canvas).expect("render");
    }
    let buffer = terminal.backend().buffer();
    let row: String = (0..160).map(|x| buffer.get(x, 1).symbol()).collect();
    assert!(row.contains("Speed: 10.0  Obstacles: 0  Score: 0"), "{:?}", row);
}
