//! Dino Run Headless Simulator
//!
//! Plays rounds without any UI using a simple autopilot, collecting how long
//! it survives and what it scores. Uses the exact same `Round::step()` as the
//! real game.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N          Number of runs with incrementing seeds (default: 10)
//!   --seed N          First RNG seed (default: 42)
//!   --max-ticks N     Stop a run after N ticks (default: 54000 = 30 minutes)
//!   --reaction PX     Jump when the next obstacle is this close at base speed (default: 35)
//!   --simple          Simple rules (jump any time, respawn on pass)
//!   --json            Print the summary as JSON
//!   --quiet           Only the final summary line

use dino_run::core::Tuning;
use dino_run::runner::{InputEvent, Round, RoundEvent, RoundPhase, SpriteSheet};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

// ── CLI Configuration ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
struct SimConfig {
    runs: u32,
    seed: u64,
    max_ticks: u64,
    reaction: f64,
    simple: bool,
    json: bool,
    quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 10,
            seed: 42,
            max_ticks: 54_000,
            reaction: 35.0,
            simple: false,
            json: false,
            quiet: false,
        }
    }
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T, String> {
    args.get(i)
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| format!("{flag} requires a number"))
}

/// `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<SimConfig>, String> {
    let mut config = SimConfig::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                config.runs = parse_value(args, i, "--runs")?;
            }
            "--seed" => {
                i += 1;
                config.seed = parse_value(args, i, "--seed")?;
            }
            "--max-ticks" => {
                i += 1;
                config.max_ticks = parse_value(args, i, "--max-ticks")?;
            }
            "--reaction" => {
                i += 1;
                config.reaction = parse_value(args, i, "--reaction")?;
            }
            "--simple" => config.simple = true,
            "--json" => config.json = true,
            "--quiet" => config.quiet = true,
            "--help" | "-h" => return Ok(None),
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(Some(config))
}

fn print_usage() {
    eprintln!(
        "Dino Run Headless Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N        Number of runs with incrementing seeds (default: 10)\n\
         \x20 --seed N        First RNG seed (default: 42)\n\
         \x20 --max-ticks N   Stop a run after N ticks (default: 54000)\n\
         \x20 --reaction PX   Autopilot jump distance at base speed (default: 35)\n\
         \x20 --simple        Simple rules (jump any time, respawn on pass)\n\
         \x20 --json          Print the summary as JSON\n\
         \x20 --quiet         Only final summary line\n\
         \x20 --help, -h      Show this help"
    );
}

// ── Autopilot ────────────────────────────────────────────────────────

/// Jump when the nearest obstacle still ahead of the actor is within the
/// reaction distance. The distance grows with speed so the arc starts at
/// the same number of ticks before contact.
fn autopilot<R: Rng>(round: &Round<R>, reaction: f64) -> Vec<InputEvent> {
    let Some(actor) = round.actors.first() else {
        return Vec::new();
    };
    if actor.is_airborne() {
        return Vec::new();
    }
    let sprites = round.sprites();
    let front = actor.x + sprites.get(actor.sprite_id()).width();
    let trigger = reaction * round.speed() / round.tuning().base_speed;

    let nearest_gap = round
        .obstacles
        .iter()
        .filter(|o| o.x + o.width(sprites) > actor.x)
        .map(|o| o.x - front)
        .fold(f64::INFINITY, f64::min);

    if nearest_gap <= trigger {
        vec![InputEvent::Jump]
    } else {
        Vec::new()
    }
}

// ── Simulation ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
struct RunStats {
    seed: u64,
    ticks: u64,
    score: f64,
    obstacles: u32,
    final_speed: f64,
    jumps: u32,
    crashed: bool,
}

fn run_simulation(config: &SimConfig, seed: u64) -> RunStats {
    let tuning = if config.simple {
        Tuning::simple()
    } else {
        Tuning::default()
    };
    let mut round = Round::new(SpriteSheet::new(), tuning, StdRng::seed_from_u64(seed));
    let mut jumps = 0;

    while round.phase() == RoundPhase::Running && round.tick_count < config.max_ticks {
        let inputs = autopilot(&round, config.reaction);
        for event in round.step(&inputs) {
            match event {
                RoundEvent::Jumped { .. } => jumps += 1,
                RoundEvent::SpeedIncreased { speed } => {
                    debug!("seed {seed}: speed {speed:.2} at tick {}", round.tick_count)
                }
                RoundEvent::ActorCrashed { kind, .. } => {
                    debug!("seed {seed}: crashed into {kind:?} at tick {}", round.tick_count)
                }
                _ => {}
            }
        }
    }

    RunStats {
        seed,
        ticks: round.run_ticks,
        score: round.score,
        obstacles: round.obstacles_passed,
        final_speed: round.speed(),
        jumps,
        crashed: round.phase() == RoundPhase::GameOver,
    }
}

// ── Summary ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct Summary {
    runs: usize,
    crashes: usize,
    mean_score: f64,
    min_score: f64,
    max_score: f64,
    mean_ticks: f64,
    mean_obstacles: f64,
    results: Vec<RunStats>,
}

impl Summary {
    fn from_runs(results: Vec<RunStats>) -> Self {
        let n = results.len().max(1) as f64;
        let scores = results.iter().map(|r| r.score);
        Self {
            runs: results.len(),
            crashes: results.iter().filter(|r| r.crashed).count(),
            mean_score: results.iter().map(|r| r.score).sum::<f64>() / n,
            min_score: if results.is_empty() {
                0.0
            } else {
                scores.clone().fold(f64::INFINITY, f64::min)
            },
            max_score: scores.fold(0.0, f64::max),
            mean_ticks: results.iter().map(|r| r.ticks as f64).sum::<f64>() / n,
            mean_obstacles: results.iter().map(|r| r.obstacles as f64).sum::<f64>() / n,
            results,
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(Some(config)) => config,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            std::process::exit(1);
        }
    };
    info!("simulating {} run(s) from seed {}", config.runs, config.seed);

    let mut results = Vec::with_capacity(config.runs as usize);
    for run in 0..config.runs {
        let seed = config.seed + run as u64;
        let stats = run_simulation(&config, seed);
        if !config.quiet && !config.json {
            println!(
                "seed {:>6}  ticks {:>6}  score {:>8.1}  obstacles {:>4}  speed {:>6.2}  jumps {:>4}{}",
                stats.seed,
                stats.ticks,
                stats.score,
                stats.obstacles,
                stats.final_speed,
                stats.jumps,
                if stats.crashed { "" } else { "  (survived)" }
            );
        }
        results.push(stats);
    }

    let summary = Summary::from_runs(results);
    if config.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to encode summary: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!(
            "{} run(s), {} crash(es): score mean {:.1} min {:.1} max {:.1}, ticks mean {:.0}, obstacles mean {:.1}",
            summary.runs,
            summary.crashes,
            summary.mean_score,
            summary.min_score,
            summary.max_score,
            summary.mean_ticks,
            summary.mean_obstacles
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(parse_args(&[]), Ok(Some(SimConfig::default())));
    }

    #[test]
    fn test_parse_options() {
        let config = parse_args(&args(&[
            "--runs", "3", "--seed", "9", "--max-ticks", "100", "--reaction", "50", "--simple",
            "--json",
        ]))
        .expect("parse")
        .expect("config");
        assert_eq!(config.runs, 3);
        assert_eq!(config.seed, 9);
        assert_eq!(config.max_ticks, 100);
        assert_eq!(config.reaction, 50.0);
        assert!(config.simple && config.json && !config.quiet);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--runs"])).is_err());
        assert!(parse_args(&args(&["--runs", "x"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert_eq!(parse_args(&args(&["--help"])), Ok(None));
    }

    #[test]
    fn test_same_seed_same_run() {
        let config = SimConfig {
            max_ticks: 2_000,
            ..Default::default()
        };
        let a = run_simulation(&config, 7);
        let b = run_simulation(&config, 7);
        assert_eq!(a.ticks, b.ticks);
        assert_eq!(a.score, b.score);
        assert_eq!(a.obstacles, b.obstacles);
    }

    #[test]
    fn test_max_ticks_caps_run() {
        let config = SimConfig {
            max_ticks: 50,
            ..Default::default()
        };
        let stats = run_simulation(&config, 1);
        assert!(stats.ticks <= 50);
    }

    #[test]
    fn test_summary_stats() {
        let run = |score: f64, crashed| RunStats {
            seed: 0,
            ticks: 10,
            score,
            obstacles: 2,
            final_speed: 10.0,
            jumps: 1,
            crashed,
        };
        let summary = Summary::from_runs(vec![run(10.0, true), run(30.0, false)]);
        assert_eq!(summary.runs, 2);
        assert_eq!(summary.crashes, 1);
        assert_eq!(summary.mean_score, 20.0);
        assert_eq!(summary.min_score, 10.0);
        assert_eq!(summary.max_score, 30.0);
        let json = serde_json::to_value(&summary).expect("json");
        assert_eq!(json["results"].as_array().map(|a| a.len()), Some(2));
    }
}
