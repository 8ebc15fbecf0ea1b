//! Round controller: the per-tick simulation loop.
//!
//! One call to [`Round::step`] is one frame: drain input, integrate the
//! actors, move and test every obstacle, maybe spawn, then score. Live
//! actors and obstacles are rebuilt into fresh vectors each tick instead
//! of being removed in place.

use std::io;

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::collision::collides;
use super::difficulty::Difficulty;
use super::events::{InputEvent, RoundEvent};
use super::ground::Ground;
use super::obstacle::{CactusKind, Obstacle};
use super::render::Canvas;
use super::sprites::{SpriteId, SpriteSheet};
use crate::core::constants::STATUS_MARGIN;
use crate::core::tuning::{SpawnPolicy, Tuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// At least one actor alive.
    Running,
    /// Every actor crashed; waiting for a restart.
    GameOver,
}

pub struct Round<R: Rng> {
    sprites: SpriteSheet,
    tuning: Tuning,
    rng: R,
    quit_requested: bool,

    pub actors: Vec<Actor>,
    pub obstacles: Vec<Obstacle>,
    pub ground: Ground,
    pub difficulty: Difficulty,
    pub score: f64,
    pub obstacles_passed: u32,
    /// Ticks since the process started.
    pub tick_count: u64,
    /// Ticks survived in the current run.
    pub run_ticks: u64,
    /// 1-based; bumped on every restart.
    pub run_number: u32,
    /// Best score of any run in this process.
    pub best_score: f64,
}

impl<R: Rng> Round<R> {
    pub fn new(sprites: SpriteSheet, tuning: Tuning, rng: R) -> Self {
        let ground = Ground::new(tuning.ground_y, sprites.get(SpriteId::Ground).width());
        let difficulty = Difficulty::new(
            tuning.base_speed,
            tuning.speedup_every,
            tuning.speedup_fraction,
        );
        let mut round = Self {
            sprites,
            tuning,
            rng,
            quit_requested: false,
            actors: Vec::new(),
            obstacles: Vec::new(),
            ground,
            difficulty,
            score: 0.0,
            obstacles_passed: 0,
            tick_count: 0,
            run_ticks: 0,
            run_number: 1,
            best_score: 0.0,
        };
        round.reset_run();
        info!(
            "round started: {} actor(s), speed {:.1}, {:?} spawning",
            round.actors.len(),
            round.difficulty.speed,
            round.tuning.spawn_policy
        );
        round
    }

    pub fn phase(&self) -> RoundPhase {
        if self.actors.is_empty() {
            RoundPhase::GameOver
        } else {
            RoundPhase::Running
        }
    }

    pub fn speed(&self) -> f64 {
        self.difficulty.speed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn sprites(&self) -> &SpriteSheet {
        &self.sprites
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Start-of-run values for everything a restart resets.
    fn reset_run(&mut self) {
        self.score = 0.0;
        self.obstacles_passed = 0;
        self.run_ticks = 0;
        self.difficulty = Difficulty::new(
            self.tuning.base_speed,
            self.tuning.speedup_every,
            self.tuning.speedup_fraction,
        );
        self.actors = (1..=self.tuning.starting_actors as u32)
            .map(|id| Actor::new(id, &self.tuning))
            .collect();
        let first = self.spawn_at(self.tuning.screen_width);
        self.obstacles = vec![first];
    }

    /// Obstacle at `x` with a random variant and the current speed.
    fn spawn_at(&mut self, x: f64) -> Obstacle {
        let kind = CactusKind::random(&mut self.rng);
        Obstacle::new(x, self.tuning.obstacle_y, self.difficulty.speed, kind)
    }

    /// Process this frame's input, then advance one tick. A quit stops
    /// processing at once and skips the tick.
    pub fn step(&mut self, inputs: &[InputEvent]) -> Vec<RoundEvent> {
        let mut events = Vec::new();
        for input in inputs {
            match input {
                InputEvent::Quit => {
                    self.quit_requested = true;
                    return events;
                }
                InputEvent::Jump => self.trigger_jump(&mut events),
                InputEvent::Restart => {
                    if self.restart() {
                        events.push(RoundEvent::Restarted {
                            run: self.run_number,
                        });
                    }
                }
            }
        }
        events.extend(self.tick());
        events
    }

    fn trigger_jump(&mut self, events: &mut Vec<RoundEvent>) {
        let rule = self.tuning.jump_rule;
        let impulse = self.tuning.jump_impulse;
        for actor in &mut self.actors {
            if actor.try_jump(rule, impulse, &self.sprites) {
                events.push(RoundEvent::Jumped { actor: actor.id });
            }
        }
    }

    /// Reset the run. Only allowed once every actor has crashed; otherwise
    /// nothing changes and false is returned.
    pub fn restart(&mut self) -> bool {
        if !self.actors.is_empty() {
            return false;
        }
        self.run_number += 1;
        self.reset_run();
        info!("run {} started", self.run_number);
        true
    }

    /// Advance the world by one tick.
    pub fn tick(&mut self) -> Vec<RoundEvent> {
        let mut events = Vec::new();
        self.tick_count += 1;
        let was_running = !self.actors.is_empty();

        self.ground.tick(self.difficulty.speed);

        // ── Actors ──
        let kinematics = self.tuning.kinematics;
        let frame_ticks = self.tuning.run_animation_ticks;
        for actor in &mut self.actors {
            actor.tick(&kinematics);
            if actor.settle(&self.sprites) {
                events.push(RoundEvent::Landed { actor: actor.id });
            }
            actor.advance_animation(frame_ticks);
        }

        // ── Obstacles: move, collide, pass, expire ──
        let mut crashed = vec![false; self.actors.len()];
        let mut passed_now = 0u32;
        let mut live = Vec::with_capacity(self.obstacles.len() + 1);
        for mut obstacle in std::mem::take(&mut self.obstacles) {
            obstacle.tick();

            for (actor, hit) in self.actors.iter().zip(crashed.iter_mut()) {
                if !*hit && collides(actor, &obstacle, &self.sprites) {
                    *hit = true;
                    debug!("actor {} hit a {:?}", actor.id, obstacle.kind);
                    events.push(RoundEvent::ActorCrashed {
                        actor: actor.id,
                        kind: obstacle.kind,
                    });
                }
            }

            let passed = self
                .actors
                .iter()
                .zip(&crashed)
                .filter(|(_, hit)| !**hit)
                .any(|(actor, _)| obstacle.check_passed(actor.x));
            if passed {
                passed_now += 1;
            }

            if !obstacle.has_expired(&self.sprites) {
                live.push(obstacle);
            }
        }
        self.obstacles = live;

        if crashed.contains(&true) {
            self.actors = std::mem::take(&mut self.actors)
                .into_iter()
                .zip(crashed)
                .filter_map(|(actor, hit)| (!hit).then_some(actor))
                .collect();
        }

        // ── Spawning ──
        if let Some(obstacle) = self.maybe_spawn(passed_now) {
            debug!(
                "spawned {:?} at x={:.0} speed={:.2}",
                obstacle.kind, obstacle.x, obstacle.speed
            );
            events.push(RoundEvent::ObstacleSpawned {
                kind: obstacle.kind,
                x: obstacle.x,
                speed: obstacle.speed,
            });
            self.obstacles.push(obstacle);
        }

        // ── Scoring ──
        if !self.actors.is_empty() {
            self.run_ticks += 1;
            self.obstacles_passed += passed_now;
            self.score += self.tuning.score_per_tick + passed_now as f64 * self.tuning.pass_bonus;
            if passed_now > 0 {
                events.push(RoundEvent::ObstaclePassed {
                    total: self.obstacles_passed,
                });
            }
            if self.difficulty.observe(self.score) > 0 {
                info!(
                    "speed up to {:.2} at score {:.1}",
                    self.difficulty.speed, self.score
                );
                events.push(RoundEvent::SpeedIncreased {
                    speed: self.difficulty.speed,
                });
            }
            self.best_score = self.best_score.max(self.score);
        } else if was_running {
            info!(
                "game over: score {:.1}, {} obstacle(s) passed, {} ticks",
                self.score, self.obstacles_passed, self.run_ticks
            );
            events.push(RoundEvent::GameOver {
                score: self.score,
                obstacles: self.obstacles_passed,
            });
        }

        events
    }

    fn maybe_spawn(&mut self, passed_now: u32) -> Option<Obstacle> {
        let width = self.tuning.screen_width;
        let x = match self.tuning.spawn_policy {
            SpawnPolicy::OnPass => {
                if passed_now == 0 {
                    return None;
                }
                width
            }
            SpawnPolicy::Randomized => {
                if let Some(newest_x) = self.obstacles.last().map(|o| o.x) {
                    let divisor = self
                        .tuning
                        .spawn_divisors
                        .choose(&mut self.rng)
                        .copied()
                        .unwrap_or(2.0);
                    if newest_x >= width / divisor {
                        return None;
                    }
                }
                let fraction = self
                    .tuning
                    .spawn_offset_fractions
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or(0.0);
                width + width * fraction
            }
        };
        Some(self.spawn_at(x))
    }

    /// Right-aligned HUD text.
    pub fn status_line(&self) -> String {
        let score = self.score.floor() as u64;
        if self.tuning.detailed_status {
            format!(
                "Speed: {:.1}  Obstacles: {}  Score: {}",
                self.difficulty.speed, self.obstacles_passed, score
            )
        } else {
            format!("Score: {}", score)
        }
    }

    /// Draw the frame: backdrop, actors, obstacles, status, ground.
    pub fn render<C: Canvas>(&self, canvas: &mut C) -> io::Result<()> {
        canvas.draw_background();

        for actor in &self.actors {
            canvas.draw_sprite(self.sprites.get(actor.sprite_id()), actor.x, actor.y);
        }
        for obstacle in &self.obstacles {
            canvas.draw_sprite(
                self.sprites.get(obstacle.kind.sprite_id()),
                obstacle.x,
                obstacle.y,
            );
        }

        let status = self.status_line();
        let width = canvas.text_width(&status);
        canvas.draw_text(
            &status,
            self.tuning.screen_width - STATUS_MARGIN - width,
            STATUS_MARGIN,
        );

        if self.phase() == RoundPhase::GameOver {
            self.render_game_over(canvas);
        }

        let tile = self.sprites.get(SpriteId::Ground);
        for x in self.ground.offsets {
            canvas.draw_sprite(tile, x, self.ground.y);
        }

        canvas.present()
    }

    fn render_game_over<C: Canvas>(&self, canvas: &mut C) {
        let lines = [
            "G A M E   O V E R".to_string(),
            format!("Best: {}", self.best_score.floor() as u64),
            "[R] Restart   [Q] Quit".to_string(),
        ];
        let center_x = self.tuning.screen_width / 2.0;
        let mut y = self.tuning.screen_height * 0.3;
        for line in &lines {
            let w = canvas.text_width(line);
            canvas.draw_text(line, center_x - w / 2.0, y);
            y += 40.0;
        }
    }
}
