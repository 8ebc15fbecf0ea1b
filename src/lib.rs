//! Dino Run - a terminal endless runner.
//!
//! The library holds the simulation and its terminal front end so the game
//! binary, the headless simulator and the integration tests share one model.

pub mod build_info;
pub mod core;
pub mod input;
pub mod runner;
pub mod ui;
