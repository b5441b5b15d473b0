//! Arkanoid - an SDL2 breakout clone
//!
//! The crate is split into a deterministic, SDL-free world simulation
//! and an SDL2 front end that draws it:
//!
//! - **World**: tiles, paddle, ball and pickups advancing on a
//!   simulation clock, seeded for reproducible runs
//! - **Headless**: the same world driven at a fixed tick without a
//!   window, producing serializable run reports
//! - **Graceful degradation**: textures and HUD text sit behind cargo
//!   features; without them (or without asset files) everything renders
//!   as filled rectangles
//!
//! # Quick Start
//!
//! ```bash
//! # Launch the game
//! arkanoid play
//!
//! # Validate an asset directory
//! arkanoid check ./assets
//!
//! # Reproducible headless run
//! arkanoid simulate --seed 42 --ticks 3600
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod sim;
pub mod world;

// Re-export commonly used types
pub use error::{GameError, Result};
pub use world::{Key, Phase, World};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the world headlessly for simple use cases
///
/// # Arguments
///
/// * `ticks` - Number of fixed 16 ms steps to simulate
/// * `seed` - World seed; identical seeds produce identical reports
///
/// # Example
///
/// ```
/// let report = arkanoid::simulate(600, 42);
/// assert_eq!(report.seed, 42);
/// ```
pub fn simulate(ticks: u32, seed: u64) -> sim::SimReport {
    sim::run(&sim::SimOptions {
        ticks,
        seed,
        autopilot: true,
    })
}
