//! Headless simulation runner
//!
//! Drives the world without SDL at a fixed tick so runs are reproducible
//! from a seed. Mostly useful for balancing checks and regression runs
//! on machines without a display.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::world::{Key, Phase, RunStats, World};

/// Fixed step between headless ticks, matching the ~60 FPS frame pacing
/// of the windowed game
pub const TICK: Duration = Duration::from_millis(16);

/// Parameters of a headless run
#[derive(Debug, Clone)]
pub struct SimOptions {
    /// Number of fixed-step ticks to simulate
    pub ticks: u32,
    /// World seed; identical seeds produce identical reports
    pub seed: u64,
    /// Let a simple autopilot play instead of leaving the paddle idle
    pub autopilot: bool,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            ticks: 3600,
            seed: 0,
            autopilot: true,
        }
    }
}

/// Outcome of a headless run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimReport {
    /// Seed the run started from
    pub seed: u64,
    /// Ticks simulated
    pub ticks: u32,
    /// Simulated time in seconds
    pub simulated_secs: f64,
    /// Phase the world ended in
    pub phase: Phase,
    /// Final score
    pub score: i64,
    /// Balls left
    pub remaining_balls: u32,
    /// Tiles still standing
    pub tiles_left: usize,
    /// Pickups still falling
    pub pickups_falling: usize,
    /// Run counters
    pub stats: RunStats,
}

/// Run the world headlessly and report the final state
pub fn run(options: &SimOptions) -> SimReport {
    debug!(?options, "starting headless run");

    let mut world = World::new(options.seed);
    // leave the splash screen; the first run starts immediately
    world.handle_key(Key::Confirm, true);

    for _ in 0..options.ticks {
        if options.autopilot {
            steer(&mut world);
        }
        world.update(TICK);
    }

    SimReport {
        seed: options.seed,
        ticks: options.ticks,
        simulated_secs: (TICK * options.ticks).as_secs_f64(),
        phase: world.phase(),
        score: world.score(),
        remaining_balls: world.remaining_balls(),
        tiles_left: world.tiles().len(),
        pickups_falling: world.pickups().len(),
        stats: world.stats(),
    }
}

/// Chase the ball with the paddle and release lost balls.
/// Deliberately dumb; it only has to keep a run alive.
fn steer(world: &mut World) {
    if world.phase() != Phase::Running {
        return;
    }

    let Some(ball) = world.ball() else {
        world.handle_key(Key::Release, true);
        world.handle_key(Key::Release, false);
        return;
    };

    let target = ball.position.x;
    let center = world.paddle().body.center().x;
    let dead_zone = world.paddle().body.w * 0.1;

    world.handle_key(Key::Left, target < center - dead_zone);
    world.handle_key(Key::Right, target > center + dead_zone);
}
