//! Tuning constants for the world simulation
//!
//! Everything is expressed in world units; the renderer scales the world
//! onto the window independently of these values.

use std::time::Duration;

/// World width in world units
pub const WORLD_WIDTH: f32 = 1000.0;
/// World height in world units
pub const WORLD_HEIGHT: f32 = 750.0;

/// Number of tile columns
pub const MAX_TILES_X: u32 = 10;
/// Number of tile rows
pub const MAX_TILES_Y: u32 = 10;

/// Bottom rows that stay free of tiles so the ball has room to travel
pub const TILE_FREE_ROWS: u32 = 3;

/// Tile width in world units
pub const TILE_WIDTH: f32 = WORLD_WIDTH / MAX_TILES_X as f32;
/// Tile height in world units
pub const TILE_HEIGHT: f32 = WORLD_HEIGHT / MAX_TILES_Y as f32;

/// Paddle width in world units
pub const PADDLE_WIDTH: f32 = WORLD_WIDTH * 0.2;
/// Paddle height in world units
pub const PADDLE_HEIGHT: f32 = WORLD_HEIGHT * 0.01;
/// Ball radius in world units
pub const BALL_RADIUS: f32 = TILE_WIDTH * 0.15;

/// Paddle speed in world units per second
pub const PADDLE_SPEED: f32 = 1000.0;
/// Ball speed in world units per second
pub const BALL_SPEED: f32 = 500.0;
/// Pickup fall speed in world units per second
pub const PICKUP_FALL_SPEED: f32 = 300.0;

/// Score penalty for losing a ball
pub const PENALTY_LOST_BALL: i64 = 100;
/// Score reward for destroying a tile
pub const REWARD_TILE_DESTROYED: i64 = 10;
/// Score reward for collecting a pickup
pub const REWARD_PICKUP_PICKED: i64 = 1;

/// Number of balls a fresh run starts with
pub const STARTING_BALLS: u32 = 3;

/// Longest delta a single update is allowed to integrate. Larger deltas
/// are clamped so a stalled frame cannot tunnel the ball through tiles.
pub const MAX_UPDATE_STEP: Duration = Duration::from_millis(34);

/// Microsteps used to re-run a movement that detected a collision
pub const COLLISION_MICROSTEPS: u32 = 10;

/// A destroyed tile drops a pickup with probability 1 in this many
pub const PICKUP_DROP_CHANCE: u32 = 5;

/// How long a timed pickup effect lasts
pub const EFFECT_DURATION: Duration = Duration::from_secs(10);

/// Delay before the world restarts itself after game over or a win
pub const RESTART_DELAY: Duration = Duration::from_secs(10);

/// Balls smaller than this cannot shrink further
pub const MIN_BALL_RADIUS: f32 = 5.0;

/// Distance above the bottom edge at which the ball counts as lost
pub const BALL_LOSS_MARGIN: f32 = 10.0;

/// Fraction of the paddle speed transferred to the ball on contact
pub const PADDLE_SPIN_FACTOR: f32 = 0.3;
