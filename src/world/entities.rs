//! World entities: tiles, the paddle and falling pickups

use serde::{Deserialize, Serialize};

use super::constants;
use super::geometry::RectF;

/// Identifier for tiles and pickups
pub type EntityId = u32;

/// RGBA color in world terms; the renderer maps it onto SDL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }
}

/// Color palette used by the world
pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0xFF, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xFF);
    pub const GRAY: Color = Color::rgb(0x33, 0x33, 0x33);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Colors assigned to freshly spawned tiles
    pub const TILE_COLORS: [Color; 3] = [RED, GREEN, BLUE];
}

/// A destructible tile
#[derive(Debug, Clone)]
pub struct Tile {
    pub id: EntityId,

    /// Position with width/height (in world units)
    pub body: RectF,

    /// Color when drawing the tile
    pub color: Color,

    /// How many hits remain before the tile is destroyed
    pub hits_left: u8,
}

/// Held-key state driving the paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleInput {
    pub move_left: bool,
    pub move_right: bool,
}

/// The player paddle
#[derive(Debug, Clone, Default)]
pub struct Paddle {
    pub body: RectF,

    /// Current state of the movement keys
    pub input: PaddleInput,
}

impl Paddle {
    /// Horizontal speed implied by the currently held keys
    pub fn current_speed(&self) -> f32 {
        let mut speed = 0.0;
        if self.input.move_left {
            speed -= constants::PADDLE_SPEED;
        }
        if self.input.move_right {
            speed += constants::PADDLE_SPEED;
        }
        speed
    }
}

/// Effect a pickup applies when the paddle catches it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Double the world speed for a while
    SpeedUp,
    /// Halve the world speed for a while
    SlowDown,
    /// Halve the ball radius for a while
    ShrinkBall,
    /// Double the paddle width until restart
    GrowPaddle,
}

impl PickupKind {
    /// All pickup kinds, in spawn-roll order
    pub const ALL: [PickupKind; 4] = [
        PickupKind::SpeedUp,
        PickupKind::SlowDown,
        PickupKind::ShrinkBall,
        PickupKind::GrowPaddle,
    ];
}

/// A pickup falling from a destroyed tile
#[derive(Debug, Clone)]
pub struct Pickup {
    pub id: EntityId,
    pub kind: PickupKind,
    pub body: RectF,
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_speed_from_keys() {
        let mut paddle = Paddle::default();
        assert_eq!(paddle.current_speed(), 0.0);

        paddle.input.move_left = true;
        assert_eq!(paddle.current_speed(), -constants::PADDLE_SPEED);

        paddle.input.move_right = true;
        assert_eq!(paddle.current_speed(), 0.0);

        paddle.input.move_left = false;
        assert_eq!(paddle.current_speed(), constants::PADDLE_SPEED);
    }

    #[test]
    fn test_pickup_kinds_distinct() {
        for (i, a) in PickupKind::ALL.iter().enumerate() {
            for b in PickupKind::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
