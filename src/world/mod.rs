//! Logical definition of the world and its entities
//!
//! The world is a pure, deterministic simulation: it knows nothing about
//! SDL, windows or wall-clock time. It advances on its own clock through
//! [`World::update`], takes input through an SDL-free key enum, and
//! defers every state change that crosses an entity boundary through a
//! deadline-ordered [action queue](events::ActionQueue).

pub mod ball;
pub mod constants;
pub mod entities;
pub mod events;
pub mod geometry;

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use ball::{Ball, Contact};
pub use entities::{palette, Color, EntityId, Paddle, Pickup, PickupKind, Tile};
pub use geometry::{RectF, Vec2};

use constants::*;
use events::{Action, ActionQueue};

/// Coarse state of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Title screen, waiting for the player to confirm
    Splash,
    /// A run is in progress
    Running,
    /// All balls were lost; the world restarts itself after a delay
    GameOver,
    /// The field was cleared; the world restarts itself after a delay
    Won,
}

/// Input keys the world understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Move the paddle left while held
    Left,
    /// Move the paddle right while held
    Right,
    /// Spawn a new ball if none is in play
    Release,
    /// Restart the run immediately
    Restart,
    /// Leave the splash screen
    Confirm,
}

/// Counters accumulated over a single run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Tiles destroyed by the ball
    pub tiles_destroyed: u32,
    /// Pickups dropped by destroyed tiles
    pub pickups_spawned: u32,
    /// Pickups caught with the paddle
    pub pickups_collected: u32,
    /// Balls that fell below the world
    pub balls_lost: u32,
}

/// The game world
pub struct World {
    phase: Phase,
    /// Simulation clock, advanced by raw update deltas
    clock: Duration,
    /// World speed multiplier applied to the physics step
    speed: f32,

    tiles: Vec<Tile>,
    ball: Option<Ball>,
    paddle: Paddle,
    pickups: Vec<Pickup>,

    actions: ActionQueue,
    rng: SmallRng,

    score: i64,
    remaining_balls: u32,
    stats: RunStats,

    next_tile_id: EntityId,
    next_pickup_id: EntityId,
}

impl World {
    /// Create a world on the splash screen, seeded for deterministic runs
    pub fn new(seed: u64) -> Self {
        let mut world = Self {
            phase: Phase::Splash,
            clock: Duration::ZERO,
            speed: 1.0,
            tiles: Vec::new(),
            ball: None,
            paddle: Paddle::default(),
            pickups: Vec::new(),
            actions: ActionQueue::new(),
            rng: SmallRng::seed_from_u64(seed),
            score: 0,
            remaining_balls: STARTING_BALLS,
            stats: RunStats::default(),
            next_tile_id: 0,
            next_pickup_id: 0,
        };
        world.reset_paddle();
        world
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current score
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Balls left before game over
    pub fn remaining_balls(&self) -> u32 {
        self.remaining_balls
    }

    /// Run statistics so far
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Simulation clock
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Current world speed multiplier
    pub fn world_speed(&self) -> f32 {
        self.speed
    }

    /// Tiles still standing
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The ball, if one is in play
    pub fn ball(&self) -> Option<&Ball> {
        self.ball.as_ref()
    }

    /// The player paddle
    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    /// Pickups currently falling
    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    /// Feed a key transition into the world
    pub fn handle_key(&mut self, key: Key, down: bool) {
        match key {
            Key::Left => self.paddle.input.move_left = down,
            Key::Right => self.paddle.input.move_right = down,
            Key::Release if down => {
                if self.phase == Phase::Running && self.ball.is_none() {
                    debug!("releasing a new ball");
                    self.spawn_ball();
                }
            }
            Key::Restart if down => {
                info!("restart requested");
                self.restart();
            }
            Key::Confirm if down => {
                if self.phase == Phase::Splash {
                    self.restart();
                }
            }
            _ => {}
        }
    }

    /// Advance the simulation by `delta`.
    ///
    /// The clock and the action queue always advance so scheduled
    /// restarts fire in any phase; physics only runs while the world is
    /// in [`Phase::Running`].
    pub fn update(&mut self, delta: Duration) {
        self.clock += delta;
        while let Some(action) = self.actions.pop_due(self.clock) {
            self.apply(action);
        }

        if self.phase != Phase::Running {
            return;
        }

        // clamp the step so a stalled frame cannot tunnel the ball
        let step = delta.min(MAX_UPDATE_STEP);
        let dt = step.as_secs_f32() * self.speed;

        self.advance_pickups(dt);

        let paddle_backup = self.paddle.clone();
        Self::move_paddle(&mut self.paddle, dt);

        let Some(ball) = self.ball else {
            return;
        };

        // dry run: move the ball the whole step and see whether anything
        // could have been touched on the way
        let mut moved = ball;
        Self::move_ball(&mut moved, dt);

        if !self.ball_overlaps_anything(&moved) {
            self.ball = Some(moved);
            return;
        }

        // rewind and re-run in microsteps with boundary correction and
        // collision reporting
        self.paddle = paddle_backup;
        let micro = dt / COLLISION_MICROSTEPS as f32;
        let mut current = ball;
        let mut lost = false;

        for _ in 0..COLLISION_MICROSTEPS {
            Self::move_paddle(&mut self.paddle, micro);
            Self::move_ball(&mut current, micro);
            Self::bounce_off_boundaries(&mut current);

            if Self::ball_below_loss_line(&current) {
                lost = true;
                break;
            }

            self.resolve_ball_contacts(&mut current);
        }

        if lost {
            self.ball = None;
            self.actions.push(self.clock, Action::BallLost);
        } else {
            self.ball = Some(current);
        }
    }

    /// Reinitialize the run: fresh tiles, paddle, ball and counters
    fn restart(&mut self) {
        debug!(pending = self.actions.len(), "clearing action queue");
        self.actions.clear();
        self.tiles.clear();
        self.pickups.clear();

        self.spawn_tiles();
        self.reset_paddle();
        self.spawn_ball();

        self.phase = Phase::Running;
        self.remaining_balls = STARTING_BALLS;
        self.speed = 1.0;
        self.score = 0;
        self.stats = RunStats::default();

        info!(tiles = self.tiles.len(), "world restarted");
    }

    /// Populate the tile grid, skipping each slot with probability 1/2
    fn spawn_tiles(&mut self) {
        for x in 0..MAX_TILES_X {
            for y in 0..(MAX_TILES_Y - TILE_FREE_ROWS) {
                if self.rng.gen::<bool>() {
                    continue;
                }

                let color = palette::TILE_COLORS
                    [self.rng.gen_range(0..palette::TILE_COLORS.len())];
                let id = self.next_tile_id;
                self.next_tile_id += 1;

                self.tiles.push(Tile {
                    id,
                    body: RectF::new(
                        x as f32 * TILE_WIDTH,
                        y as f32 * TILE_HEIGHT,
                        TILE_WIDTH,
                        TILE_HEIGHT,
                    ),
                    color,
                    hits_left: 1,
                });
            }
        }
    }

    /// Place the paddle at its starting position near the bottom
    fn reset_paddle(&mut self) {
        self.paddle.body = RectF::new(
            (WORLD_WIDTH - PADDLE_WIDTH) * 0.5,
            (WORLD_HEIGHT - PADDLE_HEIGHT * 1.2) - PADDLE_HEIGHT * 0.5,
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
        );
    }

    /// Spawn a ball just above the paddle, travelling upward with a
    /// small random horizontal component
    fn spawn_ball(&mut self) {
        let radius = BALL_RADIUS;
        let position = Vec2::new(
            self.paddle.body.x + self.paddle.body.w * 0.5,
            self.paddle.body.y - radius - 1.0,
        );
        let vx = self.rng.gen_range(-50.0..50.0);

        self.ball = Some(Ball {
            position,
            velocity: Vec2::new(vx, -BALL_SPEED),
            radius,
        });
    }

    fn move_paddle(paddle: &mut Paddle, dt: f32) {
        paddle.body.x += paddle.current_speed() * dt;
        paddle.body.x = paddle.body.x.clamp(0.0, WORLD_WIDTH - paddle.body.w);
    }

    fn move_ball(ball: &mut Ball, dt: f32) {
        ball.position += ball.velocity * dt;
    }

    /// True when the moved ball touches a tile, the paddle or the world
    /// edge, meaning the movement has to be re-run in microsteps
    fn ball_overlaps_anything(&self, ball: &Ball) -> bool {
        let body = ball.bounding_rect();
        self.tiles.iter().any(|tile| body.intersects(&tile.body))
            || body.intersects(&self.paddle.body)
            || Self::ball_touches_boundary(ball)
    }

    fn ball_touches_boundary(ball: &Ball) -> bool {
        ball.position.y - ball.radius < 0.0
            || ball.position.x - ball.radius < 0.0
            || ball.position.x + ball.radius > WORLD_WIDTH
            || Self::ball_below_loss_line(ball)
    }

    fn ball_below_loss_line(ball: &Ball) -> bool {
        ball.position.y + ball.radius > WORLD_HEIGHT - BALL_LOSS_MARGIN
    }

    /// Deflect the ball off the top and side walls and push it back
    /// inside. The bottom edge does not bounce; crossing it loses the
    /// ball.
    fn bounce_off_boundaries(ball: &mut Ball) {
        let above = ball.position.y - ball.radius < 0.0;
        let left = ball.position.x - ball.radius < 0.0;
        let right = ball.position.x + ball.radius > WORLD_WIDTH;

        if above && ball.velocity.y < 0.0 {
            ball.velocity.y = -ball.velocity.y;
        }
        if left || right {
            ball.velocity.x = -ball.velocity.x;
        }

        if above {
            ball.position.y = ball.radius;
        }
        if left {
            ball.position.x = ball.radius;
        }
        if right {
            ball.position.x = WORLD_WIDTH - ball.radius;
        }
    }

    /// Detect tile and paddle contacts for one microstep, queue hit
    /// reports and deflect the ball
    fn resolve_ball_contacts(&mut self, ball: &mut Ball) {
        let body = ball.bounding_rect();
        let mut deflect = (false, false);
        let mut hit_tiles = Vec::new();

        for tile in &self.tiles {
            if body.intersects(&tile.body) {
                deflect = ball.contact_with(&tile.body).deflection();
                hit_tiles.push(tile.id);
            }
        }

        let paddle_hit = body.intersects(&self.paddle.body);
        if paddle_hit {
            deflect = ball.contact_with(&self.paddle.body).deflection();
        }

        for id in hit_tiles {
            self.actions.push(self.clock, Action::BallHitTile(id));
        }

        if deflect.0 {
            ball.velocity.x = -ball.velocity.x;
        }
        if deflect.1 {
            ball.velocity.y = -ball.velocity.y;
        }

        if paddle_hit {
            // moving paddle imparts part of its speed onto the ball
            ball.velocity.x += self.paddle.current_speed() * PADDLE_SPIN_FACTOR;
        }
    }

    /// Let pickups fall, catch them with the paddle and drop the ones
    /// that left the world
    fn advance_pickups(&mut self, dt: f32) {
        let paddle_body = self.paddle.body;
        let mut lost = Vec::new();
        let mut picked = Vec::new();

        for pickup in &mut self.pickups {
            let initial = pickup.body;
            pickup.body.y += PICKUP_FALL_SPEED * dt;

            if pickup.body.y > WORLD_HEIGHT - pickup.body.h * 0.5 {
                lost.push(pickup.id);
                continue;
            }

            // sweep the whole travelled distance so a fast-falling
            // pickup cannot skip past the paddle
            let mut hull = initial;
            hull.h = pickup.body.y - initial.y + initial.h;
            if hull.intersects(&paddle_body) {
                picked.push(pickup.id);
            }
        }

        for id in lost {
            self.actions.push(self.clock, Action::PickupLost(id));
        }
        for id in picked {
            self.actions.push(self.clock, Action::PickupPicked(id));
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Restart => self.restart(),
            Action::BallHitTile(id) => self.on_ball_hit_tile(id),
            Action::BallLost => self.on_ball_lost(),
            Action::PickupPicked(id) => self.on_pickup_picked(id),
            Action::PickupLost(id) => self.on_pickup_lost(id),
            Action::SetSpeed(ratio) => self.set_speed(ratio),
            Action::ScaleBall(ratio) => self.scale_ball(ratio),
        }
    }

    fn on_ball_hit_tile(&mut self, id: EntityId) {
        // microstepping can report the same tile several times per frame
        let Some(index) = self.tiles.iter().position(|tile| tile.id == id) else {
            return;
        };

        debug!(tile = id, "ball hit tile");

        let tile = &mut self.tiles[index];
        tile.hits_left = tile.hits_left.saturating_sub(1);
        if tile.hits_left > 0 {
            return;
        }

        let destroyed = self.tiles.remove(index);
        self.score += REWARD_TILE_DESTROYED;
        self.stats.tiles_destroyed += 1;

        if self.rng.gen_range(0..PICKUP_DROP_CHANCE) == 0 {
            self.spawn_pickup(&destroyed);
        }

        if self.tiles.is_empty() {
            info!("field cleared");
            self.phase = Phase::Won;
            self.actions.push(self.clock + RESTART_DELAY, Action::Restart);
        }
    }

    /// Drop a half-size pickup of the tile's color where it stood
    fn spawn_pickup(&mut self, tile: &Tile) {
        let kind = PickupKind::ALL[self.rng.gen_range(0..PickupKind::ALL.len())];
        let id = self.next_pickup_id;
        self.next_pickup_id += 1;

        let mut body = tile.body;
        body.w *= 0.5;
        body.h *= 0.5;

        debug!(pickup = id, ?kind, "pickup spawned");
        self.stats.pickups_spawned += 1;
        self.pickups.push(Pickup {
            id,
            kind,
            body,
            color: tile.color,
        });
    }

    fn on_ball_lost(&mut self) {
        info!(remaining = self.remaining_balls, "ball lost");
        self.stats.balls_lost += 1;
        self.score -= PENALTY_LOST_BALL;
        self.remaining_balls = self.remaining_balls.saturating_sub(1);

        if self.remaining_balls == 0 {
            info!("game over");
            self.phase = Phase::GameOver;
            self.actions.push(self.clock + RESTART_DELAY, Action::Restart);
        }
    }

    fn on_pickup_picked(&mut self, id: EntityId) {
        let Some(index) = self.pickups.iter().position(|p| p.id == id) else {
            return;
        };
        let pickup = self.pickups.remove(index);

        info!(pickup = id, kind = ?pickup.kind, "pickup collected");
        self.score += REWARD_PICKUP_PICKED;
        self.stats.pickups_collected += 1;

        match pickup.kind {
            PickupKind::SpeedUp => {
                self.set_speed(2.0);
                self.actions
                    .push(self.clock + EFFECT_DURATION, Action::SetSpeed(1.0));
            }
            PickupKind::SlowDown => {
                self.set_speed(0.5);
                self.actions
                    .push(self.clock + EFFECT_DURATION, Action::SetSpeed(1.0));
            }
            PickupKind::ShrinkBall => {
                // no ball, no effect; scheduling the restore anyway
                // would scale a ball released later
                let Some(ball) = self.ball else {
                    return;
                };
                if ball.radius < MIN_BALL_RADIUS {
                    return;
                }
                self.scale_ball(0.5);
                self.actions
                    .push(self.clock + EFFECT_DURATION, Action::ScaleBall(2.0));
            }
            PickupKind::GrowPaddle => {
                // lasts until restart
                self.paddle.body.w =
                    (self.paddle.body.w * 2.0).min(WORLD_WIDTH * 0.99);
                self.paddle.body.x = self
                    .paddle
                    .body
                    .x
                    .clamp(0.0, WORLD_WIDTH - self.paddle.body.w);
            }
        }
    }

    fn on_pickup_lost(&mut self, id: EntityId) {
        debug!(pickup = id, "pickup fell out of the world");
        self.pickups.retain(|p| p.id != id);
    }

    fn set_speed(&mut self, ratio: f32) {
        debug!(ratio, "world speed changed");
        self.speed = ratio;
    }

    fn scale_ball(&mut self, ratio: f32) {
        if let Some(ball) = &mut self.ball {
            ball.radius *= ratio;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_world(seed: u64) -> World {
        let mut world = World::new(seed);
        world.handle_key(Key::Confirm, true);
        world
    }

    fn tick(world: &mut World, count: u32) {
        for _ in 0..count {
            world.update(Duration::from_millis(16));
        }
    }

    #[test]
    fn test_new_world_starts_on_splash() {
        let world = World::new(7);
        assert_eq!(world.phase(), Phase::Splash);
        assert!(world.ball().is_none());
        assert!(world.tiles().is_empty());
        assert_eq!(world.score(), 0);
        assert_eq!(world.remaining_balls(), STARTING_BALLS);
    }

    #[test]
    fn test_confirm_starts_a_run() {
        let world = running_world(42);
        assert_eq!(world.phase(), Phase::Running);
        assert!(!world.tiles().is_empty());
        assert!(world.ball().is_some());
    }

    #[test]
    fn test_tiles_spawn_only_in_top_rows() {
        let world = running_world(42);
        let limit = (MAX_TILES_Y - TILE_FREE_ROWS) as f32 * TILE_HEIGHT;
        for tile in world.tiles() {
            assert!(tile.body.y + tile.body.h <= limit + f32::EPSILON);
        }
    }

    #[test]
    fn test_identical_seeds_spawn_identical_fields() {
        let a = running_world(1234);
        let b = running_world(1234);
        assert_eq!(a.tiles().len(), b.tiles().len());
        for (ta, tb) in a.tiles().iter().zip(b.tiles()) {
            assert_eq!(ta.body, tb.body);
            assert_eq!(ta.color, tb.color);
        }
        let (ba, bb) = (a.ball().unwrap(), b.ball().unwrap());
        assert_eq!(ba.velocity, bb.velocity);
    }

    #[test]
    fn test_update_outside_running_only_advances_clock() {
        let mut world = World::new(7);
        world.update(Duration::from_secs(1));
        assert_eq!(world.phase(), Phase::Splash);
        assert_eq!(world.clock(), Duration::from_secs(1));
    }

    #[test]
    fn test_ball_crossing_bottom_is_lost() {
        let mut world = running_world(42);
        // aim the ball straight down, away from the paddle
        if let Some(ball) = &mut world.ball {
            ball.position = Vec2::new(50.0, 700.0);
            ball.velocity = Vec2::new(0.0, BALL_SPEED);
        }
        tick(&mut world, 20);

        assert!(world.ball().is_none());
        assert_eq!(world.stats().balls_lost, 1);
        assert_eq!(world.remaining_balls(), STARTING_BALLS - 1);
        assert_eq!(world.score(), -PENALTY_LOST_BALL);
    }

    #[test]
    fn test_losing_all_balls_ends_the_run() {
        let mut world = running_world(42);
        for _ in 0..STARTING_BALLS {
            world.apply(Action::BallLost);
        }
        assert_eq!(world.phase(), Phase::GameOver);
        assert_eq!(world.remaining_balls(), 0);

        // the scheduled restart brings the world back
        world.update(RESTART_DELAY + Duration::from_secs(1));
        assert_eq!(world.phase(), Phase::Running);
        assert_eq!(world.remaining_balls(), STARTING_BALLS);
        assert_eq!(world.score(), 0);
    }

    #[test]
    fn test_tile_hit_destroys_and_scores() {
        let mut world = running_world(42);
        let tiles_before = world.tiles().len();
        let id = world.tiles()[0].id;

        world.apply(Action::BallHitTile(id));
        assert_eq!(world.tiles().len(), tiles_before - 1);
        assert_eq!(world.score(), REWARD_TILE_DESTROYED);
        assert_eq!(world.stats().tiles_destroyed, 1);

        // a second report for the same tile is ignored
        world.apply(Action::BallHitTile(id));
        assert_eq!(world.tiles().len(), tiles_before - 1);
        assert_eq!(world.score(), REWARD_TILE_DESTROYED);
    }

    #[test]
    fn test_clearing_the_field_wins() {
        let mut world = running_world(42);
        let ids: Vec<_> = world.tiles().iter().map(|t| t.id).collect();
        for id in ids {
            world.apply(Action::BallHitTile(id));
        }
        assert!(world.tiles().is_empty());
        assert_eq!(world.phase(), Phase::Won);

        world.update(RESTART_DELAY + Duration::from_secs(1));
        assert_eq!(world.phase(), Phase::Running);
        assert!(!world.tiles().is_empty());
    }

    #[test]
    fn test_speed_pickup_expires() {
        let mut world = running_world(42);
        world.pickups.push(Pickup {
            id: 900,
            kind: PickupKind::SpeedUp,
            body: RectF::new(0.0, 0.0, 10.0, 10.0),
            color: palette::WHITE,
        });

        world.apply(Action::PickupPicked(900));
        assert_eq!(world.world_speed(), 2.0);
        assert_eq!(world.score(), REWARD_PICKUP_PICKED);
        assert_eq!(world.stats().pickups_collected, 1);

        world.update(EFFECT_DURATION + Duration::from_secs(1));
        assert_eq!(world.world_speed(), 1.0);
    }

    #[test]
    fn test_slowdown_halves_speed() {
        let mut world = running_world(42);
        world.pickups.push(Pickup {
            id: 901,
            kind: PickupKind::SlowDown,
            body: RectF::new(0.0, 0.0, 10.0, 10.0),
            color: palette::WHITE,
        });

        world.apply(Action::PickupPicked(901));
        assert_eq!(world.world_speed(), 0.5);
    }

    #[test]
    fn test_grow_paddle_is_clamped() {
        let mut world = running_world(42);
        for id in 0..8 {
            world.pickups.push(Pickup {
                id: 910 + id,
                kind: PickupKind::GrowPaddle,
                body: RectF::new(0.0, 0.0, 10.0, 10.0),
                color: palette::WHITE,
            });
            world.apply(Action::PickupPicked(910 + id));
        }

        let paddle = world.paddle();
        assert!(paddle.body.w <= WORLD_WIDTH * 0.99);
        assert!(paddle.body.x >= 0.0);
        assert!(paddle.body.right() <= WORLD_WIDTH);
    }

    #[test]
    fn test_shrink_ball_respects_minimum() {
        let mut world = running_world(42);
        if let Some(ball) = &mut world.ball {
            ball.radius = MIN_BALL_RADIUS - 1.0;
        }
        world.pickups.push(Pickup {
            id: 920,
            kind: PickupKind::ShrinkBall,
            body: RectF::new(0.0, 0.0, 10.0, 10.0),
            color: palette::WHITE,
        });

        world.apply(Action::PickupPicked(920));
        let radius = world.ball().unwrap().radius;
        assert_eq!(radius, MIN_BALL_RADIUS - 1.0);
    }

    #[test]
    fn test_shrink_without_ball_leaves_next_ball_alone() {
        let mut world = running_world(42);
        world.ball = None;
        world.pickups.push(Pickup {
            id: 921,
            kind: PickupKind::ShrinkBall,
            body: RectF::new(0.0, 0.0, 10.0, 10.0),
            color: palette::WHITE,
        });
        world.apply(Action::PickupPicked(921));

        // a ball released afterwards keeps its size past the effect window
        world.handle_key(Key::Release, true);
        world.update(EFFECT_DURATION + Duration::from_secs(1));
        assert_eq!(world.ball().unwrap().radius, BALL_RADIUS);
    }

    #[test]
    fn test_fast_falling_pickup_is_caught_by_sweep() {
        let mut world = running_world(42);
        world.ball = None;

        // one step jumps the pickup clean over the paddle; only the
        // swept hull can catch it
        world.paddle.body.y = 400.0;
        let body = RectF::new(
            world.paddle.body.x + world.paddle.body.w * 0.5,
            world.paddle.body.y - 30.0,
            10.0,
            10.0,
        );
        world.pickups.push(Pickup {
            id: 930,
            kind: PickupKind::SlowDown,
            body,
            color: palette::WHITE,
        });

        let dt = 100.0 / PICKUP_FALL_SPEED;
        world.advance_pickups(dt);
        assert!(!world.pickups[0]
            .body
            .intersects(&world.paddle.body));

        world.update(Duration::ZERO);
        assert!(world.pickups().is_empty());
        assert_eq!(world.stats().pickups_collected, 1);
    }

    #[test]
    fn test_pickup_crossing_the_bottom_is_removed() {
        let mut world = running_world(42);
        world.ball = None;
        world.pickups.push(Pickup {
            id: 931,
            kind: PickupKind::GrowPaddle,
            body: RectF::new(0.0, WORLD_HEIGHT - 50.0, 10.0, 10.0),
            color: palette::WHITE,
        });

        world.advance_pickups(1.0);
        world.update(Duration::ZERO);

        assert!(world.pickups().is_empty());
        assert_eq!(world.stats().pickups_collected, 0);
    }

    #[test]
    fn test_moving_paddle_spins_the_ball() {
        let mut world = running_world(42);
        world.handle_key(Key::Right, true);

        let mut ball = Ball {
            position: Vec2::new(
                world.paddle.body.x + world.paddle.body.w * 0.5,
                world.paddle.body.y,
            ),
            velocity: Vec2::new(0.0, BALL_SPEED),
            radius: BALL_RADIUS,
        };
        world.resolve_ball_contacts(&mut ball);

        let spin = world.paddle.current_speed() * PADDLE_SPIN_FACTOR;
        assert!(spin > 0.0);
        assert_eq!(ball.velocity.x, spin);
    }

    #[test]
    fn test_paddle_stays_in_world() {
        let mut world = running_world(42);
        world.ball = None;
        world.handle_key(Key::Left, true);
        tick(&mut world, 200);
        assert_eq!(world.paddle().body.x, 0.0);

        world.handle_key(Key::Left, false);
        world.handle_key(Key::Right, true);
        tick(&mut world, 400);
        let paddle = world.paddle();
        assert_eq!(paddle.body.x, WORLD_WIDTH - paddle.body.w);
    }

    #[test]
    fn test_release_spawns_ball_only_when_absent() {
        let mut world = running_world(42);
        let velocity_before = world.ball().unwrap().velocity;
        world.handle_key(Key::Release, true);
        assert_eq!(world.ball().unwrap().velocity, velocity_before);

        world.ball = None;
        world.handle_key(Key::Release, true);
        assert!(world.ball().is_some());
    }

    #[test]
    fn test_restart_resets_effects() {
        let mut world = running_world(42);
        world.apply(Action::SetSpeed(2.0));
        world.handle_key(Key::Restart, true);
        assert_eq!(world.world_speed(), 1.0);
        assert_eq!(world.phase(), Phase::Running);
    }
}
