//! Game state and core simulation types
//!
//! Everything the tick function mutates lives in [`GameState`]. Nothing
//! outside `sim::tick` writes to it during play.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use crate::round2;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every brick destroyed
    Victory,
    /// Last life lost
    Defeat,
}

/// Original classification of a brick, fixed for its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickKind {
    /// One hit
    #[default]
    Soft,
    /// Three hits, plays the break sound when finally destroyed
    Hard,
}

impl BrickKind {
    /// Status a fresh brick of this kind starts with
    pub fn initial_status(self) -> u8 {
        match self {
            BrickKind::Soft => 1,
            BrickKind::Hard => 3,
        }
    }
}

/// A brick cell in the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub column: usize,
    pub row: usize,
    /// Top-left corner
    pub pos: Vec2,
    /// Remaining hits: 0 destroyed, 1 normal, 2 damaged, 3 hard
    pub status: u8,
    pub kind: BrickKind,
}

impl Brick {
    pub fn new(column: usize, row: usize, kind: BrickKind, config: &GameConfig) -> Self {
        Self {
            column,
            row,
            pos: brick_origin(column, row, config),
            status: kind.initial_status(),
            kind,
        }
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.status > 0
    }
}

/// Top-left corner of the brick at `column`, `row`
pub fn brick_origin(column: usize, row: usize, config: &GameConfig) -> Vec2 {
    Vec2::new(
        column as f32 * (config.brick_width + config.brick_padding) + config.brick_offset_left,
        row as f32 * (config.brick_height + config.brick_padding) + config.brick_offset_top,
    )
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the spawn point with the initial velocity
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            pos: spawn_point(config),
            vel: Vec2::new(config.ball_start_dx, config.ball_start_dy),
            radius: config.ball_radius,
        }
    }

    /// Euclidean speed
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Speed rounded to two decimals, as shown to the player
    pub fn display_speed(&self) -> f32 {
        round2(self.speed())
    }

    /// Grow each velocity component by `increment` away from zero.
    ///
    /// A component that is exactly zero counts as non-positive and moves
    /// negative.
    pub fn accelerate(&mut self, increment: f32) {
        if self.vel.x > 0.0 {
            self.vel.x += increment;
        } else {
            self.vel.x -= increment;
        }
        if self.vel.y > 0.0 {
            self.vel.y += increment;
        } else {
            self.vel.y -= increment;
        }
    }

    /// Advance by one tick's worth of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

fn spawn_point(config: &GameConfig) -> Vec2 {
    Vec2::new(
        config.surface_width / 2.0,
        config.surface_height - config.ball_spawn_lift,
    )
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Grows as bricks are destroyed, never shrinks
    pub width: u32,
    pub height: f32,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        let mut paddle = Self {
            x: 0.0,
            width: config.paddle_width,
            height: config.paddle_height,
        };
        paddle.recenter(config.surface_width);
        paddle
    }

    /// Center the paddle at its current width
    pub fn recenter(&mut self, surface_width: f32) {
        self.x = (surface_width - self.width as f32) / 2.0;
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width as f32
    }

    /// Strictly inside the paddle's horizontal span
    #[inline]
    pub fn spans(&self, x: f32) -> bool {
        x > self.x && x < self.right()
    }
}

/// Something that happened during a tick, for the collaborators to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Hard brick lost a hit point but survives
    BrickDamaged { column: usize, row: usize, status: u8 },
    /// Brick reached status 0
    BrickDestroyed { column: usize, row: usize, kind: BrickKind },
    /// Paddle width grew
    PaddleGrew { width: u32 },
    /// Ball speed changed (rounded to two decimals)
    SpeedChanged { speed: f32 },
    /// Ball passed the paddle, game continues
    LifeLost { lives_left: u32 },
    /// Game over, one way or the other
    Ended(Outcome),
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    /// Seed the brick grid was drawn from
    pub seed: u64,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Column-major: index = column * rows + row
    pub bricks: Vec<Brick>,
    pub score: u32,
    pub lives: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Set once the game is won or lost
    pub outcome: Option<Outcome>,
}

impl GameState {
    /// Create a new game, drawing hard bricks from the seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let config = config.validate();
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut bricks = Vec::with_capacity(config.brick_count());
        for column in 0..config.brick_columns {
            for row in 0..config.brick_rows {
                let kind = if rng.random_bool(config.hard_brick_chance) {
                    BrickKind::Hard
                } else {
                    BrickKind::Soft
                };
                bricks.push(Brick::new(column, row, kind, &config));
            }
        }

        Self {
            ball: Ball::spawn(&config),
            paddle: Paddle::new(&config),
            lives: config.lives,
            bricks,
            config,
            seed,
            score: 0,
            time_ticks: 0,
            outcome: None,
        }
    }

    /// Brick at grid position, if any
    pub fn brick(&self, column: usize, row: usize) -> Option<&Brick> {
        if column >= self.config.brick_columns || row >= self.config.brick_rows {
            return None;
        }
        self.bricks.get(column * self.config.brick_rows + row)
    }

    pub fn brick_mut(&mut self, column: usize, row: usize) -> Option<&mut Brick> {
        if column >= self.config.brick_columns || row >= self.config.brick_rows {
            return None;
        }
        self.bricks.get_mut(column * self.config.brick_rows + row)
    }

    pub fn live_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_live()).count()
    }

    pub fn destroyed_bricks(&self) -> usize {
        self.bricks.len() - self.live_bricks()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Put the ball back at the spawn point with the initial velocity and
    /// recenter the paddle at its current width
    pub fn respawn(&mut self) {
        self.ball = Ball::spawn(&self.config);
        self.paddle.recenter(self.config.surface_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_layout() {
        let state = GameState::new(GameConfig::default(), 1);
        assert_eq!(state.bricks.len(), 105);

        let brick = state.brick(2, 3).unwrap();
        assert_eq!((brick.column, brick.row), (2, 3));
        assert_eq!(brick.pos, Vec2::new(2.0 * 75.0 + 35.0, 3.0 * 30.0 + 30.0));
        assert!(state.brick(15, 0).is_none());
    }

    #[test]
    fn test_brick_status_matches_kind() {
        let state = GameState::new(GameConfig::default(), 42);
        for brick in &state.bricks {
            assert_eq!(brick.status, brick.kind.initial_status());
        }
        let hard = state.bricks.iter().filter(|b| b.kind == BrickKind::Hard).count();
        // ~20% of 105, with generous slack for the draw
        assert!(hard > 5 && hard < 45, "hard bricks: {hard}");
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a = GameState::new(GameConfig::default(), 777);
        let b = GameState::new(GameConfig::default(), 777);
        let kinds_a: Vec<_> = a.bricks.iter().map(|b| b.kind).collect();
        let kinds_b: Vec<_> = b.bricks.iter().map(|b| b.kind).collect();
        assert_eq!(kinds_a, kinds_b);
    }

    #[test]
    fn test_initial_positions() {
        let state = GameState::new(GameConfig::default(), 1);
        assert_eq!(state.ball.pos, Vec2::new(600.0, 670.0));
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        assert_eq!(state.paddle.x, 510.0);
        assert_eq!(state.lives, 50);
        assert!((state.ball.display_speed() - 2.83).abs() < 1e-4);
    }

    #[test]
    fn test_accelerate_preserves_signs() {
        let mut ball = Ball::spawn(&GameConfig::default());
        ball.vel = Vec2::new(-2.0, 3.0);
        ball.accelerate(0.5);
        assert_eq!(ball.vel, Vec2::new(-2.5, 3.5));

        ball.vel = Vec2::new(0.0, -1.0);
        ball.accelerate(0.5);
        assert_eq!(ball.vel, Vec2::new(-0.5, -1.5));
    }

    #[test]
    fn test_paddle_span_is_strict() {
        let paddle = Paddle {
            x: 100.0,
            width: 50,
            height: 5.0,
        };
        assert!(!paddle.spans(100.0));
        assert!(paddle.spans(100.5));
        assert!(!paddle.spans(150.0));
    }

    #[test]
    fn test_respawn_keeps_paddle_width() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.paddle.width = 210;
        state.paddle.x = 0.0;
        state.ball.pos = Vec2::new(10.0, 10.0);
        state.ball.vel = Vec2::new(5.0, 5.0);

        state.respawn();
        assert_eq!(state.paddle.width, 210);
        assert_eq!(state.paddle.x, 495.0);
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
    }
}
