//! Brick Breaker - a single-screen ball-and-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, bricks, scoring)
//! - `render`: Drawing surface abstraction and the per-frame render pass
//! - `input`: Key mapping, held direction, autopilot
//! - `audio`: Fire-and-forget sound trigger
//! - `hud`: Ball speed / paddle size text widgets
//! - `game_loop`: Loop controller state machine and tick scheduling
//! - `session`: Glue that runs one tick against all collaborators
//! - `settings`: Player preferences

pub mod audio;
pub mod game_loop;
pub mod hud;
pub mod input;
pub mod render;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{Peripherals, Session, TickStatus};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Nominal delay between ticks (milliseconds)
    pub const TICK_INTERVAL_MS: u64 = 10;
    /// Slowest tick interval a setting may ask for
    pub const MAX_TICK_INTERVAL_MS: u64 = 1_000;

    /// Drawing surface dimensions
    pub const SURFACE_WIDTH: f32 = 1200.0;
    pub const SURFACE_HEIGHT: f32 = 700.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    /// Distance of the spawn point above the bottom edge
    pub const BALL_SPAWN_LIFT: f32 = 30.0;
    pub const BALL_START_DX: f32 = 2.0;
    pub const BALL_START_DY: f32 = -2.0;
    /// Added to each velocity axis on every brick destroyed
    pub const SPEED_INCREMENT: f32 = 0.1;

    /// Paddle defaults
    pub const PADDLE_HEIGHT: f32 = 5.0;
    pub const PADDLE_WIDTH: u32 = 180;
    pub const PADDLE_STEP: f32 = 7.0;
    pub const PADDLE_GROWTH: u32 = 15;

    /// Brick grid layout
    pub const BRICK_COLUMNS: usize = 15;
    pub const BRICK_ROWS: usize = 7;
    pub const BRICK_WIDTH: f32 = 65.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 35.0;
    /// Probability that a brick starts hard (three hits)
    pub const HARD_BRICK_CHANCE: f64 = 0.2;

    pub const STARTING_LIVES: u32 = 50;
}

/// Round to two decimal places (speed display precision)
#[inline]
pub fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
