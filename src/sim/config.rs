//! Game tuning parameters
//!
//! Every number the simulation depends on lives here so tests can build
//! small, predictable boards.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub surface_width: f32,
    pub surface_height: f32,
    pub ball_radius: f32,
    pub ball_spawn_lift: f32,
    pub ball_start_dx: f32,
    pub ball_start_dy: f32,
    pub speed_increment: f32,
    pub paddle_height: f32,
    pub paddle_width: u32,
    pub paddle_step: f32,
    pub paddle_growth: u32,
    pub brick_columns: usize,
    pub brick_rows: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,
    pub hard_brick_chance: f64,
    pub lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            ball_radius: BALL_RADIUS,
            ball_spawn_lift: BALL_SPAWN_LIFT,
            ball_start_dx: BALL_START_DX,
            ball_start_dy: BALL_START_DY,
            speed_increment: SPEED_INCREMENT,
            paddle_height: PADDLE_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_step: PADDLE_STEP,
            paddle_growth: PADDLE_GROWTH,
            brick_columns: BRICK_COLUMNS,
            brick_rows: BRICK_ROWS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,
            hard_brick_chance: HARD_BRICK_CHANCE,
            lives: STARTING_LIVES,
        }
    }
}

impl GameConfig {
    /// Total number of bricks on the board (the winning score)
    pub fn brick_count(&self) -> usize {
        self.brick_columns * self.brick_rows
    }

    /// Clamp values that would make the game unplayable
    pub fn validate(mut self) -> Self {
        if self.brick_columns == 0 || self.brick_rows == 0 {
            log::warn!(
                "Empty brick grid {}x{}, using defaults",
                self.brick_columns,
                self.brick_rows
            );
            self.brick_columns = BRICK_COLUMNS;
            self.brick_rows = BRICK_ROWS;
        }
        if self.lives == 0 {
            log::warn!("Zero lives configured, using 1");
            self.lives = 1;
        }
        if !(0.0..=1.0).contains(&self.hard_brick_chance) {
            log::warn!("Hard brick chance {} out of range", self.hard_brick_chance);
            self.hard_brick_chance = self.hard_brick_chance.clamp(0.0, 1.0);
        }
        if self.paddle_width as f32 > self.surface_width {
            self.paddle_width = self.surface_width as u32;
        }
        self
    }
}
