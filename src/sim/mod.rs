//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no delta-time
//! - Seeded RNG only
//! - Stable iteration order (column-major brick scan)
//! - No rendering or platform dependencies

pub mod collision;
pub mod config;
pub mod state;
pub mod tick;

pub use collision::{hits_ceiling, hits_side_wall, point_in_brick, reaches_floor};
pub use config::GameConfig;
pub use state::{Ball, Brick, BrickKind, GameEvent, GameState, Outcome, Paddle, brick_origin};
pub use tick::{Direction, TickInput, plays_break_sound, tick};
