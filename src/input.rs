//! Keyboard input
//!
//! Platform key events are turned into [`InputEvent`]s; held directional
//! keys are folded into a single [`Direction`] that the tick consumes.

use crate::sim::{Direction, GameState};

/// A directional key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value, accepting legacy spellings
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Right" | "ArrowRight" => Some(Key::Right),
            "Left" | "ArrowLeft" => Some(Key::Left),
            _ => None,
        }
    }
}

/// Discrete input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    TogglePause,
    ToggleAutopilot,
}

impl InputEvent {
    /// Event for a key press, if the key means anything to the game
    pub fn key_down(name: &str) -> Option<Self> {
        if let Some(key) = Key::from_key_name(name) {
            return Some(InputEvent::KeyDown(key));
        }
        match name {
            "Escape" | "p" | "P" => Some(InputEvent::TogglePause),
            "i" | "I" => Some(InputEvent::ToggleAutopilot),
            _ => None,
        }
    }

    /// Event for a key release
    pub fn key_up(name: &str) -> Option<Self> {
        Key::from_key_name(name).map(InputEvent::KeyUp)
    }
}

/// Which directional keys are currently down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    left: bool,
    right: bool,
}

impl HeldKeys {
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
        }
    }

    pub fn release(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
        }
    }

    /// Direction to apply this tick
    pub fn direction(&self) -> Direction {
        if self.right && self.left {
            Direction::Both
        } else if self.right {
            Direction::Right
        } else if self.left {
            Direction::Left
        } else {
            Direction::None
        }
    }
}

/// Steer the paddle center toward the ball
pub fn autopilot(state: &GameState) -> Direction {
    let center = state.paddle.x + state.paddle.width as f32 / 2.0;
    let target = state.ball.pos.x + state.ball.vel.x;
    let deadzone = state.config.paddle_step;

    if target > center + deadzone {
        Direction::Right
    } else if target < center - deadzone {
        Direction::Left
    } else {
        Direction::None
    }
}
