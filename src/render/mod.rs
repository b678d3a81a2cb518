//! Rendering module
//!
//! The game draws through the [`Surface`] trait: four primitives, no return
//! values. The browser implements it on a 2D canvas context; tests and the
//! native runner record the commands instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod commands;
pub mod frame;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use commands::{CommandBuffer, DrawCommand};
pub use frame::{brick_color, draw_frame};

use glam::Vec2;

/// CSS color string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub &'static str);

impl Color {
    /// Ball, paddle and HUD text
    pub const BLUE: Color = Color("#0095DD");
    /// Hard brick, untouched
    pub const GOLD: Color = Color("#FFD700");
    /// Hard brick after one hit
    pub const ORANGE: Color = Color("#FFA500");

    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Normal bricks cycle through these by row
pub const ROW_PALETTE: [Color; 7] = [
    Color("#FF5733"),
    Color("#33FF57"),
    Color("#3357FF"),
    Color("#FF33A6"),
    Color("#FF8C33"),
    Color("#57FF33"),
    Color("#33FFF6"),
];

/// HUD text font
pub const HUD_FONT: &str = "16px Arial";

/// A 2D drawing surface
pub trait Surface {
    /// Clear a rectangle to transparent
    fn clear_rect(&mut self, origin: Vec2, size: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
    /// Draw text with its baseline-left corner at `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: Color);
}
