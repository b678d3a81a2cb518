//! Recording surface

use glam::Vec2;

use super::{Color, Surface};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect { origin: Vec2, size: Vec2 },
    FillCircle { center: Vec2, radius: f32, color: Color },
    FillRect { origin: Vec2, size: Vec2, color: Color },
    FillText { text: String, pos: Vec2, font: String, color: Color },
}

/// Surface that keeps every command of the current frame.
///
/// `clear_rect` over the whole surface starts a new frame, so the buffer
/// never grows past one frame's worth of commands.
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
    /// Frames started so far
    pub frames: u64,
}

impl CommandBuffer {
    /// Text of every `FillText` in the current frame
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count()
    }
}

impl Surface for CommandBuffer {
    fn clear_rect(&mut self, origin: Vec2, size: Vec2) {
        if origin == Vec2::ZERO {
            self.commands.clear();
            self.frames += 1;
        }
        self.commands.push(DrawCommand::ClearRect { origin, size });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands
            .push(DrawCommand::FillRect { origin, size, color });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            pos,
            font: font.to_string(),
            color,
        });
    }
}
