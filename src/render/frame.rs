//! The per-frame render pass

use glam::Vec2;

use super::{Color, HUD_FONT, ROW_PALETTE, Surface};
use crate::sim::{Brick, GameState};

/// Fill color for a live brick
pub fn brick_color(brick: &Brick) -> Color {
    match brick.status {
        3 => Color::GOLD,
        2 => Color::ORANGE,
        _ => ROW_PALETTE[brick.row % ROW_PALETTE.len()],
    }
}

/// Clear the surface and draw bricks, ball, paddle, score and lives, in
/// that order
pub fn draw_frame(state: &GameState, surface: &mut dyn Surface) {
    let config = &state.config;
    let surface_size = Vec2::new(config.surface_width, config.surface_height);
    surface.clear_rect(Vec2::ZERO, surface_size);

    let brick_size = Vec2::new(config.brick_width, config.brick_height);
    for brick in state.bricks.iter().filter(|b| b.is_live()) {
        surface.fill_rect(brick.pos, brick_size, brick_color(brick));
    }

    surface.fill_circle(state.ball.pos, state.ball.radius, Color::BLUE);

    let paddle = &state.paddle;
    surface.fill_rect(
        Vec2::new(paddle.x, config.surface_height - paddle.height),
        Vec2::new(paddle.width as f32, paddle.height),
        Color::BLUE,
    );

    surface.fill_text(
        &format!("Score: {}", state.score),
        Vec2::new(8.0, 20.0),
        HUD_FONT,
        Color::BLUE,
    );
    surface.fill_text(
        &format!("Lives: {}", state.lives),
        Vec2::new(config.surface_width - 65.0, 20.0),
        HUD_FONT,
        Color::BLUE,
    );
}
