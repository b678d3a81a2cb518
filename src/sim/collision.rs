//! Collision predicates
//!
//! Everything here is a pure geometric test on the ball's center point or
//! its next position. Responses (velocity flips, scoring) live in `tick`.

use glam::Vec2;

use super::config::GameConfig;
use super::state::{Ball, Brick};

/// Ball center strictly inside the brick rectangle
pub fn point_in_brick(point: Vec2, brick: &Brick, config: &GameConfig) -> bool {
    point.x > brick.pos.x
        && point.x < brick.pos.x + config.brick_width
        && point.y > brick.pos.y
        && point.y < brick.pos.y + config.brick_height
}

/// Next horizontal position would leave the surface on either side
pub fn hits_side_wall(ball: &Ball, surface_width: f32) -> bool {
    let next_x = ball.pos.x + ball.vel.x;
    next_x > surface_width - ball.radius || next_x < ball.radius
}

/// Next vertical position would cross the top edge
pub fn hits_ceiling(ball: &Ball) -> bool {
    ball.pos.y + ball.vel.y < ball.radius
}

/// Next vertical position would cross the bottom edge (the paddle plane)
pub fn reaches_floor(ball: &Ball, surface_height: f32) -> bool {
    ball.pos.y + ball.vel.y > surface_height - ball.radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::BrickKind;

    fn ball(pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            pos,
            vel,
            radius: 5.0,
        }
    }

    #[test]
    fn test_point_in_brick_is_strict() {
        let config = GameConfig::default();
        let brick = Brick::new(0, 0, BrickKind::Soft, &config);
        // Brick spans x 35..100, y 30..50
        assert!(point_in_brick(Vec2::new(50.0, 40.0), &brick, &config));
        assert!(!point_in_brick(Vec2::new(35.0, 40.0), &brick, &config));
        assert!(!point_in_brick(Vec2::new(100.0, 40.0), &brick, &config));
        assert!(!point_in_brick(Vec2::new(50.0, 30.0), &brick, &config));
        assert!(!point_in_brick(Vec2::new(50.0, 50.0), &brick, &config));
    }

    #[test]
    fn test_side_walls() {
        assert!(hits_side_wall(&ball(Vec2::new(6.0, 100.0), Vec2::new(-2.0, 0.0)), 400.0));
        assert!(!hits_side_wall(&ball(Vec2::new(7.0, 100.0), Vec2::new(-2.0, 0.0)), 400.0));
        assert!(hits_side_wall(&ball(Vec2::new(394.0, 100.0), Vec2::new(2.0, 0.0)), 400.0));
        assert!(!hits_side_wall(&ball(Vec2::new(393.0, 100.0), Vec2::new(2.0, 0.0)), 400.0));
    }

    #[test]
    fn test_ceiling_and_floor() {
        assert!(hits_ceiling(&ball(Vec2::new(50.0, 6.0), Vec2::new(0.0, -2.0))));
        assert!(!hits_ceiling(&ball(Vec2::new(50.0, 7.0), Vec2::new(0.0, -2.0))));
        assert!(reaches_floor(&ball(Vec2::new(50.0, 294.0), Vec2::new(0.0, 2.0)), 300.0));
        assert!(!reaches_floor(&ball(Vec2::new(50.0, 293.0), Vec2::new(0.0, 2.0)), 300.0));
    }
}
