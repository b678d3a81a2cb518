//! Fixed-step simulation tick
//!
//! One call advances the game by exactly one frame: brick collisions, wall
//! and paddle collisions, ball movement, paddle movement. There is no
//! delta-time; the ball moves by its velocity every tick.

use serde::{Deserialize, Serialize};

use super::collision::{hits_ceiling, hits_side_wall, point_in_brick, reaches_floor};
use super::state::{BrickKind, GameEvent, GameState, Outcome};

/// Direction the player is holding this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
    /// Both keys held: right if there is room, otherwise left
    Both,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub direction: Direction,
}

/// Advance the game state by one tick.
///
/// Returns what happened, in order. Once the game has ended the state is
/// frozen and further calls return no events.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_over() {
        return events;
    }

    state.time_ticks += 1;

    resolve_bricks(state, &mut events);
    if state.is_over() {
        return events;
    }

    resolve_bounds(state, &mut events);
    if state.is_over() {
        return events;
    }

    state.ball.advance();
    move_paddle(state, input.direction);

    events
}

/// Test every live brick against the ball center, column by column.
///
/// There is no early exit: if bricks overlap, each one containing the ball
/// is resolved and each flips the vertical velocity.
fn resolve_bricks(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let total = state.config.brick_count() as u32;

    for index in 0..state.bricks.len() {
        let brick = &mut state.bricks[index];
        if !brick.is_live() || !point_in_brick(state.ball.pos, brick, &state.config) {
            continue;
        }

        // Vertical reflection only, whatever side the brick was hit from
        state.ball.vel.y = -state.ball.vel.y;

        let (column, row) = (brick.column, brick.row);
        if brick.status > 1 {
            brick.status -= 1;
            log::debug!("Brick ({column}, {row}) damaged, status {}", brick.status);
            events.push(GameEvent::BrickDamaged {
                column,
                row,
                status: brick.status,
            });
        } else {
            let kind = brick.kind;
            brick.status = 0;
            state.score += 1;
            log::debug!("Brick ({column}, {row}) destroyed, score {}", state.score);
            events.push(GameEvent::BrickDestroyed { column, row, kind });

            if state.score % state.config.brick_columns as u32 == 0 {
                state.paddle.width += state.config.paddle_growth;
                log::info!("Paddle grew to {}", state.paddle.width);
                events.push(GameEvent::PaddleGrew {
                    width: state.paddle.width,
                });
            }

            state.ball.accelerate(state.config.speed_increment);
            events.push(GameEvent::SpeedChanged {
                speed: state.ball.display_speed(),
            });
        }

        if state.score == total {
            log::info!("All {total} bricks destroyed");
            state.outcome = Some(Outcome::Victory);
            events.push(GameEvent::Ended(Outcome::Victory));
            return;
        }
    }
}

/// Walls, ceiling, and the paddle plane
fn resolve_bounds(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let ball = &mut state.ball;

    if hits_side_wall(ball, state.config.surface_width) {
        ball.vel.x = -ball.vel.x;
    }

    if hits_ceiling(ball) {
        ball.vel.y = -ball.vel.y;
    } else if reaches_floor(ball, state.config.surface_height) {
        if state.paddle.spans(ball.pos.x) {
            ball.vel.y = -ball.vel.y;
        } else {
            state.lives = state.lives.saturating_sub(1);
            if state.lives == 0 {
                log::info!("Last life lost, score {}", state.score);
                state.outcome = Some(Outcome::Defeat);
                events.push(GameEvent::Ended(Outcome::Defeat));
                return;
            }

            log::info!("Life lost, {} remaining", state.lives);
            state.respawn();
            events.push(GameEvent::LifeLost {
                lives_left: state.lives,
            });
            events.push(GameEvent::SpeedChanged {
                speed: state.ball.display_speed(),
            });
        }
    }
}

/// Step the paddle; the edge test uses the position before the step, so the
/// paddle may overshoot an edge by less than one step
fn move_paddle(state: &mut GameState, direction: Direction) {
    let paddle = &mut state.paddle;
    let step = state.config.paddle_step;

    let wants_right = matches!(direction, Direction::Right | Direction::Both);
    let wants_left = matches!(direction, Direction::Left | Direction::Both);

    if wants_right && paddle.right() < state.config.surface_width {
        paddle.x += step;
    } else if wants_left && paddle.x > 0.0 {
        paddle.x -= step;
    }
}

/// Whether a destroyed brick of this kind triggers the break sound
pub fn plays_break_sound(kind: BrickKind) -> bool {
    kind == BrickKind::Hard
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::config::GameConfig;
    use glam::Vec2;

    fn soft_config() -> GameConfig {
        GameConfig {
            hard_brick_chance: 0.0,
            ..Default::default()
        }
    }

    /// Put the ball in the middle of a brick, moving up and to the right
    fn aim_at(state: &mut GameState, column: usize, row: usize) {
        let brick = state.brick(column, row).unwrap();
        let center = brick.pos + Vec2::new(state.config.brick_width, state.config.brick_height) / 2.0;
        state.ball.pos = center;
        state.ball.vel = Vec2::new(2.0, -2.0);
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut state = GameState::new(soft_config(), 1);
        let before = state.ball.pos;
        let events = tick(&mut state, &idle());
        assert!(events.is_empty());
        assert_eq!(state.ball.pos, before + Vec2::new(2.0, -2.0));
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_soft_brick_destroyed_in_one_hit() {
        let mut state = GameState::new(soft_config(), 1);
        aim_at(&mut state, 3, 2);

        let events = tick(&mut state, &idle());

        assert_eq!(state.brick(3, 2).unwrap().status, 0);
        assert_eq!(state.score, 1);
        assert_eq!(
            events[0],
            GameEvent::BrickDestroyed {
                column: 3,
                row: 2,
                kind: BrickKind::Soft
            }
        );
        assert!(!plays_break_sound(BrickKind::Soft));
        // Reflected, then accelerated away from zero
        assert!((state.ball.vel.x - 2.1).abs() < 1e-5);
        assert!((state.ball.vel.y - 2.1).abs() < 1e-5);
        assert!(matches!(events[1], GameEvent::SpeedChanged { speed } if (speed - 2.97).abs() < 1e-4));
    }

    #[test]
    fn test_hard_brick_takes_three_hits() {
        let mut state = GameState::new(soft_config(), 1);
        {
            let brick = state.brick_mut(0, 0).unwrap();
            brick.kind = BrickKind::Hard;
            brick.status = 3;
        }

        aim_at(&mut state, 0, 0);
        let events = tick(&mut state, &idle());
        assert_eq!(events, vec![GameEvent::BrickDamaged { column: 0, row: 0, status: 2 }]);
        assert_eq!(state.score, 0);

        aim_at(&mut state, 0, 0);
        let events = tick(&mut state, &idle());
        assert_eq!(events, vec![GameEvent::BrickDamaged { column: 0, row: 0, status: 1 }]);

        aim_at(&mut state, 0, 0);
        let events = tick(&mut state, &idle());
        assert_eq!(
            events[0],
            GameEvent::BrickDestroyed {
                column: 0,
                row: 0,
                kind: BrickKind::Hard
            }
        );
        assert!(plays_break_sound(BrickKind::Hard));
        assert_eq!(state.score, 1);
        assert_eq!(state.brick(0, 0).unwrap().status, 0);
    }

    #[test]
    fn test_damage_does_not_change_speed() {
        let mut state = GameState::new(soft_config(), 1);
        state.brick_mut(1, 1).unwrap().status = 3;
        aim_at(&mut state, 1, 1);
        tick(&mut state, &idle());
        assert_eq!(state.ball.vel, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_destroyed_brick_is_inert() {
        let mut state = GameState::new(soft_config(), 1);
        aim_at(&mut state, 4, 4);
        tick(&mut state, &idle());

        aim_at(&mut state, 4, 4);
        let events = tick(&mut state, &idle());
        assert!(events.is_empty());
        assert_eq!(state.score, 1);
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_overlapping_bricks_resolved_in_scan_order() {
        let config = GameConfig {
            brick_padding: -10.0,
            ..soft_config()
        };
        let mut state = GameState::new(config, 1);
        // Column 0 spans x 35..100, column 1 spans x 90..155
        state.ball.pos = Vec2::new(95.0, 40.0);
        state.ball.vel = Vec2::new(2.0, -2.0);

        let events = tick(&mut state, &idle());
        let destroyed: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::BrickDestroyed { column, .. } => Some(*column),
                _ => None,
            })
            .collect();
        assert_eq!(destroyed, vec![0, 1]);
        assert_eq!(state.score, 2);
        // Two flips cancel out, two accelerations add up
        assert!((state.ball.vel.x - 2.2).abs() < 1e-5);
        assert!((state.ball.vel.y + 2.2).abs() < 1e-5);
    }

    #[test]
    fn test_paddle_grows_every_column_count() {
        let config = GameConfig {
            brick_columns: 2,
            brick_rows: 3,
            ..soft_config()
        };
        let mut state = GameState::new(config, 1);
        let start = state.paddle.width;

        aim_at(&mut state, 0, 0);
        tick(&mut state, &idle());
        assert_eq!(state.paddle.width, start);

        aim_at(&mut state, 0, 1);
        let events = tick(&mut state, &idle());
        assert_eq!(state.paddle.width, start + 15);
        assert!(events.contains(&GameEvent::PaddleGrew { width: start + 15 }));

        aim_at(&mut state, 0, 2);
        tick(&mut state, &idle());
        assert_eq!(state.paddle.width, start + 15);
    }

    #[test]
    fn test_victory_on_last_brick() {
        let config = GameConfig {
            brick_columns: 1,
            brick_rows: 1,
            ..soft_config()
        };
        let mut state = GameState::new(config, 1);
        aim_at(&mut state, 0, 0);
        let pos = state.ball.pos;

        let events = tick(&mut state, &idle());
        assert_eq!(events.last(), Some(&GameEvent::Ended(Outcome::Victory)));
        assert_eq!(state.outcome, Some(Outcome::Victory));
        // Tick stopped before movement
        assert_eq!(state.ball.pos, pos);

        let ticks = state.time_ticks;
        assert!(tick(&mut state, &idle()).is_empty());
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_side_wall_and_ceiling_bounce() {
        let mut state = GameState::new(soft_config(), 1);
        state.ball.pos = Vec2::new(6.0, 6.0);
        state.ball.vel = Vec2::new(-2.0, -2.0);
        tick(&mut state, &idle());
        assert_eq!(state.ball.vel, Vec2::new(2.0, 2.0));
        assert_eq!(state.ball.pos, Vec2::new(8.0, 8.0));
    }

    #[test]
    fn test_paddle_bounce() {
        let mut state = GameState::new(soft_config(), 1);
        let h = state.config.surface_height;
        state.ball.pos = Vec2::new(600.0, h - 6.0);
        state.ball.vel = Vec2::new(2.0, 2.0);

        let events = tick(&mut state, &idle());
        assert!(events.is_empty());
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        assert_eq!(state.lives, 50);
    }

    #[test]
    fn test_missed_ball_costs_a_life() {
        let mut state = GameState::new(soft_config(), 1);
        let h = state.config.surface_height;
        state.paddle.width = 210;
        state.paddle.x = 900.0;
        state.ball.pos = Vec2::new(50.0, h - 6.0);
        state.ball.vel = Vec2::new(3.0, 3.0);

        let events = tick(&mut state, &idle());
        assert_eq!(events[0], GameEvent::LifeLost { lives_left: 49 });
        assert_eq!(state.lives, 49);
        assert_eq!(state.paddle.width, 210);
        assert_eq!(state.paddle.x, 495.0);
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        // Respawned, then moved one step
        assert_eq!(state.ball.pos, Vec2::new(602.0, h - 32.0));
    }

    #[test]
    fn test_last_life_is_defeat() {
        let mut state = GameState::new(soft_config(), 1);
        let h = state.config.surface_height;
        state.lives = 1;
        state.paddle.x = 900.0;
        state.ball.pos = Vec2::new(50.0, h - 6.0);
        state.ball.vel = Vec2::new(2.0, 2.0);

        let events = tick(&mut state, &idle());
        assert_eq!(events, vec![GameEvent::Ended(Outcome::Defeat)]);
        assert_eq!(state.lives, 0);
        assert!(tick(&mut state, &idle()).is_empty());
    }

    #[test]
    fn test_paddle_moves_and_stops_at_edges() {
        let mut state = GameState::new(soft_config(), 1);
        let right = TickInput {
            direction: Direction::Right,
        };
        let left = TickInput {
            direction: Direction::Left,
        };

        let x = state.paddle.x;
        tick(&mut state, &right);
        assert_eq!(state.paddle.x, x + 7.0);
        tick(&mut state, &left);
        assert_eq!(state.paddle.x, x);

        state.paddle.x = 0.0;
        tick(&mut state, &left);
        assert_eq!(state.paddle.x, 0.0);

        // Overshoots by up to one step, then stops
        state.paddle.x = state.config.surface_width - 180.0 - 3.0;
        tick(&mut state, &right);
        assert_eq!(state.paddle.x, state.config.surface_width - 176.0);
        tick(&mut state, &right);
        assert_eq!(state.paddle.x, state.config.surface_width - 176.0);
    }

    #[test]
    fn test_both_keys_fall_back_to_left_at_right_edge() {
        let mut state = GameState::new(soft_config(), 1);
        let both = TickInput {
            direction: Direction::Both,
        };

        let x = state.paddle.x;
        tick(&mut state, &both);
        assert_eq!(state.paddle.x, x + 7.0);

        // Right edge reached: right is blocked, left applies
        state.paddle.x = state.config.surface_width - 180.0;
        tick(&mut state, &both);
        assert_eq!(state.paddle.x, state.config.surface_width - 187.0);

        // Paddle wider than the surface: neither direction has room
        state.paddle.x = 0.0;
        state.paddle.width = state.config.surface_width as u32;
        tick(&mut state, &both);
        assert_eq!(state.paddle.x, 0.0);
    }
}
