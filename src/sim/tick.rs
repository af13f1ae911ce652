//! Fixed timestep simulation tick
//!
//! One call advances a level by one frame: the paddle moves first, then every
//! ball steps in id order, and each impact is applied before the next ball
//! moves.

use super::ball::Impact;
use super::block::Role;
use super::state::{GamePhase, GameState, HitEvent, Obstacle};
use crate::consts::{SCORE_BLOCK_DESTROYED, SCORE_BLOCK_HIT, SCORE_LEVEL_CLEARED};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move the paddle left (wins when both are held)
    pub left: bool,
    /// Move the paddle right
    pub right: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f64) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;
    state.events.clear();

    if let Some(paddle) = state.paddle_mut() {
        if input.left && paddle.can_move_left() {
            paddle.move_left(dt);
        } else if input.right && paddle.can_move_right() {
            paddle.move_right(dt);
        }
    }

    let ids: Vec<u32> = state.balls.keys().copied().collect();
    for id in ids {
        let Some(ball) = state.balls.get_mut(&id) else {
            continue;
        };
        if let Some(impact) = ball.step(&state.environment, dt) {
            apply_hit(state, id, impact);
        }
    }

    check_outcome(state);
}

/// Apply the bookkeeping side of an impact
fn apply_hit(state: &mut GameState, ball: u32, impact: Impact) {
    let mut destroyed = false;

    match state.environment.get_mut(impact.obstacle) {
        Some(Obstacle::Block(block)) => match block.role() {
            Role::Target => {
                block.take_hit();
                if block.is_destroyed() {
                    destroyed = true;
                    state.score += SCORE_BLOCK_DESTROYED;
                } else {
                    state.score += SCORE_BLOCK_HIT;
                }
            }
            Role::DeathRegion => {
                state.balls.remove(&ball);
                log::debug!("Ball {} lost, {} left in play", ball, state.balls.len());
            }
            Role::Wall => {}
        },
        Some(Obstacle::Paddle(_)) | None => {}
    }

    if destroyed {
        state.environment.remove(impact.obstacle);
        state.remaining_blocks = state.remaining_blocks.saturating_sub(1);
        log::debug!(
            "Block {} destroyed, {} remaining",
            impact.obstacle.0,
            state.remaining_blocks
        );
    }

    state.events.push(HitEvent {
        obstacle: impact.obstacle,
        ball,
        point: impact.point,
        destroyed,
    });
}

/// End the turn or the level once balls or blocks run out
fn check_outcome(state: &mut GameState) {
    if state.balls.is_empty() {
        state.lives = state.lives.saturating_sub(1);
        state.reset_paddle();
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            log::info!("Game over with score {}", state.score);
        } else {
            state.phase = GamePhase::BallLost;
            log::info!("All balls lost, {} lives left", state.lives);
        }
    }

    if state.remaining_blocks == 0 {
        state.score += SCORE_LEVEL_CLEARED;
        state.phase = GamePhase::Cleared;
        state.balls.clear();
        log::info!("Level '{}' cleared with score {}", state.level_name, state.score);
    }
}

/// Input that keeps the paddle under the most urgent ball
///
/// Tracks the lowest ball that is falling; holds still when none is.
pub fn autopilot_input(state: &GameState) -> TickInput {
    let Some(paddle) = state.paddle() else {
        return TickInput::default();
    };

    let target = state
        .balls
        .values()
        .filter(|b| b.velocity().dy() > 0.0)
        .max_by(|a, b| {
            a.center()
                .y()
                .partial_cmp(&b.center().y())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    let Some(ball) = target else {
        return TickInput::default();
    };

    let rect = paddle.rect();
    let paddle_center = rect.upper_left().x() + rect.width() / 2.0;
    // Dead zone so the paddle does not jitter around the ball
    let dead_zone = rect.width() / 10.0;
    let offset = ball.center().x() - paddle_center;

    TickInput {
        left: offset < -dead_zone,
        right: offset > dead_zone,
    }
}
