//! Game state and core simulation types
//!
//! Everything a running level needs between frames lives here: the obstacle
//! registry, the balls in play, and the score/lives counters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::PADDLE_ROW;
use crate::geometry::{Point, Rect};
use crate::settings::Settings;

use super::ball::Ball;
use super::block::Block;
use super::collision::Collidable;
use super::environment::{GameEnvironment, ObstacleId};
use super::level::{LayoutError, LevelLayout};
use super::paddle::Paddle;
use super::velocity::Velocity;

/// Anything registered in a level's environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Obstacle {
    Block(Block),
    Paddle(Paddle),
}

impl Collidable for Obstacle {
    fn collision_rect(&self) -> Rect {
        match self {
            Obstacle::Block(block) => block.collision_rect(),
            Obstacle::Paddle(paddle) => paddle.collision_rect(),
        }
    }

    fn hit(&self, point: Point, velocity: Velocity) -> Velocity {
        match self {
            Obstacle::Block(block) => block.hit(point, velocity),
            Obstacle::Paddle(paddle) => paddle.hit(point, velocity),
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first turn to be served
    Serve,
    /// Balls in flight
    Playing,
    /// Every ball was lost; waiting for the next turn
    BallLost,
    /// No target blocks left
    Cleared,
    /// Out of lives with blocks remaining
    GameOver,
}

/// A ball striking an obstacle during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitEvent {
    pub obstacle: ObstacleId,
    pub ball: u32,
    pub point: Point,
    /// The struck block ran out of hit points and was removed
    pub destroyed: bool,
}

/// Complete level state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub level_name: String,
    /// Walls, death region, target blocks and the paddle, in that order
    pub environment: GameEnvironment<Obstacle>,
    pub paddle_id: ObstacleId,
    /// Where the paddle returns after a lost turn
    pub paddle_home: Rect,
    /// Balls in play, iterated by id
    pub balls: BTreeMap<u32, Ball>,
    /// Velocities of the balls launched each turn
    pub ball_velocities: Vec<Velocity>,
    pub ball_spawn: Point,
    pub ball_radius: u32,
    /// Target blocks still registered
    pub remaining_blocks: usize,
    pub score: u64,
    pub lives: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Hits recorded during the most recent tick
    pub events: Vec<HitEvent>,
    next_ball_id: u32,
}

impl GameState {
    /// Build the arena for `layout` and register its blocks
    pub fn new(settings: &Settings, layout: &LevelLayout) -> Result<Self, LayoutError> {
        layout.validate(settings)?;

        let width = f64::from(settings.screen_width);
        let height = f64::from(settings.screen_height);
        let frame = f64::from(settings.frame_size);
        let radius = f64::from(settings.ball_radius);

        let mut environment = GameEnvironment::new();

        let left_wall = Rect::from_coords(0.0, 0.0, frame, height)?;
        let right_wall = Rect::from_coords(width - frame, 0.0, frame, height)?;
        let top_wall = Rect::from_coords(0.0, frame, width, frame)?;
        let death_region = Rect::from_coords(0.0, height + 2.0 * radius, width, frame)?;
        let hud_panel = Rect::from_coords(0.0, 0.0, width, frame)?;

        environment.add(Obstacle::Block(Block::wall(left_wall)));
        environment.add(Obstacle::Block(Block::wall(right_wall)));
        environment.add(Obstacle::Block(Block::wall(top_wall)));
        environment.add(Obstacle::Block(Block::death_region(death_region)));
        environment.add(Obstacle::Block(Block::wall(hud_panel)));

        for (index, block) in layout.blocks.iter().enumerate() {
            let rect = block
                .rect()
                .map_err(|source| LayoutError::InvalidBlock { index, source })?;
            environment.add(Obstacle::Block(Block::target(rect, block.hit_points)));
        }

        let paddle_home = Rect::from_coords(
            (width / 2.0 - layout.paddle_width / 2.0).floor(),
            (height * PADDLE_ROW).floor(),
            layout.paddle_width,
            f64::from(settings.paddle_height),
        )?;
        let paddle = Paddle::new(paddle_home, layout.paddle_speed, frame, width - frame);
        let paddle_id = environment.add(Obstacle::Paddle(paddle));

        log::info!(
            "Level '{}': {} blocks, {} balls per turn",
            layout.name,
            layout.blocks.len(),
            layout.ball_velocities.len()
        );

        Ok(Self {
            level_name: layout.name.clone(),
            environment,
            paddle_id,
            paddle_home,
            balls: BTreeMap::new(),
            ball_velocities: layout.ball_velocities.clone(),
            ball_spawn: Point::new(width / 2.0, height * PADDLE_ROW - radius),
            ball_radius: settings.ball_radius,
            remaining_blocks: layout.blocks.len(),
            score: 0,
            lives: settings.start_lives,
            phase: GamePhase::Serve,
            time_ticks: 0,
            events: Vec::new(),
            next_ball_id: 1,
        })
    }

    /// Launch a new turn's balls
    ///
    /// Returns false when there is nothing to serve: the level is over, the
    /// turn is still running, or no lives are left.
    pub fn serve(&mut self) -> bool {
        if !matches!(self.phase, GamePhase::Serve | GamePhase::BallLost) {
            return false;
        }
        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            return false;
        }

        for velocity in self.ball_velocities.clone() {
            self.spawn_ball(velocity);
        }
        self.phase = GamePhase::Playing;
        log::info!("Serving {} balls, {} lives left", self.balls.len(), self.lives);
        true
    }

    /// Add a ball at the spawn point
    pub fn spawn_ball(&mut self, velocity: Velocity) -> u32 {
        let id = self.next_ball_id;
        self.next_ball_id += 1;
        self.balls
            .insert(id, Ball::new(self.ball_spawn, self.ball_radius, velocity));
        id
    }

    pub fn paddle(&self) -> Option<&Paddle> {
        match self.environment.get(self.paddle_id)? {
            Obstacle::Paddle(paddle) => Some(paddle),
            Obstacle::Block(_) => None,
        }
    }

    pub fn paddle_mut(&mut self) -> Option<&mut Paddle> {
        match self.environment.get_mut(self.paddle_id)? {
            Obstacle::Paddle(paddle) => Some(paddle),
            Obstacle::Block(_) => None,
        }
    }

    /// Put the paddle back at its starting position
    pub fn reset_paddle(&mut self) {
        let home = self.paddle_home;
        if let Some(paddle) = self.paddle_mut() {
            let (speed, left, right) = (paddle.speed(), paddle.left_limit(), paddle.right_limit());
            *paddle = Paddle::new(home, speed, left, right);
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::Cleared | GamePhase::GameOver)
    }
}
