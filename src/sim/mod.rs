//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (obstacles by registration, balls by id)
//! - No rendering or platform dependencies

pub mod ball;
pub mod block;
pub mod collision;
pub mod environment;
pub mod level;
pub mod paddle;
pub mod state;
pub mod tick;
pub mod velocity;

pub use ball::{Ball, Impact};
pub use block::{Block, HitPoints, Role};
pub use collision::{Collidable, CollisionInfo, EdgeContact, reflect_off_rect};
pub use environment::{GameEnvironment, ObstacleId};
pub use level::{BlockLayout, LayoutError, LevelLayout};
pub use paddle::Paddle;
pub use state::{GamePhase, GameState, HitEvent, Obstacle};
pub use tick::{TickInput, autopilot_input, tick};
pub use velocity::{Velocity, velocity_fan};
