//! The moving circle
//!
//! A ball sweeps a single segment per step, from its center to its leading
//! corner (center + displacement + radius in the direction of travel). Only
//! the nearest obstacle along that segment is consulted.

use serde::{Deserialize, Serialize};

use crate::geometry::{LineSegment, Point};

use super::collision::Collidable;
use super::environment::{GameEnvironment, ObstacleId};
use super::velocity::Velocity;

/// What a step ran into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    pub obstacle: ObstacleId,
    pub point: Point,
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    center: Point,
    radius: u32,
    velocity: Velocity,
}

impl Ball {
    pub fn new(center: Point, radius: u32, velocity: Velocity) -> Self {
        Self {
            center,
            radius,
            velocity,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    /// Radius offset toward the direction of travel on each axis
    fn leading_offset(&self) -> (f64, f64) {
        let r = f64::from(self.radius);
        let sx = if self.velocity.dx() < 0.0 { -r } else { r };
        let sy = if self.velocity.dy() < 0.0 { -r } else { r };
        (sx, sy)
    }

    /// Segment swept by the leading edge over `dt`
    pub fn trajectory(&self, dt: f64) -> LineSegment {
        let (ox, oy) = self.leading_offset();
        let end = self.center.offset(
            self.velocity.dx() * dt + ox,
            self.velocity.dy() * dt + oy,
        );
        LineSegment::new(self.center, end)
    }

    /// Advance one step through `environment`
    ///
    /// Without a collision the center moves by the full displacement. On a
    /// collision the center closes part of the gap between its leading
    /// corner and the impact point, and the struck obstacle decides the new
    /// velocity.
    pub fn step<C: Collidable>(
        &mut self,
        environment: &GameEnvironment<C>,
        dt: f64,
    ) -> Option<Impact> {
        let trajectory = self.trajectory(dt);

        let Some(collision) = environment.closest_collision(&trajectory) else {
            self.center = self.velocity.scaled(dt).apply_to_point(self.center);
            return None;
        };

        // Only the obstacle that produced the collision is consulted
        let obstacle = environment.get(collision.obstacle)?;

        let (ox, oy) = self.leading_offset();
        let leading = self.center.offset(ox, oy);
        let gap_x = collision.point.x() - leading.x();
        let gap_y = collision.point.y() - leading.y();
        self.center = self.center.offset(gap_x * dt, gap_y * dt);

        let incoming = self.velocity;
        self.velocity = obstacle.hit(collision.point, incoming);

        log::debug!(
            "Ball hit obstacle {} at ({}, {}): ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            collision.obstacle.0,
            collision.point.x(),
            collision.point.y(),
            incoming.dx(),
            incoming.dy(),
            self.velocity.dx(),
            self.velocity.dy()
        );

        Some(Impact {
            obstacle: collision.obstacle,
            point: collision.point,
        })
    }
}
