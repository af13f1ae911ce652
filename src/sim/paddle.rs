//! The player's paddle
//!
//! A paddle bounces like a plain block on its sides and underside, but its
//! top edge is split into equal regions that each send the ball off at a
//! fixed angle. Only the middle region behaves like a mirror.

use serde::{Deserialize, Serialize};

use crate::consts::{PADDLE_REGION_ANGLES, PADDLE_REGIONS};
use crate::geometry::{Point, Rect};

use super::collision::{Collidable, EdgeContact};
use super::velocity::Velocity;

/// A horizontally sliding platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    rect: Rect,
    /// Pixels per second
    speed: f64,
    left_limit: f64,
    right_limit: f64,
}

impl Paddle {
    pub fn new(rect: Rect, speed: f64, left_limit: f64, right_limit: f64) -> Self {
        Self {
            rect,
            speed,
            left_limit,
            right_limit,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn left_limit(&self) -> f64 {
        self.left_limit
    }

    pub fn right_limit(&self) -> f64 {
        self.right_limit
    }

    /// Whether there is room left of the paddle
    pub fn can_move_left(&self) -> bool {
        self.left_limit < self.rect.upper_left().x()
    }

    /// Whether there is room right of the paddle
    pub fn can_move_right(&self) -> bool {
        self.rect.lower_right().x() < self.right_limit
    }

    /// Slide left, stopping at the left limit
    pub fn move_left(&mut self, dt: f64) {
        let upper_left = self.rect.upper_left();
        let x = (upper_left.x() - self.speed * dt).max(self.left_limit);
        self.rect = self.rect.with_upper_left(Point::new(x, upper_left.y()));
    }

    /// Slide right, stopping with the right edge at the right limit
    pub fn move_right(&mut self, dt: f64) {
        let upper_left = self.rect.upper_left();
        let mut x = upper_left.x() + self.speed * dt;
        if x + self.rect.width() > self.right_limit {
            x = self.right_limit - self.rect.width();
        }
        self.rect = self.rect.with_upper_left(Point::new(x, upper_left.y()));
    }

    /// Outgoing angle for a top-edge impact at `x`
    ///
    /// `approach` is the heading the ball arrived from (its reversed
    /// velocity). Region bounds are exclusive; an impact exactly on a
    /// boundary keeps the approach angle and sends the ball straight back.
    pub fn angle_for_impact(&self, x: f64, approach: f64) -> f64 {
        let region_size = self.rect.width() / PADDLE_REGIONS as f64;
        let region_start = self.rect.upper_left().x();

        for (i, angle) in PADDLE_REGION_ANGLES.iter().enumerate() {
            let min = region_start + i as f64 * region_size;
            let max = region_start + (i + 1) as f64 * region_size;
            if min < x && x < max {
                return angle.unwrap_or(360.0 - approach);
            }
        }

        approach
    }
}

impl Collidable for Paddle {
    fn collision_rect(&self) -> Rect {
        self.rect
    }

    fn hit(&self, point: Point, velocity: Velocity) -> Velocity {
        let contact = EdgeContact::at(&self.rect, point);
        let mut outgoing = velocity;

        if contact.top && velocity.dy() > 0.0 {
            let approach = velocity.reversed().angle();
            let angle = self.angle_for_impact(point.x(), approach);
            outgoing = Velocity::from_angle_and_speed(angle, velocity.speed());
        } else if contact.bottom && velocity.dy() < 0.0 {
            outgoing = Velocity::new(velocity.dx(), -velocity.dy());
        }

        if contact.hits_side(velocity) {
            outgoing = Velocity::new(-velocity.dx(), outgoing.dy());
        }

        outgoing
    }
}
