//! Rectangular blocks: level targets, arena walls and the death region

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

use super::collision::{Collidable, reflect_off_rect};
use super::velocity::Velocity;

/// How much punishment a block can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitPoints {
    /// Destroyed when this reaches zero
    Finite(u32),
    /// Never destroyed
    Indestructible,
    /// Never destroyed, and never bounces a body off its underside
    ///
    /// Paddle-style surface life. The arena never assigns it; the paddle
    /// handles its own underside in `Paddle::hit`.
    Platform,
}

/// What the game does when a block is struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    /// Level block: scores, and is removed once out of hit points
    #[default]
    Target,
    /// Arena boundary or HUD panel
    Wall,
    /// Swallows any ball that touches it
    DeathRegion,
}

/// A rectangular obstacle with plain bounce physics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    rect: Rect,
    hit_points: HitPoints,
    role: Role,
}

impl Block {
    pub fn new(rect: Rect, hit_points: HitPoints, role: Role) -> Self {
        Self {
            rect,
            hit_points,
            role,
        }
    }

    pub fn target(rect: Rect, hit_points: u32) -> Self {
        Self::new(rect, HitPoints::Finite(hit_points), Role::Target)
    }

    pub fn wall(rect: Rect) -> Self {
        Self::new(rect, HitPoints::Indestructible, Role::Wall)
    }

    pub fn death_region(rect: Rect) -> Self {
        Self::new(rect, HitPoints::Indestructible, Role::DeathRegion)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn hit_points(&self) -> HitPoints {
        self.hit_points
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_destroyed(&self) -> bool {
        self.hit_points == HitPoints::Finite(0)
    }

    /// Record one hit against finite hit points (never below zero)
    pub fn take_hit(&mut self) {
        if let HitPoints::Finite(ref mut hp) = self.hit_points {
            *hp = hp.saturating_sub(1);
        }
    }
}

impl Collidable for Block {
    fn collision_rect(&self) -> Rect {
        self.rect
    }

    fn hit(&self, point: Point, velocity: Velocity) -> Velocity {
        let underside_bounces = self.hit_points != HitPoints::Platform;
        reflect_off_rect(&self.rect, point, velocity, underside_bounces)
    }
}
