//! Collision contract between moving bodies and obstacles
//!
//! An obstacle is anything with a rectangular collision shape that can turn
//! an incoming velocity into an outgoing one. The reflection itself is pure;
//! bookkeeping such as durability is applied afterwards by the game state.

use crate::geometry::{Point, Rect};

use super::environment::ObstacleId;
use super::velocity::Velocity;

/// Something a ball can bounce off
pub trait Collidable {
    /// Current collision shape
    fn collision_rect(&self) -> Rect;

    /// Outgoing velocity for a body striking `point` with `velocity`
    fn hit(&self, point: Point, velocity: Velocity) -> Velocity;
}

impl<C: Collidable + ?Sized> Collidable for Box<C> {
    fn collision_rect(&self) -> Rect {
        (**self).collision_rect()
    }

    fn hit(&self, point: Point, velocity: Velocity) -> Velocity {
        (**self).hit(point, velocity)
    }
}

/// Result of a closest-collision query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    /// Where the trajectory first meets the obstacle
    pub point: Point,
    /// The obstacle that was struck
    pub obstacle: ObstacleId,
}

/// Which edges of a rectangle an impact point lies on
///
/// Uses inclusive bounding boxes, so a corner touches two edges at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeContact {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeContact {
    pub fn at(rect: &Rect, point: Point) -> Self {
        let edges = rect.edges();
        let (x, y) = (point.x(), point.y());
        Self {
            top: edges.top.is_point_in_range(x, y),
            bottom: edges.bottom.is_point_in_range(x, y),
            left: edges.left.is_point_in_range(x, y),
            right: edges.right.is_point_in_range(x, y),
        }
    }

    /// Struck from the side while moving into that side
    pub fn hits_side(&self, velocity: Velocity) -> bool {
        (self.left && velocity.dx() > 0.0) || (self.right && velocity.dx() < 0.0)
    }
}

/// Plain rectangular bounce
///
/// Each axis is checked independently against the incoming velocity:
/// top/bottom contact moving into the surface flips dy, left/right contact
/// flips dx. With `underside_bounces` false a body rising into the bottom edge
/// keeps going, so nothing gets trapped under a moving platform.
pub fn reflect_off_rect(
    rect: &Rect,
    point: Point,
    velocity: Velocity,
    underside_bounces: bool,
) -> Velocity {
    let contact = EdgeContact::at(rect, point);
    let (dx, dy) = (velocity.dx(), velocity.dy());

    let flip_dy =
        (contact.top && dy > 0.0) || (contact.bottom && dy < 0.0 && underside_bounces);
    let flip_dx = contact.hits_side(velocity);

    Velocity::new(
        if flip_dx { -dx } else { dx },
        if flip_dy { -dy } else { dy },
    )
}
