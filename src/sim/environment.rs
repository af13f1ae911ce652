//! Obstacle registry and closest-collision resolution

use serde::{Deserialize, Serialize};

use crate::geometry::LineSegment;

use super::collision::{Collidable, CollisionInfo};

/// Handle to an obstacle in a [`GameEnvironment`]; never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObstacleId(pub u32);

/// All obstacles a ball can collide with, kept in registration order
///
/// Registration order is observable: when two obstacles are struck at the
/// same distance, the one added first wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEnvironment<C> {
    obstacles: Vec<(ObstacleId, C)>,
    next_id: u32,
}

impl<C> Default for GameEnvironment<C> {
    fn default() -> Self {
        Self {
            obstacles: Vec::new(),
            next_id: 1,
        }
    }
}

impl<C> GameEnvironment<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an obstacle behind all existing ones
    pub fn add(&mut self, obstacle: C) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        self.obstacles.push((id, obstacle));
        id
    }

    /// Unregister an obstacle; the rest keep their relative order
    pub fn remove(&mut self, id: ObstacleId) -> Option<C> {
        let index = self.obstacles.iter().position(|(other, _)| *other == id)?;
        Some(self.obstacles.remove(index).1)
    }

    pub fn get(&self, id: ObstacleId) -> Option<&C> {
        self.obstacles
            .iter()
            .find(|(other, _)| *other == id)
            .map(|(_, obstacle)| obstacle)
    }

    pub fn get_mut(&mut self, id: ObstacleId) -> Option<&mut C> {
        self.obstacles
            .iter_mut()
            .find(|(other, _)| *other == id)
            .map(|(_, obstacle)| obstacle)
    }

    pub fn contains(&self, id: ObstacleId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Obstacles in registration order
    pub fn iter(&self) -> impl Iterator<Item = (ObstacleId, &C)> {
        self.obstacles.iter().map(|(id, obstacle)| (*id, obstacle))
    }
}

impl<C: Collidable> GameEnvironment<C> {
    /// The first obstacle `trajectory` runs into, measured from its start
    ///
    /// Each obstacle contributes its own nearest hit; the overall winner is
    /// the strictly closest one, earliest registered on ties.
    pub fn closest_collision(&self, trajectory: &LineSegment) -> Option<CollisionInfo> {
        let start = trajectory.start();
        let mut closest: Option<(CollisionInfo, f64)> = None;

        for (id, obstacle) in &self.obstacles {
            let Some(point) = trajectory.closest_intersection_to_start(&obstacle.collision_rect())
            else {
                continue;
            };

            let distance = start.distance(&point);
            if closest.is_none_or(|(_, best)| distance < best) {
                closest = Some((CollisionInfo { point, obstacle: *id }, distance));
            }
        }

        closest.map(|(info, _)| info)
    }
}
