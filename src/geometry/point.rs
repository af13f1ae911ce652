//! 2D point on the integer grid

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::round_half_up;

/// An immutable location, rounded to whole units on construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "DVec2", into = "DVec2")]
pub struct Point(DVec2);

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(round_half_up(x), round_half_up(y)))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// The rounded coordinates as a vector
    #[inline]
    pub fn as_dvec2(&self) -> DVec2 {
        self.0
    }

    /// Distance to another point, rounded to the nearest whole unit
    ///
    /// Collision tie-breaking compares these rounded distances, so two hits
    /// less than half a unit apart count as equally close.
    pub fn distance(&self, other: &Point) -> f64 {
        round_half_up(self.0.distance(other.0))
    }

    /// A new point shifted by (dx, dy), rounded again
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.0.x + dx, self.0.y + dy)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        p.0
    }
}
