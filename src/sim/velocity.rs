//! Velocity and angle/speed conversion
//!
//! Angles are in degrees, measured clockwise from straight up on screen
//! (y grows downward), so 90 points right and 180 points down.

use std::ops::Neg;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::normalize_degrees;

/// Motion per second along each axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "DVec2", into = "DVec2")]
pub struct Velocity(DVec2);

impl Velocity {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self(DVec2::new(dx, dy))
    }

    /// Build from a heading (degrees, clockwise from up) and a speed
    ///
    /// 0 and 360 both point straight up.
    pub fn from_angle_and_speed(angle: f64, speed: f64) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        Self::new(sin * speed, -cos * speed)
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.0.y
    }

    /// Heading in [0, 360)
    pub fn angle(&self) -> f64 {
        normalize_degrees(self.0.x.atan2(-self.0.y).to_degrees())
    }

    pub fn speed(&self) -> f64 {
        self.0.length()
    }

    /// Same speed, opposite heading
    pub fn reversed(&self) -> Self {
        -*self
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0 * factor)
    }

    /// Move a point by (dx, dy); the result is snapped to the grid
    pub fn apply_to_point(&self, point: Point) -> Point {
        point.offset(self.0.x, self.0.y)
    }
}

impl Neg for Velocity {
    type Output = Velocity;

    fn neg(self) -> Velocity {
        Velocity(-self.0)
    }
}

impl From<DVec2> for Velocity {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}

impl From<Velocity> for DVec2 {
    fn from(v: Velocity) -> Self {
        v.0
    }
}

/// A spread of equal-speed velocities sweeping left to right
///
/// Starts at `left_angle` and steps clockwise through straight up to the
/// mirror angle on the right. With `with_middle` the straight-up velocity is
/// part of the spread; without it the middle slot is skipped over.
pub fn velocity_fan(left_angle: f64, speed: f64, amount: usize, with_middle: bool) -> Vec<Velocity> {
    if amount == 0 {
        return Vec::new();
    }

    let mut angle = left_angle % 360.0;
    let span = (360.0 - angle) * 2.0;
    let change = if with_middle && amount > 1 {
        span / (amount - 1) as f64
    } else {
        span / amount as f64
    };
    let middle = amount / 2;

    let mut velocities = Vec::with_capacity(amount);
    for i in 0..amount {
        if angle == 0.0 {
            angle = 360.0;
        }
        if !with_middle && i == middle {
            angle = (angle + change) % 360.0;
        }
        velocities.push(Velocity::from_angle_and_speed(angle, speed));
        angle = (angle + change) % 360.0;
    }
    velocities
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_cardinal_headings() {
        let up = Velocity::from_angle_and_speed(0.0, 10.0);
        assert!(up.dx().abs() < EPS && (up.dy() + 10.0).abs() < EPS);

        let right = Velocity::from_angle_and_speed(90.0, 10.0);
        assert!((right.dx() - 10.0).abs() < EPS && right.dy().abs() < EPS);

        let down = Velocity::from_angle_and_speed(180.0, 10.0);
        assert!((down.dy() - 10.0).abs() < EPS);

        let full_turn = Velocity::from_angle_and_speed(360.0, 10.0);
        assert!((full_turn.dy() + 10.0).abs() < EPS);
    }

    #[test]
    fn test_angle_and_speed_readback() {
        let v = Velocity::new(3.0, -4.0);
        assert!((v.speed() - 5.0).abs() < EPS);
        assert!((v.angle() - 36.869_897_645_844_02).abs() < 1e-6);

        assert!((Velocity::new(0.0, 5.0).angle() - 180.0).abs() < EPS);
        assert!((Velocity::new(-5.0, 0.0).angle() - 270.0).abs() < EPS);
        assert_eq!(Velocity::new(0.0, -5.0).angle(), 0.0);
    }

    #[test]
    fn test_reversed() {
        let v = Velocity::new(3.0, -4.0).reversed();
        assert_eq!(v, Velocity::new(-3.0, 4.0));
    }

    #[test]
    fn test_apply_to_point_rounds() {
        let p = Velocity::new(1.4, 2.6).apply_to_point(Point::new(10.0, 10.0));
        assert_eq!(p, Point::new(11.0, 13.0));
    }

    #[test]
    fn test_fan_with_middle_is_symmetric() {
        let fan = velocity_fan(300.0, 10.0, 3, true);
        let angles: Vec<f64> = fan.iter().map(Velocity::angle).collect();
        assert!((angles[0] - 300.0).abs() < 1e-6);
        // Straight up may read back as a hair under 360
        assert!(angles[1].min(360.0 - angles[1]) < 1e-6);
        assert!((angles[2] - 60.0).abs() < 1e-6);
        assert!(fan.iter().all(|v| (v.speed() - 10.0).abs() < 1e-9));
    }

    #[test]
    fn test_fan_without_middle_skips_vertical() {
        // change = (360 - 330) * 2 / 2 = 30; the middle slot jumps an extra step
        let fan = velocity_fan(330.0, 5.0, 2, false);
        let angles: Vec<f64> = fan.iter().map(Velocity::angle).collect();
        assert!((angles[0] - 330.0).abs() < 1e-6);
        assert!((angles[1] - 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_fan_single_and_empty() {
        assert!(velocity_fan(300.0, 10.0, 0, true).is_empty());
        let one = velocity_fan(300.0, 10.0, 1, true);
        assert_eq!(one.len(), 1);
        assert!((one[0].angle() - 300.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_angle_speed_round_trip(angle in 0.5f64..359.5, speed in 0.1f64..1000.0) {
            let v = Velocity::from_angle_and_speed(angle, speed);
            prop_assert!((v.angle() - angle).abs() < 1e-6);
            prop_assert!((v.speed() - speed).abs() < 1e-6 * speed.max(1.0));
        }
    }
}
