//! Directed line segments and segment/segment intersection
//!
//! The intersection test is the classic orientation check, with one
//! deliberate simplification: two segments with the same incline never
//! intersect, even when they are collinear and overlap. Rectangle edges are
//! axis-aligned, so a trajectory running along an edge slides past it and is
//! caught by the perpendicular edge instead.

use serde::{Deserialize, Serialize};

use super::point::Point;
use super::rect::Rect;

/// Turn direction of the route a -> b -> c
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

impl Orientation {
    /// Orientation of the route from `a` through `b` to `c`
    pub fn of(a: Point, b: Point, c: Point) -> Self {
        let turn = (b.y() - a.y()) * (c.x() - b.x()) - (c.y() - b.y()) * (b.x() - a.x());
        if turn > 0.0 {
            Orientation::Clockwise
        } else if turn < 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Collinear
        }
    }
}

/// A segment from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    start: Point,
    end: Point,
}

impl LineSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.start.as_dvec2().distance(self.end.as_dvec2())
    }

    /// Midpoint, rounded onto the grid
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x() + self.end.x()) / 2.0,
            (self.start.y() + self.end.y()) / 2.0,
        )
    }

    /// Slope dy/dx, `None` for a vertical segment
    pub fn incline(&self) -> Option<f64> {
        if self.start.x() == self.end.x() {
            None
        } else {
            Some((self.start.y() - self.end.y()) / (self.start.x() - self.end.x()))
        }
    }

    /// Constant term b of y = m*x + b for the given incline
    fn intercept(&self, incline: f64) -> f64 {
        self.start.y() - incline * self.start.x()
    }

    /// Whether the two segments cross
    ///
    /// Equal inclines (parallel or collinear, vertical included) never cross.
    /// A segment touching the other at one of its endpoints does.
    pub fn intersects(&self, other: &LineSegment) -> bool {
        if self.incline() == other.incline() {
            return false;
        }

        let o1 = Orientation::of(self.start, self.end, other.start);
        let o2 = Orientation::of(self.start, self.end, other.end);
        let o3 = Orientation::of(other.start, other.end, self.start);
        let o4 = Orientation::of(other.start, other.end, self.end);

        o1 != o2 && o3 != o4
    }

    /// Inclusive bounding-box test
    pub fn is_point_in_range(&self, x: f64, y: f64) -> bool {
        let min_x = self.start.x().min(self.end.x());
        let max_x = self.start.x().max(self.end.x());
        let min_y = self.start.y().min(self.end.y());
        let max_y = self.start.y().max(self.end.y());

        !(x < min_x || x > max_x || y < min_y || y > max_y)
    }

    /// The crossing point of the two segments, if any
    ///
    /// Solved from the line equations; the unrounded solution has to fall
    /// inside both bounding boxes before it is snapped to the grid.
    pub fn intersection_point(&self, other: &LineSegment) -> Option<Point> {
        if !self.intersects(other) {
            return None;
        }

        let (x, y) = match (self.incline(), other.incline()) {
            (Some(m1), Some(m2)) => {
                let b1 = self.intercept(m1);
                let b2 = other.intercept(m2);
                let x = (b2 - b1) / (m1 - m2);
                (x, m1 * x + b1)
            }
            (None, Some(m2)) => {
                let x = self.start.x();
                (x, m2 * x + other.intercept(m2))
            }
            (Some(m1), None) => {
                let x = other.start.x();
                (x, m1 * x + self.intercept(m1))
            }
            // Both vertical: already rejected as equal inclines
            (None, None) => return None,
        };

        if !self.is_point_in_range(x, y) || !other.is_point_in_range(x, y) {
            return None;
        }

        Some(Point::new(x, y))
    }

    /// The hit on `rect`'s perimeter nearest this segment's start
    ///
    /// Edges are visited clockwise from the top; on equal (rounded) distance
    /// the earlier edge wins.
    pub fn closest_intersection_to_start(&self, rect: &Rect) -> Option<Point> {
        let mut closest: Option<Point> = None;
        for point in rect.intersection_points(self) {
            match closest {
                Some(best) if self.start.distance(&best) <= self.start.distance(&point) => {}
                _ => closest = Some(point),
            }
        }
        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
        LineSegment::from_coords(x1, y1, x2, y2)
    }

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::from_coords(x, y, w, h).unwrap()
    }

    #[test]
    fn test_length_and_midpoint() {
        let line = seg(0.0, 0.0, 6.0, 8.0);
        assert!((line.length() - 10.0).abs() < 1e-9);
        assert_eq!(line.midpoint(), Point::new(3.0, 4.0));
        // (1 + 2) / 2 = 1.5 rounds up
        assert_eq!(seg(1.0, 1.0, 2.0, 2.0).midpoint(), Point::new(2.0, 2.0));
    }

    #[test]
    fn test_endpoints_are_copied_and_rounded() {
        let start = Point::new(1.2, 2.7);
        let line = LineSegment::new(start, Point::new(5.0, 5.0));
        assert_eq!(line.start(), Point::new(1.0, 3.0));
        assert_eq!(line.end(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_incline() {
        assert_eq!(seg(0.0, 0.0, 2.0, 4.0).incline(), Some(2.0));
        assert_eq!(seg(3.0, 0.0, 3.0, 9.0).incline(), None);
        assert_eq!(seg(0.0, 5.0, 9.0, 5.0).incline(), Some(0.0));
    }

    #[test]
    fn test_crossing_diagonals() {
        let a = seg(0.0, 0.0, 10.0, 10.0);
        let b = seg(0.0, 10.0, 10.0, 0.0);
        assert!(a.intersects(&b));
        assert_eq!(a.intersection_point(&b), Some(Point::new(5.0, 5.0)));
        assert_eq!(b.intersection_point(&a), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_vertical_crosses_horizontal() {
        let vertical = seg(5.0, 0.0, 5.0, 10.0);
        let horizontal = seg(0.0, 7.0, 10.0, 7.0);
        assert_eq!(vertical.intersection_point(&horizontal), Some(Point::new(5.0, 7.0)));
        assert_eq!(horizontal.intersection_point(&vertical), Some(Point::new(5.0, 7.0)));
    }

    #[test]
    fn test_vertical_crosses_diagonal() {
        let vertical = seg(4.0, -10.0, 4.0, 10.0);
        let diagonal = seg(0.0, 0.0, 8.0, 4.0);
        assert_eq!(vertical.intersection_point(&diagonal), Some(Point::new(4.0, 2.0)));
    }

    #[test]
    fn test_parallel_segments_never_intersect() {
        let a = seg(0.0, 0.0, 10.0, 10.0);
        let b = seg(0.0, 2.0, 10.0, 12.0);
        assert!(!a.intersects(&b));
        assert_eq!(a.intersection_point(&b), None);
    }

    #[test]
    fn test_collinear_overlap_is_not_an_intersection() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(5.0, 0.0, 15.0, 0.0);
        assert!(!a.intersects(&b));

        let v1 = seg(3.0, 0.0, 3.0, 10.0);
        let v2 = seg(3.0, 5.0, 3.0, 20.0);
        assert!(!v1.intersects(&v2));

        // Opposite directions along the same vertical line
        let v3 = seg(3.0, 20.0, 3.0, 5.0);
        assert!(!v1.intersects(&v3));
    }

    #[test]
    fn test_lines_crossing_beyond_segments() {
        // y = x and y = 10 - x meet at (5, 5), past both segments
        let a = seg(0.0, 0.0, 2.0, 2.0);
        let b = seg(10.0, 0.0, 8.0, 2.0);
        assert!(!a.intersects(&b));
        assert_eq!(a.intersection_point(&b), None);
    }

    #[test]
    fn test_touching_endpoint_counts() {
        let a = seg(0.0, 0.0, 5.0, 5.0);
        let b = seg(5.0, 5.0, 10.0, 0.0);
        assert!(a.intersects(&b));
        assert_eq!(a.intersection_point(&b), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_point_in_range_is_inclusive() {
        let line = seg(10.0, 20.0, 0.0, 0.0);
        assert!(line.is_point_in_range(0.0, 0.0));
        assert!(line.is_point_in_range(10.0, 20.0));
        assert!(line.is_point_in_range(5.0, 3.0));
        assert!(!line.is_point_in_range(10.5, 3.0));
        assert!(!line.is_point_in_range(5.0, -0.1));
    }

    #[test]
    fn test_orientation() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_eq!(Orientation::of(a, b, Point::new(20.0, 0.0)), Orientation::Collinear);
        assert_ne!(
            Orientation::of(a, b, Point::new(5.0, 5.0)),
            Orientation::of(a, b, Point::new(5.0, -5.0))
        );
    }

    #[test]
    fn test_closest_intersection_picks_nearest_edge() {
        let block = rect(10.0, 10.0, 20.0, 20.0);

        let rightward = seg(0.0, 20.0, 40.0, 20.0);
        assert_eq!(
            rightward.closest_intersection_to_start(&block),
            Some(Point::new(10.0, 20.0))
        );

        let leftward = seg(40.0, 20.0, 0.0, 20.0);
        assert_eq!(
            leftward.closest_intersection_to_start(&block),
            Some(Point::new(30.0, 20.0))
        );

        let downward = seg(15.0, 0.0, 15.0, 50.0);
        assert_eq!(
            downward.closest_intersection_to_start(&block),
            Some(Point::new(15.0, 10.0))
        );
    }

    #[test]
    fn test_closest_intersection_outside_bounds() {
        let block = rect(10.0, 10.0, 20.0, 20.0);
        assert_eq!(seg(0.0, 0.0, 5.0, 50.0).closest_intersection_to_start(&block), None);
        assert_eq!(seg(40.0, 0.0, 60.0, 60.0).closest_intersection_to_start(&block), None);
    }

    #[test]
    fn test_closest_intersection_stops_short() {
        let block = rect(10.0, 10.0, 20.0, 20.0);
        assert_eq!(seg(0.0, 20.0, 9.0, 20.0).closest_intersection_to_start(&block), None);
    }

    #[test]
    fn test_closest_intersection_edge_tie_keeps_first_edge() {
        let block = rect(10.0, 10.0, 20.0, 20.0);
        // Top edge at (11, 10) and left edge at (10, 10) both round to 16 away
        let line = seg(-5.0, 14.0, 11.0, 10.0);
        let start = line.start();
        assert_eq!(
            block.intersection_points(&line),
            vec![Point::new(11.0, 10.0), Point::new(10.0, 10.0)]
        );
        assert_eq!(start.distance(&Point::new(11.0, 10.0)), 16.0);
        assert_eq!(start.distance(&Point::new(10.0, 10.0)), 16.0);
        assert_eq!(line.closest_intersection_to_start(&block), Some(Point::new(11.0, 10.0)));
    }

    #[test]
    fn test_grazing_a_corner_registers() {
        let block = rect(10.0, 10.0, 20.0, 20.0);
        // Diagonal that only touches the lower-left corner
        let graze = seg(0.0, 20.0, 20.0, 40.0);
        assert_eq!(graze.closest_intersection_to_start(&block), Some(Point::new(10.0, 30.0)));
    }

    proptest! {
        #[test]
        fn prop_intersection_lies_on_both_lines(
            x1 in -200i32..200, y1 in -200i32..200, x2 in -200i32..200, y2 in -200i32..200,
            x3 in -200i32..200, y3 in -200i32..200, x4 in -200i32..200, y4 in -200i32..200,
        ) {
            let a = seg(x1 as f64, y1 as f64, x2 as f64, y2 as f64);
            let b = seg(x3 as f64, y3 as f64, x4 as f64, y4 as f64);
            if let Some(p) = a.intersection_point(&b) {
                prop_assert!(a.is_point_in_range(p.x(), p.y()));
                prop_assert!(b.is_point_in_range(p.x(), p.y()));
                for line in [a, b] {
                    if let Some(m) = line.incline() {
                        let expected = m * p.x() + line.intercept(m);
                        // Rounding moves each coordinate by at most half a unit
                        let tolerance = 0.5 * (1.0 + m.abs()) + 1e-6;
                        prop_assert!((p.y() - expected).abs() <= tolerance);
                    } else {
                        prop_assert_eq!(p.x(), line.start().x());
                    }
                }
            }
        }

        #[test]
        fn prop_equal_inclines_never_intersect(
            x1 in -100i32..100, y1 in -100i32..100,
            dx in -20i32..20, dy in -20i32..20,
            shift_x in -30i32..30, shift_y in -30i32..30,
        ) {
            let a = seg(x1 as f64, y1 as f64, (x1 + dx) as f64, (y1 + dy) as f64);
            let b = seg(
                (x1 + shift_x) as f64,
                (y1 + shift_y) as f64,
                (x1 + shift_x + dx) as f64,
                (y1 + shift_y + dy) as f64,
            );
            prop_assert!(!a.intersects(&b));
        }
    }
}
