//! Axis-aligned rectangles
//!
//! A rectangle is an upper-left corner plus width and height. The other three
//! corners are derived by offset, so relocating a rectangle is a matter of
//! building a new one around a new upper-left point.

use serde::{Deserialize, Serialize};

use super::line::LineSegment;
use super::point::Point;

/// Errors raised when building a rectangle
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RectError {
    /// Width and height must both be finite and strictly positive.
    #[error("Rectangle dimensions must be positive - got {width} x {height}")]
    InvalidDimensions { width: f64, height: f64 },
}

/// The four bounding edges, named by side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectEdges {
    /// upper-left -> upper-right
    pub top: LineSegment,
    /// lower-left -> lower-right
    pub bottom: LineSegment,
    /// upper-left -> lower-left
    pub left: LineSegment,
    /// upper-right -> lower-right
    pub right: LineSegment,
}

/// Rectangle with sides parallel to the axes (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRect")]
pub struct Rect {
    upper_left: Point,
    width: f64,
    height: f64,
}

/// Unvalidated wire form of [`Rect`]
#[derive(Deserialize)]
struct RawRect {
    upper_left: Point,
    width: f64,
    height: f64,
}

impl TryFrom<RawRect> for Rect {
    type Error = RectError;

    fn try_from(raw: RawRect) -> Result<Self, Self::Error> {
        Rect::new(raw.upper_left, raw.width, raw.height)
    }
}

impl Rect {
    pub fn new(upper_left: Point, width: f64, height: f64) -> Result<Self, RectError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(RectError::InvalidDimensions { width, height });
        }
        Ok(Self {
            upper_left,
            width,
            height,
        })
    }

    pub fn from_coords(x: f64, y: f64, width: f64, height: f64) -> Result<Self, RectError> {
        Self::new(Point::new(x, y), width, height)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn upper_left(&self) -> Point {
        self.upper_left
    }

    pub fn upper_right(&self) -> Point {
        self.upper_left.offset(self.width, 0.0)
    }

    pub fn lower_left(&self) -> Point {
        self.upper_left.offset(0.0, self.height)
    }

    pub fn lower_right(&self) -> Point {
        Point::new(self.upper_right().x(), self.lower_left().y())
    }

    /// Same size, moved to a new upper-left corner
    pub fn with_upper_left(&self, upper_left: Point) -> Rect {
        Rect {
            upper_left,
            ..*self
        }
    }

    /// Edges by side, as reflection logic needs to know which one was struck
    pub fn edges(&self) -> RectEdges {
        let (ul, ur) = (self.upper_left, self.upper_right());
        let (ll, lr) = (self.lower_left(), self.lower_right());
        RectEdges {
            top: LineSegment::new(ul, ur),
            bottom: LineSegment::new(ll, lr),
            left: LineSegment::new(ul, ll),
            right: LineSegment::new(ur, lr),
        }
    }

    /// Edges walked clockwise from the upper-left corner
    pub fn perimeter(&self) -> [LineSegment; 4] {
        let corners = [
            self.upper_left,
            self.upper_right(),
            self.lower_right(),
            self.lower_left(),
        ];
        std::array::from_fn(|i| LineSegment::new(corners[i], corners[(i + 1) % corners.len()]))
    }

    /// Every point where `line` crosses the perimeter, in perimeter order
    pub fn intersection_points(&self, line: &LineSegment) -> Vec<Point> {
        self.perimeter()
            .iter()
            .filter_map(|edge| edge.intersection_point(line))
            .collect()
    }
}
