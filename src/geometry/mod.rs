//! Integer-grid geometry
//!
//! Every coordinate is rounded on construction, so all intersection and
//! distance math effectively runs on whole pixels:
//! - Points are immutable and compare on their rounded values
//! - Segments special-case vertical lines (no finite incline)
//! - Rectangles are axis-aligned and derive their corners by offset

pub mod line;
pub mod point;
pub mod rect;

pub use line::{LineSegment, Orientation};
pub use point::Point;
pub use rect::{Rect, RectEdges, RectError};
