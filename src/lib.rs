//! Brickbreak - ball-and-paddle brick breaker core
//!
//! Core modules:
//! - `geometry`: Integer-grid points, line segments and axis-aligned rectangles
//! - `sim`: Collision resolution, bounce physics and frame-stepped game state
//! - `settings`: Data-driven tunables loaded from JSON

pub mod geometry;
pub mod settings;
pub mod sim;

pub use geometry::{LineSegment, Point, Rect};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one step per animation frame)
    pub const SIM_DT: f64 = 1.0 / 60.0;

    /// Screen dimensions
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;
    /// Thickness of the arena walls and HUD panel
    pub const FRAME_SIZE: u32 = SCREEN_WIDTH / 32;

    /// Ball defaults
    pub const BALL_RADIUS: u32 = 5;

    /// Paddle defaults
    pub const PADDLE_HEIGHT: u32 = 15;
    /// Paddle sits at this fraction of the screen height
    pub const PADDLE_ROW: f64 = 0.9;
    /// Number of equal-width regions on the paddle's top edge
    pub const PADDLE_REGIONS: usize = 5;
    /// Outgoing angle (degrees) for each paddle region; `None` mirrors the approach
    pub const PADDLE_REGION_ANGLES: [Option<f64>; PADDLE_REGIONS] =
        [Some(300.0), Some(330.0), None, Some(30.0), Some(60.0)];

    /// Player lives at the start of a run
    pub const START_LIVES: u32 = 7;

    /// Score rewards
    pub const SCORE_BLOCK_HIT: u64 = 5;
    pub const SCORE_BLOCK_DESTROYED: u64 = 10;
    pub const SCORE_LEVEL_CLEARED: u64 = 100;
}

/// Round to the nearest integer, halves toward positive infinity
///
/// All geometry lives on the integer grid; `f64::round` would send -2.5 to -3.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
