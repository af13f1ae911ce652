//! Level layouts
//!
//! A layout is plain data: paddle size and speed, one initial velocity per
//! ball, and the target blocks in the order they are registered.

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, RectError};
use crate::settings::Settings;

use super::velocity::{Velocity, velocity_fan};

#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    #[error("Block {index} has an invalid shape - {source}")]
    InvalidBlock {
        index: usize,
        #[source]
        source: RectError,
    },
    #[error("Block {index} must have at least one hit point")]
    ZeroHitPoints { index: usize },
    #[error("Level must start with at least one ball")]
    NoBalls,
    #[error("Paddle width must fit inside the arena - got {width}, arena is {arena}")]
    PaddleTooWide { width: f64, arena: f64 },
    #[error("Arena does not fit the screen - {0}")]
    InvalidArena(#[from] RectError),
}

/// One target block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockLayout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub hit_points: u32,
}

impl BlockLayout {
    /// `count` equal blocks side by side, starting at (x, y)
    pub fn row(x: f64, y: f64, width: f64, height: f64, count: usize, hit_points: u32) -> Vec<Self> {
        (0..count)
            .map(|i| Self {
                x: x + i as f64 * width,
                y,
                width,
                height,
                hit_points,
            })
            .collect()
    }

    pub fn rect(&self) -> Result<Rect, RectError> {
        Rect::from_coords(self.x, self.y, self.width, self.height)
    }
}

/// Everything needed to start a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub name: String,
    pub paddle_width: f64,
    /// Pixels per second
    pub paddle_speed: f64,
    /// One ball per entry, launched every turn
    pub ball_velocities: Vec<Velocity>,
    pub blocks: Vec<BlockLayout>,
}

impl LevelLayout {
    /// Check the layout against an arena of the given settings
    pub fn validate(&self, settings: &Settings) -> Result<(), LayoutError> {
        if self.ball_velocities.is_empty() {
            return Err(LayoutError::NoBalls);
        }

        let arena = f64::from(settings.screen_width) - 2.0 * f64::from(settings.frame_size);
        if !(self.paddle_width > 0.0 && self.paddle_width <= arena) {
            return Err(LayoutError::PaddleTooWide {
                width: self.paddle_width,
                arena,
            });
        }

        for (index, block) in self.blocks.iter().enumerate() {
            block
                .rect()
                .map_err(|source| LayoutError::InvalidBlock { index, source })?;
            if block.hit_points == 0 {
                return Err(LayoutError::ZeroHitPoints { index });
            }
        }

        Ok(())
    }

    /// Built-in staircase level
    ///
    /// Five rows shrinking from ten blocks to six, each shifted one block
    /// right and down from the last, anchored to the right wall. The top row
    /// takes two hits. Two balls fan out from the paddle.
    pub fn demo(settings: &Settings) -> Self {
        let width = f64::from(settings.screen_width);
        let height = f64::from(settings.screen_height);
        let frame = f64::from(settings.frame_size);

        let block_width = ((width - 2.0 * frame) / 15.0).floor();
        let block_height = (block_width / 2.0).floor();
        let mut x = width - frame - block_width * 10.0;
        let mut y = (height * 0.3).floor();

        let mut blocks = Vec::new();
        for i in 0..5 {
            let hit_points = if i == 0 { 2 } else { 1 };
            blocks.extend(BlockLayout::row(
                x,
                y,
                block_width,
                block_height,
                10 - i,
                hit_points,
            ));
            x += block_width;
            y += block_height;
        }

        Self {
            name: "Staircase".to_string(),
            paddle_width: 80.0,
            paddle_speed: 600.0,
            ball_velocities: velocity_fan(330.0, 300.0, 2, false),
            blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_layout() {
        let settings = Settings::default();
        let level = LevelLayout::demo(&settings);
        level.validate(&settings).unwrap();

        assert_eq!(level.blocks.len(), 10 + 9 + 8 + 7 + 6);
        assert_eq!(level.ball_velocities.len(), 2);

        let first = &level.blocks[0];
        assert_eq!((first.x, first.y, first.width, first.height), (275.0, 180.0, 50.0, 25.0));
        assert_eq!(first.hit_points, 2);

        // Second row starts one block right and down
        let second_row = &level.blocks[10];
        assert_eq!((second_row.x, second_row.y), (325.0, 205.0));
        assert_eq!(second_row.hit_points, 1);

        // Every row ends against the right wall
        let last = level.blocks.last().unwrap();
        assert_eq!(last.x + last.width, 775.0);
    }

    #[test]
    fn test_demo_balls_head_up() {
        let level = LevelLayout::demo(&Settings::default());
        assert!(level.ball_velocities.iter().all(|v| v.dy() < 0.0));
        assert!(level.ball_velocities[0].dx() < 0.0);
        assert!(level.ball_velocities[1].dx() > 0.0);
    }

    #[test]
    fn test_validate_rejects_bad_layouts() {
        let settings = Settings::default();
        let base = LevelLayout::demo(&settings);

        let mut no_balls = base.clone();
        no_balls.ball_velocities.clear();
        assert!(matches!(no_balls.validate(&settings), Err(LayoutError::NoBalls)));

        let mut wide = base.clone();
        wide.paddle_width = 751.0;
        assert!(matches!(
            wide.validate(&settings),
            Err(LayoutError::PaddleTooWide { .. })
        ));

        let mut flat = base.clone();
        flat.blocks[3].height = 0.0;
        assert!(matches!(
            flat.validate(&settings),
            Err(LayoutError::InvalidBlock { index: 3, .. })
        ));

        let mut dead = base;
        dead.blocks[7].hit_points = 0;
        assert!(matches!(
            dead.validate(&settings),
            Err(LayoutError::ZeroHitPoints { index: 7 })
        ));
    }

    #[test]
    fn test_layout_from_json() {
        let json = r#"{
            "name": "Single",
            "paddle_width": 100.0,
            "paddle_speed": 500.0,
            "ball_velocities": [[0.0, -300.0]],
            "blocks": [{ "x": 100.0, "y": 100.0, "width": 50.0, "height": 25.0, "hit_points": 3 }]
        }"#;
        let level: LevelLayout = serde_json::from_str(json).unwrap();
        assert_eq!(level.ball_velocities[0], Velocity::new(0.0, -300.0));
        assert_eq!(level.blocks[0].hit_points, 3);
        level.validate(&Settings::default()).unwrap();
    }
}
