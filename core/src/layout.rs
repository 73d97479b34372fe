// SPDX-License-Identifier: MIT OR Apache-2.0

//! Screen layout derived from the window width and board dimension

use crate::{ConfigError, Point, Size};
use std::time::Duration;

/// Default window width in pixels
pub const SCREEN_WIDTH: f32 = 900.0;

/// Window height as a fraction of its width
pub const SCREEN_ASPECT: f32 = 2.0 / 3.0;

/// Default cells per board side; odd sizes have a true center
pub const BOARD_DIMENSION: i32 = 15;

/// Largest accepted board side
pub const MAX_BOARD_DIMENSION: i32 = 255;

/// One cell is this fraction of the screen width
pub const CELLS_ACROSS_SCREEN: f32 = 25.0;

/// Default redraw rate
pub const FRAMES_PER_SECOND: f32 = 30.0;

/// Top-left corner of the demo tile
pub const DEMO_TILE_POSITION: Point = Point::new(10.0, 10.0);

pub const DEMO_TILE_LETTER: &str = "C";

/// Board geometry centered in the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    screen: Size,
    dimension: i32,
    cell_size: Size,
    origin: Point,
}

impl BoardLayout {
    pub fn new(screen_width: f32, dimension: i32) -> Result<Self, ConfigError> {
        if !(screen_width.is_finite() && screen_width > 0.0) {
            return Err(ConfigError::InvalidScreenWidth(screen_width));
        }
        if !(1..=MAX_BOARD_DIMENSION).contains(&dimension) {
            return Err(ConfigError::InvalidBoardDimension(dimension));
        }

        let screen = Size::new(screen_width, (screen_width * SCREEN_ASPECT).trunc());
        let cell = screen_width / CELLS_ACROSS_SCREEN;
        let grid = dimension as f32 * cell;
        let origin = Point::new((screen.width - grid) / 2.0, (screen.height - grid) / 2.0);

        Ok(Self {
            screen,
            dimension,
            cell_size: Size::splat(cell),
            origin,
        })
    }

    pub fn screen_size(&self) -> Size {
        self.screen
    }

    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    /// Size of one board cell; tiles use the same size
    pub fn cell_size(&self) -> Size {
        self.cell_size
    }

    /// Top-left corner of the grid
    pub fn origin(&self) -> Point {
        self.origin
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        let cell = SCREEN_WIDTH / CELLS_ACROSS_SCREEN;
        Self {
            screen: Size::new(SCREEN_WIDTH, SCREEN_WIDTH * SCREEN_ASPECT),
            dimension: BOARD_DIMENSION,
            cell_size: Size::splat(cell),
            origin: Point::new(180.0, 30.0),
        }
    }
}

/// Target redraw rate of the frame loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRate(f32);

impl FrameRate {
    /// Rates so low that one frame outlasts `Duration` are rejected too
    pub fn new(fps: f32) -> Result<Self, ConfigError> {
        if !(fps.is_finite() && fps > 0.0) || Duration::try_from_secs_f32(1.0 / fps).is_err() {
            return Err(ConfigError::InvalidFrameRate(fps));
        }
        Ok(Self(fps))
    }

    pub fn fps(&self) -> f32 {
        self.0
    }

    /// Sleep between two frames
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.0)
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self(FRAMES_PER_SECOND)
    }
}
