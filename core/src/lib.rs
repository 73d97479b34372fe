// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scrabble Board Core - Layout, Tiles and Drag Interaction
//!
//! This crate provides the renderer-independent part of the board:
//! - Bonus square table and per-category display properties
//! - Board and cell construction in screen space
//! - Letter tiles and the pointer-driven drag state machine
//! - A `Surface` trait the front end implements to paint a frame

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod bonus;
pub mod color_constants;
pub mod interaction;
pub mod layout;
pub mod scene;
pub mod surface;
pub mod tile;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use board::{Board, Cell};
pub use bonus::{BonusCategory, BonusTable};
pub use color_constants::Rgb;
pub use interaction::{InteractionController, PointerButton, PointerEvent, TileState};
pub use layout::{BoardLayout, FrameRate};
pub use scene::Scene;
pub use surface::Surface;
pub use tile::Tile;

/// Point in screen space (pixels, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height of an axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square of the given side length
    pub const fn splat(side: f32) -> Self {
        Self { width: side, height: side }
    }
}

/// Axis-aligned screen rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub size: Size,
}

impl Bounds {
    pub const fn new(min: Point, size: Size) -> Self {
        Self { min, size }
    }

    /// Bottom-right corner
    pub fn max(&self) -> Point {
        Point::new(self.min.x + self.size.width, self.min.y + self.size.height)
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.min.x + self.size.width / 2.0,
            self.min.y + self.size.height / 2.0,
        )
    }

    /// Same size, moved so that its center sits on `point`
    pub fn centered_on(&self, point: Point) -> Self {
        Self {
            min: Point::new(
                point.x - self.size.width / 2.0,
                point.y - self.size.height / 2.0,
            ),
            size: self.size,
        }
    }

    /// Same center, scaled by `factor` on both axes
    pub fn scaled_about_center(&self, factor: f32) -> Self {
        let size = Size::new(self.size.width * factor, self.size.height * factor);
        Self { min: self.min, size }.centered_on(self.center())
    }

    /// Closed hit test: edges count as inside, matching `egui::Rect::contains`
    pub fn contains(&self, point: Point) -> bool {
        let max = self.max();
        (self.min.x..=max.x).contains(&point.x) && (self.min.y..=max.y).contains(&point.y)
    }
}

/// Startup configuration errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The board needs at least one row and column, and a bounded number of cells
    #[error(
        "Invalid board dimension {0}: must be between 1 and {max}",
        max = layout::MAX_BOARD_DIMENSION
    )]
    InvalidBoardDimension(i32),

    /// The screen width drives every other size
    #[error("Invalid screen width {0}: must be positive")]
    InvalidScreenWidth(f32),

    /// Frames per second for the redraw loop
    #[error("Invalid frame rate {0}: must be positive with a representable frame interval")]
    InvalidFrameRate(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::InvalidBoardDimension(0).to_string(),
            "Invalid board dimension 0: must be between 1 and 255"
        );
    }

    #[test]
    fn test_bounds_hit_test_is_closed() {
        let bounds = Bounds::new(Point::new(10.0, 10.0), Size::splat(36.0));

        assert!(bounds.contains(Point::new(10.0, 10.0)));
        assert!(bounds.contains(Point::new(46.0, 46.0)));
        assert!(bounds.contains(Point::new(28.0, 28.0)));
        assert!(!bounds.contains(Point::new(9.9, 28.0)));
        assert!(!bounds.contains(Point::new(28.0, 46.1)));
    }

    #[test]
    fn test_centered_on_keeps_size() {
        let bounds = Bounds::new(Point::new(0.0, 0.0), Size::new(20.0, 10.0));
        let moved = bounds.centered_on(Point::new(100.0, 50.0));

        assert_eq!(moved.size, bounds.size);
        assert_eq!(moved.min, Point::new(90.0, 45.0));
        assert_eq!(moved.center(), Point::new(100.0, 50.0));
    }

    #[test]
    fn test_scaled_about_center() {
        let bounds = Bounds::new(Point::new(0.0, 0.0), Size::splat(30.0));
        let inner = bounds.scaled_about_center(2.0 / 3.0);

        assert!((inner.center().x - bounds.center().x).abs() < 1e-4);
        assert!((inner.center().y - bounds.center().y).abs() < 1e-4);
        assert!((inner.size.width - 20.0).abs() < 1e-4);
        assert!((inner.min.x - 5.0).abs() < 1e-4);
    }
}
