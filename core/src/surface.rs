// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drawing seam between the board model and whatever paints it

use crate::color_constants::Rgb;
use crate::{Bounds, Point};

/// Bonus label size on board squares
pub const LABEL_FONT_SIZE: f32 = 16.0;

/// Letter size on tiles
pub const LETTER_FONT_SIZE: f32 = 24.0;

/// Immediate-mode drawing target for one frame.
///
/// Calls arrive in painting order; later shapes cover earlier ones.
pub trait Surface {
    /// Filled rectangle with a 1px border
    fn fill_rect(&mut self, bounds: Bounds, fill: Rgb, border: Rgb);

    /// Filled ellipse inscribed in `bounds`, with a 1px border
    fn fill_oval(&mut self, bounds: Bounds, fill: Rgb, border: Rgb);

    /// Text centered on `center`
    fn text(&mut self, text: &str, center: Point, size: f32, bold: bool, color: Rgb);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { bounds: Bounds, fill: Rgb, border: Rgb },
    Oval { bounds: Bounds, fill: Rgb, border: Rgb },
    Text { text: String, center: Point, size: f32, bold: bool, color: Rgb },
}

/// Surface that records calls instead of painting; used by headless checks
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text strings in painting order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, bounds: Bounds, fill: Rgb, border: Rgb) {
        self.commands.push(DrawCommand::Rect { bounds, fill, border });
    }

    fn fill_oval(&mut self, bounds: Bounds, fill: Rgb, border: Rgb) {
        self.commands.push(DrawCommand::Oval { bounds, fill, border });
    }

    fn text(&mut self, text: &str, center: Point, size: f32, bold: bool, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            size,
            bold,
            color,
        });
    }
}
