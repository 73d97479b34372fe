// SPDX-License-Identifier: MIT OR Apache-2.0

//! Design system for the board window
//!
//! Palette values live in `scrabble_core::color_constants`; this module maps
//! them onto egui types and holds the stroke and font settings.

use egui::{Color32, FontFamily, FontId, Stroke};
use scrabble_core::color_constants::{named, Rgb};

/// Convert a core palette color to egui
pub fn color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r(), rgb.g(), rgb.b())
}

/// Window colors
pub struct BoardColors {
    /// Behind the board and tiles
    pub background: Color32,
}

impl Default for BoardColors {
    fn default() -> Self {
        Self {
            background: color32(named::WHITE),
        }
    }
}

/// The main design system
pub struct BoardDesignSystem {
    pub colors: BoardColors,
    /// Border width of squares, tiles and the start marker
    pub border_width: f32,
    /// Horizontal offset of the second pass used to embolden text
    pub bold_offset: f32,
    /// Segments used to approximate an oval
    pub oval_segments: usize,
}

impl Default for BoardDesignSystem {
    fn default() -> Self {
        Self {
            colors: BoardColors::default(),
            border_width: 1.0,
            bold_offset: 0.75,
            oval_segments: 48,
        }
    }
}

impl BoardDesignSystem {
    pub fn border(&self, rgb: Rgb) -> Stroke {
        Stroke::new(self.border_width, color32(rgb))
    }

    pub fn font_id(&self, size: f32) -> FontId {
        FontId::new(size, FontFamily::Proportional)
    }
}

/// Global design system instance
pub fn get_design_system() -> &'static BoardDesignSystem {
    static DESIGN_SYSTEM: std::sync::OnceLock<BoardDesignSystem> = std::sync::OnceLock::new();
    DESIGN_SYSTEM.get_or_init(BoardDesignSystem::default)
}
