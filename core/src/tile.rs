// SPDX-License-Identifier: MIT OR Apache-2.0

//! Movable letter tiles

use crate::color_constants::{tiles, Rgb};
use crate::surface::{Surface, LETTER_FONT_SIZE};
use crate::{Bounds, Point, Size};

/// A letter marker that can be picked up and dragged around the screen.
///
/// Tiles are not attached to board cells; their position is free-form.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    letter: String,
    bounds: Bounds,
    face: Rgb,
    selected: bool,
}

impl Tile {
    /// Create a tile with its top-left corner at `position`
    pub fn new(position: Point, size: Size, letter: &str) -> Self {
        Self {
            letter: letter.to_uppercase(),
            bounds: Bounds::new(position, size),
            face: tiles::FACE,
            selected: false,
        }
    }

    /// Replace the face color
    pub fn with_face(mut self, face: Rgb) -> Self {
        self.face = face;
        self
    }

    pub fn letter(&self) -> &str {
        &self.letter
    }

    /// Store the upper-cased letter; any input is accepted
    pub fn set_letter(&mut self, letter: &str) {
        self.letter = letter.to_uppercase();
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }

    /// Relocate so the tile is centered on `point`
    pub fn move_center_to(&mut self, point: Point) {
        self.bounds = self.bounds.centered_on(point);
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn select(&mut self) {
        self.selected = true;
    }

    pub fn deselect(&mut self) {
        self.selected = false;
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(self.bounds, self.face, tiles::BORDER);
        surface.text(
            &self.letter,
            self.center(),
            LETTER_FONT_SIZE,
            true,
            tiles::LETTER,
        );
    }
}
