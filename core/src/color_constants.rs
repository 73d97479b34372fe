// SPDX-License-Identifier: MIT OR Apache-2.0

//! Color constants for the board, squares and tiles

use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub const fn r(&self) -> u8 {
        self.0[0]
    }

    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    pub const fn b(&self) -> u8 {
        self.0[2]
    }

    /// Parse a hex color string (#RRGGBB)
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        if hex.len() != 7 || !hex.starts_with('#') {
            return Err(format!("Invalid hex color: {}", hex));
        }

        let channel = |range: std::ops::Range<usize>, name: &str| {
            let digits = hex
                .get(range)
                .ok_or_else(|| format!("Invalid hex color: {}", hex))?;
            u8::from_str_radix(digits, 16)
                .map_err(|_| format!("Invalid {} component: {}", name, digits))
        };

        Ok(Self([
            channel(1..3, "red")?,
            channel(3..5, "green")?,
            channel(5..7, "blue")?,
        ]))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r(), self.g(), self.b())
    }
}

/// Named colors, using the X11/CSS values of the same name
pub mod named {
    use super::Rgb;

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const SALMON: Rgb = Rgb::new(250, 128, 114);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const TAN: Rgb = Rgb::new(210, 180, 140);
}

/// Bonus square fills
pub mod squares {
    use super::{named, Rgb};

    pub const PLAIN: Rgb = named::WHITE;
    pub const DOUBLE_LETTER: Rgb = named::CYAN;
    pub const TRIPLE_LETTER: Rgb = named::BLUE;
    pub const DOUBLE_WORD: Rgb = named::SALMON;
    pub const TRIPLE_WORD: Rgb = named::RED;

    /// Center square fill and the marker drawn on it
    pub const START: Rgb = named::RED;
    pub const START_MARKER: Rgb = named::WHITE;

    pub const BORDER: Rgb = named::BLACK;
    pub const LABEL: Rgb = named::BLACK;
}

/// Letter tile colors
pub mod tiles {
    use super::{named, Rgb};

    pub const FACE: Rgb = named::TAN;
    pub const BORDER: Rgb = named::BLACK;
    pub const LETTER: Rgb = named::BLACK;
}
