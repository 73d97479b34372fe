// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bonus squares: categories, their display properties and the board table

use crate::color_constants::{squares, Rgb};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Multiplier class of a board square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BonusCategory {
    #[default]
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl BonusCategory {
    pub const ALL: [BonusCategory; 5] = [
        BonusCategory::None,
        BonusCategory::DoubleLetter,
        BonusCategory::TripleLetter,
        BonusCategory::DoubleWord,
        BonusCategory::TripleWord,
    ];

    /// Label printed on the square
    pub const fn abbreviation(self) -> &'static str {
        match self {
            BonusCategory::None => "",
            BonusCategory::DoubleLetter => "DL",
            BonusCategory::TripleLetter => "TL",
            BonusCategory::DoubleWord => "DW",
            BonusCategory::TripleWord => "TW",
        }
    }

    /// Square fill
    pub const fn color(self) -> Rgb {
        match self {
            BonusCategory::None => squares::PLAIN,
            BonusCategory::DoubleLetter => squares::DOUBLE_LETTER,
            BonusCategory::TripleLetter => squares::TRIPLE_LETTER,
            BonusCategory::DoubleWord => squares::DOUBLE_WORD,
            BonusCategory::TripleWord => squares::TRIPLE_WORD,
        }
    }
}

use self::BonusCategory::{DoubleLetter as DL, DoubleWord as DW, TripleLetter as TL, TripleWord as TW};

/// (row, col) of every bonus square on the standard 15x15 board
#[rustfmt::skip]
const BONUS_LOCATIONS: [((u8, u8), BonusCategory); 60] = [
    // double letter
    ((0, 3), DL), ((0, 11), DL),
    ((2, 6), DL), ((2, 8), DL),
    ((3, 0), DL), ((3, 7), DL), ((3, 14), DL),
    ((6, 2), DL), ((6, 6), DL), ((6, 8), DL), ((6, 12), DL),
    ((7, 3), DL), ((7, 11), DL),
    ((8, 2), DL), ((8, 6), DL), ((8, 8), DL), ((8, 12), DL),
    ((11, 0), DL), ((11, 7), DL), ((11, 14), DL),
    ((12, 6), DL), ((12, 8), DL),
    ((14, 3), DL), ((14, 11), DL),
    // triple letter
    ((1, 5), TL), ((1, 9), TL),
    ((5, 1), TL), ((5, 5), TL), ((5, 9), TL), ((5, 13), TL),
    ((9, 1), TL), ((9, 5), TL), ((9, 9), TL), ((9, 13), TL),
    ((13, 5), TL), ((13, 9), TL),
    // double word, both diagonals
    ((1, 1), DW), ((2, 2), DW), ((3, 3), DW), ((4, 4), DW),
    ((10, 10), DW), ((11, 11), DW), ((12, 12), DW), ((13, 13), DW),
    ((13, 1), DW), ((12, 2), DW), ((11, 3), DW), ((10, 4), DW),
    ((4, 10), DW), ((3, 11), DW), ((2, 12), DW), ((1, 13), DW),
    // triple word
    ((0, 0), TW), ((0, 7), TW), ((0, 14), TW),
    ((7, 0), TW), ((7, 14), TW),
    ((14, 0), TW), ((14, 7), TW), ((14, 14), TW),
];

/// Static coordinate-to-bonus lookup
pub struct BonusTable;

impl BonusTable {
    fn table() -> &'static HashMap<(u8, u8), BonusCategory> {
        static TABLE: OnceLock<HashMap<(u8, u8), BonusCategory>> = OnceLock::new();
        TABLE.get_or_init(|| BONUS_LOCATIONS.iter().copied().collect())
    }

    /// Bonus at `(row, col)`; anything not in the table is `None`
    pub fn lookup(row: usize, col: usize) -> BonusCategory {
        let (Ok(row), Ok(col)) = (u8::try_from(row), u8::try_from(col)) else {
            return BonusCategory::None;
        };
        Self::table()
            .get(&(row, col))
            .copied()
            .unwrap_or(BonusCategory::None)
    }

    /// Every non-plain square, in no particular order
    pub fn entries() -> impl Iterator<Item = ((usize, usize), BonusCategory)> {
        Self::table()
            .iter()
            .map(|(&(row, col), &bonus)| ((row as usize, col as usize), bonus))
    }
}
