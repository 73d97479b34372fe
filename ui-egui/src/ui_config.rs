// SPDX-License-Identifier: MIT OR Apache-2.0

//! UI Configuration
//!
//! Defaults reproduce the classic demo: a 900px wide window, a 15x15
//! board, one "C" tile and a 30 fps redraw loop. A JSON file can override
//! any subset of fields; command line flags are applied on top by `main`.

use anyhow::{Context, Result};
use scrabble_core::color_constants::tiles;
use scrabble_core::layout::{
    BoardLayout, FrameRate, BOARD_DIMENSION, DEMO_TILE_LETTER, DEMO_TILE_POSITION, FRAMES_PER_SECOND,
    SCREEN_WIDTH,
};
use scrabble_core::{Rgb, Scene, Tile};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete UI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    pub window: WindowConfig,
    pub board: BoardConfig,
    pub tile: TileConfig,
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Window width; the height follows at 2:3
    pub width: f32,
    /// Redraw rate of the frame loop
    pub fps: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Scrabble".to_string(),
            width: SCREEN_WIDTH,
            fps: FRAMES_PER_SECOND,
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Cells per side
    pub dimension: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            dimension: BOARD_DIMENSION,
        }
    }
}

/// Demo tile configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    pub letter: String,
    /// Face color as #RRGGBB
    pub face_color: String,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            letter: DEMO_TILE_LETTER.to_string(),
            face_color: tiles::FACE.to_string(),
        }
    }
}

impl UiConfig {
    /// Load config from file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "Loaded UI config");
        Ok(config)
    }

    /// Save config to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn layout(&self) -> Result<BoardLayout> {
        Ok(BoardLayout::new(self.window.width, self.board.dimension)?)
    }

    pub fn frame_rate(&self) -> Result<FrameRate> {
        Ok(FrameRate::new(self.window.fps)?)
    }

    pub fn tile_face(&self) -> Result<Rgb> {
        Rgb::from_hex(&self.tile.face_color).map_err(anyhow::Error::msg)
    }

    /// Build the board and demo tile this config describes
    pub fn build_scene(&self) -> Result<Scene> {
        let layout = self.layout()?;
        let face = self.tile_face()?;

        let mut scene = Scene::new(&layout)?;
        scene.add_tile(
            Tile::new(DEMO_TILE_POSITION, layout.cell_size(), &self.tile.letter).with_face(face),
        );
        Ok(scene)
    }
}
