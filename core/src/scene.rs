// SPDX-License-Identifier: MIT OR Apache-2.0

//! Everything on screen: the board, the live tiles and the loop's running flag

use crate::board::Board;
use crate::interaction::{InteractionController, PointerEvent};
use crate::layout::{BoardLayout, DEMO_TILE_POSITION};
use crate::surface::Surface;
use crate::tile::Tile;
use crate::ConfigError;

/// Board plus the flat collection of tiles drawn over it
#[derive(Debug)]
pub struct Scene {
    board: Board,
    tiles: Vec<Tile>,
    controller: InteractionController,
    running: bool,
}

impl Scene {
    /// Board for `layout` with no tiles yet
    pub fn new(layout: &BoardLayout) -> Result<Self, ConfigError> {
        let board = Board::build(layout.dimension(), layout.origin(), layout.cell_size())?;
        Ok(Self {
            board,
            tiles: Vec::new(),
            controller: InteractionController::new(),
            running: true,
        })
    }

    /// Board for `layout` with one demo tile in the top-left corner
    pub fn with_demo_tile(layout: &BoardLayout, letter: &str) -> Result<Self, ConfigError> {
        let mut scene = Self::new(layout)?;
        scene.add_tile(Tile::new(DEMO_TILE_POSITION, layout.cell_size(), letter));
        Ok(scene)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Add a tile on top of the existing ones
    pub fn add_tile(&mut self, tile: Tile) {
        tracing::debug!(letter = tile.letter(), "Tile added");
        self.tiles.push(tile);
    }

    /// Route a pointer event to the tiles; returns how many changed
    pub fn handle(&mut self, event: PointerEvent) -> usize {
        if !self.running {
            return 0;
        }
        self.controller.handle(event, &mut self.tiles)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Clear the running flag; the host loop ends after the current frame
    pub fn stop(&mut self) {
        if self.running {
            tracing::info!("Stop requested");
        }
        self.running = false;
    }

    /// Paint the board, then the tiles in collection order
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.board.draw(surface);
        for tile in &self.tiles {
            tile.draw(surface);
        }
    }
}
