// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pointer-driven drag state machine for tiles
//!
//! Each tile is either `Idle` or `Dragging`:
//! - press selects every tile under the pointer, overlapping ones included
//! - move recenters every dragging tile on the pointer
//! - release drops every tile, wherever it is
//!
//! There is no z-order resolution and no snapping to board cells.

use crate::tile::Tile;
use crate::Point;
use serde::{Deserialize, Serialize};

/// Mouse button reported with pointer events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// Pointer input as delivered by the rendering surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { pos: Point, button: PointerButton },
    /// Only delivered while a button is held
    Move { pos: Point, button: PointerButton },
    Up { pos: Point, button: PointerButton },
}

impl PointerEvent {
    pub fn pos(&self) -> Point {
        match *self {
            PointerEvent::Down { pos, .. }
            | PointerEvent::Move { pos, .. }
            | PointerEvent::Up { pos, .. } => pos,
        }
    }
}

/// Drag state of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    Idle,
    Dragging,
}

impl TileState {
    pub fn of(tile: &Tile) -> Self {
        if tile.is_selected() {
            TileState::Dragging
        } else {
            TileState::Idle
        }
    }
}

/// Translates pointer events into tile selection and movement.
///
/// The button is ignored: any button grabs, drags and drops.
#[derive(Debug, Default)]
pub struct InteractionController {
    /// Position of the last move applied to a dragging tile
    last_drag_pos: Option<Point>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event to the whole tile collection.
    ///
    /// Returns how many tiles changed state or position.
    pub fn handle(&mut self, event: PointerEvent, tiles: &mut [Tile]) -> usize {
        match event {
            PointerEvent::Down { pos, .. } => self.on_pointer_down(pos, tiles),
            PointerEvent::Move { pos, .. } => self.on_pointer_move(pos, tiles),
            PointerEvent::Up { pos, .. } => self.on_pointer_up(pos, tiles),
        }
    }

    /// Select every tile containing `pos`
    pub fn on_pointer_down(&mut self, pos: Point, tiles: &mut [Tile]) -> usize {
        let mut grabbed = 0;
        for tile in tiles.iter_mut().filter(|tile| tile.contains_point(pos)) {
            if !tile.is_selected() {
                grabbed += 1;
            }
            tile.select();
        }

        if grabbed > 0 {
            tracing::debug!(x = pos.x, y = pos.y, grabbed, "Tiles picked up");
        }
        grabbed
    }

    /// Recenter every dragging tile on `pos`
    pub fn on_pointer_move(&mut self, pos: Point, tiles: &mut [Tile]) -> usize {
        let mut moved = 0;
        for tile in tiles.iter_mut().filter(|tile| tile.is_selected()) {
            tile.move_center_to(pos);
            moved += 1;
        }

        if moved > 0 {
            self.last_drag_pos = Some(pos);
        }
        moved
    }

    /// Deselect all tiles; positions stay where the last move left them
    pub fn on_pointer_up(&mut self, pos: Point, tiles: &mut [Tile]) -> usize {
        let mut dropped = 0;
        for tile in tiles.iter_mut() {
            if tile.is_selected() {
                dropped += 1;
            }
            tile.deselect();
        }

        if dropped > 0 {
            tracing::debug!(
                x = pos.x,
                y = pos.y,
                dropped,
                last_drag = ?self.last_drag_pos,
                "Tiles dropped"
            );
        }
        self.last_drag_pos = None;
        dropped
    }

    /// Where the current drag last moved tiles to, if a drag is in progress
    pub fn last_drag_pos(&self) -> Option<Point> {
        self.last_drag_pos
    }
}
