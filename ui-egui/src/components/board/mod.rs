//! Board rendering and pointer handling on top of egui

mod interaction;
mod renderer;

pub use interaction::PointerInput;
pub use renderer::PainterSurface;

use egui::{Pos2, Rect, Vec2};
use scrabble_core::{Bounds, Point};

/// Convert a board-space point to an egui position
pub fn point_to_pos(point: Point) -> Pos2 {
    Pos2::new(point.x, point.y)
}

/// Convert an egui position to a board-space point
pub fn pos_to_point(pos: Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

/// Convert board-space bounds to an egui rectangle
pub fn bounds_to_rect(bounds: Bounds) -> Rect {
    Rect::from_min_size(
        point_to_pos(bounds.min),
        Vec2::new(bounds.size.width, bounds.size.height),
    )
}
