//! UI components organized by feature

pub mod board;

pub use board::{PainterSurface, PointerInput};
