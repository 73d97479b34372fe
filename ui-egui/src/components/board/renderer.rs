//! Board rendering onto an egui painter

use crate::design_system::{color32, get_design_system};
use egui::{Align2, Painter, Pos2, Rounding, Shape, Vec2};
use scrabble_core::{Bounds, Point, Rgb, Surface};
use std::f32::consts::TAU;

/// `Surface` implementation drawing with an egui painter in screen coordinates
pub struct PainterSurface<'a> {
    painter: &'a Painter,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self { painter }
    }
}

impl Surface for PainterSurface<'_> {
    fn fill_rect(&mut self, bounds: Bounds, fill: Rgb, border: Rgb) {
        let ds = get_design_system();
        self.painter.rect(
            super::bounds_to_rect(bounds),
            Rounding::ZERO,
            color32(fill),
            ds.border(border),
        );
    }

    fn fill_oval(&mut self, bounds: Bounds, fill: Rgb, border: Rgb) {
        let ds = get_design_system();
        let points = oval_points(bounds, ds.oval_segments);
        self.painter
            .add(Shape::convex_polygon(points, color32(fill), ds.border(border)));
    }

    fn text(&mut self, text: &str, center: Point, size: f32, bold: bool, color: Rgb) {
        let ds = get_design_system();
        let font = ds.font_id(size);
        let pos = super::point_to_pos(center);

        // egui's default fonts have no bold face: strike twice, slightly apart
        if bold {
            let offset = Vec2::new(ds.bold_offset / 2.0, 0.0);
            self.painter
                .text(pos - offset, Align2::CENTER_CENTER, text, font.clone(), color32(color));
            self.painter
                .text(pos + offset, Align2::CENTER_CENTER, text, font, color32(color));
        } else {
            self.painter
                .text(pos, Align2::CENTER_CENTER, text, font, color32(color));
        }
    }
}

/// Polygon approximating the ellipse inscribed in `bounds`
fn oval_points(bounds: Bounds, segments: usize) -> Vec<Pos2> {
    let center = bounds.center();
    let rx = bounds.size.width / 2.0;
    let ry = bounds.size.height / 2.0;
    let segments = segments.max(3);

    (0..segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            Pos2::new(center.x + rx * angle.cos(), center.y + ry * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrabble_core::Size;

    #[test]
    fn test_oval_points_stay_inside_bounds() {
        let bounds = Bounds::new(Point::new(10.0, 20.0), Size::new(40.0, 20.0));
        let points = oval_points(bounds, 32);
        let rect = super::super::bounds_to_rect(bounds).expand(0.01);

        assert_eq!(points.len(), 32);
        assert!(points.iter().all(|p| rect.contains(*p)));
        assert!((points[0].x - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_segment_count() {
        let bounds = Bounds::new(Point::new(0.0, 0.0), Size::splat(10.0));
        assert_eq!(oval_points(bounds, 0).len(), 3);
    }
}
