// CalcIcon - core/builtin.rs
//
// Built-in default face, used when no outline font can be loaded.
// Draws the four operators from rectangles, convex polygons and discs, so it
// never fails and renders identically on every host.

use crate::core::face::{GlyphFace, InkBox};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

/// Stroke thickness as a fraction of the em size.
const STROKE_EM: f32 = 0.09;

/// Extent of `+`, `−` and `÷` as a fraction of the em size.
const BAR_EM: f32 = 0.50;

/// Extent of `×` as a fraction of the em size.
const CROSS_EM: f32 = 0.42;

/// Radius of the `÷` dots as a fraction of the em size.
const DOT_EM: f32 = 0.06;

/// Geometric operator face.
#[derive(Debug, Clone)]
pub struct BuiltinFace {
    stroke: u32,
    bar: u32,
    cross: u32,
    dot_radius: u32,
}

impl BuiltinFace {
    /// Face sized for `em_px` pixels per em.
    pub fn new(em_px: f32) -> Self {
        let px = |fraction: f32| ((em_px * fraction).round() as u32).max(1);
        let stroke = px(STROKE_EM);
        let dot_radius = px(DOT_EM);
        // Bars must be at least as long as the strokes crossing them and
        // tall enough to fit two dots above and below the division bar.
        let bar = px(BAR_EM).max(stroke).max(4 * dot_radius + stroke + 2);
        let cross = px(CROSS_EM).max(2 * stroke);
        Self {
            stroke,
            bar,
            cross,
            dot_radius,
        }
    }

    fn bar_offset(&self) -> i32 {
        ((self.bar - self.stroke) / 2) as i32
    }

    fn draw_plus(&self, canvas: &mut RgbImage, ox: i32, oy: i32, color: Rgb<u8>) {
        let off = self.bar_offset();
        draw_filled_rect_mut(
            canvas,
            Rect::at(ox, oy + off).of_size(self.bar, self.stroke),
            color,
        );
        draw_filled_rect_mut(
            canvas,
            Rect::at(ox + off, oy).of_size(self.stroke, self.bar),
            color,
        );
    }

    fn draw_minus(&self, canvas: &mut RgbImage, ox: i32, oy: i32, color: Rgb<u8>) {
        draw_filled_rect_mut(canvas, Rect::at(ox, oy).of_size(self.bar, self.stroke), color);
    }

    fn draw_times(&self, canvas: &mut RgbImage, ox: i32, oy: i32, color: Rgb<u8>) {
        // Each diagonal is a hexagon: a bar of perpendicular thickness
        // `stroke` clipped to the glyph square.
        let s = self.cross as i32 - 1;
        let o = ((self.stroke as f32) / std::f32::consts::SQRT_2).round() as i32;
        let at = |x: i32, y: i32| Point::new(ox + x, oy + y);

        let falling = [at(0, 0), at(o, 0), at(s, s - o), at(s, s), at(s - o, s), at(0, o)];
        let rising = [at(s, 0), at(s, o), at(o, s), at(0, s), at(0, s - o), at(s - o, 0)];
        draw_polygon_mut(canvas, &falling, color);
        draw_polygon_mut(canvas, &rising, color);
    }

    fn draw_divide(&self, canvas: &mut RgbImage, ox: i32, oy: i32, color: Rgb<u8>) {
        let off = self.bar_offset();
        let r = self.dot_radius as i32;
        let cx = ox + self.bar as i32 / 2;
        draw_filled_rect_mut(
            canvas,
            Rect::at(ox, oy + off).of_size(self.bar, self.stroke),
            color,
        );
        draw_filled_circle_mut(canvas, (cx, oy + r), r, color);
        draw_filled_circle_mut(canvas, (cx, oy + self.bar as i32 - 1 - r), r, color);
    }
}

impl GlyphFace for BuiltinFace {
    fn name(&self) -> &str {
        "built-in"
    }

    fn ink_box(&self, ch: char) -> Option<InkBox> {
        let (w, h) = match ch {
            '+' | '\u{00F7}' => (self.bar, self.bar),
            '-' | '\u{2212}' => (self.bar, self.stroke),
            '\u{00D7}' | 'x' => (self.cross, self.cross),
            _ => return None,
        };
        Some(InkBox::sized(w as f32, h as f32))
    }

    fn draw(&self, canvas: &mut RgbImage, ch: char, origin: (f32, f32), color: Rgb<u8>) -> bool {
        let ox = origin.0.round() as i32;
        let oy = origin.1.round() as i32;
        match ch {
            '+' => self.draw_plus(canvas, ox, oy, color),
            '-' | '\u{2212}' => self.draw_minus(canvas, ox, oy, color),
            '\u{00D7}' | 'x' => self.draw_times(canvas, ox, oy, color),
            '\u{00F7}' => self.draw_divide(canvas, ox, oy, color),
            _ => return false,
        }
        true
    }
}
