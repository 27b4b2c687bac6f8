// CalcIcon - core/face.rs
//
// Glyph face abstraction shared by the outline-font face and the built-in
// fallback face. The renderer only ever sees `dyn GlyphFace`.

use image::{Rgb, RgbImage};

/// Pixel bounding box of a glyph's ink, relative to its drawing origin.
///
/// `max_x`/`max_y` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InkBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl InkBox {
    /// Box of the given size anchored at the origin.
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: width,
            max_y: height,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// A source of glyph shapes.
pub trait GlyphFace {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Measure the ink box of `ch`, or `None` if the face cannot draw it.
    fn ink_box(&self, ch: char) -> Option<InkBox>;

    /// Draw `ch` so that the top-left corner of its ink box lands on
    /// `origin`. Pixels outside the canvas are clipped.
    ///
    /// Returns false if the face cannot draw `ch`.
    fn draw(&self, canvas: &mut RgbImage, ch: char, origin: (f32, f32), color: Rgb<u8>) -> bool;
}
