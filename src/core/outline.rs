// CalcIcon - core/outline.rs
//
// TrueType/OpenType glyph face backed by `ab_glyph`.

use crate::core::color::blend;
use crate::core::face::{GlyphFace, InkBox};
use crate::util::error::FontError;
use ab_glyph::{point, Font, FontVec, OutlinedGlyph, PxScale};
use image::{Rgb, RgbImage};

/// Outline font scaled so that one em spans a fixed number of pixels.
pub struct OutlineFace {
    font: FontVec,
    scale: PxScale,
    name: String,
}

impl std::fmt::Debug for OutlineFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineFace")
            .field("name", &self.name)
            .field("scale", &self.scale)
            .finish()
    }
}

impl OutlineFace {
    /// Parse font bytes (face `index` of a collection, 0 for plain files).
    ///
    /// `origin` names the source in logs and errors. The face is rejected
    /// if any character in `required` maps to `.notdef`, since drawing it
    /// would produce a placeholder box rather than the operator.
    pub fn from_bytes(
        data: Vec<u8>,
        index: u32,
        origin: &str,
        em_px: f32,
        required: &[char],
    ) -> Result<Self, FontError> {
        let font = FontVec::try_from_vec_and_index(data, index).map_err(|source| {
            FontError::Parse {
                origin: origin.to_string(),
                source,
            }
        })?;

        let units_per_em = font.units_per_em().ok_or_else(|| FontError::Unscalable {
            origin: origin.to_string(),
        })?;
        // PxScale measures ascent-to-descent height, not the em square.
        let scale = PxScale::from(em_px * font.height_unscaled() / units_per_em);

        let drawable = |c: char| {
            let id = font.glyph_id(c);
            id.0 != 0 && font.outline(id).is_some()
        };
        if let Some(&operator) = required.iter().find(|&&c| !drawable(c)) {
            return Err(FontError::MissingGlyph {
                origin: origin.to_string(),
                operator,
            });
        }

        Ok(Self {
            font,
            scale,
            name: origin.to_string(),
        })
    }

    fn outline_at(&self, ch: char, x: f32, y: f32) -> Option<OutlinedGlyph> {
        let id = self.font.glyph_id(ch);
        if id.0 == 0 {
            return None;
        }
        self.font
            .outline_glyph(id.with_scale_and_position(self.scale, point(x, y)))
    }
}

impl GlyphFace for OutlineFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn ink_box(&self, ch: char) -> Option<InkBox> {
        let bounds = self.outline_at(ch, 0.0, 0.0)?.px_bounds();
        Some(InkBox {
            min_x: bounds.min.x,
            min_y: bounds.min.y,
            max_x: bounds.max.x,
            max_y: bounds.max.y,
        })
    }

    fn draw(&self, canvas: &mut RgbImage, ch: char, origin: (f32, f32), color: Rgb<u8>) -> bool {
        let Some(ink) = self.ink_box(ch) else {
            return false;
        };
        // Shift the pen so the ink box, not the baseline origin, lands on
        // the requested point.
        let Some(glyph) = self.outline_at(ch, origin.0 - ink.min_x, origin.1 - ink.min_y) else {
            return false;
        };

        let bounds = glyph.px_bounds();
        let (width, height) = canvas.dimensions();
        glyph.draw(|gx, gy, coverage| {
            let x = bounds.min.x as i64 + i64::from(gx);
            let y = bounds.min.y as i64 + i64::from(gy);
            if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
                return;
            }
            let pixel = canvas.get_pixel_mut(x as u32, y as u32);
            *pixel = blend(*pixel, color, coverage);
        });
        true
    }
}
