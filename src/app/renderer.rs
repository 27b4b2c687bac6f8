// CalcIcon - app/renderer.rs
//
// Icon rendering pipeline: fill the canvas, resolve a face, place and draw
// each operator, persist the result.

use crate::core::color;
use crate::core::face::{GlyphFace, InkBox};
use crate::core::layout::IconLayout;
use crate::platform::fonts::{self, FontCandidates, FontSource};
use crate::platform::fs as icon_fs;
use crate::util::constants;
use crate::util::error::Result;
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Where one operator ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPlacement {
    pub operator: char,
    pub index: usize,
    /// Vertical centre of the operator's slot.
    pub center_y: f32,
    /// Top-left corner of the operator's ink box.
    pub x: f32,
    pub y: f32,
    pub ink: InkBox,
}

impl GlyphPlacement {
    /// Right edge of the ink box.
    pub fn right(&self) -> f32 {
        self.x + self.ink.width()
    }
}

/// Result of one rendering pass, before persistence.
#[derive(Debug)]
pub struct RenderedIcon {
    pub image: RgbImage,
    pub placements: Vec<GlyphPlacement>,
    pub font_source: FontSource,
}

/// Renders the calculator icon from compiled-in constants.
#[derive(Debug, Clone)]
pub struct IconRenderer {
    layout: IconLayout,
    background: Rgb<u8>,
    ink: Rgb<u8>,
    operators: &'static [char],
    font_size: f32,
    candidates: FontCandidates,
}

impl IconRenderer {
    /// Build a renderer from the constants, validating layout and colours.
    pub fn new() -> Result<Self> {
        Ok(Self {
            layout: IconLayout::from_constants()?,
            background: color::parse_hex(constants::BG_COLOR)?,
            ink: color::parse_hex(constants::OPERATOR_COLOR)?,
            operators: constants::OPERATORS,
            font_size: constants::FONT_SIZE,
            candidates: FontCandidates::default(),
        })
    }

    /// Replace the font candidate list.
    pub fn with_font_candidates(mut self, paths: Vec<PathBuf>, discover_system: bool) -> Self {
        self.candidates = FontCandidates {
            paths,
            discover_system,
        };
        self
    }

    pub fn layout(&self) -> &IconLayout {
        &self.layout
    }

    pub fn background(&self) -> Rgb<u8> {
        self.background
    }

    pub fn ink(&self) -> Rgb<u8> {
        self.ink
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Resolve a face through the fallback chain and render with it.
    pub fn render(&self) -> RenderedIcon {
        let (resolved, font_errors) =
            fonts::resolve_face(&self.candidates, self.font_size, self.operators);
        if !font_errors.is_empty() {
            tracing::debug!(
                rejected = font_errors.len(),
                source = %resolved.source,
                "Font resolved after fallbacks"
            );
        }

        let (image, placements) = self.render_with_face(resolved.face.as_ref());
        RenderedIcon {
            image,
            placements,
            font_source: resolved.source,
        }
    }

    /// Render onto a fresh canvas using an already-resolved face.
    ///
    /// Operators the face cannot draw are skipped with a warning.
    pub fn render_with_face(&self, face: &dyn GlyphFace) -> (RgbImage, Vec<GlyphPlacement>) {
        let size = self.layout.size();
        let mut canvas = RgbImage::from_pixel(size, size, self.background);

        tracing::debug!(
            face = face.name(),
            vertical_space = self.layout.vertical_space(),
            spacing = self.layout.spacing(),
            "Layout computed"
        );

        let mut placements = Vec::with_capacity(self.layout.slots());
        for (index, &operator) in self.operators.iter().enumerate() {
            let Some(ink) = face.ink_box(operator) else {
                tracing::warn!(%operator, face = face.name(), "Face has no glyph, skipping");
                continue;
            };

            let (x, y) = self.layout.place(index, ink);
            if !face.draw(&mut canvas, operator, (x, y), self.ink) {
                tracing::warn!(%operator, face = face.name(), "Face failed to draw glyph");
                continue;
            }

            tracing::info!(
                %operator,
                x = x.round() as i64,
                y = y.round() as i64,
                "Drew operator"
            );
            placements.push(GlyphPlacement {
                operator,
                index,
                center_y: self.layout.slot_center(index),
                x,
                y,
                ink,
            });
        }

        (canvas, placements)
    }

    /// Render and write the PNG to `path`, returning the path written.
    pub fn render_to(&self, path: &Path) -> Result<PathBuf> {
        let rendered = self.render();
        icon_fs::write_png(path, &rendered.image)?;

        tracing::info!(
            path = %path.display(),
            size = self.layout.size(),
            background = constants::BG_COLOR,
            operators = constants::OPERATOR_COLOR,
            font = %rendered.font_source,
            "Icon saved"
        );
        Ok(path.to_path_buf())
    }
}

/// Render the icon with the compiled-in constants to
/// `<repo-root>/assets/icon.png` and return that path.
pub fn render_icon() -> Result<PathBuf> {
    IconRenderer::new()?.render_to(&icon_fs::default_output_path())
}
