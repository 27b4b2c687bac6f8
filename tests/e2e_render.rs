// CalcIcon - tests/e2e_render.rs
//
// End-to-end tests for the rendering pipeline.
//
// These tests run the real renderer and write real PNG files to temporary
// directories, then decode them and measure the ink on disk. Font
// candidates are emptied and system discovery disabled so every assertion
// runs against the built-in face and holds on any host.

use calcicon::app::renderer::IconRenderer;
use calcicon::platform::fonts::FontSource;
use calcicon::util::constants::{OPERATORS, PADDING_RIGHT, PADDING_VERTICAL, SIZE};
use image::{Rgb, RgbImage};
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

const BG: Rgb<u8> = Rgb([0xF5, 0xF5, 0xF5]);

fn builtin_renderer() -> IconRenderer {
    IconRenderer::new()
        .unwrap()
        .with_font_candidates(vec![PathBuf::from("/nonexistent/calcicon.ttf")], false)
}

/// Render to a temp dir and decode the written file.
fn render_and_decode() -> (RgbImage, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assets").join("icon.png");
    let written = builtin_renderer().render_to(&path).unwrap();
    assert_eq!(written, path);

    let decoded = image::open(&path).unwrap();
    assert_eq!(decoded.color(), image::ColorType::Rgb8, "PNG must be RGB without alpha");
    (decoded.to_rgb8(), dir)
}

/// Inclusive (min_x, min_y, max_x, max_y) of non-background pixels within
/// rows `[top, bottom)`.
fn ink_extent_in_rows(image: &RgbImage, top: u32, bottom: u32) -> Option<(u32, u32, u32, u32)> {
    let mut extent: Option<(u32, u32, u32, u32)> = None;
    for y in top..bottom.min(image.height()) {
        for x in 0..image.width() {
            if *image.get_pixel(x, y) != BG {
                extent = Some(match extent {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
    }
    extent
}

/// Row band owned by operator `i`: half a spacing either side of its centre.
fn band(i: usize) -> (u32, u32) {
    let spacing = (SIZE - 2 * PADDING_VERTICAL) as f32 / (OPERATORS.len() - 1) as f32;
    let center = PADDING_VERTICAL as f32 + i as f32 * spacing;
    let top = (center - spacing / 2.0).max(0.0) as u32;
    let bottom = (center + spacing / 2.0) as u32;
    (top, bottom)
}

// =============================================================================
// Output file
// =============================================================================

/// The written icon is a 1024x1024 RGB PNG.
#[test]
fn e2e_writes_square_rgb_png() {
    let (image, _dir) = render_and_decode();
    assert_eq!(image.dimensions(), (SIZE, SIZE));
}

/// Rendering twice yields identical pixels.
#[test]
fn e2e_rendering_is_deterministic() {
    let (first, _d1) = render_and_decode();
    let (second, _d2) = render_and_decode();
    assert!(first == second, "two renders differ");
}

/// A missing font degrades to the built-in face instead of failing.
#[test]
fn e2e_missing_fonts_fall_back_to_builtin() {
    let rendered = builtin_renderer().render();
    assert_eq!(rendered.font_source, FontSource::Builtin);
    assert_eq!(rendered.placements.len(), OPERATORS.len());
}

// =============================================================================
// Layout measured from pixels
// =============================================================================

/// Corners and the left half of the canvas are pure background.
#[test]
fn e2e_background_outside_glyphs() {
    let (image, _dir) = render_and_decode();
    for &(x, y) in &[(0, 0), (SIZE - 1, 0), (0, SIZE - 1), (SIZE - 1, SIZE - 1)] {
        assert_eq!(*image.get_pixel(x, y), BG, "corner ({x}, {y})");
    }
    let left = ink_extent_in_rows(&image, 0, SIZE).map(|(x0, ..)| x0).unwrap();
    assert!(left > SIZE / 2, "ink reaches column {left}");
}

/// Every pixel outside the reported ink boxes is background.
#[test]
fn e2e_no_ink_outside_placements() {
    let rendered = builtin_renderer().render();
    let inside = |x: u32, y: u32| {
        rendered.placements.iter().any(|p| {
            let (fx, fy) = (x as f32, y as f32);
            fx >= p.x - 1.0 && fx < p.right() + 1.0 && fy >= p.y - 1.0 && fy < p.y + p.ink.height() + 1.0
        })
    };
    for (x, y, px) in rendered.image.enumerate_pixels() {
        if !inside(x, y) {
            assert_eq!(*px, BG, "stray ink at ({x}, {y})");
        }
    }
}

/// All glyphs end on the same column, `SIZE - PADDING_RIGHT`.
#[test]
fn e2e_glyphs_are_right_aligned() {
    let (image, _dir) = render_and_decode();
    let right_edge = SIZE - PADDING_RIGHT;
    for (i, op) in OPERATORS.iter().enumerate() {
        let (top, bottom) = band(i);
        let (_, _, max_x, _) =
            ink_extent_in_rows(&image, top, bottom).unwrap_or_else(|| panic!("no ink for {op}"));
        // max_x is the last inked column; the exclusive edge is one past it.
        assert!(
            (max_x + 1).abs_diff(right_edge) <= 1,
            "{op}: right edge {} expected {right_edge}",
            max_x + 1
        );
    }
}

/// Measured glyph centres are equally spaced and sit on their slots.
#[test]
fn e2e_glyph_centres_equally_spaced() {
    let (image, _dir) = render_and_decode();
    let spacing = (SIZE - 2 * PADDING_VERTICAL) as f32 / 3.0;

    let centres: Vec<f32> = (0..OPERATORS.len())
        .map(|i| {
            let (top, bottom) = band(i);
            let (_, y0, _, y1) = ink_extent_in_rows(&image, top, bottom).unwrap();
            (y0 as f32 + y1 as f32 + 1.0) / 2.0
        })
        .collect();

    assert!((centres[0] - PADDING_VERTICAL as f32).abs() <= 1.0, "{centres:?}");
    assert!(
        (centres[3] - (SIZE - PADDING_VERTICAL) as f32).abs() <= 1.0,
        "{centres:?}"
    );
    for pair in centres.windows(2) {
        let gap = pair[1] - pair[0];
        assert!((gap - spacing).abs() <= 1.5, "gap {gap} expected {spacing}");
    }
}
