// CalcIcon - core/layout.rs
//
// Slot arithmetic for the operator column. Pure functions only.
//
// The vertical space between the paddings is split into `slots - 1` equal
// intervals, so the first centre sits on the top padding line and the last
// centre sits on the bottom padding line.

use crate::core::face::InkBox;
use crate::util::constants;
use crate::util::error::LayoutError;

/// Validated layout parameters for a square icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconLayout {
    size: u32,
    padding_right: u32,
    padding_vertical: u32,
    slots: usize,
}

impl IconLayout {
    /// Build a layout, rejecting parameters that leave no room for glyphs.
    pub fn new(
        size: u32,
        padding_right: u32,
        padding_vertical: u32,
        slots: usize,
    ) -> Result<Self, LayoutError> {
        if slots < 2 {
            return Err(LayoutError::TooFewSlots { count: slots });
        }
        if u64::from(size) <= 2 * u64::from(padding_vertical) {
            return Err(LayoutError::NoVerticalSpace {
                size,
                padding_vertical,
            });
        }
        if padding_right >= size {
            return Err(LayoutError::PaddingExceedsCanvas {
                size,
                padding_right,
            });
        }
        Ok(Self {
            size,
            padding_right,
            padding_vertical,
            slots,
        })
    }

    /// Layout built from the compiled-in constants.
    pub fn from_constants() -> Result<Self, LayoutError> {
        Self::new(
            constants::SIZE,
            constants::PADDING_RIGHT,
            constants::PADDING_VERTICAL,
            constants::OPERATORS.len(),
        )
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Horizontal position every glyph's ink must end at.
    pub fn right_edge(&self) -> f32 {
        (self.size - self.padding_right) as f32
    }

    /// Height between the top and bottom padding lines.
    pub fn vertical_space(&self) -> f32 {
        (self.size - 2 * self.padding_vertical) as f32
    }

    /// Distance between consecutive glyph centres.
    pub fn spacing(&self) -> f32 {
        self.vertical_space() / (self.slots - 1) as f32
    }

    /// Vertical centre of slot `index` (0 = top).
    pub fn slot_center(&self, index: usize) -> f32 {
        self.padding_vertical as f32 + index as f32 * self.spacing()
    }

    /// Top-left position of a glyph's ink box in slot `index`: right-aligned
    /// to `right_edge()` and vertically centred on the slot.
    pub fn place(&self, index: usize, ink: InkBox) -> (f32, f32) {
        let x = self.right_edge() - ink.width();
        let y = self.slot_center(index) - ink.height() / 2.0;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_layout() -> IconLayout {
        IconLayout::from_constants().unwrap()
    }

    #[test]
    fn test_constants_are_valid() {
        let layout = default_layout();
        assert_eq!(layout.size(), 1024);
        assert_eq!(layout.slots(), 4);
        assert_eq!(layout.vertical_space(), 584.0);
    }

    #[test]
    fn test_centres_are_equally_spaced() {
        let layout = default_layout();
        let expected = 584.0 / 3.0;
        for i in 0..3 {
            let gap = layout.slot_center(i + 1) - layout.slot_center(i);
            assert!((gap - expected).abs() < 1e-3, "gap {i}: {gap}");
        }
    }

    #[test]
    fn test_first_and_last_centre_sit_on_padding_lines() {
        let layout = default_layout();
        assert_eq!(layout.slot_center(0), 220.0);
        assert!((layout.slot_center(3) - 804.0).abs() < 1e-3);
    }

    #[test]
    fn test_place_right_aligns_and_centres() {
        let layout = default_layout();
        let (x, y) = layout.place(0, InkBox::sized(100.0, 40.0));
        assert_eq!(x, 1024.0 - 180.0 - 100.0);
        assert_eq!(y, 220.0 - 20.0);

        let (x_wide, _) = layout.place(1, InkBox::sized(150.0, 40.0));
        assert_eq!(x_wide + 150.0, x + 100.0);
    }

    #[test]
    fn test_place_uses_ink_extent_not_offset() {
        let layout = default_layout();
        let ink = InkBox {
            min_x: 12.0,
            min_y: -90.0,
            max_x: 112.0,
            max_y: -50.0,
        };
        assert_eq!(layout.place(2, ink), layout.place(2, InkBox::sized(100.0, 40.0)));
    }

    #[test]
    fn test_rejects_single_slot() {
        assert_eq!(
            IconLayout::new(1024, 180, 220, 1),
            Err(LayoutError::TooFewSlots { count: 1 })
        );
    }

    #[test]
    fn test_rejects_padding_without_vertical_space() {
        assert!(matches!(
            IconLayout::new(400, 10, 200, 4),
            Err(LayoutError::NoVerticalSpace { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_right_padding() {
        assert!(matches!(
            IconLayout::new(1024, 1024, 220, 4),
            Err(LayoutError::PaddingExceedsCanvas { .. })
        ));
    }
}
