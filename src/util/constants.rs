// CalcIcon - util/constants.rs
//
// Single source of truth for all named constants.
// The icon is configured by editing these values and recompiling.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "CalcIcon";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Canvas and layout
// =============================================================================

/// Side length of the square icon in pixels.
pub const SIZE: u32 = 1024;

/// Background fill (light grey).
pub const BG_COLOR: &str = "#F5F5F5";

/// Operator ink colour (brown).
pub const OPERATOR_COLOR: &str = "#6B4423";

/// Distance between the right edge of every glyph's ink and the right edge
/// of the canvas.
pub const PADDING_RIGHT: u32 = 180;

/// Distance from the top edge to the first glyph centre. The last glyph
/// centre sits the same distance above the bottom edge.
pub const PADDING_VERTICAL: u32 = 220;

/// Font size in pixels per em.
pub const FONT_SIZE: f32 = 240.0;

/// Operators drawn top to bottom. Order is significant.
pub const OPERATORS: &[char] = &[
    '+',        // plus sign
    '\u{2212}', // minus sign
    '\u{00D7}', // multiplication sign
    '\u{00F7}', // division sign
];

// =============================================================================
// Font resolution
// =============================================================================

/// Candidate font files tried in order before system discovery.
#[cfg(target_os = "macos")]
pub const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "/System/Library/Fonts/Arial.ttf",
];

/// Candidate font files tried in order before system discovery.
#[cfg(target_os = "windows")]
pub const FONT_CANDIDATES: &[&str] = &[
    r"C:\Windows\Fonts\arialbd.ttf",
    r"C:\Windows\Fonts\arial.ttf",
];

/// Candidate font files tried in order before system discovery.
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/msttcorefonts/Arial_Bold.ttf",
];

/// Family names queried, in order, when no candidate file loads.
pub const SYSTEM_FONT_FAMILIES: &[&str] = &["Arial", "Liberation Sans", "DejaVu Sans"];

// =============================================================================
// Output
// =============================================================================

/// Directory (relative to the repository root) receiving the icon.
pub const ASSETS_DIR_NAME: &str = "assets";

/// Output file name.
pub const ICON_FILE_NAME: &str = "icon.png";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
