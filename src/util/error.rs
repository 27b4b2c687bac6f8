// CalcIcon - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Font errors are recoverable and never reach the top level; everything
// wrapped by `IconError` aborts the run.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for icon generation.
#[derive(Debug)]
pub enum IconError {
    /// Layout constants violate their invariants.
    Layout(LayoutError),

    /// A colour constant is not a valid `#RRGGBB` string.
    Color(ColorError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// PNG encoding failed.
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(e) => write!(f, "Layout error: {e}"),
            Self::Color(e) => write!(f, "Colour error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
            Self::Encode { path, source } => {
                write!(f, "Failed to encode PNG '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(e) => Some(e),
            Self::Color(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Layout errors
// ---------------------------------------------------------------------------

/// Errors raised when validating layout constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// At least two operators are needed to divide the vertical space.
    TooFewSlots { count: usize },

    /// Top and bottom padding leave no vertical space.
    NoVerticalSpace { size: u32, padding_vertical: u32 },

    /// Right padding is wider than the canvas.
    PaddingExceedsCanvas { size: u32, padding_right: u32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSlots { count } => {
                write!(f, "{count} operator(s) given, at least 2 are required")
            }
            Self::NoVerticalSpace {
                size,
                padding_vertical,
            } => write!(
                f,
                "Vertical padding {padding_vertical} leaves no space on a {size}px canvas"
            ),
            Self::PaddingExceedsCanvas {
                size,
                padding_right,
            } => write!(
                f,
                "Right padding {padding_right} does not fit on a {size}px canvas"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<LayoutError> for IconError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

// ---------------------------------------------------------------------------
// Colour errors
// ---------------------------------------------------------------------------

/// Errors raised when parsing a colour constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not of the form `#RRGGBB`.
    InvalidHex { value: String, reason: &'static str },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHex { value, reason } => {
                write!(f, "Invalid colour '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for ColorError {}

impl From<ColorError> for IconError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}

// ---------------------------------------------------------------------------
// Font errors
// ---------------------------------------------------------------------------

/// A single failed attempt in the font fallback chain.
///
/// These are collected and logged, never propagated: exhausting every
/// candidate degrades to the built-in face.
#[derive(Debug)]
pub enum FontError {
    /// The candidate file could not be read.
    Read { path: PathBuf, source: io::Error },

    /// The candidate bytes are not a usable font.
    Parse {
        origin: String,
        source: ab_glyph::InvalidFont,
    },

    /// The font parsed but has no units-per-em value to scale by.
    Unscalable { origin: String },

    /// The font lacks an outline for one of the operators.
    MissingGlyph { origin: String, operator: char },

    /// System discovery found no matching family.
    NotDiscovered { families: Vec<String> },
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "Cannot read font '{}': {source}", path.display())
            }
            Self::Parse { origin, source } => {
                write!(f, "Cannot parse font '{origin}': {source}")
            }
            Self::Unscalable { origin } => {
                write!(f, "Font '{origin}' has no units-per-em")
            }
            Self::MissingGlyph { origin, operator } => write!(
                f,
                "Font '{origin}' has no glyph for '{operator}' (U+{:04X})",
                u32::from(*operator)
            ),
            Self::NotDiscovered { families } => {
                write!(f, "No system font found for families {families:?}")
            }
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for icon generation results.
pub type Result<T> = std::result::Result<T, IconError>;
