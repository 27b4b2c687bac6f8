// CalcIcon - core/color.rs
//
// `#RRGGBB` colour parsing.

use crate::util::error::ColorError;
use image::Rgb;

/// Parse a `#RRGGBB` hex string into an RGB pixel.
///
/// The leading `#` is required; digits are case-insensitive.
pub fn parse_hex(value: &str) -> Result<Rgb<u8>, ColorError> {
    let invalid = |reason| ColorError::InvalidHex {
        value: value.to_string(),
        reason,
    };

    let digits = value.strip_prefix('#').ok_or_else(|| invalid("missing '#'"))?;
    if digits.len() != 6 {
        return Err(invalid("expected exactly 6 hex digits"));
    }

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        let pair = digits
            .get(i * 2..i * 2 + 2)
            .ok_or_else(|| invalid("non-ASCII characters"))?;
        *channel = u8::from_str_radix(pair, 16).map_err(|_| invalid("non-hex digit"))?;
    }
    Ok(Rgb(rgb))
}

/// Blend `ink` over `base` with the given coverage in `[0, 1]`.
pub fn blend(base: Rgb<u8>, ink: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let c = coverage.clamp(0.0, 1.0);
    let mix = |b: u8, i: u8| -> u8 {
        let v = f32::from(b) * (1.0 - c) + f32::from(i) * c;
        v.round() as u8
    };
    Rgb([
        mix(base[0], ink[0]),
        mix(base[1], ink[1]),
        mix(base[2], ink[2]),
    ])
}
