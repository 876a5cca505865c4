//! Color representation and palette handling

use crate::io::error::{Result, invalid_color};

/// RGBA color with 8 bits per channel
pub type Rgba = [u8; 4];

/// Parse a `#rrggbb` or `#rrggbbaa` hex color string
///
/// # Errors
///
/// Returns `InvalidColor` when the leading `#` is missing, the digit count
/// is wrong, or a component is not valid hexadecimal.
pub fn parse_hex_color(value: &str) -> Result<Rgba> {
    let digits = value
        .strip_prefix('#')
        .ok_or_else(|| invalid_color(&value, &"expected a leading '#'"))?;

    if digits.len() != 6 && digits.len() != 8 {
        return Err(invalid_color(&value, &"expected 6 or 8 hex digits"));
    }

    let component = |start: usize| -> Result<u8> {
        let pair = digits
            .get(start..start + 2)
            .ok_or_else(|| invalid_color(&value, &"expected 6 or 8 hex digits"))?;
        u8::from_str_radix(pair, 16)
            .map_err(|_| invalid_color(&value, &format!("'{pair}' is not hexadecimal")))
    };

    let alpha = if digits.len() == 8 { component(6)? } else { 255 };

    Ok([component(0)?, component(2)?, component(4)?, alpha])
}

/// Two-color cell palette
///
/// The color map's booleans index into this: `false` picks the first color,
/// `true` the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgba; 2],
}

impl Palette {
    /// Create a palette from two cell colors
    pub const fn new(first: Rgba, second: Rgba) -> Self {
        Self {
            colors: [first, second],
        }
    }

    /// Parse a palette from two hex color strings
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` when either string fails to parse.
    pub fn from_hex(first: &str, second: &str) -> Result<Self> {
        Ok(Self::new(parse_hex_color(first)?, parse_hex_color(second)?))
    }

    /// Cell color for a color map entry
    pub const fn color_for(&self, cell: bool) -> Rgba {
        if cell { self.colors[1] } else { self.colors[0] }
    }

    /// Palette with the two colors swapped
    pub const fn reversed(&self) -> Self {
        Self {
            colors: [self.colors[1], self.colors[0]],
        }
    }
}
