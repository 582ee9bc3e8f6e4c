//! RGBA colors with 8 bits per channel.

use std::str::FromStr;
use std::{error, fmt};

/// Opaque white
pub const WHITE: ColorU8 = ColorU8::from_rgb(255, 255, 255);
/// Opaque black
pub const BLACK: ColorU8 = ColorU8::from_rgb(0, 0, 0);
/// Fully transparent black
pub const TRANSPARENT: ColorU8 = ColorU8::from_rgba(0, 0, 0, 0);

/// A color with red, green, blue and alpha channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorU8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl ColorU8 {
    /// An opaque color
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorU8 { r, g, b, a: 255 }
    }

    /// A color with explicit alpha
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        ColorU8 { r, g, b, a }
    }

    /// Build a color from a `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` literal.
    ///
    /// Meant for constants: panics on malformed input.
    /// Use [`str::parse`] for runtime input.
    pub const fn from_html(hex: &[u8]) -> Self {
        match parse_html(hex) {
            Ok(c) => c,
            Err(_) => panic!("Invalid hex color"),
        }
    }

    /// The channels as an array
    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Red channel
    pub const fn red(&self) -> u8 {
        self.r
    }

    /// Green channel
    pub const fn green(&self) -> u8 {
        self.g
    }

    /// Blue channel
    pub const fn blue(&self) -> u8 {
        self.b
    }

    /// Alpha channel
    pub const fn alpha(&self) -> u8 {
        self.a
    }

    /// Whether the color is fully transparent
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Replace the alpha channel
    pub const fn with_alpha(self, a: u8) -> Self {
        ColorU8 { a, ..self }
    }

    /// Multiply the alpha channel by `opacity` in `[0, 1]`
    pub const fn with_opacity(self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        ColorU8 {
            a: (self.a as f32 * opacity) as u8,
            ..self
        }
    }

    /// Relative luminance in `[0, 1]`, ignoring alpha
    pub fn luminance(&self) -> f32 {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not opaque
    pub fn html(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for ColorU8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html())
    }
}

/// Parsing error for [`ColorU8`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Doesn't start with `#`
    InvalidFormat,
    /// Unsupported number of hex digits
    InvalidLength,
    /// A character is not a hex digit
    InvalidHex,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidFormat => write!(f, "invalid color format"),
            ParseError::InvalidLength => write!(f, "invalid hex color length"),
            ParseError::InvalidHex => write!(f, "invalid hex digit"),
        }
    }
}

impl error::Error for ParseError {}

impl FromStr for ColorU8 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_html(s.trim().as_bytes())
    }
}

const fn parse_html(hex: &[u8]) -> Result<ColorU8, ParseError> {
    if hex.is_empty() || hex[0] != b'#' {
        return Err(ParseError::InvalidFormat);
    }
    let mut digits = [0u8; 8];
    let n = hex.len() - 1;
    if !matches!(n, 3 | 4 | 6 | 8) {
        return Err(ParseError::InvalidLength);
    }
    let mut i = 0;
    while i < n {
        digits[i] = match hex[i + 1] {
            c @ b'0'..=b'9' => c - b'0',
            c @ b'a'..=b'f' => c - b'a' + 10,
            c @ b'A'..=b'F' => c - b'A' + 10,
            _ => return Err(ParseError::InvalidHex),
        };
        i += 1;
    }
    let c = match n {
        3 => ColorU8::from_rgb(digits[0] * 17, digits[1] * 17, digits[2] * 17),
        4 => ColorU8::from_rgba(
            digits[0] * 17,
            digits[1] * 17,
            digits[2] * 17,
            digits[3] * 17,
        ),
        6 => ColorU8::from_rgb(
            digits[0] << 4 | digits[1],
            digits[2] << 4 | digits[3],
            digits[4] << 4 | digits[5],
        ),
        _ => ColorU8::from_rgba(
            digits[0] << 4 | digits[1],
            digits[2] << 4 | digits[3],
            digits[4] << 4 | digits[5],
            digits[6] << 4 | digits[7],
        ),
    };
    Ok(c)
}
