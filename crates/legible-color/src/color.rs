// SPDX-License-Identifier: MIT
//
// legible-color RGB values and hex conversion.
//
// Single-character variable names (r, g, b, c) follow the usual color
// math convention.
#![allow(clippy::many_single_char_names)]
//
// Hex forms accepted by the permissive parser:
//
//   #RGB     → each digit doubled (`#abc` == `#aabbcc`)
//   #RRGGBB  → one byte per channel
//   RGB / RRGGBB without the leading `#` are accepted too.
//
// Everything else (wrong length, empty, non-hex digit) resolves to black.
// There is no alpha channel.

use std::fmt;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB triplet.
///
/// # Examples
///
/// ```
/// use legible_color::Rgb;
///
/// let orange = Rgb::parse("#ff6a00").unwrap();
/// assert_eq!(orange, Rgb::new(255, 106, 0));
/// assert_eq!(orange.to_hex(), "#ff6a00");
///
/// // Out-of-range components are clamped rather than wrapped.
/// assert_eq!(Rgb::clamped(-20, 300, 128), Rgb::new(0, 255, 128));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black, also the result of every malformed permissive parse.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from wide integers, clamping each component to 0–255.
    #[must_use]
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /// Strict-shape parse: `None` wherever [`hex_to_rgb`] would fall back
    /// to black.
    ///
    /// The leading `#` is optional here. Use
    /// [`is_valid_hex`](crate::is_valid_hex) when it must be present.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as a tuple, in `(r, g, b)` order.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Component-wise midpoint with floor division.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn mid(self, other: Self) -> Self {
        let avg = |a: u8, b: u8| ((u16::from(a) + u16::from(b)) / 2) as u8;
        Self::new(avg(self.r, other.r), avg(self.g, other.g), avg(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

// ─── Free functions ──────────────────────────────────────────────────────────

/// Parse a hex color, degrading to black on anything malformed.
///
/// ```
/// use legible_color::{Rgb, hex_to_rgb};
///
/// assert_eq!(hex_to_rgb("#abc"), hex_to_rgb("#aabbcc"));
/// assert_eq!(hex_to_rgb("not a color"), Rgb::BLACK);
/// ```
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or(Rgb::BLACK)
}

/// Format three components as `#rrggbb`, clamping each to 0–255 first.
#[must_use]
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    Rgb::clamped(r, g, b).to_hex()
}

/// Single representative color for a two-stop gradient.
///
/// Both stops go through the permissive parser, so a malformed stop counts
/// as black.
#[must_use]
pub fn gradient_mid_color(start: &str, end: &str) -> String {
    hex_to_rgb(start).mid(hex_to_rgb(end)).to_hex()
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_channel(v: i32) -> u8 {
    // Safe: clamp guarantees 0 <= v <= 255 before truncation.
    v.clamp(0, 255) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
