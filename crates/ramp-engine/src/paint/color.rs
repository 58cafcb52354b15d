use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Opaque 24-bit sRGB color.
///
/// Canonical text form is `#rrggbb` in lower case. Parsing accepts either
/// case. There is no alpha channel: every rasterized pixel is opaque.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Largest value accepted by [`from_u24`](Self::from_u24).
    pub const MAX_U24: u32 = 0x00FF_FFFF;

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Unpacks a 24-bit integer in hex reading order.
    ///
    /// The most significant byte is red, the middle byte green and the least
    /// significant byte blue, so `0x0000ff` is pure blue. Bits above 24 are
    /// ignored.
    #[inline]
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Parses `#rrggbb` (case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(s.to_string());

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        Ok(Self::from_u24(value))
    }

    /// Lower-case `#rrggbb`.
    #[inline]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Straight sRGB interpolation, `t` clamped to [0, 1].
    ///
    /// No gamma decoding happens here; this is the interpolation browsers
    /// use for `linear-gradient` by default.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f32 + (b as f32 - a as f32) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Color::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Straight RGBA bytes with full alpha.
    #[inline]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Largest per-channel absolute difference. Handy for tolerance checks.
    pub fn max_channel_delta(self, other: Color) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s.trim())
    }
}
