// SPDX-License-Identifier: MIT
//
// tint color system — hex, 8-bit RGB, and whole-number HSL.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Conversion pipeline:
//
//   "#rgb" ──expand──▶ "#rrggbb" ↔ Rgb (u8 channels) ↔ Hsl (degrees / percent)
//
// HSL components are rounded to whole numbers on the way in, so a
// hex → HSL → hex round trip is lossy by a few units per channel. The
// arithmetic below keeps the textbook operation order (no fused
// multiply-add) so rounding matches the published formulas exactly.
#![allow(clippy::suboptimal_flops)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// A color as three 8-bit sRGB channels.
///
/// This is the canonical color value in tint. It prints and serializes as
/// a lowercase `#rrggbb` string and parses from `#rgb` or `#rrggbb`.
///
/// # Examples
///
/// ```
/// use tint_color::Rgb;
///
/// let blue: Rgb = "#3B82F6".parse().unwrap();
/// assert_eq!(blue.to_string(), "#3b82f6");
///
/// let short: Rgb = "#fa0".parse().unwrap();
/// assert_eq!(short, Rgb::new(0xff, 0xaa, 0x00));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` literal.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u32(v: u32) -> Self {
        Self::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// Create a color from floating point channels on the 0–255 scale.
    ///
    /// Each channel is rounded to the nearest integer and clamped.
    #[must_use]
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Parse a `#rgb` or `#rrggbb` string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColor`] if `s` is not `#` followed by
    /// exactly 3 or 6 hex digits.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        hex_to_rgb(&expand_hex(s)?)
    }

    /// Lowercase `#rrggbb` encoding.
    #[must_use]
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    /// The channels as an array, in `[r, g, b]` order.
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL space with whole-number components.
///
/// - `h`: hue in degrees, always in `[0, 360)`
/// - `s`: saturation percent, `[0, 100]`
/// - `l`: lightness percent, `[0, 100]`
///
/// An achromatic color has `s == 0` and, by convention, `h == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Build an HSL value from unconstrained components.
    ///
    /// The hue wraps into `[0, 360)` (negative values included) and
    /// saturation and lightness are clamped to `[0, 100]`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn new(h: i32, s: i32, l: i32) -> Self {
        Self {
            // rem_euclid(360) is in 0..360, so the cast is lossless.
            h: h.rem_euclid(360) as u16,
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        hsl_to_hex(self)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn clamp_percent(v: i32) -> u8 {
    let v = if v < 0 {
        0
    } else if v > 100 {
        100
    } else {
        v
    };
    v as u8
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

/// Whether `s` is `#` followed by exactly 3 or 6 hex digits.
#[must_use]
pub fn is_valid_hex(s: &str) -> bool {
    s.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6) && digits.bytes().all(|c| c.is_ascii_hexdigit())
    })
}

/// Normalize a valid hex color to lowercase `#rrggbb`.
///
/// `#rgb` has each digit doubled; `#rrggbb` is only lowercased.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColor`] if [`is_valid_hex`] rejects `s`.
pub fn expand_hex(s: &str) -> Result<String, ColorError> {
    if !is_valid_hex(s) {
        return Err(ColorError::invalid(s));
    }

    let digits = &s[1..];
    let mut out = String::with_capacity(7);
    out.push('#');
    if digits.len() == 3 {
        for c in digits.chars() {
            let c = c.to_ascii_lowercase();
            out.push(c);
            out.push(c);
        }
    } else {
        out.push_str(&digits.to_ascii_lowercase());
    }
    Ok(out)
}

/// Decode exactly six hex digits, with or without a leading `#`.
///
/// The 3-digit shorthand is not accepted here; run [`expand_hex`] first.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColor`] for any other length or for
/// non-hex characters.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
    if digits.len() != 6 {
        return Err(ColorError::invalid(hex));
    }

    let channel = |i: usize| parse_hex_byte(&digits[i..i + 2]).ok_or_else(|| ColorError::invalid(hex));
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Encode as lowercase `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
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

// ─── RGB ↔ HSL ───────────────────────────────────────────────────────────────

/// Convert 8-bit RGB to whole-number HSL.
///
/// The hue comes from whichever channel is largest (red wins ties, then
/// green), giving a fraction in `[0, 1)` that is scaled to degrees and
/// rounded. A rounded hue of 360 wraps to 0.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if rgb.r == rgb.g && rgb.g == rgb.b {
        return Hsl::new(0, 0, round(l * 100.0));
    }

    let diff = max - min;
    let s = if l > 0.5 {
        diff / (2.0 - max - min)
    } else {
        diff / (max + min)
    };

    let h = if rgb.r >= rgb.g && rgb.r >= rgb.b {
        ((g - b) / diff + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if rgb.g >= rgb.b {
        ((b - r) / diff + 2.0) / 6.0
    } else {
        ((r - g) / diff + 4.0) / 6.0
    };

    Hsl::new(round(h * 360.0), round(s * 100.0), round(l * 100.0))
}

/// Convert whole-number HSL to 8-bit RGB.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = f64::from(hsl.h) / 360.0;
    let s = f64::from(hsl.s) / 100.0;
    let l = f64::from(hsl.l) / 100.0;

    if hsl.s == 0 {
        return Rgb::from_channels(l * 255.0, l * 255.0, l * 255.0);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::from_channels(
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

/// Parse and convert in one step. Accepts `#rrggbb` (or bare digits).
///
/// # Errors
///
/// Propagates [`ColorError::InvalidColor`] from [`hex_to_rgb`].
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

/// One channel of the HSL → RGB piecewise function.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn round(v: f64) -> i32 {
    // All callers pass values in 0.0..=360.0.
    v.round() as i32
}

/// Round a 0–255 float to the nearest u8, clamping out-of-range input.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
