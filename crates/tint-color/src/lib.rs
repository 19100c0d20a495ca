// SPDX-License-Identifier: MIT
//
// tint-color — color space plumbing for the tint palette engine.
//
// Colors travel through tint as canonical `#rrggbb` strings. This crate
// owns every step between that string form and the integer HSL space the
// palette generator works in: validation, 3-digit expansion, hex ⇄ RGB ⇄
// HSL conversion, and the three HSL adjustments (lightness, saturation,
// hue rotation). It also pulls hex colors out of existing stylesheets.

pub mod adjust;
pub mod color;
pub mod error;
pub mod extract;

pub use color::{Hsl, Rgb};
pub use error::ColorError;
