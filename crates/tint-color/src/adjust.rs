// SPDX-License-Identifier: MIT
//
// HSL adjustments. Each one decodes to HSL, moves a single component,
// and re-encodes. Out-of-range deltas are well defined: lightness and
// saturation clamp to [0, 100], hue wraps around the color wheel.

use crate::color::{Hsl, Rgb};

impl Rgb {
    /// Shift lightness by `delta` percentage points (clamped to 0–100).
    #[must_use]
    pub fn adjust_lightness(self, delta: i32) -> Self {
        let hsl = self.to_hsl();
        Hsl::new(i32::from(hsl.h), i32::from(hsl.s), i32::from(hsl.l).saturating_add(delta)).to_rgb()
    }

    /// Shift saturation by `delta` percentage points (clamped to 0–100).
    #[must_use]
    pub fn adjust_saturation(self, delta: i32) -> Self {
        let hsl = self.to_hsl();
        Hsl::new(i32::from(hsl.h), i32::from(hsl.s).saturating_add(delta), i32::from(hsl.l)).to_rgb()
    }

    /// Rotate the hue by `degrees`, wrapping into `[0, 360)`.
    #[must_use]
    pub fn rotate_hue(self, degrees: i32) -> Self {
        let hsl = self.to_hsl();
        Hsl::new(i32::from(hsl.h) + degrees.rem_euclid(360), i32::from(hsl.s), i32::from(hsl.l)).to_rgb()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(hex: &str) -> Rgb {
        hex.parse().unwrap()
    }

    #[test]
    fn darken_blue() {
        assert_eq!(rgb("#3b82f6").adjust_lightness(-10).to_hex(), "#0b64f4");
    }

    #[test]
    fn lightness_clamps() {
        assert_eq!(rgb("#3b82f6").adjust_lightness(200), Rgb::WHITE);
        assert_eq!(rgb("#808080").adjust_lightness(-200), Rgb::BLACK);
    }

    #[test]
    fn saturation_clamps() {
        assert_eq!(rgb("#3b82f6").adjust_saturation(-200).to_hex(), "#999999");
        assert_eq!(rgb("#c86432").adjust_saturation(100).to_hex(), "#fa5300");
    }

    #[test]
    fn rotate_hue_positive() {
        assert_eq!(rgb("#3b82f6").rotate_hue(30).to_hex(), "#523cf6");
        assert_eq!(rgb("#3b82f6").rotate_hue(180).to_hex(), "#f6af3c");
    }

    #[test]
    fn rotate_hue_wraps_past_360() {
        let rotated = rgb("#ff0000").rotate_hue(350);
        assert_eq!(rotated.to_hsl().h, 350);
        assert_eq!(rotated.to_hex(), "#ff002b");
        assert_eq!(rgb("#3b82f6").rotate_hue(390), rgb("#3b82f6").rotate_hue(30));
    }

    #[test]
    fn rotate_hue_negative_wraps() {
        assert_eq!(rgb("#ff0000").rotate_hue(-30).to_hsl().h, 330);
        assert_eq!(rgb("#3b82f6").rotate_hue(-217).to_hex(), "#f63c3c");
    }

    #[test]
    fn extreme_deltas_clamp_and_wrap() {
        assert_eq!(rgb("#808080").adjust_lightness(i32::MAX), Rgb::WHITE);
        assert_eq!(rgb("#808080").adjust_lightness(i32::MIN), Rgb::BLACK);
        assert_eq!(rgb("#c86432").adjust_saturation(i32::MAX), rgb("#c86432").adjust_saturation(100));
        assert_eq!(rgb("#c86432").adjust_saturation(i32::MIN).to_hsl().s, 0);
        // i32::MAX ≡ 127 and i32::MIN ≡ 232 (mod 360)
        assert_eq!(rgb("#00ff00").rotate_hue(i32::MAX), rgb("#00ff00").rotate_hue(127));
        assert_eq!(rgb("#00ff00").rotate_hue(i32::MIN), rgb("#00ff00").rotate_hue(-128));
    }

    #[test]
    fn achromatic_rotation_is_identity() {
        assert_eq!(rgb("#808080").rotate_hue(120), rgb("#808080"));
    }
}
