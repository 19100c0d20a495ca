//! 10-step tonal scales — the core of palette generation.
//!
//! A scale keeps the seed's hue and walks lightness from near-white
//! (step 50) to near-black (step 900). Saturation is eased off on the
//! light end and pushed on the dark end. Both adjustments come from one
//! static step table; the style profile then adds its saturation boost
//! and clamps lightness into its band.
//!
//! ```text
//! step        50   100  200  300  400  500  600  700  800  900
//! lightness   95   90   80   70   60   50   40   30   20   10
//! sat. delta  -40  -30  -20  -10  -5   0    +5   +10  +15  +20
//! ```

use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tint_color::{ColorError, Hsl, Rgb};

use crate::style::Style;

/// The ten step keys of every scale, lightest first.
pub const STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Hue of the neutral (gray) scale: a slight warm tint.
pub const NEUTRAL_HUE: i32 = 30;

/// Per-step target lightness and saturation delta.
#[derive(Debug, Clone, Copy)]
struct StepTone {
    lightness: i32,
    saturation_delta: i32,
}

/// Indexed in the same order as [`STEPS`].
const STEP_TABLE: [StepTone; 10] = [
    StepTone { lightness: 95, saturation_delta: -40 },
    StepTone { lightness: 90, saturation_delta: -30 },
    StepTone { lightness: 80, saturation_delta: -20 },
    StepTone { lightness: 70, saturation_delta: -10 },
    StepTone { lightness: 60, saturation_delta: -5 },
    StepTone { lightness: 50, saturation_delta: 0 },
    StepTone { lightness: 40, saturation_delta: 5 },
    StepTone { lightness: 30, saturation_delta: 10 },
    StepTone { lightness: 20, saturation_delta: 15 },
    StepTone { lightness: 10, saturation_delta: 20 },
];

// ---------------------------------------------------------------------------
// ColorScale
// ---------------------------------------------------------------------------

/// An ordered mapping from the ten [`STEPS`] to colors.
///
/// Serializes as a JSON object keyed `"50"` … `"900"` in step order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScale {
    colors: [Rgb; 10],
}

impl ColorScale {
    /// Encode ten HSL tones (in [`STEPS`] order) into a scale.
    #[must_use]
    pub fn from_tones(tones: [Hsl; 10]) -> Self {
        Self {
            colors: tones.map(Hsl::to_rgb),
        }
    }

    /// Build a scale around `seed` under `style`.
    #[must_use]
    pub fn from_seed(seed: Rgb, style: Style) -> Self {
        Self::from_tones(scale_tones(seed.to_hsl(), style))
    }

    /// The color at `step`, or `None` for a key outside [`STEPS`].
    #[must_use]
    pub fn get(&self, step: u16) -> Option<Rgb> {
        STEPS.iter().position(|&s| s == step).map(|i| self.colors[i])
    }

    /// `(step, color)` pairs, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (u16, Rgb)> + '_ {
        STEPS.iter().copied().zip(self.colors.iter().copied())
    }
}

impl Index<u16> for ColorScale {
    type Output = Rgb;

    /// # Panics
    ///
    /// Panics if `step` is not one of [`STEPS`].
    fn index(&self, step: u16) -> &Rgb {
        let i = STEPS
            .iter()
            .position(|&s| s == step)
            .unwrap_or_else(|| panic!("no step {step} in a color scale"));
        &self.colors[i]
    }
}

impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(STEPS.len()))?;
        for (step, color) in self.iter() {
            map.serialize_entry(&step.to_string(), &color)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// The ten HSL tones of a scale built from `base` under `style`.
///
/// Every tone keeps `base.h`. Saturation is
/// `clamp(base.s + boost + step_delta, 0, 100)`; lightness is the step's
/// target clamped into the style's band.
#[must_use]
pub fn scale_tones(base: Hsl, style: Style) -> [Hsl; 10] {
    let profile = style.profile();
    STEP_TABLE.map(|tone| {
        Hsl::new(
            i32::from(base.h),
            i32::from(base.s) + profile.saturation_boost + tone.saturation_delta,
            profile.clamp_lightness(tone.lightness),
        )
    })
}

/// The ten HSL tones of the neutral scale under `style`.
///
/// Hue is fixed at [`NEUTRAL_HUE`]; saturation is 0 for
/// [`Style::Minimal`] and 2 otherwise, at every step.
#[must_use]
pub fn neutral_tones(style: Style) -> [Hsl; 10] {
    let profile = style.profile();
    let saturation = if style == Style::Minimal { 0 } else { 2 };
    STEP_TABLE.map(|tone| Hsl::new(NEUTRAL_HUE, saturation, profile.clamp_lightness(tone.lightness)))
}

/// Generate a 10-step scale from a `#rgb` / `#rrggbb` seed.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColor`] if `seed` is not a valid hex color.
pub fn generate_color_scale(seed: &str, style: Style) -> Result<ColorScale, ColorError> {
    let seed = Rgb::from_hex(seed)?;
    Ok(ColorScale::from_seed(seed, style))
}

/// Generate the warm-gray neutral scale. No seed is involved.
#[must_use]
pub fn generate_neutral_scale(style: Style) -> ColorScale {
    ColorScale::from_tones(neutral_tones(style))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hexes(scale: &ColorScale) -> Vec<String> {
        scale.iter().map(|(_, c)| c.to_hex()).collect()
    }

    #[test]
    fn blue_modern_scale() {
        let scale = generate_color_scale("#3b82f6", Style::Modern).unwrap();
        assert_eq!(
            hexes(&scale),
            vec![
                "#ecf1f9", "#d6e2f5", "#a8c4f0", "#75a4f0", "#4185f1",
                "#0b64f4", "#044fc8", "#003b99", "#002766", "#001433",
            ]
        );
    }

    #[test]
    fn blue_vibrant_scale() {
        let scale = generate_color_scale("#3b82f6", Style::Vibrant).unwrap();
        assert_eq!(scale[50].to_hex(), "#d5e2f6");
        assert_eq!(scale[500].to_hex(), "#0062ff");
        assert_eq!(scale[900].to_hex(), "#001433");
    }

    #[test]
    fn short_seed_is_expanded() {
        let short = generate_color_scale("#38f", Style::Modern).unwrap();
        let long = generate_color_scale("#3388ff", Style::Modern).unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn invalid_seed_names_the_input() {
        let err = generate_color_scale("#3b82f", Style::Modern).unwrap_err();
        assert_eq!(err.to_string(), "invalid hex color: #3b82f");
        assert!(generate_color_scale("blue", Style::Modern).is_err());
    }

    #[test]
    fn step_500_keeps_seed_hue_and_boosted_saturation() {
        for &style in Style::all() {
            let base = Hsl::new(217, 91, 60);
            let tone = scale_tones(base, style)[5];
            let boost = style.profile().saturation_boost;
            assert_eq!(tone.h, 217);
            assert_eq!(i32::from(tone.s), (91 + boost).clamp(0, 100), "{style:?}");
            assert_eq!(tone.l, 50);
        }
    }

    #[test]
    fn step_500_hue_survives_encoding() {
        let scale = generate_color_scale("#3b82f6", Style::Modern).unwrap();
        assert_eq!(scale[500].to_hsl(), Hsl::new(217, 91, 50));
    }

    #[test]
    fn lightness_never_increases_with_step() {
        for r in (0..=255u8).step_by(51) {
            for g in (0..=255u8).step_by(51) {
                for b in (0..=255u8).step_by(51) {
                    for &style in Style::all() {
                        let scale = ColorScale::from_seed(Rgb::new(r, g, b), style);
                        let lightness: Vec<u8> = scale.iter().map(|(_, c)| c.to_hsl().l).collect();
                        assert!(
                            lightness.windows(2).all(|w| w[0] >= w[1]),
                            "{style:?} from {}: {lightness:?}",
                            Rgb::new(r, g, b)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn tones_clamp_lightness_into_style_band() {
        let tones = scale_tones(Hsl::new(0, 50, 50), Style::Minimal);
        assert_eq!(tones[0].l, 80);
        assert_eq!(tones[1].l, 80);
        assert_eq!(tones[9].l, 20);
    }

    #[test]
    fn saturation_clamps_at_both_ends() {
        let vivid = scale_tones(Hsl::new(10, 100, 50), Style::Vibrant);
        assert_eq!(vivid[9].s, 100);
        let gray = scale_tones(Hsl::new(0, 0, 50), Style::Minimal);
        assert!(gray.iter().all(|t| t.s == 0));
    }

    #[test]
    fn neutral_tones_are_warm_gray() {
        for &style in Style::all() {
            for tone in neutral_tones(style) {
                assert_eq!(tone.h, 30);
                assert_eq!(tone.s, if style == Style::Minimal { 0 } else { 2 });
            }
        }
    }

    #[test]
    fn neutral_modern_scale() {
        assert_eq!(
            hexes(&generate_neutral_scale(Style::Modern)),
            vec![
                "#f3f2f2", "#e6e6e5", "#cdcccb", "#b4b3b1", "#9b9997",
                "#82807d", "#686664", "#4e4d4b", "#343332", "#1a1a19",
            ]
        );
    }

    #[test]
    fn neutral_minimal_is_pure_gray() {
        let scale = generate_neutral_scale(Style::Minimal);
        assert_eq!(scale[50].to_hex(), "#cccccc");
        assert_eq!(scale[500].to_hex(), "#808080");
        assert_eq!(scale[900].to_hex(), "#333333");
    }

    #[test]
    fn get_and_index_agree() {
        let scale = generate_neutral_scale(Style::Modern);
        for step in STEPS {
            assert_eq!(scale.get(step), Some(scale[step]));
        }
        assert_eq!(scale.get(950), None);
    }

    #[test]
    #[should_panic(expected = "no step 450")]
    fn index_unknown_step_panics() {
        let _ = generate_neutral_scale(Style::Modern)[450];
    }

    #[test]
    fn serializes_in_step_order() {
        let json = serde_json::to_string(&generate_neutral_scale(Style::Minimal)).unwrap();
        assert!(json.starts_with(r##"{"50":"#cccccc","100":"#cccccc","200":"#cccccc""##), "{json}");
        assert!(json.ends_with(r##""900":"#333333"}"##), "{json}");
    }
}
