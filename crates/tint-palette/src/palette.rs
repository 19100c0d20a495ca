//! Base palette composition — primary, neutral, and four status scales.
//!
//! Every scale in one palette is generated under the same style, so the
//! saturation boost and lightness band are applied uniformly.

use serde::{Deserialize, Serialize};
use tint_color::{ColorError, Rgb};

use crate::scale::{ColorScale, generate_neutral_scale};
use crate::style::Style;

/// Canonical seed of the `success` scale.
pub const SUCCESS_SEED: Rgb = Rgb::from_u32(0x22c55e);
/// Canonical seed of the `error` scale.
pub const ERROR_SEED: Rgb = Rgb::from_u32(0xef4444);
/// Canonical seed of the `warning` scale.
pub const WARNING_SEED: Rgb = Rgb::from_u32(0xf59e0b);
/// Canonical seed of the `info` scale.
pub const INFO_SEED: Rgb = Rgb::from_u32(0x3b82f6);

/// The four status scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusScales {
    pub success: ColorScale,
    pub error: ColorScale,
    pub warning: ColorScale,
    pub info: ColorScale,
}

/// The six named scales of a generated palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BasePalette {
    pub primary: ColorScale,
    pub neutral: ColorScale,
    pub success: ColorScale,
    pub error: ColorScale,
    pub warning: ColorScale,
    pub info: ColorScale,
}

impl BasePalette {
    /// Compose the six scales for an already-parsed seed.
    #[must_use]
    pub fn from_seed(seed: Rgb, style: Style) -> Self {
        let status = generate_status_colors(style);
        Self {
            primary: ColorScale::from_seed(seed, style),
            neutral: generate_neutral_scale(style),
            success: status.success,
            error: status.error,
            warning: status.warning,
            info: status.info,
        }
    }

    /// `(name, scale)` pairs in declaration order.
    #[must_use]
    pub const fn scales(&self) -> [(&'static str, &ColorScale); 6] {
        [
            ("primary", &self.primary),
            ("neutral", &self.neutral),
            ("success", &self.success),
            ("error", &self.error),
            ("warning", &self.warning),
            ("info", &self.info),
        ]
    }
}

/// Scales for the four fixed status seeds under `style`.
#[must_use]
pub fn generate_status_colors(style: Style) -> StatusScales {
    StatusScales {
        success: ColorScale::from_seed(SUCCESS_SEED, style),
        error: ColorScale::from_seed(ERROR_SEED, style),
        warning: ColorScale::from_seed(WARNING_SEED, style),
        info: ColorScale::from_seed(INFO_SEED, style),
    }
}

/// Compose a full palette from a brand seed.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColor`] if `seed` is not a valid hex
/// color. No partial palette is produced.
pub fn generate_base_palette(seed: &str, style: Style) -> Result<BasePalette, ColorError> {
    let seed = Rgb::from_hex(seed)?;
    Ok(BasePalette::from_seed(seed, style))
}

// ---------------------------------------------------------------------------
// Secondary color
// ---------------------------------------------------------------------------

/// Color-wheel relationship used to pick a secondary color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// +30°
    #[default]
    Analogous,
    /// +180°
    Complementary,
    /// +120°
    Triadic,
}

impl Scheme {
    #[must_use]
    pub const fn degrees(self) -> i32 {
        match self {
            Self::Analogous => 30,
            Self::Complementary => 180,
            Self::Triadic => 120,
        }
    }
}

/// The seed rotated around the hue wheel by `scheme`'s offset.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColor`] if `seed` is not a valid hex color.
pub fn suggest_secondary_color(seed: &str, scheme: Scheme) -> Result<Rgb, ColorError> {
    Ok(Rgb::from_hex(seed)?.rotate_hue(scheme.degrees()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{STEPS, generate_color_scale};
    use pretty_assertions::assert_eq;

    #[test]
    fn palette_primary_follows_seed() {
        let palette = generate_base_palette("#3b82f6", Style::Modern).unwrap();
        let seed_hue = "#3b82f6".parse::<Rgb>().unwrap().to_hsl().h;
        assert_eq!(palette.primary[500].to_hsl().h, seed_hue);
        assert_eq!(palette.primary, generate_color_scale("#3b82f6", Style::Modern).unwrap());
    }

    #[test]
    fn palette_status_scales_use_canonical_seeds() {
        let palette = generate_base_palette("#8b5cf6", Style::Modern).unwrap();
        assert_eq!(palette.success[500].to_hex(), "#25da67");
        assert_eq!(palette.error[500].to_hex(), "#eb1414");
        assert_eq!(palette.warning[500].to_hex(), "#f59f0a");
        assert_eq!(palette.info, ColorScale::from_seed(INFO_SEED, Style::Modern));
    }

    #[test]
    fn palette_neutral_is_style_dependent_gray() {
        let modern = generate_base_palette("#3b82f6", Style::Modern).unwrap();
        let minimal = generate_base_palette("#3b82f6", Style::Minimal).unwrap();
        assert_eq!(modern.neutral[500].to_hex(), "#82807d");
        assert_eq!(minimal.neutral[500].to_hex(), "#808080");
    }

    #[test]
    fn palette_is_deterministic() {
        let a = generate_base_palette("#c86432", Style::Muted).unwrap();
        let b = generate_base_palette("#C86432", Style::Muted).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn palette_rejects_invalid_seed() {
        let err = generate_base_palette("#12345", Style::Modern).unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidColor {
                input: "#12345".to_owned()
            }
        );
    }

    #[test]
    fn every_scale_shares_the_style_band() {
        let palette = generate_base_palette("#3b82f6", Style::Minimal).unwrap();
        for (name, scale) in palette.scales() {
            for step in STEPS {
                let l = scale[step].to_hsl().l;
                assert!((19..=81).contains(&l), "{name}[{step}] lightness {l}");
            }
        }
    }

    #[test]
    fn palette_serializes_six_named_scales() {
        let palette = generate_base_palette("#3b82f6", Style::Modern).unwrap();
        let json = serde_json::to_value(palette).unwrap();
        let names: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(names.len(), 6);
        assert_eq!(json["primary"]["500"], "#0b64f4");
        assert_eq!(json["neutral"]["50"], "#f3f2f2");
    }

    #[test]
    fn secondary_colors() {
        let analogous = suggest_secondary_color("#3b82f6", Scheme::default()).unwrap();
        assert_eq!(analogous.to_hex(), "#523cf6");
        let complementary = suggest_secondary_color("#3b82f6", Scheme::Complementary).unwrap();
        assert_eq!(complementary.to_hex(), "#f6af3c");
        let triadic = suggest_secondary_color("#3b82f6", Scheme::Triadic).unwrap();
        assert_eq!(triadic.to_hex(), "#f63c83");
    }

    #[test]
    fn secondary_rejects_invalid_seed() {
        assert!(suggest_secondary_color("nope", Scheme::Triadic).is_err());
    }
}
