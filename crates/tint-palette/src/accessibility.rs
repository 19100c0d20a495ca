//! WCAG accessibility checks for color pairs and whole palettes.
//!
//! | Level | Normal text | Large text |
//! |-------|-------------|------------|
//! | AA    | 4.5:1       | 3.0:1      |
//! | AAA   | 7.0:1       | 4.5:1      |
//!
//! `wcag_aa` / `wcag_aaa` in a result are always judged against the
//! normal-text column. Only `passes` and the recommendation use the
//! threshold selected by the requested level and text size.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tint_color::Rgb;
use tracing::debug;

use crate::contrast::{contrast_ratio, suggest_corrective_color};
use crate::palette::BasePalette;

pub const AA_NORMAL: f64 = 4.5;
pub const AA_LARGE: f64 = 3.0;
pub const AAA_NORMAL: f64 = 7.0;
pub const AAA_LARGE: f64 = 4.5;

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WcagLevel {
    #[default]
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    /// Minimum contrast ratio for this level.
    #[must_use]
    pub const fn threshold(self, is_large_text: bool) -> f64 {
        match (self, is_large_text) {
            (Self::Aa, false) => AA_NORMAL,
            (Self::Aa, true) => AA_LARGE,
            (Self::Aaa, false) => AAA_NORMAL,
            (Self::Aaa, true) => AAA_LARGE,
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        })
    }
}

/// Outcome of checking one foreground/background pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibilityCheck {
    /// Contrast ratio rounded to two decimals.
    pub contrast_ratio: f64,
    /// Meets 4.5:1 (AA, normal text).
    pub wcag_aa: bool,
    /// Meets 7.0:1 (AAA, normal text).
    pub wcag_aaa: bool,
    /// Meets the threshold for the requested level and text size.
    pub passes: bool,
    /// Corrected foreground from the lightness search, when `passes` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_foreground: Option<Rgb>,
    /// Human-readable advice, when `passes` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Check `fg` text on `bg` against `level`.
///
/// When the selected threshold is missed, the corrective search runs
/// against that same threshold and its result is named in the
/// recommendation. The suggestion is best-effort and may equal `fg`.
#[must_use]
pub fn validate_accessibility(
    fg: Rgb,
    bg: Rgb,
    level: WcagLevel,
    is_large_text: bool,
) -> AccessibilityCheck {
    let ratio = contrast_ratio(fg, bg);
    let threshold = level.threshold(is_large_text);
    let passes = ratio >= threshold;

    let (suggested_foreground, recommendation) = if passes {
        (None, None)
    } else {
        let suggested = suggest_corrective_color(fg, bg, threshold);
        debug!(%fg, %bg, ratio, threshold, %suggested, "contrast below threshold");
        let advice = format!(
            "Contrast ratio {ratio}:1 is below the required {threshold}:1. \
             Change the text color to {suggested} or adjust the background."
        );
        (Some(suggested), Some(advice))
    };

    AccessibilityCheck {
        contrast_ratio: ratio,
        wcag_aa: ratio >= AA_NORMAL,
        wcag_aaa: ratio >= AAA_NORMAL,
        passes,
        suggested_foreground,
        recommendation,
    }
}

/// Check the seven common role combinations of a palette at AA level.
#[must_use]
pub fn validate_palette_accessibility(
    palette: &BasePalette,
) -> BTreeMap<&'static str, AccessibilityCheck> {
    let white = Rgb::WHITE;
    let combinations = [
        ("primary-on-white", palette.primary[500], white),
        ("white-on-primary", white, palette.primary[500]),
        ("primary-dark-on-white", palette.primary[700], white),
        ("neutral-text-on-white", palette.neutral[700], white),
        ("muted-text-on-white", palette.neutral[500], white),
        ("error-on-white", palette.error[500], white),
        ("success-on-white", palette.success[500], white),
    ];

    combinations
        .into_iter()
        .map(|(name, fg, bg)| (name, validate_accessibility(fg, bg, WcagLevel::Aa, false)))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
