//! WCAG contrast math and corrective-color search.
//!
//! Luminance and ratio follow WCAG 2.x exactly, including its 0.03928
//! linearization threshold. Ratios are rounded to two decimals before
//! any threshold comparison, so `4.495` counts as `4.5`.
//!
//! The corrective search walks the foreground's HSL lightness in steps of
//! 5 points, at most 50 points away from the original. It is a best-effort
//! hint: when nothing in range reaches the target the original foreground
//! comes back unchanged.

use tint_color::Rgb;
use tracing::debug;

/// Lightness step of the corrective search, in percentage points.
const SEARCH_STEP: i32 = 5;

/// Largest total lightness shift the corrective search will try.
const SEARCH_LIMIT: i32 = 50;

/// Linearize one 8-bit sRGB channel per WCAG.
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color per WCAG:
///   L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG contrast ratio between two colors, rounded to two decimals.
///
/// Returns a value in [1.0, 21.0] regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    let ratio = (lighter + 0.05) / (darker + 0.05);
    (ratio * 100.0).round() / 100.0
}

/// Search for a foreground that reaches `target_ratio` against `bg`.
///
/// Direction: darker while the current ratio is below target, lighter
/// otherwise. Returns the first candidate that meets the target, or `fg`
/// itself if none within ±50 lightness points does.
#[must_use]
pub fn suggest_corrective_color(fg: Rgb, bg: Rgb, target_ratio: f64) -> Rgb {
    let step = if contrast_ratio(fg, bg) < target_ratio {
        -SEARCH_STEP
    } else {
        SEARCH_STEP
    };

    let found = (1..=SEARCH_LIMIT / SEARCH_STEP)
        .map(|i| fg.adjust_lightness(step * i))
        .find(|candidate| contrast_ratio(*candidate, bg) >= target_ratio);

    if found.is_none() {
        debug!(%fg, %bg, target_ratio, "corrective search exhausted");
    }
    found.unwrap_or(fg)
}

/// Black or white text, whichever suits `background`.
#[must_use]
pub fn optimal_text_color(background: Rgb) -> Rgb {
    if relative_luminance(background) > 0.5 {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
