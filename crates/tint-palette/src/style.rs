//! Style profiles — the named saturation/lightness policies.
//!
//! A style shifts every step's saturation by a fixed boost and clamps
//! every step's lightness into a fixed band. The four profiles are
//! immutable process-wide constants selected by name.

use serde::{Deserialize, Serialize};

/// The palette style applied uniformly across every scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// No saturation shift, lightness 5–95.
    #[default]
    Modern,
    /// +15 saturation, lightness 10–90.
    Vibrant,
    /// −20 saturation, lightness 15–85.
    Muted,
    /// −30 saturation, lightness 20–80, achromatic neutrals.
    Minimal,
}

/// Saturation boost and lightness band for one [`Style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleProfile {
    /// Added to every step's saturation before clamping.
    pub saturation_boost: i32,
    /// Inclusive `(min, max)` lightness band, `min < max`.
    pub lightness_range: (i32, i32),
}

impl StyleProfile {
    /// Clamp a target lightness into this profile's band.
    #[must_use]
    pub const fn clamp_lightness(self, lightness: i32) -> i32 {
        let (min, max) = self.lightness_range;
        if lightness < min {
            min
        } else if lightness > max {
            max
        } else {
            lightness
        }
    }
}

const MODERN: StyleProfile = StyleProfile { saturation_boost: 0, lightness_range: (5, 95) };
const VIBRANT: StyleProfile = StyleProfile { saturation_boost: 15, lightness_range: (10, 90) };
const MUTED: StyleProfile = StyleProfile { saturation_boost: -20, lightness_range: (15, 85) };
const MINIMAL: StyleProfile = StyleProfile { saturation_boost: -30, lightness_range: (20, 80) };

impl Style {
    #[must_use]
    pub const fn profile(self) -> StyleProfile {
        match self {
            Self::Modern => MODERN,
            Self::Vibrant => VIBRANT,
            Self::Muted => MUTED,
            Self::Minimal => MINIMAL,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Vibrant => "vibrant",
            Self::Muted => "muted",
            Self::Minimal => "minimal",
        }
    }

    /// Parse a style from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Modern, Self::Vibrant, Self::Muted, Self::Minimal]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
