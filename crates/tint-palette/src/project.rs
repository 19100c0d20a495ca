//! Project-specific semantic colors.
//!
//! Each [`ProjectType`] carries a fixed, ordered table of named roles.
//! An entry is either a literal color or a [`Tone`] derived from the
//! project's primary color. Caller-supplied custom needs are appended
//! after the table, colored by keyword or by a hash-derived lightness
//! nudge of the primary.

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use tint_color::Rgb;

/// Kind of product a palette is being extended for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Ecommerce,
    Dashboard,
    Webrtc,
    Blog,
    /// No built-in table; only custom needs.
    Custom,
}

impl ProjectType {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ecommerce => "ecommerce",
            Self::Dashboard => "dashboard",
            Self::Webrtc => "webrtc",
            Self::Blog => "blog",
            Self::Custom => "custom",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Ecommerce, Self::Dashboard, Self::Webrtc, Self::Blog, Self::Custom]
    }

    const fn table(self) -> &'static [(&'static str, Tone)] {
        match self {
            Self::Ecommerce => ECOMMERCE,
            Self::Dashboard => DASHBOARD,
            Self::Webrtc => WEBRTC,
            Self::Blog => BLOG,
            Self::Custom => &[],
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tones
// ---------------------------------------------------------------------------

/// How a role's color is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// A literal color, independent of the primary.
    Fixed(Rgb),
    /// The primary itself.
    Primary,
    /// The primary with lightness shifted by this many points.
    Lightness(i32),
    /// The primary with saturation shifted by this many points.
    Saturation(i32),
    /// The primary rotated by this many degrees.
    Hue(i32),
}

impl Tone {
    /// Resolve against `primary`.
    #[must_use]
    pub fn apply(self, primary: Rgb) -> Rgb {
        match self {
            Self::Fixed(color) => color,
            Self::Primary => primary,
            Self::Lightness(delta) => primary.adjust_lightness(delta),
            Self::Saturation(delta) => primary.adjust_saturation(delta),
            Self::Hue(degrees) => primary.rotate_hue(degrees),
        }
    }
}

const fn hex(value: u32) -> Tone {
    Tone::Fixed(Rgb::from_u32(value))
}

const ECOMMERCE: &[(&str, Tone)] = &[
    ("price-original", Tone::Lightness(-10)),
    ("price-discount", hex(0xdc2626)),
    ("price-sale", hex(0xef4444)),
    ("stock-high", hex(0x22c55e)),
    ("stock-medium", hex(0xf59e0b)),
    ("stock-low", hex(0xef4444)),
    ("stock-out", hex(0x6b7280)),
    ("shipping-free", hex(0x059669)),
    ("shipping-express", hex(0x8b5cf6)),
    ("shipping-standard", hex(0x6b7280)),
    ("product-new", hex(0x3b82f6)),
    ("product-bestseller", hex(0xf59e0b)),
    ("product-featured", Tone::Hue(30)),
    ("secure-payment", hex(0x22c55e)),
    ("payment-pending", hex(0xf59e0b)),
    ("payment-failed", hex(0xdc2626)),
];

const DASHBOARD: &[(&str, Tone)] = &[
    ("metric-positive", hex(0x22c55e)),
    ("metric-negative", hex(0xef4444)),
    ("metric-neutral", hex(0x6b7280)),
    ("metric-trending-up", hex(0x059669)),
    ("metric-trending-down", hex(0xdc2626)),
    ("chart-line-1", Tone::Primary),
    ("chart-line-2", Tone::Hue(60)),
    ("chart-line-3", Tone::Hue(120)),
    ("chart-line-4", Tone::Hue(180)),
    ("chart-line-5", Tone::Hue(240)),
    ("status-online", hex(0x22c55e)),
    ("status-offline", hex(0x6b7280)),
    ("status-busy", hex(0xef4444)),
    ("status-away", hex(0xf59e0b)),
    ("notification-high", hex(0xdc2626)),
    ("notification-medium", hex(0xf59e0b)),
    ("notification-low", hex(0x3b82f6)),
    ("badge-new", Tone::Saturation(20)),
    ("badge-updated", hex(0x3b82f6)),
];

const WEBRTC: &[(&str, Tone)] = &[
    ("camera-active", hex(0x22c55e)),
    ("camera-inactive", hex(0xef4444)),
    ("camera-loading", hex(0xf59e0b)),
    ("mic-active", hex(0x22c55e)),
    ("mic-inactive", hex(0xef4444)),
    ("mic-muted", hex(0x6b7280)),
    ("connection-excellent", hex(0x22c55e)),
    ("connection-good", hex(0x65a30d)),
    ("connection-fair", hex(0xf59e0b)),
    ("connection-poor", hex(0xef4444)),
    ("connection-lost", hex(0x991b1b)),
    ("recording-active", hex(0xdc2626)),
    ("recording-paused", hex(0xf59e0b)),
    ("recording-stopped", hex(0x6b7280)),
    ("screen-sharing", hex(0x8b5cf6)),
    ("screen-request", Tone::Lightness(-15)),
    ("participant-host", Tone::Saturation(30)),
    ("participant-speaking", hex(0x22c55e)),
    ("participant-muted", hex(0x6b7280)),
];

const BLOG: &[(&str, Tone)] = &[
    ("category-tech", Tone::Primary),
    ("category-design", Tone::Hue(60)),
    ("category-business", Tone::Hue(120)),
    ("category-personal", Tone::Hue(180)),
    ("tag-featured", Tone::Saturation(20)),
    ("tag-trending", hex(0xf59e0b)),
    ("tag-new", hex(0x3b82f6)),
    ("post-published", hex(0x22c55e)),
    ("post-draft", hex(0x6b7280)),
    ("post-scheduled", hex(0xf59e0b)),
    ("post-archived", hex(0x9ca3af)),
    ("like-active", hex(0xef4444)),
    ("bookmark-active", hex(0xf59e0b)),
    ("share-active", hex(0x3b82f6)),
    ("highlight-quote", Tone::Lightness(30)),
    ("highlight-code", hex(0xf3f4f6)),
    ("highlight-important", hex(0xfef3c7)),
];

/// Keyword groups for custom needs, checked in order.
const NEED_KEYWORDS: &[(&[&str], u32)] = &[
    (&["danger", "error", "delete"], 0xef4444),
    (&["success", "complete", "done"], 0x22c55e),
    (&["warning", "caution", "pending"], 0xf59e0b),
    (&["info", "notice", "blue"], 0x3b82f6),
    (&["purple", "premium", "special"], 0x8b5cf6),
];

// ---------------------------------------------------------------------------
// ProjectColors
// ---------------------------------------------------------------------------

/// Insertion-ordered `name -> color` mapping with unique names.
///
/// Serializes as a JSON object in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectColors {
    entries: Vec<(String, Rgb)>,
}

impl ProjectColors {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add `name` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, name: impl Into<String>, color: Rgb) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.entries.push((name, color));
        true
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    #[must_use]
    pub fn contains_color(&self, color: Rgb) -> bool {
        self.entries.iter().any(|&(_, c)| c == color)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.entries.iter().find(|(n, _)| n == name).map(|&(_, c)| c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgb)> + '_ {
        self.entries.iter().map(|(n, c)| (n.as_str(), *c))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Rgb)> for ProjectColors {
    fn from_iter<I: IntoIterator<Item = (S, Rgb)>>(iter: I) -> Self {
        let mut colors = Self::new();
        for (name, color) in iter {
            colors.insert(name, color);
        }
        colors
    }
}

impl Serialize for ProjectColors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, color) in &self.entries {
            map.serialize_entry(name, color)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Role colors for `project_type` plus one entry per custom need.
///
/// Needs whose name is already in the table are ignored.
#[must_use]
pub fn generate_project_colors(
    project_type: ProjectType,
    primary: Rgb,
    custom_needs: &[String],
) -> ProjectColors {
    let mut colors: ProjectColors = project_type
        .table()
        .iter()
        .map(|&(name, tone)| (name, tone.apply(primary)))
        .collect();

    for need in custom_needs {
        if !colors.contains(need) {
            colors.insert(need.clone(), color_for_need(primary, need));
        }
    }
    colors
}

/// Color for a free-form need: keyword match first, else a lightness
/// nudge of `primary` in `[-10, 10]` keyed on the need's text.
#[must_use]
pub fn color_for_need(primary: Rgb, need: &str) -> Rgb {
    let lower = need.to_lowercase();
    NEED_KEYWORDS
        .iter()
        .find(|(words, _)| words.iter().any(|w| lower.contains(w)))
        .map_or_else(
            || primary.adjust_lightness(jitter(&lower)),
            |&(_, color)| Rgb::from_u32(color),
        )
}

/// Stable offset in `[-10, 10]` from a 32-bit FNV-1a hash.
fn jitter(key: &str) -> i32 {
    let hash = key
        .bytes()
        .fold(0x811c_9dc5_u32, |h, b| (h ^ u32::from(b)).wrapping_mul(0x0100_0193));
    // hash % 21 < 21, so the cast is lossless.
    #[allow(clippy::cast_possible_wrap)]
    let offset = (hash % 21) as i32;
    offset - 10
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
