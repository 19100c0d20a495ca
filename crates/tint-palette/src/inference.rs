//! Keyword-driven color inference from free text.
//!
//! Words are matched against three tiers, first hit wins:
//!
//! 1. a direct pattern table (`"error"` → red, `"calm"` → cyan, ...);
//! 2. broad semantic categories (positive, negative, warning, info, special);
//! 3. domain patterns that derive a tone from the primary color
//!    (payments darken it, data rotates it to the complement, ...).
//!
//! All matching is substring-based, so `"errors"` and `"newsletter"` both
//! hit a pattern.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tint_color::Rgb;

use crate::project::{ProjectColors, Tone};

/// Words considered per input text.
pub const MAX_WORDS: usize = 50;

const STOP_WORDS: &[&str] = &["the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by"];

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new("[a-z]{2,}").expect("valid word regex"));

/// Direct patterns, checked in order.
const COLOR_PATTERNS: &[(&str, u32)] = &[
    ("danger", 0xdc2626),
    ("error", 0xef4444),
    ("warning", 0xf59e0b),
    ("success", 0x22c55e),
    ("info", 0x3b82f6),
    ("love", 0xec4899),
    ("happy", 0xfbbf24),
    ("calm", 0x06b6d4),
    ("energy", 0xf97316),
    ("trust", 0x3b82f6),
    ("premium", 0x8b5cf6),
    ("discount", 0xdc2626),
    ("new", 0x22c55e),
    ("popular", 0xf59e0b),
    ("featured", 0x8b5cf6),
    ("active", 0x22c55e),
    ("inactive", 0x6b7280),
    ("pending", 0xf59e0b),
    ("completed", 0x22c55e),
    ("cancelled", 0xef4444),
    ("profit", 0x22c55e),
    ("loss", 0xef4444),
    ("neutral", 0x6b7280),
    ("growth", 0x059669),
    ("decline", 0xdc2626),
];

/// Semantic categories, checked in order.
const SEMANTIC_CATEGORIES: &[(&str, &[&str], u32)] = &[
    (
        "positive",
        &["success", "complete", "done", "good", "best", "premium", "featured", "favorite", "like", "love"],
        0x22c55e,
    ),
    (
        "negative",
        &["error", "fail", "danger", "bad", "delete", "remove", "cancel", "reject"],
        0xef4444,
    ),
    (
        "warning",
        &["warning", "caution", "pending", "wait", "review", "draft", "temporary"],
        0xf59e0b,
    ),
    ("info", &["info", "detail", "note", "tip", "help", "guide", "tutorial"], 0x3b82f6),
    (
        "special",
        &["premium", "vip", "pro", "plus", "featured", "highlight", "important"],
        0x8b5cf6,
    ),
];

struct Domain {
    label: &'static str,
    pattern: Regex,
    tone: Tone,
}

static DOMAINS: LazyLock<[Domain; 5]> = LazyLock::new(|| {
    let domain = |label, pattern: &str, tone| Domain {
        label,
        pattern: Regex::new(pattern).expect("valid domain regex"),
        tone,
    };
    [
        domain("payment", "pay|payment|card|bank|money|price|cost|fee", Tone::Lightness(-15)),
        domain("user", "user|account|profile|member|login|auth", Tone::Saturation(-20)),
        domain("data", "data|chart|graph|metric|analytics|report", Tone::Hue(180)),
        domain("communication", "connect|network|signal|wifi|call|message", Tone::Hue(120)),
        domain("time", "time|date|schedule|calendar|event|deadline", Tone::Lightness(25)),
    ]
});

/// One inferred color role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InferredColor {
    pub name: String,
    pub color: Rgb,
    pub reasoning: String,
}

/// Lowercased words of two or more ASCII letters, minus stop words,
/// truncated to [`MAX_WORDS`].
#[must_use]
pub fn meaningful_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|w| !STOP_WORDS.contains(w))
        .take(MAX_WORDS)
        .map(str::to_owned)
        .collect()
}

/// Infer the color for a single word, with a reason, or `None`.
#[must_use]
pub fn infer_word(word: &str, primary: Rgb) -> Option<(Rgb, String)> {
    if let Some(&(pattern, color)) = COLOR_PATTERNS.iter().find(|(p, _)| word.contains(p)) {
        return Some((
            Rgb::from_u32(color),
            format!("keyword \"{word}\" matches the \"{pattern}\" pattern"),
        ));
    }

    if let Some(&(category, _, color)) = SEMANTIC_CATEGORIES
        .iter()
        .find(|(_, keywords, _)| keywords.iter().any(|k| word.contains(k)))
    {
        return Some((Rgb::from_u32(color), format!("\"{word}\" falls in the {category} category")));
    }

    DOMAINS.iter().find(|d| d.pattern.is_match(word)).map(|d| {
        (
            d.tone.apply(primary),
            format!("{} keyword \"{word}\" detected", d.label),
        )
    })
}

/// Infer up to `max_colors` distinct colors from `text`.
///
/// Words with no match, or whose color an earlier word already took,
/// are skipped.
#[must_use]
pub fn infer_colors_from_text(text: &str, primary: Rgb, max_colors: usize) -> Vec<InferredColor> {
    let mut inferred: Vec<InferredColor> = Vec::new();
    for word in meaningful_words(text) {
        if inferred.len() >= max_colors {
            break;
        }
        let Some((color, reasoning)) = infer_word(&word, primary) else {
            continue;
        };
        if inferred.iter().any(|c| c.color == color) {
            continue;
        }
        inferred.push(InferredColor { name: word, color, reasoning });
    }
    inferred
}

/// [`infer_colors_from_text`] collected into a name → color mapping.
#[must_use]
pub fn generate_dynamic_colors(description: &str, primary: Rgb, max_colors: usize) -> ProjectColors {
    infer_colors_from_text(description, primary, max_colors)
        .into_iter()
        .map(|c| (c.name, c.color))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PRIMARY: Rgb = Rgb::from_u32(0x3b82f6);

    fn rgb(hex: &str) -> Rgb {
        hex.parse().unwrap()
    }

    #[test]
    fn words_are_lowercased_and_filtered() {
        assert_eq!(
            meaningful_words("The Calm, and a Premium-plan for YOU 42x"),
            vec!["calm", "premium", "plan", "you"]
        );
    }

    #[test]
    fn words_are_capped() {
        let text = "alpha ".repeat(60);
        assert_eq!(meaningful_words(&text).len(), MAX_WORDS);
    }

    #[test]
    fn direct_pattern_wins_first() {
        let (color, reason) = infer_word("errors", PRIMARY).unwrap();
        assert_eq!(color, rgb("#ef4444"));
        assert!(reason.contains("\"error\" pattern"), "{reason}");
        // "danger" precedes "error" in the table.
        assert_eq!(infer_word("dangererror", PRIMARY).unwrap().0, rgb("#dc2626"));
        assert_eq!(infer_word("newsletter", PRIMARY).unwrap().0, rgb("#22c55e"));
    }

    #[test]
    fn semantic_categories() {
        let (color, reason) = infer_word("tutorials", PRIMARY).unwrap();
        assert_eq!(color, rgb("#3b82f6"));
        assert!(reason.contains("info category"), "{reason}");
        assert_eq!(infer_word("vip", PRIMARY).unwrap().0, rgb("#8b5cf6"));
        assert_eq!(infer_word("rejected", PRIMARY).unwrap().0, rgb("#ef4444"));
        assert_eq!(infer_word("drafts", PRIMARY).unwrap().0, rgb("#f59e0b"));
    }

    #[test]
    fn domain_patterns_derive_from_primary() {
        let cases = [
            ("checkout", None),
            ("payment", Some("#0a5adb")),
            ("members", Some("#5188e1")),
            ("analytics", Some("#f6af3c")),
            ("wifi", Some("#f63c83")),
            ("calendar", Some("#b6d1fc")),
        ];
        for (word, expected) in cases {
            assert_eq!(infer_word(word, PRIMARY).map(|(c, _)| c), expected.map(rgb), "{word}");
        }
        assert!(infer_word("payment", PRIMARY).unwrap().1.starts_with("payment keyword"));
    }

    #[test]
    fn unmatched_word_is_none() {
        assert_eq!(infer_word("ecommerce", PRIMARY), None);
        assert_eq!(infer_word("site", PRIMARY), None);
    }

    #[test]
    fn infers_distinct_colors_in_text_order() {
        let text = "An ecommerce site with premium payment and user accounts, showing errors";
        let inferred = infer_colors_from_text(text, PRIMARY, 15);
        let got: Vec<(&str, String)> = inferred.iter().map(|c| (c.name.as_str(), c.color.to_hex())).collect();
        assert_eq!(
            got,
            vec![
                ("premium", "#8b5cf6".to_owned()),
                ("payment", "#0a5adb".to_owned()),
                ("user", "#5188e1".to_owned()),
                ("errors", "#ef4444".to_owned()),
            ]
        );
    }

    #[test]
    fn max_colors_stops_early() {
        let text = "premium payment user errors";
        let inferred = infer_colors_from_text(text, PRIMARY, 2);
        assert_eq!(inferred.len(), 2);
        assert_eq!(inferred[1].name, "payment");
    }

    #[test]
    fn words_past_the_cap_are_ignored() {
        let text = format!("{} error", "filler ".repeat(MAX_WORDS));
        assert!(infer_colors_from_text(&text, PRIMARY, 15).is_empty());
    }

    #[test]
    fn dynamic_colors_keep_order() {
        let colors = generate_dynamic_colors("calm growth dashboards with love", PRIMARY, 15);
        let names: Vec<&str> = colors.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["calm", "growth", "love"]);
        assert_eq!(colors.get("love"), Some(rgb("#ec4899")));
    }
}
