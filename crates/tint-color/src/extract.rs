// SPDX-License-Identifier: MIT
//
// Pull hex colors out of an existing stylesheet.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::color::{Rgb, is_valid_hex};

static HEX_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9A-Fa-f]{3,6}").expect("hex run pattern is valid"));

/// Every distinct hex color in `css`, in order of first appearance.
///
/// Runs of 4 or 5 digits are not colors and are skipped. `#fff` and
/// `#ffffff` count as the same color.
#[must_use]
pub fn extract_colors_from_css(css: &str) -> Vec<Rgb> {
    let mut seen = HashSet::new();
    HEX_RUN
        .find_iter(css)
        .map(|m| m.as_str())
        .filter(|s| is_valid_hex(s))
        .filter_map(|s| Rgb::from_hex(s).ok())
        .filter(|color| seen.insert(*color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_in_order() {
        let css = ".a { color: #3B82F6; } .b { background: #fff; border-color: #22c55e }";
        let hexes: Vec<String> = extract_colors_from_css(css).iter().map(|c| c.to_hex()).collect();
        assert_eq!(hexes, vec!["#3b82f6", "#ffffff", "#22c55e"]);
    }

    #[test]
    fn deduplicates_short_and_long_forms() {
        let colors = extract_colors_from_css("#fff #FFFFFF #ffffff #000");
        assert_eq!(colors, vec![Rgb::WHITE, Rgb::BLACK]);
    }

    #[test]
    fn skips_non_color_runs() {
        assert!(extract_colors_from_css("#abcd #12345 #gg").is_empty());
        assert!(extract_colors_from_css("body { margin: 0 }").is_empty());
    }
}
