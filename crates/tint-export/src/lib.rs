//! # tint-export — Palette Exporters
//!
//! Renders a [`BasePalette`](tint_palette::BasePalette) and its project
//! colors into the text formats design tooling consumes. Every exporter
//! is a pure function of its inputs; scales are emitted in palette order
//! and steps lightest first, project colors in insertion order.
//!
//! | Format         | Shape                                      |
//! |----------------|--------------------------------------------|
//! | `css`          | `:root` custom properties as RGB triplets  |
//! | `tailwind`     | `module.exports = { theme.extend.colors }` |
//! | `scss`         | `$scale-step` variables                    |
//! | `figma`        | design tokens JSON                         |
//! | `react-native` | `export const colors = { ... }`            |

pub mod css;
pub mod figma;
pub mod format;
pub mod preview;
pub mod react_native;
pub mod scss;
pub mod tailwind;

pub use format::{ExportError, OutputFormat, export, export_colors};
pub use preview::{Component, preview_html};

/// `"primary"` → `"Primary"`.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

/// Reduce a project color name to `[a-z0-9-]` for use in a CSS or SCSS
/// identifier. Other runs of characters collapse to one `-`; a leading
/// digit gets a `color-` prefix.
pub(crate) fn identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    match out.chars().next() {
        None => "color".to_owned(),
        Some(c) if c.is_ascii_digit() => format!("color-{out}"),
        Some(_) => out,
    }
}
