//! React Native color constants (`export const colors = { ... };`).
//!
//! Step keys are bare numbers. Project color names are written as JSON
//! string literals, which are valid JS keys whatever the name contains.

use serde_json::Value;
use tint_palette::{BasePalette, ProjectColors};

fn project_block(lines: &mut Vec<String>, colors: &ProjectColors) {
    lines.push("  // Project colors".to_owned());
    for (name, color) in colors.iter() {
        let key = Value::String(name.to_owned());
        lines.push(format!("  {key}: '{color}',"));
    }
}

/// Nested scale objects, project colors and semantic roles.
#[must_use]
pub fn export_react_native(palette: &BasePalette, extras: &ProjectColors) -> String {
    let mut lines = vec!["export const colors = {".to_owned(), "  // Base palette".to_owned()];

    for (name, scale) in palette.scales() {
        lines.push(format!("  {name}: {{"));
        for (step, color) in scale.iter() {
            lines.push(format!("    {step}: '{color}',"));
        }
        lines.push("  },".to_owned());
    }

    if !extras.is_empty() {
        project_block(&mut lines, extras);
    }

    let semantic = [
        ("background", palette.neutral[50]),
        ("card", tint_color::Rgb::WHITE),
        ("text", palette.neutral[800]),
        ("textMuted", palette.neutral[600]),
        ("border", palette.neutral[200]),
        ("accent", palette.primary[500]),
    ];
    lines.push("  // Semantic mappings".to_owned());
    for (role, color) in semantic {
        lines.push(format!("  {role}: '{color}',"));
    }
    lines.push("};".to_owned());
    lines.join("\n")
}

/// `colors` only.
#[must_use]
pub fn export_react_native_colors(colors: &ProjectColors) -> String {
    let mut lines = vec!["export const colors = {".to_owned()];
    project_block(&mut lines, colors);
    lines.push("};".to_owned());
    lines.join("\n")
}
