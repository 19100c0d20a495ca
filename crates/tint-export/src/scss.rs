//! SCSS variables.

use tint_palette::{BasePalette, ProjectColors};

use crate::{capitalize, identifier};

const SEMANTIC: &str = "\n// Semantic mappings
$background: $neutral-50;
$card: #ffffff;
$text: $neutral-800;
$text-muted: $neutral-600;
$border: $neutral-200;
$accent: $primary-500;";

fn project_block(lines: &mut Vec<String>, colors: &ProjectColors) {
    lines.push("\n// Project-specific colors".to_owned());
    for (name, color) in colors.iter() {
        lines.push(format!("${}: {color};", identifier(name)));
    }
}

/// `$scale-step` declarations, project colors and semantic aliases.
#[must_use]
pub fn export_scss(palette: &BasePalette, extras: &ProjectColors) -> String {
    let mut lines = vec!["// Generated color palette".to_owned()];
    for (name, scale) in palette.scales() {
        lines.push(format!("\n// {} colors", capitalize(name)));
        for (step, color) in scale.iter() {
            lines.push(format!("${name}-{step}: {color};"));
        }
    }
    if !extras.is_empty() {
        project_block(&mut lines, extras);
    }
    lines.push(SEMANTIC.to_owned());
    lines.join("\n")
}

/// Declarations for `colors` only.
#[must_use]
pub fn export_scss_colors(colors: &ProjectColors) -> String {
    let mut lines = vec!["// Generated colors".to_owned()];
    project_block(&mut lines, colors);
    lines.join("\n")
}
