//! Tailwind `tailwind.config.js` fragment.

use serde_json::{Map, Value, json};
use tint_palette::{BasePalette, ProjectColors};

use crate::format::ExportError;

fn render(colors: Map<String, Value>) -> Result<String, ExportError> {
    let config = json!({ "theme": { "extend": { "colors": colors } } });
    Ok(format!("module.exports = {};", serde_json::to_string_pretty(&config)?))
}

fn insert_extras(colors: &mut Map<String, Value>, extras: &ProjectColors) {
    for (name, color) in extras.iter() {
        colors.insert(name.to_owned(), Value::String(color.to_hex()));
    }
}

/// `module.exports` with every scale then every project color under
/// `theme.extend.colors`.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if encoding fails.
pub fn export_tailwind(palette: &BasePalette, extras: &ProjectColors) -> Result<String, ExportError> {
    let mut colors = Map::new();
    for (name, scale) in palette.scales() {
        colors.insert(name.to_owned(), serde_json::to_value(scale)?);
    }
    insert_extras(&mut colors, extras);
    render(colors)
}

/// `module.exports` holding only `colors`.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if encoding fails.
pub fn export_tailwind_colors(colors: &ProjectColors) -> Result<String, ExportError> {
    let mut map = Map::new();
    insert_extras(&mut map, colors);
    render(map)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
