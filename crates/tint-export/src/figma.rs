//! Figma design tokens (`{ "color": { ... } }`).

use serde::Serialize;
use serde_json::{Map, Value, json};
use tint_color::Rgb;
use tint_palette::{BasePalette, ProjectColors};

use crate::format::ExportError;

/// One color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token {
    pub value: Rgb,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl Token {
    #[must_use]
    pub const fn color(value: Rgb) -> Self {
        Self { value, kind: "color" }
    }
}

fn render(tokens: Map<String, Value>) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&json!({ "color": tokens }))?)
}

fn insert_extras(tokens: &mut Map<String, Value>, extras: &ProjectColors) -> Result<(), ExportError> {
    for (name, color) in extras.iter() {
        tokens.insert(name.to_owned(), serde_json::to_value(Token::color(color))?);
    }
    Ok(())
}

/// Tokens for every scale step, then every project color.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if encoding fails.
pub fn export_figma(palette: &BasePalette, extras: &ProjectColors) -> Result<String, ExportError> {
    let mut tokens = Map::new();
    for (name, scale) in palette.scales() {
        let mut steps = Map::new();
        for (step, color) in scale.iter() {
            steps.insert(step.to_string(), serde_json::to_value(Token::color(color))?);
        }
        tokens.insert(name.to_owned(), Value::Object(steps));
    }
    insert_extras(&mut tokens, extras)?;
    render(tokens)
}

/// Tokens for `colors` only.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if encoding fails.
pub fn export_figma_colors(colors: &ProjectColors) -> Result<String, ExportError> {
    let mut tokens = Map::new();
    insert_extras(&mut tokens, colors)?;
    render(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tint_palette::{Style, generate_base_palette};

    #[test]
    fn nested_step_tokens() {
        let palette = generate_base_palette("#3b82f6", Style::Modern).unwrap();
        let extras: ProjectColors = [("tag-new", Rgb::from_u32(0x3b82f6))].into_iter().collect();
        let out: Value = serde_json::from_str(&export_figma(&palette, &extras).unwrap()).unwrap();

        assert_eq!(out["color"]["primary"]["500"], json!({ "value": "#0b64f4", "type": "color" }));
        assert_eq!(out["color"]["tag-new"], json!({ "value": "#3b82f6", "type": "color" }));
        assert_eq!(out["color"].as_object().unwrap().len(), 7);
    }

    #[test]
    fn standalone_tokens() {
        let colors: ProjectColors = [("love", Rgb::from_u32(0xec4899))].into_iter().collect();
        let out: Value = serde_json::from_str(&export_figma_colors(&colors).unwrap()).unwrap();
        assert_eq!(out, json!({ "color": { "love": { "value": "#ec4899", "type": "color" } } }));
    }
}
