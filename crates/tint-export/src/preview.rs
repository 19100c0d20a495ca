//! Standalone HTML preview of a palette applied to sample components.

use serde::{Deserialize, Serialize};
use tint_palette::{BasePalette, ProjectColors};

use crate::css::export_css;

/// Sample UI block to include in a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Button,
    Card,
    Form,
    Navigation,
    /// Every component above.
    All,
}

impl Component {
    /// Components shown when none are requested explicitly.
    pub const DEFAULT: [Self; 2] = [Self::Button, Self::Card];

    const CONCRETE: [Self; 4] = [Self::Button, Self::Card, Self::Form, Self::Navigation];

    const fn html(self) -> &'static str {
        match self {
            Self::Button => BUTTON,
            Self::Card => CARD,
            Self::Form => FORM,
            Self::Navigation => NAVIGATION,
            Self::All => "",
        }
    }
}

const BUTTON: &str = r#"    <div>
      <h3 style="color: rgb(var(--color-text));">Buttons</h3>
      <button style="background: rgb(var(--color-button-primary)); color: rgb(var(--color-button-primary-text)); padding: 0.5rem 1rem; border: none; border-radius: 6px; margin: 0.25rem;">Primary</button>
      <button style="background: rgb(var(--color-button-secondary)); color: rgb(var(--color-button-secondary-text)); padding: 0.5rem 1rem; border: 1px solid rgb(var(--color-border)); border-radius: 6px; margin: 0.25rem;">Secondary</button>
    </div>"#;

const CARD: &str = r#"    <div>
      <h3 style="color: rgb(var(--color-text));">Cards</h3>
      <div style="background: rgb(var(--color-card)); border: 1px solid rgb(var(--color-border)); border-radius: 8px; padding: 1.5rem; margin: 0.5rem 0;">
        <h4 style="color: rgb(var(--color-text)); margin: 0 0 0.5rem 0;">Card Title</h4>
        <p style="color: rgb(var(--color-text-muted)); margin: 0;">Card content with muted text</p>
      </div>
    </div>"#;

const FORM: &str = r#"    <div>
      <h3 style="color: rgb(var(--color-text));">Form Elements</h3>
      <input type="text" placeholder="Input field" style="background: rgb(var(--color-card)); border: 1px solid rgb(var(--color-border)); padding: 0.5rem; border-radius: 4px; color: rgb(var(--color-text)); margin: 0.25rem; display: block; width: 200px;">
      <input type="text" placeholder="Focused state" style="background: rgb(var(--color-card)); border: 2px solid rgb(var(--color-border-focus)); padding: 0.5rem; border-radius: 4px; color: rgb(var(--color-text)); margin: 0.25rem; display: block; width: 200px;">
    </div>"#;

const NAVIGATION: &str = r##"    <div>
      <h3 style="color: rgb(var(--color-text));">Navigation</h3>
      <nav style="background: rgb(var(--color-card)); border: 1px solid rgb(var(--color-border)); border-radius: 8px; padding: 1rem;">
        <a href="#" style="color: rgb(var(--color-accent)); text-decoration: none; margin-right: 1rem;">Home</a>
        <a href="#" style="color: rgb(var(--color-text)); text-decoration: none; margin-right: 1rem;">About</a>
        <a href="#" style="color: rgb(var(--color-text-muted)); text-decoration: none;">Contact</a>
      </nav>
    </div>"##;

/// Expand `All` (or an empty request) to every component, keeping the
/// requested order otherwise and dropping repeats.
fn resolve(components: &[Component]) -> Vec<Component> {
    if components.is_empty() || components.contains(&Component::All) {
        return Component::CONCRETE.to_vec();
    }
    let mut out = Vec::with_capacity(components.len());
    for &c in components {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}

/// A complete HTML document embedding the palette's CSS export and the
/// requested sample components.
#[must_use]
pub fn preview_html(palette: &BasePalette, components: &[Component]) -> String {
    let css = export_css(palette, &ProjectColors::new());
    let body = resolve(components)
        .into_iter()
        .map(Component::html)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Color Palette Preview</title>
  <style>
{css}

body {{ font-family: -apple-system, sans-serif; padding: 2rem; background: rgb(var(--color-background)); }}
.preview-grid {{ display: grid; gap: 2rem; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); }}
  </style>
</head>
<body>
  <h1 style="color: rgb(var(--color-text));">Color Palette Preview</h1>
  <div class="preview-grid">
{body}
  </div>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tint_palette::{Style, generate_base_palette};

    fn blue() -> BasePalette {
        generate_base_palette("#3b82f6", Style::Modern).unwrap()
    }

    #[test]
    fn resolve_components() {
        assert_eq!(resolve(&[]), Component::CONCRETE.to_vec());
        assert_eq!(resolve(&[Component::Form, Component::All]), Component::CONCRETE.to_vec());
        assert_eq!(
            resolve(&[Component::Card, Component::Button, Component::Card]),
            vec![Component::Card, Component::Button]
        );
    }

    #[test]
    fn default_preview_has_buttons_and_cards() {
        let html = preview_html(&blue(), &Component::DEFAULT);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("--color-primary-500: 11 100 244;"));
        assert!(html.contains(">Buttons</h3>"));
        assert!(html.contains(">Cards</h3>"));
        assert!(!html.contains(">Navigation</h3>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn all_includes_every_component() {
        let html = preview_html(&blue(), &[Component::All]);
        for title in ["Buttons", "Cards", "Form Elements", "Navigation"] {
            assert!(html.contains(&format!(">{title}</h3>")), "{title}");
        }
    }

    #[test]
    fn component_serde() {
        let parsed: Vec<Component> = serde_json::from_str(r#"["navigation","all"]"#).unwrap();
        assert_eq!(parsed, vec![Component::Navigation, Component::All]);
    }
}
